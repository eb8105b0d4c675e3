//! The ticket page flow: guard, fetch, render.

use tv_types::{Ticket, TicketsRequest, parse_tickets};

use crate::{
    config::ViewerConfig, context::PageContext, error::{FailureKind, LoadError, LoadResult, PageError}, render::{LoadOutcome, render}
};

/// How a single run of the viewer ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOutcome {
    /// No identifier in session storage; sent to the login page.
    Redirected,
    Empty,
    Rendered { count: usize },
    Failed(FailureKind),
}

pub struct TicketViewer {
    config: ViewerConfig,
}

impl TicketViewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Run the page flow once against `page`.
    ///
    /// Issues at most one request. Every run replaces the container content,
    /// so repeating it with the same response yields the same markup.
    pub async fn run<P: PageContext + ?Sized>(&self, page: &P) -> ViewOutcome {
        let Some(pesel) = page.session_value(&self.config.session_key).filter(|v| !v.is_empty()) else {
            tracing::info!(login_path = %self.config.login_path, "no identifier in session, redirecting to login");
            if let Err(e) = page.redirect(&self.config.login_path) {
                tracing::error!(error = %e, "redirect failed");
            }
            return ViewOutcome::Redirected;
        };

        if let Err(e) = self.show(page, &LoadOutcome::Loading) {
            tracing::error!(error = %e, "cannot render ticket list");
            return ViewOutcome::Failed(FailureKind::Page);
        }

        let (outcome, result) = match self.fetch(page, &pesel).await {
            Ok(tickets) if tickets.is_empty() => (LoadOutcome::Empty, ViewOutcome::Empty),
            Ok(tickets) => {
                let count = tickets.len();
                (LoadOutcome::Tickets(tickets), ViewOutcome::Rendered { count })
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load tickets");
                (LoadOutcome::Failed(e.kind()), ViewOutcome::Failed(e.kind()))
            }
        };

        if let Err(e) = self.show(page, &outcome) {
            tracing::error!(error = %e, "cannot render ticket list");
            return ViewOutcome::Failed(FailureKind::Page);
        }

        tracing::info!(outcome = ?result, "ticket page ready");
        result
    }

    /// Request and decode the listing for `pesel`.
    pub async fn fetch<P: PageContext + ?Sized>(&self, page: &P, pesel: &str) -> LoadResult<Vec<Ticket>> {
        let request = TicketsRequest {
            action: self.config.action,
            pesel: pesel.to_string(),
        };
        let body = request.to_json().map_err(|e| PageError::Encode(e.to_string()))?;

        tracing::debug!(endpoint = %self.config.endpoint, action = %request.action, "requesting tickets");
        let reply = page.post_json(&self.config.endpoint, body).await?;
        if !reply.is_success() {
            return Err(LoadError::Status { status: reply.status });
        }

        let tickets = parse_tickets(&reply.body)?;
        tracing::debug!(count = tickets.len(), "tickets decoded");
        Ok(tickets)
    }

    fn show<P: PageContext + ?Sized>(&self, page: &P, outcome: &LoadOutcome) -> Result<(), PageError> {
        page.apply(&self.config.container_id, &render(outcome, &self.config))
    }
}

impl Default for TicketViewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}
