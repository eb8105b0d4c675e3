//! Pure rendering of load outcomes into container operations.

use tv_types::Ticket;

use crate::{config::ViewerConfig, error::FailureKind};

/// CSS class of each ticket block.
pub const TICKET_CLASS: &str = "ticket";

/// State of the listing at a given moment.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Request in flight.
    Loading,
    /// The citizen has no tickets.
    Empty,
    /// Non-empty listing, in response order.
    Tickets(Vec<Ticket>),
    Failed(FailureKind),
}

/// One labelled line inside a ticket block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLine {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketBlock {
    pub fields: Vec<FieldLine>,
}

impl TicketBlock {
    pub fn from_ticket(ticket: &Ticket, config: &ViewerConfig) -> Self {
        let labels = &config.labels;
        let line = |label: &str, value: String| FieldLine {
            label: label.to_string(),
            value,
        };

        Self {
            fields: vec![
                line(&labels.driver_name, ticket.driver_name.clone()),
                line(&labels.offense, ticket.offense.clone()),
                line(&labels.fine_amount, format!("{} {}", ticket.fine_amount, config.currency)),
                line(&labels.penalty_points, ticket.penalty_points.to_string()),
                line(&labels.issue_date, ticket.issue_date.clone()),
            ],
        }
    }
}

/// A single mutation of the container element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    /// Remove all children.
    Clear,
    /// Append a `<p>` holding plain text.
    AppendMessage(String),
    /// Append a `<div class="ticket">` block.
    AppendTicket(TicketBlock),
}

/// Operations that replace the container content with `outcome`.
///
/// Always starts with [`RenderOp::Clear`], so applying the same outcome twice
/// leaves the same content behind.
pub fn render(outcome: &LoadOutcome, config: &ViewerConfig) -> Vec<RenderOp> {
    let labels = &config.labels;
    let mut ops = vec![RenderOp::Clear];
    match outcome {
        LoadOutcome::Loading => ops.push(RenderOp::AppendMessage(labels.loading.clone())),
        LoadOutcome::Empty => ops.push(RenderOp::AppendMessage(labels.empty.clone())),
        LoadOutcome::Failed(kind) => ops.push(RenderOp::AppendMessage(labels.failure(*kind).to_string())),
        LoadOutcome::Tickets(tickets) => {
            ops.extend(tickets.iter().map(|t| RenderOp::AppendTicket(TicketBlock::from_ticket(t, config))));
        }
    }
    ops
}

/// Apply operations to an HTML string standing in for the container's
/// `innerHTML`. All text is escaped.
pub fn apply_to_html(html: &mut String, ops: &[RenderOp]) {
    for op in ops {
        match op {
            RenderOp::Clear => html.clear(),
            RenderOp::AppendMessage(text) => {
                html.push_str("<p>");
                html.push_str(&escape_html(text));
                html.push_str("</p>");
            }
            RenderOp::AppendTicket(block) => {
                html.push_str(&format!("<div class=\"{}\">", TICKET_CLASS));
                for field in &block.fields {
                    html.push_str(&format!(
                        "<p><strong>{}</strong> {}</p>",
                        escape_html(&field.label),
                        escape_html(&field.value)
                    ));
                }
                html.push_str("</div>");
            }
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
