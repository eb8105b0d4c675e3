use tv_types::ApiAction;

use crate::error::FailureKind;

/// Texts shown inside the container. Polish by default, matching the
/// hosting pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub driver_name: String,
    pub offense: String,
    pub fine_amount: String,
    pub penalty_points: String,
    pub issue_date: String,
    pub loading: String,
    pub empty: String,
    pub network_error: String,
    pub status_error: String,
    pub parse_error: String,
    pub page_error: String,
}

impl Labels {
    /// Placeholder for a failed load of the given class.
    pub fn failure(&self, kind: FailureKind) -> &str {
        match kind {
            FailureKind::Network => &self.network_error,
            FailureKind::Status => &self.status_error,
            FailureKind::Parse => &self.parse_error,
            FailureKind::Page => &self.page_error,
        }
    }
}

const LOAD_ERROR: &str = "Błąd podczas ładowania mandatów.";

impl Default for Labels {
    fn default() -> Self {
        Self {
            driver_name: "Imię i nazwisko:".to_string(),
            offense: "Wykroczenie:".to_string(),
            fine_amount: "Kwota mandatu:".to_string(),
            penalty_points: "Punkty karne:".to_string(),
            issue_date: "Data wystawienia:".to_string(),
            loading: "Ładowanie mandatów...".to_string(),
            empty: "Brak mandatów.".to_string(),
            network_error: LOAD_ERROR.to_string(),
            status_error: LOAD_ERROR.to_string(),
            parse_error: LOAD_ERROR.to_string(),
            page_error: LOAD_ERROR.to_string(),
        }
    }
}

/// Top-level configuration for the ticket page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Endpoint receiving the listing request.
    pub endpoint: String,
    /// sessionStorage key holding the citizen identifier.
    pub session_key: String,
    /// Id of the element the tickets are rendered into.
    pub container_id: String,
    /// Where to send visitors without a stored identifier.
    pub login_path: String,
    pub action: ApiAction,
    /// Appended to every fine amount.
    pub currency: String,
    pub labels: Labels,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api".to_string(),
            session_key: "pesel".to_string(),
            container_id: "tickets-container".to_string(),
            login_path: "/".to_string(),
            action: ApiAction::MainPage,
            currency: "zł".to_string(),
            labels: Labels::default(),
        }
    }
}
