use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminator carried in the `action` field of every `/api` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiAction {
    /// List the tickets issued to a citizen.
    MainPage,
}

impl ApiAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiAction::MainPage => "main_page",
        }
    }
}

impl fmt::Display for ApiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of the ticket listing request.
///
/// The identifier is an opaque lookup key; it is forwarded exactly as it
/// was read from session storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketsRequest {
    pub action: ApiAction,
    pub pesel: String,
}

impl TicketsRequest {
    pub fn main_page(pesel: impl Into<String>) -> Self {
        Self {
            action: ApiAction::MainPage,
            pesel: pesel.into(),
        }
    }

    /// Serialize to the JSON request body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
