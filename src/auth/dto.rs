use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenState {
    pub token: String,
    pub user: String,
}

/// Actions the helpers may hand to the application's dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Re-read the current user; issued when a request comes back unauthorized.
    FetchUser,
}

/// Bare status of a finished request, for callers that do not hold a live response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseStatus {
    pub ok: bool,
    #[serde(default)]
    pub status_text: String,
}
