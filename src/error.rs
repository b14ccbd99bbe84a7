use thiserror::Error;

/// Used when a rejected call carries no readable `error.message`.
pub const GENERIC_REJECTION_MESSAGE: &str = "Unknown error from Microsoft To Do";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("No access token configured. Set one with `todosync token set <TOKEN>`.")]
    Unauthenticated,
    #[error("{0}")]
    RemoteRejected(String),
    #[error("No response from Microsoft To Do. Check your network connection.")]
    Unreachable,
    #[error("{0}")]
    Unexpected(String),
}

impl TodoError {
    /// Builds a `RemoteRejected` from a raw error body, reading `error.message`.
    pub fn rejected_from_body(body: &str) -> Self {
        TodoError::RemoteRejected(rejection_message(body))
    }
}

fn rejection_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body.trim())
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| GENERIC_REJECTION_MESSAGE.to_string())
}

impl From<reqwest::Error> for TodoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            TodoError::Unexpected(err.to_string())
        } else if err.is_decode() {
            TodoError::Unexpected(format!("Malformed response: {err}"))
        } else {
            TodoError::Unreachable
        }
    }
}
