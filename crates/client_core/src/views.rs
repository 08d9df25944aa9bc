use crate::error::ClientError;

/// State of a view backed by exactly one request: product detail, the
/// department directory, and department pages. No transitions beyond the
/// single fold; re-triggering the fetch starts over from `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchView<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> FetchView<T> {
    pub fn fold(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Error(err.to_string()),
        }
    }

    /// Folds with a fixed error message, discarding the failure's own text.
    pub fn fold_with_message(result: Result<T, ClientError>, message: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(_) => Self::Error(message.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
