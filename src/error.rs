use thiserror::Error;

use crate::models::Screen;

/// Errors surfaced by the gateway, the quiz engine and the screens.
///
/// Every variant is recoverable: the runtime shows it as a notice and leaves
/// the user on the screen that produced it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),
    #[error("Invalid username or password!")]
    InvalidCredentials,
    #[error("Username `{0}` already exists!")]
    DuplicateKey(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("Please log in first")]
    NotLoggedIn,
    #[error("No quiz is in progress")]
    QuizNotActive,
    #[error("Cannot navigate from {from} to {to}")]
    Navigation { from: Screen, to: Screen },
    #[error(transparent)]
    Storage(#[from] rusqlite::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Config(#[from] serde_json::Error),
}

impl AppError {
    /// Title used for the notice box.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::MissingField(_) | AppError::InvalidCredentials => "Error",
            AppError::DuplicateKey(_) => "Error",
            AppError::InvalidInput(_) => "Input Error",
            AppError::NotLoggedIn | AppError::Navigation { .. } => "Navigation",
            AppError::QuizNotActive => "Quiz",
            AppError::Storage(_) | AppError::Io(_) | AppError::Config(_) => "Storage Error",
        }
    }

    /// Whether the failure came from below the application (database, disk).
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AppError::Storage(_) | AppError::Io(_) | AppError::Config(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_names_the_field() {
        let err = AppError::MissingField("password");
        assert_eq!(err.to_string(), "Please fill in the password field");
        assert!(!err.is_internal());
    }

    #[test]
    fn test_storage_errors_are_internal() {
        let err = AppError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(err.is_internal());
        assert_eq!(err.title(), "Storage Error");
    }

    #[test]
    fn test_navigation_error_message() {
        let err = AppError::Navigation {
            from: Screen::Login,
            to: Screen::Profile,
        };
        assert_eq!(err.to_string(), "Cannot navigate from Login to Profile");
    }
}
