use log::error;
use rocket::http::Status;
use rocket::response::Responder;
use thiserror::Error;

/// Generic result type
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// the backing file could not be read or written
    #[error("I/O error while accessing the contact store: {0}")]
    Io(#[from] std::io::Error),

    /// the backing file holds data that is not a valid contact list
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// a validation pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    /// another thread panicked while holding the in-memory store lock
    #[error("Contact store lock poisoned")]
    LockPoisoned,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Map errors directly to rocket status codes so handlers can return
/// `Result<T, AppError>` and still produce the right response.
impl<'r, 'o: 'r> Responder<'r, 'o> for AppError {
    fn respond_to(self, req: &rocket::Request) -> rocket::response::Result<'o> {
        match self {
            AppError::Io(e) => {
                error!("{e}");
                Status::InternalServerError.respond_to(req)
            }
            AppError::Json(e) => {
                error!("{e}");
                Status::InternalServerError.respond_to(req)
            }
            AppError::Regex(e) => {
                error!("{e}");
                Status::InternalServerError.respond_to(req)
            }
            AppError::LockPoisoned => Status::InternalServerError.respond_to(req),
            AppError::NotFound(_) => Status::NotFound.respond_to(req),
            AppError::Validation(_) => Status::UnprocessableEntity.respond_to(req),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_not_found_error_message() {
        let err = AppError::NotFound("Contact".to_string());

        assert_eq!(format!("{}", err), "Contact not found");
    }

    #[test]
    fn confirm_validation_error_message() {
        let err = AppError::Validation("Email is not valid".to_string());

        assert_eq!(format!("{}", err), "Validation failed: Email is not valid");
    }
}
