//! Error types for overflow.
//!
//! A single [`Error`] enum with explicit variants for storage, authentication,
//! input, validation and lookup failures. Each variant maps onto the HTTP
//! status the service answers with via [`Error::status_code`].

use serde_json::{Value, json};
use thiserror::Error;

use crate::validation::ValidationErrors;

/// The unified error type for overflow operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The document store failed (I/O, corrupt document, serialization).
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Authentication or authorization failed.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A malformed identifier or value was supplied.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// One or more request fields failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The addressed document does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The write conflicts with existing state.
    #[error("{message}")]
    Conflict { message: String },
}

/// Storage-level errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem or other I/O failure.
    #[error("I/O error: {message}")]
    Io { message: String },

    /// A stored document could not be decoded.
    #[error("corrupt document {id}: {reason}")]
    Corrupt { id: String, reason: String },

    /// A document could not be encoded.
    #[error("serialization failed: {message}")]
    Serialization { message: String },

    /// Insert of an id that is already present.
    #[error("duplicate id {id} in {collection}")]
    Duplicate { collection: String, id: String },
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Store(StoreError::from(err))
    }
}

/// Authentication and authorization errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No authorization header was supplied.
    #[error("Authentication invalid.")]
    MissingToken,

    /// The token could not be verified.
    #[error("{reason}")]
    InvalidToken { reason: String },

    /// Username or password did not match.
    #[error("Wrong username or password.")]
    InvalidCredentials,

    /// The account is blocked.
    #[error("Your account has been blocked or deleted.")]
    AccountBlocked,

    /// The caller is authenticated but not allowed to do this.
    #[error("{reason}")]
    Forbidden { reason: String },
}

/// Input validation errors for identifiers and value types.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid record id.
    #[error("invalid id '{value}': {reason}")]
    RecordId { value: String, reason: String },

    /// Invalid username.
    #[error("invalid username '{value}': {reason}")]
    Username { value: String, reason: String },

    /// Invalid tag label.
    #[error("invalid tag '{value}': {reason}")]
    Tag { value: String, reason: String },

    /// Document is not a valid record.
    #[error("invalid record: {reason}")]
    Record { reason: String },

    /// Generic invalid input.
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Shorthand for a [`Error::NotFound`].
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Shorthand for a [`AuthError::Forbidden`].
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Error::Auth(AuthError::Forbidden {
            reason: reason.into(),
        })
    }

    /// HTTP status code the service answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Store(_) => 500,
            Error::Auth(AuthError::InvalidCredentials | AuthError::Forbidden { .. }) => 403,
            Error::Auth(_) => 401,
            Error::InvalidInput(_) | Error::Conflict { .. } => 400,
            Error::Validation(_) => 422,
            Error::NotFound { .. } => 404,
        }
    }

    /// JSON response body for this error.
    ///
    /// Validation failures list every offending field; everything else is a
    /// single message. Store failures do not leak their details.
    pub fn to_body(&self) -> Value {
        match self {
            Error::Validation(errors) => json!({ "errors": errors.fields() }),
            Error::Store(_) => json!({ "message": "Internal server error." }),
            Error::NotFound { kind, .. } => {
                let mut kind = kind.to_string();
                if let Some(first) = kind.get_mut(..1) {
                    first.make_ascii_uppercase();
                }
                json!({ "message": format!("{} not found.", kind) })
            }
            other => {
                let message = match other {
                    Error::Auth(err) => err.to_string(),
                    Error::InvalidInput(err) => err.to_string(),
                    Error::Conflict { message } => message.clone(),
                    _ => other.to_string(),
                };
                json!({ "message": message })
            }
        }
    }

    /// Returns true if this is an authentication or authorization error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }
}
