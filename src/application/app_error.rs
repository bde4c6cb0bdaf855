use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Email already registered for waitlist")]
    AlreadyRegistered,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Internal error: {0}")]
    Internal(String),

    /// A server-side failure carrying the message shown to the client.
    /// `detail` is only ever logged.
    #[error("{message}: {detail}")]
    Unexpected {
        message: &'static str,
        detail: String,
    },
}

impl AppError {
    /// Replace the client-facing message of a server-side failure.
    ///
    /// Client errors (bad input, conflicts) pass through untouched.
    pub fn context(self, message: &'static str) -> Self {
        match self {
            AppError::Database(detail) | AppError::Internal(detail) => {
                AppError::Unexpected { message, detail }
            }
            AppError::Unexpected { detail, .. } => AppError::Unexpected { message, detail },
            other => other,
        }
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            AppError::Database(_) | AppError::Internal(_) | AppError::Unexpected { .. }
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    DatabaseError,
    InvalidInput,
    AlreadyRegistered,
    UsernameTaken,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::AlreadyRegistered => "ALREADY_REGISTERED",
            ErrorCode::UsernameTaken => "USERNAME_TAKEN",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
