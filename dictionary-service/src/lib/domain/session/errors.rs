use thiserror::Error;

/// Failure reported by a credential store implementation.
///
/// Stores only ever report IO problems; absence of a user or token is a
/// regular value, never an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store operation failed: {0}")]
    OperationFailed(String),
}

/// Credential store operation names, carried by `SessionError::Io`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Load,
    Save,
    InsertNew,
    NameExists,
    Remove,
    AddToken,
    TokenExists,
    RemoveToken,
}

impl std::fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StoreOperation::Load => "load",
            StoreOperation::Save => "save",
            StoreOperation::InsertNew => "insert_new",
            StoreOperation::NameExists => "name_exists",
            StoreOperation::Remove => "remove",
            StoreOperation::AddToken => "add_token",
            StoreOperation::TokenExists => "token_exists",
            StoreOperation::RemoveToken => "remove_token",
        };
        f.write_str(name)
    }
}

/// Kind tag of a `SessionError`, for matching without caring about payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionErrorKind {
    InvalidArgument,
    AlreadyExists,
    NotFound,
    InvalidCredentials,
    InvalidToken,
    Expired,
    Blacklisted,
    Io,
    Hash,
}

/// Error of every session manager operation.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("User already exists: {0}")]
    AlreadyExists(String),

    #[error("User doesn't exist: {0}")]
    NotFound(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    Expired,

    #[error("Token blacklisted - logged out")]
    Blacklisted,

    #[error("IO error on {operation}: {source}")]
    Io {
        operation: StoreOperation,
        #[source]
        source: StoreError,
    },

    #[error("Hash error: {0}")]
    Hash(#[from] auth::PasswordError),
}

impl SessionError {
    pub fn kind(&self) -> SessionErrorKind {
        match self {
            SessionError::InvalidArgument(_) => SessionErrorKind::InvalidArgument,
            SessionError::AlreadyExists(_) => SessionErrorKind::AlreadyExists,
            SessionError::NotFound(_) => SessionErrorKind::NotFound,
            SessionError::InvalidCredentials => SessionErrorKind::InvalidCredentials,
            SessionError::InvalidToken(_) => SessionErrorKind::InvalidToken,
            SessionError::Expired => SessionErrorKind::Expired,
            SessionError::Blacklisted => SessionErrorKind::Blacklisted,
            SessionError::Io { .. } => SessionErrorKind::Io,
            SessionError::Hash(_) => SessionErrorKind::Hash,
        }
    }

    /// Wrap a store failure with the operation that produced it.
    pub fn io(operation: StoreOperation) -> impl FnOnce(StoreError) -> SessionError {
        move |source| SessionError::Io { operation, source }
    }
}
