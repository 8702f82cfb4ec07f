use std::time::Duration;

use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::errors::StoreError;
use crate::domain::session::models::Credentials;
use crate::domain::session::models::User;

/// Port for the session manager: user lifecycle and token operations.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Register a new user, storing only a salted hash of the password.
    ///
    /// # Errors
    /// * `InvalidArgument` - Name or password is empty
    /// * `AlreadyExists` - Name is already registered
    /// * `Hash` - Password hashing failed
    /// * `Io` - Credential store failed
    async fn register(&self, credentials: &Credentials) -> Result<(), SessionError>;

    /// Remove a registered user.
    ///
    /// # Errors
    /// * `NotFound` - No user with this name
    /// * `Io` - Credential store failed
    async fn remove(&self, name: &str) -> Result<(), SessionError>;

    /// Check a password against the stored hash.
    ///
    /// # Returns
    /// `true` on match, `false` on mismatch (a mismatch is not an error)
    ///
    /// # Errors
    /// * `NotFound` - No user with this name
    /// * `Hash` - Stored hash could not be verified
    /// * `Io` - Credential store failed
    async fn authenticate(&self, credentials: &Credentials) -> Result<bool, SessionError>;

    /// Authenticate and issue a signed session token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `NotFound` - No user with this name
    /// * `InvalidToken` - Token could not be encoded
    /// * `Hash`, `Io` - As for `authenticate`
    async fn issue_token(&self, credentials: &Credentials) -> Result<String, SessionError>;

    /// Resolve a token to the user it was issued to.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed token or bad signature
    /// * `Expired` - Token is past its expiry
    /// * `Blacklisted` - Token was revoked by logout
    /// * `Io` - Credential store failed
    async fn validate_token(&self, token: &str) -> Result<User, SessionError>;

    /// Validate a token and revoke it.
    ///
    /// Same errors as `validate_token`; a second logout with the same token
    /// fails with `Blacklisted`.
    async fn logout(&self, token: &str) -> Result<User, SessionError>;
}

/// Persistence of password hashes and of the token blacklist.
///
/// Errors are IO-only: absence is reported through `Option`/`bool`.
/// Implementations synchronize internally and are shared across tasks.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Stored password hash for `name`, `None` if the user doesn't exist.
    async fn load(&self, name: &str) -> Result<Option<String>, StoreError>;

    /// Store `hash` under `name`, overwriting any previous value.
    async fn save(&self, name: &str, hash: &str) -> Result<(), StoreError>;

    /// Store `hash` under `name` only if the name is free.
    ///
    /// Check and insert happen atomically. Returns `false` if the name was
    /// already taken, leaving the existing value untouched.
    async fn insert_new(&self, name: &str, hash: &str) -> Result<bool, StoreError>;

    async fn name_exists(&self, name: &str) -> Result<bool, StoreError>;

    /// Delete `name`; removing an unknown name is not an error.
    async fn remove(&self, name: &str) -> Result<(), StoreError>;

    /// Add `token` to the blacklist.
    async fn add_token(&self, token: &str) -> Result<(), StoreError>;

    async fn token_exists(&self, token: &str) -> Result<bool, StoreError>;

    async fn remove_token(&self, token: &str) -> Result<(), StoreError>;
}

/// Token signing configuration.
pub trait Tokener: Send + Sync + 'static {
    /// Key used to sign and verify tokens; must outlive every issued token.
    fn signing_key(&self) -> &[u8];

    /// Duration from issuance to natural expiry.
    fn token_lifetime(&self) -> Duration;
}

/// A backend that provides both credential storage and token configuration.
pub trait StoreTokener: CredentialStore + Tokener {}

impl<T: CredentialStore + Tokener> StoreTokener for T {}
