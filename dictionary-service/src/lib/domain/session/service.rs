use std::sync::Arc;

use async_trait::async_trait;
use auth::Claims;
use auth::JwtError;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::Utc;

use crate::domain::session::errors::SessionError;
use crate::domain::session::errors::StoreOperation;
use crate::domain::session::models::Credentials;
use crate::domain::session::models::User;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::session::ports::StoreTokener;

/// Session manager.
///
/// Stateless coordinator over a `StoreTokener` backend: all persisted state
/// (hashes, blacklist) lives in the backend, so one instance can be shared
/// by any number of concurrent requests.
pub struct SessionService<B>
where
    B: StoreTokener,
{
    backend: Arc<B>,
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

impl<B> SessionService<B>
where
    B: StoreTokener,
{
    /// Create a session manager over `backend`.
    ///
    /// The signing key is read once here; tokens issued by this instance
    /// verify only while the backend keeps returning the same key.
    pub fn new(backend: Arc<B>) -> Self {
        let jwt_handler = JwtHandler::new(backend.signing_key());
        Self {
            backend,
            password_hasher: PasswordHasher::new(),
            jwt_handler,
        }
    }

    async fn name_exists(&self, name: &str) -> Result<bool, SessionError> {
        self.backend
            .name_exists(name)
            .await
            .map_err(SessionError::io(StoreOperation::NameExists))
    }

    async fn ensure_exists(&self, name: &str) -> Result<(), SessionError> {
        if self.name_exists(name).await? {
            Ok(())
        } else {
            Err(SessionError::NotFound(name.to_string()))
        }
    }
}

#[async_trait]
impl<B> SessionServicePort for SessionService<B>
where
    B: StoreTokener,
{
    async fn register(&self, credentials: &Credentials) -> Result<(), SessionError> {
        if credentials.name.is_empty() || credentials.password.is_empty() {
            return Err(SessionError::InvalidArgument(
                "name and password must be provided".to_string(),
            ));
        }

        if self.name_exists(&credentials.name).await? {
            return Err(SessionError::AlreadyExists(credentials.name.clone()));
        }

        let hash = self.password_hasher.hash(&credentials.password)?;

        // Another registration may have taken the name since the check above.
        let inserted = self
            .backend
            .insert_new(&credentials.name, &hash)
            .await
            .map_err(SessionError::io(StoreOperation::InsertNew))?;
        if !inserted {
            return Err(SessionError::AlreadyExists(credentials.name.clone()));
        }

        tracing::info!(name = %credentials.name, "User registered");
        Ok(())
    }

    async fn remove(&self, name: &str) -> Result<(), SessionError> {
        self.ensure_exists(name).await?;

        self.backend
            .remove(name)
            .await
            .map_err(SessionError::io(StoreOperation::Remove))?;

        tracing::info!(name = %name, "User removed");
        Ok(())
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<bool, SessionError> {
        self.ensure_exists(&credentials.name).await?;

        let hash = self
            .backend
            .load(&credentials.name)
            .await
            .map_err(SessionError::io(StoreOperation::Load))?
            .ok_or_else(|| SessionError::NotFound(credentials.name.clone()))?;

        Ok(self.password_hasher.verify(&credentials.password, &hash)?)
    }

    async fn issue_token(&self, credentials: &Credentials) -> Result<String, SessionError> {
        if !self.authenticate(credentials).await? {
            tracing::warn!(name = %credentials.name, "Login rejected: invalid credentials");
            return Err(SessionError::InvalidCredentials);
        }

        let claims = Claims::for_user(&credentials.name, self.backend.token_lifetime());
        let token = self
            .jwt_handler
            .encode(&claims)
            .map_err(|e| SessionError::InvalidToken(e.to_string()))?;

        tracing::info!(name = %credentials.name, expires_at = claims.exp, "Token issued");
        Ok(token)
    }

    async fn validate_token(&self, token: &str) -> Result<User, SessionError> {
        let claims: Claims = self.jwt_handler.decode(token).map_err(|e| match e {
            JwtError::TokenExpired => SessionError::Expired,
            JwtError::InvalidToken(msg) | JwtError::EncodingFailed(msg) => {
                SessionError::InvalidToken(msg)
            }
        })?;

        // The decoder works in whole seconds; recheck at sub-second precision.
        if claims.is_expired_at(Utc::now()) {
            return Err(SessionError::Expired);
        }

        let blacklisted = self
            .backend
            .token_exists(token)
            .await
            .map_err(SessionError::io(StoreOperation::TokenExists))?;
        if blacklisted {
            return Err(SessionError::Blacklisted);
        }

        Ok(User::new(claims.sub))
    }

    async fn logout(&self, token: &str) -> Result<User, SessionError> {
        let user = self.validate_token(token).await?;

        self.backend
            .add_token(token)
            .await
            .map_err(SessionError::io(StoreOperation::AddToken))?;

        tracing::info!(name = %user.name, "User logged out");
        Ok(user)
    }
}
