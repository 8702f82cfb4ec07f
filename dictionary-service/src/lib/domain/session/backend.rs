use std::time::Duration;

use async_trait::async_trait;

use crate::domain::session::errors::StoreError;
use crate::domain::session::models::TokenSettings;
use crate::domain::session::ports::CredentialStore;
use crate::domain::session::ports::Tokener;

/// Any credential store paired with token settings.
///
/// Satisfies `StoreTokener`, so it can back a `SessionService` directly.
pub struct SessionBackend<S: CredentialStore> {
    store: S,
    settings: TokenSettings,
}

impl<S: CredentialStore> SessionBackend<S> {
    pub fn new(store: S, settings: TokenSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: CredentialStore> Tokener for SessionBackend<S> {
    fn signing_key(&self) -> &[u8] {
        self.settings.key()
    }

    fn token_lifetime(&self) -> Duration {
        self.settings.lifetime()
    }
}

#[async_trait]
impl<S: CredentialStore> CredentialStore for SessionBackend<S> {
    async fn load(&self, name: &str) -> Result<Option<String>, StoreError> {
        self.store.load(name).await
    }

    async fn save(&self, name: &str, hash: &str) -> Result<(), StoreError> {
        self.store.save(name, hash).await
    }

    async fn insert_new(&self, name: &str, hash: &str) -> Result<bool, StoreError> {
        self.store.insert_new(name, hash).await
    }

    async fn name_exists(&self, name: &str) -> Result<bool, StoreError> {
        self.store.name_exists(name).await
    }

    async fn remove(&self, name: &str) -> Result<(), StoreError> {
        self.store.remove(name).await
    }

    async fn add_token(&self, token: &str) -> Result<(), StoreError> {
        self.store.add_token(token).await
    }

    async fn token_exists(&self, token: &str) -> Result<bool, StoreError> {
        self.store.token_exists(token).await
    }

    async fn remove_token(&self, token: &str) -> Result<(), StoreError> {
        self.store.remove_token(token).await
    }
}
