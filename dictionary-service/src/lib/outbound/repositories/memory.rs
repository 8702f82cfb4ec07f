use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::session::errors::StoreError;
use crate::domain::session::ports::CredentialStore;

/// Process-local credential store.
///
/// Password hashes and blacklisted tokens live in two independently locked
/// collections; all data is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    /// Map of user name -> password hash
    users: RwLock<HashMap<String, String>>,
    /// Revoked token strings
    blacklist: RwLock<HashSet<String>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn blacklist_len(&self) -> usize {
        self.blacklist.read().await.len()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn load(&self, name: &str) -> Result<Option<String>, StoreError> {
        Ok(self.users.read().await.get(name).cloned())
    }

    async fn save(&self, name: &str, hash: &str) -> Result<(), StoreError> {
        self.users
            .write()
            .await
            .insert(name.to_string(), hash.to_string());
        Ok(())
    }

    async fn insert_new(&self, name: &str, hash: &str) -> Result<bool, StoreError> {
        match self.users.write().await.entry(name.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(entry) => {
                entry.insert(hash.to_string());
                Ok(true)
            }
        }
    }

    async fn name_exists(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.users.read().await.contains_key(name))
    }

    async fn remove(&self, name: &str) -> Result<(), StoreError> {
        self.users.write().await.remove(name);
        Ok(())
    }

    async fn add_token(&self, token: &str) -> Result<(), StoreError> {
        self.blacklist.write().await.insert(token.to_string());
        Ok(())
    }

    async fn token_exists(&self, token: &str) -> Result<bool, StoreError> {
        Ok(self.blacklist.read().await.contains(token))
    }

    async fn remove_token(&self, token: &str) -> Result<(), StoreError> {
        self.blacklist.write().await.remove(token);
        Ok(())
    }
}
