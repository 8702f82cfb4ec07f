#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dictionary_service::domain::session::backend::SessionBackend;
use dictionary_service::domain::session::errors::StoreError;
use dictionary_service::domain::session::models::TokenSettings;
use dictionary_service::domain::session::ports::CredentialStore;
use dictionary_service::domain::session::service::SessionService;
use dictionary_service::domain::translation::service::TranslationService;
use dictionary_service::inbound::http::router::create_router;
use dictionary_service::outbound::clients::DeeplClient;
use dictionary_service::outbound::clients::MerriamWebsterDictionary;
use dictionary_service::outbound::clients::MerriamWebsterThesaurus;
use dictionary_service::outbound::clients::MyMemoryClient;
use dictionary_service::outbound::repositories::InMemoryCredentialStore;
use serde_json::json;
use serde_json::Value;
use wiremock::MockServer;

pub const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const DEEPL_KEY: &str = "deepl-test-key";
pub const DICTIONARY_KEY: &str = "dictionary-test-key";
pub const THESAURUS_KEY: &str = "thesaurus-test-key";

/// Test application that spawns a real server in front of a fake upstream
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub upstream: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application with an in-memory credential store
    pub async fn spawn() -> Self {
        Self::spawn_with_store(InMemoryCredentialStore::new(), Duration::from_secs(3600)).await
    }

    /// Spawn the application with a short token lifetime
    pub async fn spawn_with_lifetime(lifetime: Duration) -> Self {
        Self::spawn_with_store(InMemoryCredentialStore::new(), lifetime).await
    }

    /// Spawn the application over any credential store
    pub async fn spawn_with_store<S: CredentialStore>(store: S, lifetime: Duration) -> Self {
        let upstream = MockServer::start().await;

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let backend = Arc::new(SessionBackend::new(
            store,
            TokenSettings::new(SECRET, lifetime),
        ));
        let session_service = Arc::new(SessionService::new(backend));

        let http_client = reqwest::Client::new();
        let base_url = upstream.uri();
        let translation_service = Arc::new(TranslationService::new(
            Arc::new(DeeplClient::new(http_client.clone(), &base_url, DEEPL_KEY).unwrap()),
            Arc::new(
                MerriamWebsterDictionary::new(http_client.clone(), &base_url, DICTIONARY_KEY)
                    .unwrap(),
            ),
            Arc::new(
                MerriamWebsterThesaurus::new(http_client.clone(), &base_url, THESAURUS_KEY)
                    .unwrap(),
            ),
            Arc::new(MyMemoryClient::new(http_client, &base_url).unwrap()),
        ));

        let router = create_router(session_service, translation_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            upstream,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(&format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user, panicking on failure
    pub async fn register(&self, name: &str, password: &str) {
        let response = self
            .post("/api/user/add")
            .json(&json!({ "name": name, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    }

    /// Register a user and log in, returning the issued token
    pub async fn register_and_login(&self, name: &str, password: &str) -> String {
        self.register(name, password).await;

        let response = self
            .post("/api/user/login")
            .json(&json!({ "name": name, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token")
            .to_string()
    }
}

/// Store whose every operation fails, for exercising IO error paths
#[derive(Debug, Default)]
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Unavailable("store offline".to_string())
}

#[async_trait]
impl CredentialStore for FailingStore {
    async fn load(&self, _name: &str) -> Result<Option<String>, StoreError> {
        Err(unavailable())
    }

    async fn save(&self, _name: &str, _hash: &str) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn insert_new(&self, _name: &str, _hash: &str) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn name_exists(&self, _name: &str) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn remove(&self, _name: &str) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn add_token(&self, _token: &str) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn token_exists(&self, _token: &str) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn remove_token(&self, _token: &str) -> Result<(), StoreError> {
        Err(unavailable())
    }
}
