use std::sync::Arc;

use dictionary_service::config::Config;
use dictionary_service::domain::session::backend::SessionBackend;
use dictionary_service::domain::session::models::TokenSettings;
use dictionary_service::domain::session::service::SessionService;
use dictionary_service::domain::translation::service::TranslationService;
use dictionary_service::inbound::http::router::create_router;
use dictionary_service::outbound::clients;
use dictionary_service::outbound::clients::DeeplClient;
use dictionary_service::outbound::clients::MerriamWebsterDictionary;
use dictionary_service::outbound::clients::MerriamWebsterThesaurus;
use dictionary_service::outbound::clients::MyMemoryClient;
use dictionary_service::outbound::repositories::InMemoryCredentialStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dictionary_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "dictionary-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_lifetime_minutes = config.jwt.expiration_minutes,
        deepl = %config.deepl.base_url,
        merriam_webster = %config.merriam_webster.base_url,
        mymemory = %config.mymemory.base_url,
        "Configuration loaded"
    );

    if config.deepl.api_key.is_empty() {
        tracing::warn!("DeepL API key is empty; translations will be rejected upstream");
    }

    let backend = Arc::new(SessionBackend::new(
        InMemoryCredentialStore::new(),
        TokenSettings::new(config.jwt.secret.as_bytes(), config.jwt.lifetime()),
    ));
    let session_service = Arc::new(SessionService::new(backend));

    let http_client = clients::http_client()?;
    let translator = Arc::new(DeeplClient::new(
        http_client.clone(),
        &config.deepl.base_url,
        config.deepl.api_key.clone(),
    )?);
    let dictionary = Arc::new(MerriamWebsterDictionary::new(
        http_client.clone(),
        &config.merriam_webster.base_url,
        config.merriam_webster.dictionary_key.clone(),
    )?);
    let thesaurus = Arc::new(MerriamWebsterThesaurus::new(
        http_client.clone(),
        &config.merriam_webster.base_url,
        config.merriam_webster.thesaurus_key.clone(),
    )?);
    let memory = Arc::new(MyMemoryClient::new(http_client, &config.mymemory.base_url)?);

    let translation_service = Arc::new(TranslationService::new(
        translator, dictionary, thesaurus, memory,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(session_service, translation_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");
    Ok(())
}
