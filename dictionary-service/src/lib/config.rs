use std::env;
use std::time::Duration;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub deepl: DeeplConfig,
    pub merriam_webster: MerriamWebsterConfig,
    pub mymemory: MyMemoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_minutes: i64,
}

impl JwtConfig {
    /// Token lifetime; non-positive values yield tokens that are born expired.
    pub fn lifetime(&self) -> Duration {
        Duration::from_secs((self.expiration_minutes.max(0) as u64).saturating_mul(60))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeeplConfig {
    pub api_key: String,
    #[serde(default = "default_deepl_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MerriamWebsterConfig {
    pub dictionary_key: String,
    pub thesaurus_key: String,
    #[serde(default = "default_merriam_webster_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MyMemoryConfig {
    #[serde(default = "default_mymemory_url")]
    pub base_url: String,
}

fn default_deepl_url() -> String {
    "https://api-free.deepl.com".to_string()
}

fn default_merriam_webster_url() -> String {
    "https://www.dictionaryapi.com".to_string()
}

fn default_mymemory_url() -> String {
    "https://api.mymemory.translated.net".to_string()
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, DEEPL__API_KEY, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DEEPL__API_KEY=... overrides deepl.api_key
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;

        configuration.try_deserialize()
    }
}
