use std::time::Duration;

use secrecy::SecretString;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::document_store::DocumentStoreClient;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub app: ApplicationSettings,
    pub document_store: DocumentStoreSettings,
    pub newsletter: NewsletterSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct DocumentStoreSettings {
    pub base_url: String,
    pub project_id: String,
    pub collection: String,
    pub auth_token: SecretString,
    pub timeout_ms: u64,
}

impl DocumentStoreSettings {
    pub fn client(self) -> Result<DocumentStoreClient, anyhow::Error> {
        let timeout = self.timeout();
        DocumentStoreClient::new(
            self.base_url,
            self.project_id,
            self.collection,
            self.auth_token,
            timeout,
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

/// Settings for `NewsletterForm`, which a UI host embeds; the HTTP server itself does not read them.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct NewsletterSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub reset_delay_ms: u64,
}

impl NewsletterSettings {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{other} is not supported environment. Try to use `local` or `production`",
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine current directory: {e}"))
    })?;
    let conf_dir = base_path.join("configuration");
    let env: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let settings = config::Config::builder()
        .add_source(config::File::from(conf_dir.join("base.yaml")).required(true))
        .add_source(
            config::File::from(conf_dir.join(format!("{}.yaml", env.as_str()))).required(true),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .prefix_separator("_"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
