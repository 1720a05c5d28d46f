use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime configuration, read from the environment with the
/// `MOTORDESK_` prefix (e.g. `MOTORDESK_DATABASE_URL`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:motordesk.sqlite".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("MOTORDESK_"))
            .extract()
    }
}
