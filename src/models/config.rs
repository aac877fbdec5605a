use serde::Deserialize;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "drone_inventory.db".to_string()
}

fn default_templates_glob() -> String {
    "templates/**/*.html".to_string()
}

/// Configuration options for the inventory admin server.
///
/// Values come from `config.yaml` when present, overridden by `DRONEINV_*`
/// environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_templates_glob")]
    pub templates_glob: String,
}

impl ServerConfig {
    /// Loads the configuration from `config.yaml` and the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("DRONEINV"))
            .build()?
            .try_deserialize()
    }
}
