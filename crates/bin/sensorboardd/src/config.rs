//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `sensorboard.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Item store settings.
    pub storage: StorageConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Which item store backs the record endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    DynamoDb,
    Memory,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(Self::DynamoDb),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::Validation(format!(
                "unknown storage backend `{other}`"
            ))),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DynamoDb => f.write_str("dynamodb"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Item store selection and per-backend settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Selected backend.
    pub backend: Backend,
    /// DynamoDB settings, used when `backend = "dynamodb"`.
    pub dynamodb: DynamoDbConfig,
    /// In-memory settings, used when `backend = "memory"`.
    pub memory: MemoryConfig,
}

/// DynamoDB table location.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DynamoDbConfig {
    /// Table name.
    pub table: String,
    /// AWS region.
    pub region: String,
    /// Optional endpoint override (DynamoDB Local, localstack).
    pub endpoint_url: Option<String>,
    /// Read every scan page instead of the first one only.
    pub follow_pages: bool,
}

/// In-memory store seed.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// JSON file holding an array of records; empty store when unset.
    pub seed_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `sensorboard.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("sensorboard.toml")?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("SENSORBOARD_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("SENSORBOARD_PORT") {
            self.server.port = parse_port("SENSORBOARD_PORT", &val)?;
        }
        if let Some(val) = lookup("SENSORBOARD_BIND") {
            let (host, port) = val.rsplit_once(':').ok_or_else(|| {
                ConfigError::Validation(format!(
                    "SENSORBOARD_BIND must be host:port, got `{val}`"
                ))
            })?;
            self.server.port = parse_port("SENSORBOARD_BIND", port)?;
            self.server.host = host.to_string();
        }
        if let Some(val) = lookup("SENSORBOARD_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("SENSORBOARD_STORAGE") {
            self.storage.backend = val.parse()?;
        }
        if let Some(val) = lookup("SENSORBOARD_TABLE") {
            self.storage.dynamodb.table = val;
        }
        if let Some(val) = lookup("SENSORBOARD_REGION") {
            self.storage.dynamodb.region = val;
        }
        if let Some(val) = lookup("SENSORBOARD_DYNAMODB_ENDPOINT") {
            self.storage.dynamodb.endpoint_url = Some(val);
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.storage.backend == Backend::DynamoDb {
            if self.storage.dynamodb.table.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "dynamodb table name must not be empty".to_string(),
                ));
            }
            if self.storage.dynamodb.region.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "dynamodb region must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sensorboardd=info,sensorboard=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for DynamoDbConfig {
    fn default() -> Self {
        Self {
            table: "IoTData2".to_string(),
            region: "eu-central-1".to_string(),
            endpoint_url: None,
            follow_pages: false,
        }
    }
}

fn parse_port(var: &str, raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{var} has invalid port `{raw}`")))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.backend, Backend::DynamoDb);
        assert_eq!(config.storage.dynamodb.table, "IoTData2");
        assert_eq!(config.storage.dynamodb.region, "eu-central-1");
        assert!(config.storage.dynamodb.endpoint_url.is_none());
        assert!(!config.storage.dynamodb.follow_pages);
        assert!(config.storage.memory.seed_path.is_none());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.backend, Backend::DynamoDb);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [storage]
            backend = 'memory'

            [storage.dynamodb]
            table = 'Readings'
            region = 'us-east-1'
            endpoint_url = 'http://localhost:8000'
            follow_pages = true

            [storage.memory]
            seed_path = 'records.json'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.storage.backend, Backend::Memory);
        assert_eq!(config.storage.dynamodb.table, "Readings");
        assert_eq!(config.storage.dynamodb.region, "us-east-1");
        assert_eq!(
            config.storage.dynamodb.endpoint_url.as_deref(),
            Some("http://localhost:8000")
        );
        assert!(config.storage.dynamodb.follow_pages);
        assert_eq!(
            config.storage.memory.seed_path,
            Some(PathBuf::from("records.json"))
        );
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [storage.dynamodb]
            table = 'Readings'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.storage.dynamodb.table, "Readings");
        assert_eq!(config.storage.dynamodb.region, "eu-central-1");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_table_for_dynamodb() {
        let mut config = Config::default();
        config.storage.dynamodb.table = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_region_for_dynamodb() {
        let mut config = Config::default();
        config.storage.dynamodb.region = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_ignore_dynamodb_settings_for_memory_backend() {
        let mut config = Config::default();
        config.storage.backend = Backend::Memory;
        config.storage.dynamodb.table = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_parse_backend_names() {
        assert_eq!("dynamodb".parse::<Backend>().unwrap(), Backend::DynamoDb);
        assert_eq!("Memory".parse::<Backend>().unwrap(), Backend::Memory);
        assert!("postgres".parse::<Backend>().is_err());
    }

    #[test]
    fn should_display_backend_names() {
        assert_eq!(Backend::DynamoDb.to_string(), "dynamodb");
        assert_eq!(Backend::Memory.to_string(), "memory");
    }

    #[test]
    fn should_format_bind_addr() {
        let mut config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    fn overridden(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, val)| ((*key).to_string(), (*val).to_string()))
            .collect();
        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).cloned())?;
        Ok(config)
    }

    #[test]
    fn should_apply_env_overrides() {
        let config = overridden(&[
            ("SENSORBOARD_PORT", "8080"),
            ("SENSORBOARD_STORAGE", "memory"),
            ("SENSORBOARD_TABLE", "Readings"),
            ("SENSORBOARD_DYNAMODB_ENDPOINT", "http://localhost:8000"),
        ])
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, Backend::Memory);
        assert_eq!(config.storage.dynamodb.table, "Readings");
        assert_eq!(
            config.storage.dynamodb.endpoint_url.as_deref(),
            Some("http://localhost:8000")
        );
    }

    #[test]
    fn should_split_bind_override_into_host_and_port() {
        let config = overridden(&[("SENSORBOARD_BIND", "127.0.0.1:9090")]).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_reject_malformed_port_override() {
        let err = overridden(&[("SENSORBOARD_PORT", "80a")]).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(msg) if msg.contains("SENSORBOARD_PORT")));
    }

    #[test]
    fn should_reject_out_of_range_port_override() {
        let err = overridden(&[("SENSORBOARD_PORT", "70000")]).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn should_reject_bind_override_without_colon() {
        let err = overridden(&[("SENSORBOARD_BIND", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(msg) if msg.contains("host:port")));
    }

    #[test]
    fn should_reject_bind_override_with_bad_port() {
        let err = overridden(&[("SENSORBOARD_BIND", "127.0.0.1:http")]).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(msg) if msg.contains("SENSORBOARD_BIND")));
    }

    #[test]
    fn should_reject_unknown_backend_override() {
        let err = overridden(&[("SENSORBOARD_STORAGE", "postgres")]).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
