use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError};
use serde::Deserialize;

pub mod domain;
pub mod infrastructure;

#[derive(Clone, Debug, Deserialize)]
pub struct BookingConfig {
    pub server: Server,
    pub logger: Logger,
}

impl BookingConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(config::File::with_name("booking.toml").required(false))
            .add_source(config::Environment::with_prefix("BOOKING").separator("_"))
            .build()?
            .try_deserialize::<BookingConfig>()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("logger.level", "INFO")
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
    pub tls: Option<Tls>,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// PEM形式の証明書と秘密鍵
#[derive(Clone, Debug, Deserialize)]
pub struct Tls {
    pub cert: String,
    pub key: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Logger {
    pub level: Level,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum Level {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::TRACE => tracing::Level::TRACE,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::INFO => tracing::Level::INFO,
            Level::WARN => tracing::Level::WARN,
            Level::ERROR => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use config::{File, FileFormat};

    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = BookingConfig::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<BookingConfig>()
            .unwrap();
        assert_eq!(config.server.address(), "0.0.0.0:8080");
        assert!(config.server.tls.is_none());
        assert_eq!(config.logger.level, Level::INFO);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let toml = r#"
            [server]
            port = 9000

            [server.tls]
            cert = "localhost.pem"
            key = "localhost.key"

            [logger]
            level = "DEBUG"
        "#;
        let config = BookingConfig::builder()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize::<BookingConfig>()
            .unwrap();
        assert_eq!(config.server.address(), "0.0.0.0:9000");
        assert_eq!(config.server.tls.unwrap().cert, "localhost.pem");
        assert_eq!(tracing::Level::from(&config.logger.level), tracing::Level::DEBUG);
    }
}
