use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MONGO_URI: &str = "mongodb://127.0.0.1:27017/roster";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub port: u16,
    pub mongo_uri: String,
    pub log_level: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("mongo_uri", &"<redacted>")
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or unparseable values take the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT),
            mongo_uri: lookup("MONGO_URI").unwrap_or_else(|| DEFAULT_MONGO_URI.to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.mongo_uri, DEFAULT_MONGO_URI);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_values_from_lookup() {
        let vars = HashMap::from([
            ("PORT", "8081"),
            ("MONGO_URI", "mongodb://db.internal:27017/people"),
            ("LOG_LEVEL", "debug"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.port, 8081);
        assert_eq!(config.mongo_uri, "mongodb://db.internal:27017/people");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = Config::from_lookup(|key| (key == "PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_debug_redacts_uri() {
        let config = Config::from_lookup(|key| (key == "MONGO_URI").then(|| "mongodb://admin:hunter2@db/x".to_string()));
        let printed = format!("{:?}", config);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }
}
