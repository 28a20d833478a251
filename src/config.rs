// src/config.rs
use std::env;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}: {1}")]
    InvalidPort(String, std::num::ParseIntError),
}

/// Process-wide startup configuration. Read once in `main`, never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("BIND_ADDR").ok(), env::var("PORT").ok())
    }

    fn from_vars(bind_addr: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let port = match port {
            Some(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidPort(raw, e))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_vars(None, None).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0");
        assert_eq!(cfg.port, 5001);
        assert_eq!(cfg.socket_addr(), "0.0.0.0:5001");
    }

    #[test]
    fn explicit_values_win() {
        let cfg = Config::from_vars(Some("127.0.0.1".into()), Some("8080".into())).unwrap();
        assert_eq!(cfg.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(Config::from_vars(None, Some("not-a-port".into())).is_err());
    }
}
