use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};
use odinview_core::constants::APP_SERVICE_NAME;

/// Which vault backs the credential service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretBackend {
    /// The operating system's credential vault.
    Keyring,
    /// Process-local map; secrets are lost on exit.
    Memory,
}

impl FromStr for SecretBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyring" => Ok(SecretBackend::Keyring),
            "memory" => Ok(SecretBackend::Memory),
            other => Err(anyhow!(
                "unknown secret backend '{}', expected 'keyring' or 'memory'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!(
                "unknown log format '{}', expected 'text' or 'json'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub service_name: String,
    pub secret_backend: SecretBackend,
    pub chat_latency: Duration,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads `.env` (if present) and reads the `OV_*` variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, applying defaults for
    /// missing keys.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let listen_addr: SocketAddr = var("OV_LISTEN_ADDR", "127.0.0.1:8080")
            .parse::<SocketAddr>()
            .context("Invalid OV_LISTEN_ADDR")?;
        let db_path = var("OV_DB_PATH", "./db/odinview.db");
        let cors_allow: Vec<String> = var("OV_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = var("OV_REQUEST_TIMEOUT_MS", "30000")
            .parse::<u64>()
            .context("Invalid OV_REQUEST_TIMEOUT_MS")?;
        let service_name = var("OV_SERVICE_NAME", APP_SERVICE_NAME);
        if service_name.trim().is_empty() {
            return Err(anyhow!("OV_SERVICE_NAME must not be empty"));
        }
        let secret_backend: SecretBackend = var("OV_SECRET_BACKEND", "keyring")
            .parse::<SecretBackend>()
            .context("Invalid OV_SECRET_BACKEND")?;
        let chat_latency_ms: u64 = var("OV_CHAT_LATENCY_MS", "1000")
            .parse::<u64>()
            .context("Invalid OV_CHAT_LATENCY_MS")?;
        let log_format: LogFormat = var("OV_LOG_FORMAT", "text")
            .parse::<LogFormat>()
            .context("Invalid OV_LOG_FORMAT")?;

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            service_name,
            secret_backend,
            chat_latency: Duration::from_millis(chat_latency_ms),
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(
            config.listen_addr,
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.db_path, "./db/odinview.db");
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.service_name, "OdinView");
        assert_eq!(config.secret_backend, SecretBackend::Keyring);
        assert_eq!(config.chat_latency, Duration::from_millis(1000));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("OV_CORS_ALLOW_ORIGINS", "http://localhost:1420, ,http://tauri.localhost"),
            ("OV_SECRET_BACKEND", "Memory"),
            ("OV_CHAT_LATENCY_MS", "0"),
            ("OV_LOG_FORMAT", "json"),
            ("OV_SERVICE_NAME", "OdinView-Dev"),
        ])
        .unwrap();

        assert_eq!(
            config.cors_allow,
            vec!["http://localhost:1420", "http://tauri.localhost"]
        );
        assert_eq!(config.secret_backend, SecretBackend::Memory);
        assert_eq!(config.chat_latency, Duration::ZERO);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.service_name, "OdinView-Dev");
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(config_from(&[("OV_LISTEN_ADDR", "not-an-addr")]).is_err());
        assert!(config_from(&[("OV_REQUEST_TIMEOUT_MS", "soon")]).is_err());
        assert!(config_from(&[("OV_SECRET_BACKEND", "file")]).is_err());
        assert!(config_from(&[("OV_SERVICE_NAME", "  ")]).is_err());
    }
}
