//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del servidor y del dashboard.
//! Todas las variables tienen un valor por defecto; un valor mal formado
//! es un error, no un panic.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Configuración del entorno
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
    pub detail_reveal_delay: Duration,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
            log_level: tracing::Level::DEBUG,
            detail_reveal_delay: Duration::from_millis(500),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno del proceso
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Leer la configuración desde una función de búsqueda arbitraria
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let delay_ms: u64 = parse_or(&lookup, "DETAIL_REVEAL_DELAY_MS", 500)?;

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level: parse_or(&lookup, "LOG_LEVEL", defaults.log_level)?,
            detail_reveal_delay: Duration::from_millis(delay_ms),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: '{}'", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EnvironmentConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, EnvironmentConfig::default());
        assert!(config.is_development());
        assert_eq!(config.server_url(), "0.0.0.0:3000");
    }

    #[test]
    fn test_reads_values() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://localhost:3001, https://fleet.example.com,"),
            ("LOG_LEVEL", "info"),
            ("DETAIL_REVEAL_DELAY_MS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3001", "https://fleet.example.com"]
        );
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert!(config.detail_reveal_delay.is_zero());
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = EnvironmentConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
