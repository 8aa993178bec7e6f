//! User service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// HTTP server settings
    pub service: ServiceConfig,
    /// Relational store settings
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_defaults = ServiceConfig::default();
        let database_defaults = DatabaseConfig::default();

        Self {
            service: ServiceConfig {
                service_name: service_defaults.service_name,
                host: lookup("USER_SERVICE_HOST").unwrap_or(service_defaults.host),
                port: lookup("USER_SERVICE_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(service_defaults.port),
            },
            database: DatabaseConfig {
                url: lookup("USER_SERVICE_DATABASE_URL")
                    .or_else(|| lookup("DATABASE_URL"))
                    .unwrap_or(database_defaults.url),
                max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(database_defaults.max_connections),
                min_connections: lookup("DATABASE_MIN_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(database_defaults.min_connections),
            },
        }
    }
}
