//! # Project Configuration
//!
//! Assembles the host's configuration from environment variables.
//!
//! | Variable | Setting | Default |
//! |----------|---------|---------|
//! | `DATABASE_URL` or `DB_USERNAME`/`DB_PASSWORD`/`DB_HOST`/`DB_PORT`/`DB_DATABASE` | `database` | none |
//! | `STORE_CORS`, `ADMIN_CORS`, `AUTH_CORS` | `http.*_cors` | unset |
//! | `JWT_SECRET`, `COOKIE_SECRET` | `http.jwt_secret`, `http.cookie_secret` | `"supersecret"` |
//! | `REDIS_URL` | `redis_url` | `"redis://localhost:6379"` |
//! | `MEDUSA_WORKER_MODE` | `worker_mode` | unset |
//!
//! The cache, event bus and workflow engine modules receive `REDIS_URL` as given, with
//! no default.
//!
//! The secret defaults and the disabled TLS verification of the discrete database
//! variant are kept for compatibility with existing deployments, but they are never
//! silent: [`ProjectConfig::insecure_settings`] lists them and assembly logs a warning
//! for each.

pub mod database;
pub mod env;

pub use database::{mask_url_password, DatabaseConfig, DatabaseSource};
pub use env::{load_env_files, Env, ProcessEnv};

use serde::Serialize;
use serde_json::json;
use std::fmt::Display;
use tracing::warn;

pub const DEFAULT_SECRET: &str = "supersecret";
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

const REDACTED: &str = "***";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    MissingVar(&'static str),
}

/// Which half of the host a process runs.
///
/// Values the host does not know are kept as written and handed on unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMode {
    Shared,
    Worker,
    Server,
    Other(String),
}

impl WorkerMode {
    pub fn as_str(&self) -> &str {
        match self {
            WorkerMode::Shared => "shared",
            WorkerMode::Worker => "worker",
            WorkerMode::Server => "server",
            WorkerMode::Other(raw) => raw,
        }
    }
}

impl From<String> for WorkerMode {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "shared" => WorkerMode::Shared,
            "worker" => WorkerMode::Worker,
            "server" => WorkerMode::Server,
            _ => WorkerMode::Other(raw),
        }
    }
}

impl Serialize for WorkerMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A comma-separated list of allowed origins, kept as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CorsOrigins(Option<String>);

impl CorsOrigins {
    pub fn new(raw: Option<String>) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Trimmed, non-empty entries.
    pub fn origins(&self) -> Vec<&str> {
        self.0
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpConfig {
    pub store_cors: CorsOrigins,
    pub admin_cors: CorsOrigins,
    pub auth_cors: CorsOrigins,
    pub jwt_secret: String,
    pub cookie_secret: String,
}

/// A pluggable host module and its options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleConfig {
    pub key: &'static str,
    pub resolve: &'static str,
    pub options: serde_json::Value,
}

impl ModuleConfig {
    fn redis_modules(redis_url: Option<&str>) -> Vec<Self> {
        vec![
            ModuleConfig {
                key: "cache",
                resolve: "@medusajs/cache-redis",
                options: json!({ "redisUrl": redis_url }),
            },
            ModuleConfig {
                key: "event_bus",
                resolve: "@medusajs/event-bus-redis",
                options: json!({ "redisUrl": redis_url }),
            },
            ModuleConfig {
                key: "workflow_engine",
                resolve: "@medusajs/workflow-engine-redis",
                options: json!({ "redis": { "url": redis_url } }),
            },
        ]
    }
}

/// A setting that falls back to something unsafe for production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsecureSetting {
    JwtSecretDefault,
    CookieSecretDefault,
    TlsVerificationDisabled,
}

impl Display for InsecureSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            InsecureSetting::JwtSecretDefault => "JWT_SECRET is the well-known default",
            InsecureSetting::CookieSecretDefault => "COOKIE_SECRET is the well-known default",
            InsecureSetting::TlsVerificationDisabled => "database TLS certificate verification is disabled",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectConfig {
    pub database: DatabaseConfig,
    pub http: HttpConfig,
    pub redis_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_mode: Option<WorkerMode>,
    pub modules: Vec<ModuleConfig>,
}

impl ProjectConfig {
    /// Assembles the configuration, logging a warning per [`InsecureSetting`].
    pub fn from_env(source: DatabaseSource, env: &impl Env) -> Result<Self, ConfigError> {
        let database = DatabaseConfig::from_env(source, env)?;
        let http = HttpConfig {
            store_cors: CorsOrigins::new(env.var("STORE_CORS")),
            admin_cors: CorsOrigins::new(env.var("ADMIN_CORS")),
            auth_cors: CorsOrigins::new(env.var("AUTH_CORS")),
            jwt_secret: env.non_empty("JWT_SECRET").unwrap_or_else(|| DEFAULT_SECRET.to_string()),
            cookie_secret: env
                .non_empty("COOKIE_SECRET")
                .unwrap_or_else(|| DEFAULT_SECRET.to_string()),
        };
        let worker_mode = env.non_empty("MEDUSA_WORKER_MODE").map(WorkerMode::from);
        if let Some(WorkerMode::Other(raw)) = &worker_mode {
            warn!(worker_mode = %raw, "Unrecognised MEDUSA_WORKER_MODE, passing it on as is");
        }
        let raw_redis_url = env.var("REDIS_URL");

        let config = Self {
            database,
            http,
            redis_url: env
                .non_empty("REDIS_URL")
                .unwrap_or_else(|| DEFAULT_REDIS_URL.to_string()),
            worker_mode,
            modules: ModuleConfig::redis_modules(raw_redis_url.as_deref()),
        };

        for setting in config.insecure_settings() {
            warn!(?setting, "{}", setting);
        }
        Ok(config)
    }

    /// [`from_env`](Self::from_env) with the source picked by [`DatabaseSource::detect`].
    pub fn load(env: &impl Env) -> Result<Self, ConfigError> {
        Self::from_env(DatabaseSource::detect(env), env)
    }

    pub fn insecure_settings(&self) -> Vec<InsecureSetting> {
        let mut insecure = Vec::new();
        if self.http.jwt_secret == DEFAULT_SECRET {
            insecure.push(InsecureSetting::JwtSecretDefault);
        }
        if self.http.cookie_secret == DEFAULT_SECRET {
            insecure.push(InsecureSetting::CookieSecretDefault);
        }
        if self.database.tls_verification_disabled() {
            insecure.push(InsecureSetting::TlsVerificationDisabled);
        }
        insecure
    }

    /// A copy safe to log: secrets replaced, passwords in URLs masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.database.url = mask_url_password(&self.database.url);
        copy.http.jwt_secret = REDACTED.to_string();
        copy.http.cookie_secret = REDACTED.to_string();
        copy.redis_url = mask_url_password(&self.redis_url);
        let raw_redis_url = module_redis_url(&self.modules).map(|url| mask_url_password(&url));
        copy.modules = ModuleConfig::redis_modules(raw_redis_url.as_deref());
        copy
    }
}

/// The raw `REDIS_URL` the modules were built with.
fn module_redis_url(modules: &[ModuleConfig]) -> Option<String> {
    modules
        .iter()
        .find(|module| module.key == "cache")
        .and_then(|module| module.options.get("redisUrl"))
        .and_then(|url| url.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_worker_mode_keeps_unknown_values() {
        assert_eq!(WorkerMode::from("worker".to_string()), WorkerMode::Worker);
        let unknown = WorkerMode::from("both".to_string());
        assert_eq!(unknown, WorkerMode::Other("both".into()));
        assert_eq!(serde_json::to_value(&unknown).unwrap(), json!("both"));
    }

    #[test]
    fn test_cors_keeps_raw_and_splits() {
        let cors = CorsOrigins::new(Some("http://localhost:8000, https://docs.medusajs.com,".into()));
        assert_eq!(cors.raw(), Some("http://localhost:8000, https://docs.medusajs.com,"));
        assert_eq!(cors.origins(), vec!["http://localhost:8000", "https://docs.medusajs.com"]);
        assert!(CorsOrigins::default().origins().is_empty());
    }

    #[test]
    fn test_redacted_masks_secrets() {
        let env = HashMap::from([
            ("DATABASE_URL", "postgres://medusa:pw@db:5432/medusa"),
            ("JWT_SECRET", "jwt"),
            ("REDIS_URL", "redis://:token@cache:6379"),
        ]);
        let config = ProjectConfig::load(&env).unwrap().redacted();
        assert_eq!(config.database.url, "postgres://medusa:***@db:5432/medusa");
        assert_eq!(config.http.jwt_secret, "***");
        assert_eq!(config.redis_url, "redis://:***@cache:6379");
        assert_eq!(config.modules[2].options["redis"]["url"], "redis://:***@cache:6379");
    }
}
