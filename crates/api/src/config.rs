/// Which backend holds the questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// PostgreSQL via `sqlx`; migrations run at startup.
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    /// Process-local store. Data does not survive a restart.
    Memory,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development, except
/// `DATABASE_URL`, which the PostgreSQL backend requires.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Question storage backend.
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `HOST`                 | `0.0.0.0`   |
    /// | `PORT`                 | `3000`      |
    /// | `CORS_ORIGINS`         | `*`         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`        |
    /// | `STORAGE`              | `postgres`  |
    /// | `DATABASE_URL`         | (required for `postgres`) |
    /// | `DB_MAX_CONNECTIONS`   | `20`        |
    ///
    /// Panics on malformed values; misconfiguration should stop startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let storage = match var("STORAGE", "postgres").to_ascii_lowercase().as_str() {
            "memory" => StorageConfig::Memory,
            "postgres" => StorageConfig::Postgres {
                database_url: lookup("DATABASE_URL")
                    .expect("DATABASE_URL must be set when STORAGE=postgres"),
                max_connections: var("DB_MAX_CONNECTIONS", "20")
                    .parse()
                    .expect("DB_MAX_CONNECTIONS must be a valid u32"),
            },
            other => panic!("STORAGE must be 'postgres' or 'memory', got '{other}'"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
        }
    }

    /// Whether CORS should accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_with_memory_storage() {
        let config = config_from(&[("STORAGE", "memory")]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.storage, StorageConfig::Memory);
        assert!(config.allows_any_origin());
    }

    #[test]
    fn postgres_storage_reads_database_settings() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/qa"),
            ("DB_MAX_CONNECTIONS", "5"),
        ]);
        assert_eq!(
            config.storage,
            StorageConfig::Postgres {
                database_url: "postgres://localhost/qa".into(),
                max_connections: 5,
            }
        );
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = config_from(&[
            ("STORAGE", "memory"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,,"),
        ]);
        assert_eq!(config.cors_origins, ["http://a.test", "http://b.test"]);
        assert!(!config.allows_any_origin());
    }

    #[test]
    #[should_panic(expected = "DATABASE_URL must be set")]
    fn postgres_without_url_panics() {
        config_from(&[("STORAGE", "postgres")]);
    }

    #[test]
    #[should_panic(expected = "STORAGE must be")]
    fn unknown_storage_panics() {
        config_from(&[("STORAGE", "redis")]);
    }
}
