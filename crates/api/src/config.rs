use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use lumen_core::creations::Creations;

/// Curated grid bundled into the binary, used unless `CREATIONS_PATH` is set.
const BUNDLED_CREATIONS: &str = include_str!("../../../assets/creations.json");

/// Configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to read creations file {path}: {source}")]
    CreationsFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Creations(#[from] lumen_core::error::CoreError),
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// Directory served for static assets such as `/creations/*` and `/hero.jpg`.
    pub public_dir: PathBuf,
    /// Absolute origin used when rendering sitemap URLs, without trailing slash.
    pub public_base_url: String,
    /// Photos per page on the HTML search results page.
    pub page_size: i64,
    /// Optional override for the bundled creations grid.
    pub creations_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `PUBLIC_DIR`           | `public`                   |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:3000`    |
    /// | `PAGE_SIZE`            | `24`                       |
    /// | `CREATIONS_PATH`       | bundled grid               |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let cors_origins = var("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                    key: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let page_size: i64 = parse("PAGE_SIZE", var("PAGE_SIZE", "24"))?;
        if page_size < 1 {
            return Err(ConfigError::Invalid {
                key: "PAGE_SIZE",
                value: page_size.to_string(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port: parse("PORT", var("PORT", "3000"))?,
            cors_origins,
            request_timeout_secs: parse("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS", "30"))?,
            db_max_connections: parse("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS", "20"))?,
            public_dir: PathBuf::from(var("PUBLIC_DIR", "public")),
            public_base_url: var("PUBLIC_BASE_URL", "http://localhost:3000")
                .trim_end_matches('/')
                .to_string(),
            page_size,
            creations_path: lookup("CREATIONS_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Load the curated creations grid, from `creations_path` if set.
    pub fn load_creations(&self) -> Result<Creations, ConfigError> {
        let creations = match &self.creations_path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| {
                    ConfigError::CreationsFile {
                        path: path.clone(),
                        source,
                    }
                })?;
                Creations::from_json(&raw)?
            }
            None => Creations::from_json(BUNDLED_CREATIONS)?,
        };
        Ok(creations)
    }
}

fn parse<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use assert_matches::assert_matches;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins.len(), 1);
        assert_eq!(config.cors_origins[0].to_str().unwrap(), "http://localhost:3000");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.db_max_connections, 20);
        assert_eq!(config.page_size, 24);
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert!(config.creations_path.is_none());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://a.example, https://b.example,"),
            ("PUBLIC_BASE_URL", "https://lumen.example/"),
            ("PAGE_SIZE", "12"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.public_base_url, "https://lumen.example");
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert_matches!(
            config_from(&[("PORT", "not-a-port")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        );
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_matches!(
            config_from(&[("PAGE_SIZE", "0")]),
            Err(ConfigError::Invalid { key: "PAGE_SIZE", .. })
        );
    }

    #[test]
    fn bundled_creations_fill_four_columns() {
        let creations = config_from(&[]).unwrap().load_creations().unwrap();

        assert_eq!(creations.columns().len(), 4);
        assert!(creations.columns().iter().all(|column| !column.is_empty()));
    }

    #[test]
    fn creations_can_be_loaded_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[[{{"alt": "only one", "url": "one.webp"}}]]"#).unwrap();

        let path = file.path().to_string_lossy().to_string();
        let creations = config_from(&[("CREATIONS_PATH", &path)])
            .unwrap()
            .load_creations()
            .unwrap();

        assert_eq!(creations.len(), 1);
    }

    #[test]
    fn missing_creations_file_is_reported() {
        let config = config_from(&[("CREATIONS_PATH", "/definitely/not/here.json")]).unwrap();

        assert_matches!(
            config.load_creations(),
            Err(ConfigError::CreationsFile { .. })
        );
    }
}
