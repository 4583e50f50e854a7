use std::env;

use axum::http::HeaderValue;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub frontend_origin: HeaderValue,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists (for development)
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid PORT value: {}", e))?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:./picsfeed.db".to_string());

        let frontend_origin = env::var("FRONTEND_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid FRONTEND_ORIGIN value: {}", e))?;

        Ok(Config {
            port,
            database_url,
            frontend_origin,
        })
    }

    /// Filesystem path of a file-backed SQLite database, if any.
    pub fn database_path(&self) -> Option<&str> {
        let path = self
            .database_url
            .strip_prefix("sqlite://")
            .or_else(|| self.database_url.strip_prefix("sqlite:"))
            .unwrap_or(&self.database_url);
        let path = path.split('?').next().unwrap_or(path);

        if path.is_empty() || path == ":memory:" {
            None
        } else {
            Some(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(database_url: &str) -> Config {
        Config {
            port: 8000,
            database_url: database_url.to_string(),
            frontend_origin: HeaderValue::from_static("http://localhost:3000"),
        }
    }

    #[test]
    fn database_path_strips_scheme_and_options() {
        assert_eq!(config("sqlite:./picsfeed.db").database_path(), Some("./picsfeed.db"));
        assert_eq!(
            config("sqlite://data/votes.db?mode=rwc").database_path(),
            Some("data/votes.db")
        );
        assert_eq!(config("sqlite::memory:").database_path(), None);
    }
}
