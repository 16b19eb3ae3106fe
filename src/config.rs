use anyhow::{Context, Result};
use sqlx::postgres::PgConnectOptions;

// ---------------------------------------------------------------------------
// DbConfig
// ---------------------------------------------------------------------------

/// Database connection parameters, read from the discrete `COLLECTOR_DB_*`
/// environment variables rather than a single URL so deployments can inject
/// the password separately from the rest.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub user: String,
    pub host: String,
    pub password: String,
    pub port: u16,
    pub database: String,
}

impl DbConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            user: required("COLLECTOR_DB_USER")?,
            host: required("COLLECTOR_DB_HOST")?,
            password: required("COLLECTOR_DB_PASSWORD")?,
            port: required("COLLECTOR_DB_PORT")?
                .parse()
                .context("COLLECTOR_DB_PORT must be a valid port number")?,
            database: required("COLLECTOR_DB_DATABASE")?,
        })
    }

    /// Build sqlx connect options from the parts. Pure, so it can be unit
    /// tested without touching the process environment.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub db: DbConfig,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            db: DbConfig::from_env()?,
            server_host: optional("SERVER_HOST", "0.0.0.0"),
            server_port: optional("SERVER_PORT", "8080")
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("missing required env var: {key}"))
}

fn optional(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DbConfig {
        DbConfig {
            user: "collector".into(),
            host: "db.internal".into(),
            password: "secret".into(),
            port: 5433,
            database: "collector".into(),
        }
    }

    #[test]
    fn connect_options_carry_all_parts() {
        let opts = sample().connect_options();
        assert_eq!(opts.get_host(), "db.internal");
        assert_eq!(opts.get_port(), 5433);
        assert_eq!(opts.get_username(), "collector");
        assert_eq!(opts.get_database(), Some("collector"));
    }
}
