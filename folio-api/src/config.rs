use std::time::Duration;

/// A configuration variable held a value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} has invalid value {value:?}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Server configuration loaded from environment variables.
///
/// Every field has a default suitable for local development. Leaving
/// `DATABASE_URL` unset runs the server without a store.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Store location: `mongodb://`, `mongodb+srv://` or `memory://`.
    pub database_url: Option<String>,
    /// MongoDB database name (default: `portfolio`).
    pub database_name: String,
    /// MongoDB server selection timeout in seconds (default: `5`).
    pub database_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            database_url: None,
            database_name: "portfolio".into(),
            database_timeout_secs: 5,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default     |
    /// |-------------------------|-------------|
    /// | `HOST`                  | `0.0.0.0`   |
    /// | `PORT`                  | `8000`      |
    /// | `DATABASE_URL`          | unset       |
    /// | `DATABASE_NAME`         | `portfolio` |
    /// | `DATABASE_TIMEOUT_SECS` | `5`         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", get("PORT"), defaults.port)?,
            database_url: get("DATABASE_URL"),
            database_name: get("DATABASE_NAME").unwrap_or(defaults.database_name),
            database_timeout_secs: parse_or(
                "DATABASE_TIMEOUT_SECS",
                get("DATABASE_TIMEOUT_SECS"),
                defaults.database_timeout_secs,
            )?,
        })
    }

    pub fn database_timeout(&self) -> Duration {
        Duration::from_secs(self.database_timeout_secs)
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = raw else {
        return Ok(default);
    };

    let parsed = value.trim().parse::<T>();

    match parsed {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError { var, reason: e.to_string(), value }),
    }
}
