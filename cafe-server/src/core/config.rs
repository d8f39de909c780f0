/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_PATH | cafes.db | SQLite file (created if missing) |
/// | HTTP_HOST | 127.0.0.1 | bind address |
/// | HTTP_PORT | 5000 | bind port |
/// | ENVIRONMENT | development | development / staging / production |
/// | DEBUG | true in development | show error details on error pages |
/// | LOG_LEVEL | info | tracing level (RUST_LOG wins when set) |
/// | LOG_DIR | (unset) | also write daily log files here |
///
/// # Example
///
/// ```ignore
/// DATABASE_PATH=/data/cafes.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file
    pub database_path: String,
    /// Bind address
    pub http_host: String,
    /// Bind port
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    /// Verbose error pages
    pub debug: bool,
    /// Default tracing level
    pub log_level: String,
    /// Optional directory for rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to defaults
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let debug = std::env::var("DEBUG")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(environment == "development");

        Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "cafes.db".into()),
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment,
            debug,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        }
    }

    /// Override the database location and debug flag
    ///
    /// Used by tests
    pub fn with_overrides(database_path: impl Into<String>, debug: bool) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.debug = debug;
        config
    }

    /// `host:port` to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" ON "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("No"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides("/tmp/test.db", false);
        assert_eq!(config.database_path, "/tmp/test.db");
        assert!(!config.debug);
    }

    #[test]
    fn test_bind_addr() {
        let mut config = Config::with_overrides("x.db", true);
        config.http_host = "0.0.0.0".into();
        config.http_port = 8080;
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }
}
