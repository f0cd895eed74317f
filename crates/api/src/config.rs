/// Runtime settings for the categories server, read once at startup.
///
/// Every value falls back to a local-development default.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins the browser may call the API from.
    pub cors_origins: Vec<String>,
    /// Requests running longer than this get a 408.
    pub request_timeout_secs: u64,
    pub db_max_connections: u32,
    /// Load the starter catalogue into an empty table on boot.
    pub seed_categories: bool,
}

impl ServerConfig {
    /// Read the process environment.
    ///
    /// | Variable                   | Fallback                |
    /// |----------------------------|-------------------------|
    /// | `HOST`                     | `0.0.0.0`               |
    /// | `PORT`                     | `8080`                  |
    /// | `CORS_ORIGINS`             | `http://localhost:8080` |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                    |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`                    |
    /// | `SEED_CATEGORIES`          | `true`                  |
    ///
    /// Panics on values that do not parse.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:8080".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        let seed_categories: bool = std::env::var("SEED_CATEGORIES")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("SEED_CATEGORIES must be true or false");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            seed_categories,
        }
    }
}

/// `a, b,,c` becomes `[a, b, c]`.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
