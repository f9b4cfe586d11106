/// Server configuration loaded from environment variables.
///
/// Everything except the database URL has a default suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string (required).
    pub database_url: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins. Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds. Unset means requests never time out.
    pub request_timeout_secs: Option<u64>,
    /// Endpoint that receives reported errors as JSON. Unset means errors
    /// only go to the log.
    pub error_report_url: Option<String>,
    /// Signing secret for identity-provider webhooks (`whsec_...`).
    pub clerk_webhook_secret: Option<String>,
    /// Mount `/debug-error`, which panics on purpose (default: `false`).
    pub enable_debug_routes: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default            |
    /// |------------------------|--------------------|
    /// | `DATABASE_URL`         | required           |
    /// | `HOST`                 | `0.0.0.0`          |
    /// | `PORT`                 | `5000`             |
    /// | `CORS_ORIGINS`         | `*` (any origin)   |
    /// | `REQUEST_TIMEOUT_SECS` | unset (no timeout) |
    /// | `ERROR_REPORT_URL`     | unset              |
    /// | `CLERK_WEBHOOK_SECRET` | unset              |
    /// | `ENABLE_DEBUG_ROUTES`  | `false`            |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_or("PORT", var("PORT"), 5000)?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && s != "*")
            .collect();

        let request_timeout_secs = var("REQUEST_TIMEOUT_SECS")
            .map(|raw| parse("REQUEST_TIMEOUT_SECS", raw))
            .transpose()?;

        let enable_debug_routes = match var("ENABLE_DEBUG_ROUTES").as_deref() {
            None => false,
            Some("1" | "true" | "TRUE" | "yes") => true,
            Some("0" | "false" | "FALSE" | "no") => false,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "ENABLE_DEBUG_ROUTES",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            database_url,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            error_report_url: var("ERROR_REPORT_URL"),
            clerk_webhook_secret: var("CLERK_WEBHOOK_SECRET"),
            enable_debug_routes,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    raw.map_or(Ok(default), |value| parse(name, value))
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
