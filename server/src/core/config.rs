use dotenv::dotenv;
use std::env;
use tracing::{info, warn};

const DEFAULT_JWT_SECRET: &str = "marketplace-dev-secret-change-me";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiry_days: i64,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub connection_lifetime_secs: u64,
    pub app_env: String,
}

impl Config {
    /// Loads the configuration from the environment variables.
    /// Calls dotenv() automatically
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://marketplace.db?mode=rwc".to_string());

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using default (not secure for production!)");
            DEFAULT_JWT_SECRET.to_string()
        });

        let jwt_expiry_days = env::var("JWT_EXPIRY_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse::<i64>()
            .ok()
            .filter(|days| *days > 0)
            .ok_or_else(|| "Invalid JWT_EXPIRY_DAYS: must be a positive number".to_string())?;

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = env::var("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let connection_lifetime_secs = env::var("DB_CONNECTION_LIFETIME_SECS")
            .unwrap_or_else(|_| "1800".to_string())
            .parse::<u64>()
            .map_err(|_| {
                "Invalid DB_CONNECTION_LIFETIME_SECS: must be a positive number".to_string()
            })?;

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            database_url,
            jwt_secret,
            jwt_expiry_days,
            server_host,
            server_port,
            max_connections,
            connection_lifetime_secs,
            app_env,
        })
    }

    /// Plain-HTTP local development, where `Secure` cookies would never be sent back
    pub fn is_development(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("development")
    }

    pub fn is_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }

    /// Logs the configuration (hiding the secrets)
    pub fn log_info(&self) {
        info!(
            environment = %self.app_env,
            address = %format!("{}:{}", self.server_host, self.server_port),
            database = %Self::mask_url(&self.database_url),
            max_db_connections = self.max_connections,
            connection_lifetime_secs = self.connection_lifetime_secs,
            jwt_expiry_days = self.jwt_expiry_days,
            "Server configuration"
        );
        if self.is_default_secret() {
            warn!("JWT secret: USING DEFAULT (INSECURE!)");
        }
    }

    /// Masks the credentials of the database URL for logging
    fn mask_url(url: &str) -> String {
        match (url.find("://"), url.find('@')) {
            (Some(scheme_end), Some(at_pos)) if at_pos > scheme_end => {
                format!("{}***{}", &url[..scheme_end + 3], &url[at_pos..])
            }
            // file based urls carry no credentials
            (Some(_), None) => url.to_string(),
            _ => "***".to_string(),
        }
    }
}
