//! Server configuration loaded from the environment

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database URL
    pub database_url: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Runtime environment: development, staging, production
    pub environment: String,
    /// JWT signing secret for session tokens
    pub jwt_secret: String,
    /// Platform display name, also the default product author
    pub platform_name: String,
    /// Seeded administrator credentials
    pub admin_email: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, BoxError> {
        let environment =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let jwt_secret = Self::require_secret("JWT_SECRET", &environment)?;
        let admin_password = Self::require_secret("ADMIN_PASSWORD", &environment)?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:bazaar.db?mode=rwc".to_string()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret,
            platform_name: std::env::var("PLATFORM_NAME")
                .unwrap_or_else(|_| "Bazaar".to_string()),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@bazaar.local".to_string()),
            admin_password,
            environment,
        })
    }

    /// Secrets must be set explicitly outside development; the development
    /// fallback is deliberately unusable in production.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        match std::env::var(name) {
            Ok(value) if !value.is_empty() => Ok(value),
            _ if environment == "development" => {
                tracing::warn!("{name} not set, using development default");
                Ok(format!("dev-{}-not-for-production", name.to_lowercase()))
            }
            _ => Err(format!("{name} must be set in {environment}").into()),
        }
    }
}
