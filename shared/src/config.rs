use anyhow::Result;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let server = ServerConfig {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        };
        let auth = AuthConfig {
            token_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "class-scheduler-secret-change-in-production".into()),
            token_ttl: std::env::var("TOKEN_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60 * 60 * 24),
        };
        Ok(Self { server, auth })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub token_secret: String,
    /// Token lifetime in seconds.
    pub token_ttl: i64,
}
