use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables -- in particular the
/// admin credentials.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://clubsite.db`).
    pub database_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Root directory for uploaded images (default: `public/images`).
    pub upload_root: PathBuf,
    /// Idle lifetime of an admin session in seconds (default: 30 minutes).
    pub session_idle_secs: u64,
    /// The single admin identity.
    pub admin: AdminConfig,
}

/// The configured admin credential pair.
///
/// Injected configuration rather than a compiled-in constant, so deployments
/// can rotate the credentials without a rebuild.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

impl AdminConfig {
    /// Compare submitted credentials against the configured pair.
    ///
    /// Submitted values are trimmed of surrounding whitespace first; the
    /// comparison itself is case-sensitive.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        username.trim() == self.username && password.trim() == self.password
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default               |
    /// |------------------------|-----------------------|
    /// | `HOST`                 | `0.0.0.0`             |
    /// | `PORT`                 | `3000`                |
    /// | `DATABASE_URL`         | `sqlite://clubsite.db`|
    /// | `REQUEST_TIMEOUT_SECS` | `30`                  |
    /// | `UPLOAD_ROOT`          | `public/images`       |
    /// | `SESSION_IDLE_MINS`    | `30`                  |
    /// | `ADMIN_USERNAME`       | `admin`               |
    /// | `ADMIN_PASSWORD`       | `clubadmin`           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://clubsite.db".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_root =
            PathBuf::from(std::env::var("UPLOAD_ROOT").unwrap_or_else(|_| "public/images".into()));

        let session_idle_mins: u64 = std::env::var("SESSION_IDLE_MINS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SESSION_IDLE_MINS must be a valid u64");

        let admin = AdminConfig {
            username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "clubadmin".into()),
        };

        Self {
            host,
            port,
            database_url,
            request_timeout_secs,
            upload_root,
            session_idle_secs: session_idle_mins * 60,
            admin,
        }
    }
}
