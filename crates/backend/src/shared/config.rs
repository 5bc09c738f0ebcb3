use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            static_dir: "dist".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
    #[serde(default = "default_true")]
    pub auto_provision: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt_secret: String,
    #[serde(default = "default_token_lifetime")]
    pub token_lifetime_hours: i64,
    #[serde(default)]
    pub reset_link_base: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_lifetime_hours: default_token_lifetime(),
            reset_link_base: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: "admin@xtremeplay.sa".into(),
            password: "ChangeMe123!".into(),
            full_name: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_token_lifetime() -> i64 {
    24
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[database]
path = "target/db/app.db"
auto_provision = true

[auth]
jwt_secret = ""
token_lifetime_hours = 24

[admin]
email = "admin@xtremeplay.sa"
password = "ChangeMe123!"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            return Ok(config);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolves a configured path: absolute paths as is, relative ones next to the executable
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match exe_dir() {
        Some(dir) => dir.join(path),
        None => PathBuf::from(configured),
    }
}

pub fn get_database_path(config: &Config) -> PathBuf {
    resolve_path(&config.database.path)
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/app.db");
        assert!(config.database.auto_provision);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.token_lifetime_hours, 24);
        assert_eq!(config.admin.email, "admin@xtremeplay.sa");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[database]\npath = \"/tmp/park.db\"\n").unwrap();
        assert!(config.database.auto_provision);
        assert_eq!(config.server.static_dir, "dist");
        assert!(config.auth.jwt_secret.is_empty());
        assert_eq!(get_database_path(&config), PathBuf::from("/tmp/park.db"));
    }
}
