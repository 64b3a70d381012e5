use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Переменная окружения с токеном удалённого API
pub const UPSTREAM_TOKEN_ENV: &str = "CONDO_UPSTREAM_TOKEN";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Удалённый REST API с данными ОСББ. Без `base_url` шлюз работает
/// на встроенном хранилище в памяти.
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub base_url: Option<String>,
    pub access_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StoreConfig {
    /// JSON-файл с начальными данными: `{ "buildings": [...], ... }`
    pub fixtures: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            access_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server.host '{}': {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl UpstreamConfig {
    /// Адрес удалённого API, если он задан и не пустой
    pub fn base_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

impl Config {
    /// Переопределения из окружения. `lookup` подменяется в тестах.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(UPSTREAM_TOKEN_ENV).filter(|t| !t.trim().is_empty()) {
            self.upstream.access_token = Some(token);
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[upstream]
timeout_secs = 30

[store]
fixtures = "fixtures.json"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `CONDO_UPSTREAM_TOKEN` overrides `upstream.access_token` in both cases.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    config.apply_env(|key| std::env::var(key).ok());
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolves a configured path relative to the executable directory
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.upstream.base_url(), None);
        assert_eq!(config.store.fixtures.as_deref(), Some("fixtures.json"));
        assert_eq!(
            config.server.socket_addr().unwrap(),
            SocketAddr::from(([0, 0, 0, 0], 3000))
        );
    }

    #[test]
    fn test_sections_are_optional() {
        let config: Config = toml::from_str("[upstream]\nbase_url = \"https://api.example.org\"\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.upstream.base_url(), Some("https://api.example.org"));
        assert_eq!(config.upstream.timeout_secs, 30);
        assert!(config.store.fixtures.is_none());

        let blank: Config = toml::from_str("[upstream]\nbase_url = \"  \"\n").unwrap();
        assert_eq!(blank.upstream.base_url(), None);
    }

    #[test]
    fn test_env_overrides_token() {
        let mut config: Config =
            toml::from_str("[upstream]\naccess_token = \"from-file\"\n").unwrap();

        config.apply_env(|_| None);
        assert_eq!(config.upstream.access_token.as_deref(), Some("from-file"));

        config.apply_env(|key| (key == UPSTREAM_TOKEN_ENV).then(|| "from-env".to_string()));
        assert_eq!(config.upstream.access_token.as_deref(), Some("from-env"));

        config.apply_env(|_| Some(String::new()));
        assert_eq!(config.upstream.access_token.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_invalid_host_rejected() {
        let server = ServerConfig {
            host: "localhost:3000".into(),
            port: 3000,
        };
        assert!(server.socket_addr().is_err());
    }
}
