use contracts::shared::policy_engine::{PolicyEngineConfig, SiteOverrides};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub engine: PolicyEngineConfig,
    #[serde(default)]
    pub sites: Vec<SiteConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: "site_policies.csv".to_string(),
        }
    }
}

/// Per-site provisioning settings
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub id: String,
    #[serde(flatten)]
    pub overrides: SiteOverrides,
}

impl Config {
    pub fn site_overrides(&self) -> HashMap<String, SiteOverrides> {
        self.sites
            .iter()
            .map(|site| (site.id.clone(), site.overrides.clone()))
            .collect()
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[catalog]
path = "site_policies.csv"

[engine]
unknown_segment = "permissive"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
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

/// Get the catalog CSV path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_catalog_path(config: &Config) -> anyhow::Result<PathBuf> {
    let catalog_path_str = &config.catalog.path;
    let catalog_path = Path::new(catalog_path_str);

    if catalog_path.is_absolute() {
        return Ok(catalog_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(catalog_path));
        }
    }

    // Fallback: use relative to current directory
    Ok(PathBuf::from(catalog_path_str))
}
