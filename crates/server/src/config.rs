use shared_types::AppConfig;
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Default config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read the config file, apply environment overrides, and store the result
/// in the global `OnceLock`. Only the first call has effect.
///
/// The file path comes from `CASEBOARD_CONFIG` when set. A missing or
/// unparseable file falls back to defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let path = std::env::var("CASEBOARD_CONFIG").unwrap_or_else(|_| CONFIG_PATH.to_string());
        let mut config = read_config_file(Path::new(&path));
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        tracing::info!(
            features = ?config.features,
            bind_addr = %config.server.bind_addr,
            "Configuration loaded"
        );
        config
    })
}

/// Parse a config file, falling back to defaults on any failure.
pub fn read_config_file(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Config file not found, using defaults");
            AppConfig::default()
        }
    }
}

/// Overlay `CASES_URL`, `HEARINGS_URL` and `BIND_ADDR` onto `config`.
/// Empty values are ignored.
pub fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = get("CASES_URL") {
        config.datasets.cases_url = url;
    }
    if let Some(url) = get("HEARINGS_URL") {
        config.datasets.hearings_url = url;
    }
    if let Some(addr) = get("BIND_ADDR") {
        config.server.bind_addr = addr;
    }
}
