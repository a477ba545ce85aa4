use serde::{Deserialize, Serialize};

/// Case records published for the Karnataka High Court dashboard.
pub const DEFAULT_CASES_URL: &str =
    "https://drive.google.com/uc?id=1f38FA3WzDO2gs5sPsF34ckmAeDgbbrOJ";

/// Hearing records matching [`DEFAULT_CASES_URL`].
pub const DEFAULT_HEARINGS_URL: &str =
    "https://drive.google.com/uc?id=12PgUYlxXEVHinwjdAkb7ISOndL2oVWPg";

/// Feature flags controlling optional behaviour.
///
/// Every field defaults to `false` so that a missing or incomplete
/// config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Export traces and logs over OTLP.
    #[serde(default)]
    pub telemetry: bool,
    /// Load both datasets at startup instead of on the first request.
    #[serde(default)]
    pub preload: bool,
}

/// Where the two source tables live.
///
/// Each location is either an `http(s)://` URL or a local file path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetConfig {
    #[serde(default = "default_cases_url")]
    pub cases_url: String,
    #[serde(default = "default_hearings_url")]
    pub hearings_url: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_cases_url() -> String {
    DEFAULT_CASES_URL.to_string()
}

fn default_hearings_url() -> String {
    DEFAULT_HEARINGS_URL.to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    120
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            cases_url: default_cases_url(),
            hearings_url: default_hearings_url(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

/// Knobs for the dashboard view models.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSettings {
    /// Maximum rows shown in any row table.
    #[serde(default = "default_table_rows")]
    pub table_rows: usize,
    /// Number of bars in top-N frequency charts.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Maximum names offered by the lawyer picker.
    #[serde(default = "default_lawyer_picker_limit")]
    pub lawyer_picker_limit: usize,
    /// Cases whose adjusted disposal time exceeds this many days are
    /// listed as long pending.
    #[serde(default = "default_long_pending_days")]
    pub long_pending_days: f64,
}

fn default_table_rows() -> usize {
    20
}

fn default_top_n() -> usize {
    10
}

fn default_lawyer_picker_limit() -> usize {
    100
}

fn default_long_pending_days() -> f64 {
    1000.0
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            table_rows: default_table_rows(),
            top_n: default_top_n(),
            lawyer_picker_limit: default_lawyer_picker_limit(),
            long_pending_days: default_long_pending_days(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub datasets: DatasetConfig,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub server: ServerConfig,
}
