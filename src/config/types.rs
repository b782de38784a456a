use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Where the listing collection lives and how to reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the REST service (e.g., "http://192.168.1.20:3000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Collection name appended to the base URL (e.g., "listings").
    #[serde(default = "default_resource")]
    pub resource: String,
    /// Total request timeout in seconds. Unset leaves the transport default.
    #[serde(default)]
    pub timeout_seconds: Option<u32>,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a search query is applied (default: 300).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_resource() -> String {
    "listings".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            resource: default_resource(),
            timeout_seconds: None,
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}
