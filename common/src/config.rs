use serde::{Deserialize, Serialize};

/// Terminal behavior of the binary.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// `0` prints everything, `1` drops headers and banners, `2` only summaries.
    pub quiet: u8,
    /// Emit machine readable JSON instead of trees.
    pub json: bool,
    /// Mask the device half of MAC addresses in terminal output.
    pub redact: bool,
    /// Skip the OUI vendor lookup.
    pub no_vendors: bool,
}

/// Hints the dashboard handed to the scanning collaborator.
///
/// Carried along with a snapshot for display; the core never interprets the
/// timing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
    #[serde(default = "include_discovery_default")]
    pub include_discovery: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_duration_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

fn include_discovery_default() -> bool {
    true
}

impl Default for ScanRequest {
    fn default() -> Self {
        Self {
            cidr: None,
            include_discovery: include_discovery_default(),
            discovery_duration_ms: None,
            concurrency: None,
            timeout_ms: None,
        }
    }
}
