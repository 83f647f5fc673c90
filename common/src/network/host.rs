use serde::{Deserialize, Serialize};

use crate::utils::text::non_blank;

/// One answer from the reachability sweep.
///
/// Produced by the scanning collaborator; the core only reads it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReachabilityResult {
    pub ip_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default)]
    pub roundtrip_time_ms: f64,
}

impl ReachabilityResult {
    pub fn new(ip_address: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            ..Self::default()
        }
    }

    /// The hostname, ignoring blank strings some resolvers hand back.
    pub fn hostname(&self) -> Option<&str> {
        non_blank(self.hostname.as_deref())
    }
}
