use serde::{Deserialize, Serialize};

use crate::utils::text::non_blank;

/// A device advertisement (UPnP / SSDP family).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryDeviceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<String>,
    /// Unique service name, e.g. `uuid:...::urn:schemas-upnp-org:device:...`.
    pub usn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    /// URL of the description document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_location: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl DiscoveryDeviceRecord {
    pub fn new(usn: impl Into<String>) -> Self {
        Self {
            usn: usn.into(),
            ..Self::default()
        }
    }

    /// Device type, or the notification type when only that was advertised.
    pub fn kind(&self) -> Option<&str> {
        non_blank(self.device_type.as_deref())
            .or_else(|| non_blank(self.notification_type.as_deref()))
    }

    /// The description URL: `location` first, then `description_location`.
    pub fn description_url(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
            .or_else(|| non_blank(self.description_location.as_deref()))
    }
}
