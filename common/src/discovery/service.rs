use std::collections::HashMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// A service advertisement (mDNS / DNS-SD family).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryServiceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Instance name as reported by older browsers, read after `service_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Dotted label such as `_ipp._tcp`.
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub ip_addresses: Vec<String>,
    /// Out-of-range or non-numeric ports load as `None`.
    #[serde(
        default,
        deserialize_with = "lenient_port",
        skip_serializing_if = "Option::is_none"
    )]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_interface: Option<String>,
    #[serde(default, alias = "txt")]
    pub txt_records: HashMap<String, String>,
}

impl DiscoveryServiceRecord {
    pub fn new(service_type: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
            ..Self::default()
        }
    }

    /// Port as a usable value; `0` means "not advertised".
    pub fn port(&self) -> Option<u16> {
        self.port.filter(|port| *port != 0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPort {
    Number(i64),
    Other(IgnoredAny),
}

fn lenient_port<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let port = match Option::<RawPort>::deserialize(deserializer)? {
        None => None,
        Some(RawPort::Number(value)) => match u16::try_from(value) {
            Ok(port) => Some(port),
            Err(_) => {
                debug!("Dropping out-of-range service port {value}");
                None
            }
        },
        Some(RawPort::Other(_)) => {
            debug!("Dropping non-integer service port");
            None
        }
    };
    Ok(port)
}
