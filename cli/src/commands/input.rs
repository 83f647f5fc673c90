use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use lanmap_common::snapshot::NetworkSnapshot;
use tracing::{debug, warn};

/// Reads a snapshot from `path`, `-` meaning stdin.
///
/// Collaborator failures recorded in the snapshot are surfaced as warnings,
/// and so is a snapshot with nothing in it.
pub fn load_snapshot(path: &Path) -> anyhow::Result<NetworkSnapshot> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read snapshot from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?
    };

    let snapshot = parse_snapshot(&raw)
        .with_context(|| format!("{} is not a valid snapshot", path.display()))?;

    for (source, message) in snapshot.collaborator_errors() {
        warn!("{source} reported a failure: {message}");
    }
    if snapshot.is_empty() {
        warn!("{} holds no hosts and no discovery records", path.display());
    }
    debug!(
        hosts = snapshot.scan.hosts.len(),
        services = snapshot.mdns.services.len(),
        devices = snapshot.ssdp.devices.len(),
        "snapshot loaded"
    );

    Ok(snapshot)
}

pub fn parse_snapshot(raw: &str) -> anyhow::Result<NetworkSnapshot> {
    Ok(serde_json::from_str(raw)?)
}
