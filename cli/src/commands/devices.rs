use std::path::Path;

use colored::*;
use lanmap_common::config::Config;
use lanmap_core::aggregate::{self, AggregatedDevice, PrimaryProtocol};

use crate::commands::input;
use crate::mprint;
use crate::terminal::format::{self, Detail};
use crate::terminal::{colors, print};

pub fn devices(snapshot: &Path, cfg: &Config) -> anyhow::Result<()> {
    let snapshot = input::load_snapshot(snapshot)?;
    let devices: Vec<AggregatedDevice> =
        aggregate::aggregate(&snapshot.mdns.services, &snapshot.ssdp.devices);

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&devices)?);
        return Ok(());
    }

    if devices.is_empty() {
        print::header("zero devices discovered", cfg.quiet);
        print::no_results("discovery records");
        return Ok(());
    }

    print::header("discovered devices", cfg.quiet);
    print_devices(&devices, cfg);
    print_summary(&devices, cfg);
    Ok(())
}

fn print_devices(devices: &[AggregatedDevice], cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }
    for (idx, device) in devices.iter().enumerate() {
        print_device_tree(device, idx);
        if idx + 1 != devices.len() {
            mprint!();
        }
    }
}

fn print_device_tree(device: &AggregatedDevice, idx: usize) {
    print::tree_head(idx, &device.display_name);

    let mut details: Vec<Detail> = vec![format::ip_to_detail(&device.ip_address)];
    details.extend(format::list_to_detail("Hosts", &device.hostnames));
    details.push((
        "Seen by".to_string(),
        protocol_label(device.primary_protocol).color(colors::SERVICE),
    ));
    details.extend(format::ports_to_detail(&device.ports));
    details.extend(format::list_to_detail("Iface", &device.network_interfaces));
    details.extend(format::vendor_to_detail(device.manufacturer()));
    if let Some(kind) = device.device_kind() {
        details.push(("Type".to_string(), kind.normal()));
    }

    print::as_tree_one_level(details);
}

fn protocol_label(protocol: PrimaryProtocol) -> &'static str {
    match protocol {
        PrimaryProtocol::ServiceOnly => "mDNS",
        PrimaryProtocol::DeviceOnly => "UPnP",
        PrimaryProtocol::Both => "mDNS + UPnP",
    }
}

fn print_summary(devices: &[AggregatedDevice], cfg: &Config) {
    let both = devices
        .iter()
        .filter(|device| device.primary_protocol == PrimaryProtocol::Both)
        .count();
    let count: ColoredString = format!("{} devices", devices.len()).bold().green();
    let merged: ColoredString = format!("{both} seen by both").bold().yellow();
    let output: ColoredString =
        format!("Aggregation Complete: {count}, {merged}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            mprint!();
            print::print_status(output.to_string());
        }
    }
}
