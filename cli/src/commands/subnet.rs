use colored::*;
use lanmap_common::config::Config;
use lanmap_common::network::subnet::{self, SubnetResult};

use crate::terminal::{colors, print};

pub fn subnet(cidr: &str, cfg: &Config) -> anyhow::Result<()> {
    let result: SubnetResult = subnet::parse_and_compute(cidr)?;

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print::header("subnet calculator", cfg.quiet);
    print_result(&result, cfg);
    Ok(())
}

fn print_result(result: &SubnetResult, cfg: &Config) {
    let usable: String = result.usable_hosts.to_string();
    let total: String = result.total_hosts.to_string();

    if cfg.quiet > 1 {
        print::print_status(format!(
            "{} {} usable of {}",
            result.cidr.color(colors::IPV4_ADDR),
            usable.bold().green(),
            total
        ));
        return;
    }

    let lines: [(&str, ColoredString); 9] = [
        ("CIDR", result.cidr.color(colors::IPV4_ADDR)),
        ("Network", result.network_address.color(colors::IPV4_ADDR)),
        ("Broadcast", result.broadcast_address.color(colors::IPV4_ADDR)),
        ("First usable", result.first_usable.color(colors::IPV4_ADDR)),
        ("Last usable", result.last_usable.color(colors::IPV4_ADDR)),
        ("Netmask", result.subnet_mask.color(colors::IPV4_PREFIX)),
        ("Wildcard", result.wildcard_mask.color(colors::IPV4_PREFIX)),
        ("Total hosts", total.color(colors::ACCENT)),
        ("Usable hosts", usable.bold().green()),
    ];

    print::set_key_width(lines.iter().map(|(key, _)| *key));
    for (key, value) in lines {
        print::aligned_line(key, value);
    }
}
