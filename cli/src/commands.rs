pub mod devices;
pub mod input;
pub mod subnet;
pub mod topology;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lanmap")]
#[command(about = "Reconciles LAN scan and discovery results into a topology.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print JSON instead of trees
    #[arg(long, global = true)]
    pub json: bool,

    /// Less output, repeat for even less
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Mask the device half of MAC addresses
    #[arg(long, global = true)]
    pub redact: bool,

    /// Skip the OUI vendor lookup
    #[arg(long, global = true)]
    pub no_vendors: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Break down an IPv4 CIDR block
    #[command(alias = "c")]
    Subnet { cidr: String },
    /// Merge mDNS and SSDP records of a snapshot into devices
    #[command(alias = "d")]
    Devices {
        /// Snapshot JSON file, `-` reads stdin
        snapshot: PathBuf,
    },
    /// Build the subnet/host/service tree of a snapshot
    #[command(alias = "t")]
    Topology {
        /// Snapshot JSON file, `-` reads stdin
        snapshot: PathBuf,
        /// Leave discovery records out of the graph
        #[arg(long)]
        no_discovery: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
