mod commands;
mod terminal;

use commands::{CommandLine, Commands, devices, subnet, topology};
use lanmap_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        json: commands.json,
        redact: commands.redact,
        no_vendors: commands.no_vendors,
    };

    logging::init_logging(&cfg);
    print::banner(&cfg);

    match commands.command {
        Commands::Subnet { cidr } => subnet::subnet(&cidr, &cfg),
        Commands::Devices { snapshot } => devices::devices(&snapshot, &cfg),
        Commands::Topology {
            snapshot,
            no_discovery,
        } => topology::topology(&snapshot, no_discovery, &cfg),
    }
}
