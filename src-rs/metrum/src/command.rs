use clap::{ArgAction, Parser, Subcommand};
use metrum::Config;

/// Metrum unit tooling
#[derive(Parser)]
#[command(name = "metrum")]
#[command(version, about = "Unit conversion and dimensional analysis", long_about = None)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colors in the output
    #[arg(long, global = true)]
    pub no_colors: bool,

    /// Accept `u` as the micro prefix, as in `us` and `um`
    #[arg(long, global = true)]
    pub ascii_micro: bool,

    /// Multiply unit terms separated only by whitespace, as in `N m`
    #[arg(long, global = true)]
    pub space_multiplies: bool,

    /// Print more log output (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl CliCommand {
    /// The runtime configuration selected by the flags.
    pub const fn runtime_config(&self) -> Config {
        Config {
            space_multiplies: self.space_multiplies,
            ascii_micro: self.ascii_micro,
        }
    }

    /// The log level selected by `-v`.
    pub const fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a quantity into another unit
    Convert {
        /// The quantity to convert, e.g. `60 mi/hr`
        #[arg(value_name = "QUANTITY", allow_hyphen_values = true)]
        quantity: String,

        /// The unit to convert into, e.g. `m/s`
        #[arg(value_name = "UNIT")]
        unit: String,
    },
    /// Show the canonical entries and signature of a unit
    Show {
        /// The unit expression, e.g. `kg*m/s^2`
        #[arg(value_name = "UNIT")]
        unit: String,
    },
    /// List the registered unit suffixes
    List {
        /// Include suffixes generated by decimal prefixes
        #[arg(long)]
        prefixed: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        CliCommand::command().debug_assert();
    }

    #[test]
    fn convert_accepts_negative_quantities() {
        let cli = CliCommand::try_parse_from(["metrum", "convert", "-40 degF", "degC"])
            .expect("negative quantities parse");

        let Commands::Convert { quantity, unit } = cli.command else {
            panic!("expected the convert command");
        };
        assert_eq!(quantity, "-40 degF");
        assert_eq!(unit, "degC");
    }

    #[test]
    fn global_flags_build_the_config() {
        let cli = CliCommand::try_parse_from(["metrum", "show", "us", "--ascii-micro", "-vv"])
            .expect("flags parse");

        assert_eq!(
            cli.runtime_config(),
            Config {
                space_multiplies: false,
                ascii_micro: true,
            }
        );
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }
}
