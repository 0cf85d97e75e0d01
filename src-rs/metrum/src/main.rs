//! Command-line interface for Metrum

use std::process::ExitCode;

use clap::Parser;
use metrum::Runtime;

use crate::{
    command::{CliCommand, Commands},
    print_error::CliError,
};

mod command;
mod print_error;
mod print_unit;
mod stylesheet;

fn main() -> ExitCode {
    let cli = CliCommand::parse();

    let write_style = if cli.no_colors {
        anstream::ColorChoice::Never.write_global();
        env_logger::WriteStyle::Never
    } else {
        env_logger::WriteStyle::Auto
    };

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .write_style(write_style)
        .parse_default_env()
        .init();

    let runtime = Runtime::new(cli.runtime_config());
    log::debug!("registered {} unit suffixes", runtime.registry().len());

    let result = match cli.command {
        Commands::Convert { quantity, unit } => handle_convert(&runtime, &quantity, &unit),
        Commands::Show { unit } => handle_show(&runtime, &unit),
        Commands::List { prefixed } => {
            print_unit::print_registry(runtime.registry(), prefixed);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error::print(&error);
            ExitCode::FAILURE
        }
    }
}

fn handle_convert(
    runtime: &Runtime,
    quantity_text: &str,
    unit_text: &str,
) -> Result<(), CliError> {
    let quantity = runtime
        .parse_quantity(quantity_text)
        .map_err(|error| CliError::with_source(quantity_text, error))?;

    let target = runtime
        .parse_unit(unit_text)
        .map_err(|error| CliError::with_source(unit_text, error))?;

    let converted = quantity.convert_to(&target)?;
    log::info!("converted {quantity} to {converted}");

    print_unit::print_conversion(&converted, unit_text.trim());
    Ok(())
}

fn handle_show(runtime: &Runtime, unit_text: &str) -> Result<(), CliError> {
    let unit = runtime
        .parse_unit(unit_text)
        .map_err(|error| CliError::with_source(unit_text, error))?;

    print_unit::print_unit_details(&unit);
    Ok(())
}
