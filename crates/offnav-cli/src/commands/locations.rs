//! Lists the canonical landmark names.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};

use offnav_cli::output::write_locations;
use offnav_lib::Navigator;

/// Handle the `locations` subcommand.
pub fn handle_locations_command(navigator: &Navigator) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_locations(&mut out, &navigator.locations()).context("failed to write locations")?;
    Ok(ExitCode::SUCCESS)
}
