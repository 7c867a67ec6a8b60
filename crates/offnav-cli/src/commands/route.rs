//! Route command handler for computing directions between landmarks.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;

use offnav_cli::output::{write_summary, OutputFormat};
use offnav_cli::terminal::ColorPalette;
use offnav_lib::{Navigator, RouteRequest, RouteSummary};

/// Exit status used when the query completed but produced no route.
const NO_ROUTE_EXIT_CODE: u8 = 2;

/// Handle the `route` and `query` subcommands.
pub fn handle_route_command(
    navigator: &Navigator,
    request: &RouteRequest,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<ExitCode> {
    let result = navigator.plan(request);
    debug!(
        start = %request.start,
        goal = %request.goal,
        found = result.is_found(),
        "route query finished"
    );

    let summary = RouteSummary::from_result(&result).context("failed to summarise route")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, &summary, format, palette).context("failed to write route")?;

    if summary.is_found() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(NO_ROUTE_EXIT_CODE))
    }
}
