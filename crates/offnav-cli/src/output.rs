//! Output formatting for route rendering.
//!
//! The library produces a rendering-agnostic [`RouteSummary`] and its plain
//! text layout; this module adds terminal colors on top of that layout, or
//! emits markdown or JSON instead.

use std::io::{self, Write};

use clap::ValueEnum;
use offnav_lib::{format_km, NoRouteNotice, RouteDirections, RouteRenderMode, RouteSummary};

use crate::terminal::ColorPalette;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly step list.
    #[default]
    Text,
    /// Markdown suitable for chat or notes.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

/// Write a route summary in the requested format.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    format: OutputFormat,
    palette: ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Text if palette == ColorPalette::plain() => {
            out.write_all(summary.render(RouteRenderMode::PlainText).as_bytes())
        }
        OutputFormat::Text => match summary {
            RouteSummary::Found(directions) => write_directions(out, directions, palette),
            RouteSummary::NotFound(notice) => write_notice(out, notice, palette),
        },
        OutputFormat::Rich => out.write_all(summary.render(RouteRenderMode::RichText).as_bytes()),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, summary).map_err(io::Error::from)?;
            writeln!(out)
        }
    }
}

/// Write one landmark name per line.
pub fn write_locations<W: Write>(out: &mut W, locations: &[String]) -> io::Result<()> {
    for name in locations {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

/// Colored variant of the library's plain text layout for found routes.
fn write_directions<W: Write>(
    out: &mut W,
    directions: &RouteDirections,
    p: ColorPalette,
) -> io::Result<()> {
    writeln!(
        out,
        "Route: {}{}{} -> {}{}{} ({} steps)",
        p.white_bold,
        directions.header.start,
        p.reset,
        p.white_bold,
        directions.header.goal,
        p.reset,
        directions.steps.len()
    )?;
    writeln!(
        out,
        "Total distance: {}{}{}",
        p.green,
        format_km(directions.header.total_distance_km),
        p.reset
    )?;
    for step in &directions.steps {
        writeln!(
            out,
            "{}{:>3}.{} Go to {}{}{} ({}{}{})",
            p.gray,
            step.index,
            p.reset,
            p.white_bold,
            step.destination,
            p.reset,
            p.green,
            format_km(step.distance_km),
            p.reset
        )?;
    }
    writeln!(
        out,
        "{}Arrived at {}{}",
        p.green, directions.arrival.destination, p.reset
    )
}

fn write_notice<W: Write>(out: &mut W, notice: &NoRouteNotice, p: ColorPalette) -> io::Result<()> {
    writeln!(out, "{}{}{}", p.red, notice.message, p.reset)?;
    if !notice.suggestions.is_empty() {
        writeln!(
            out,
            "Did you mean: {}{}{}?",
            p.yellow,
            notice.suggestions.join(", "),
            p.reset
        )?;
    }
    if !notice.hints.is_empty() {
        writeln!(out, "{}Try: {}...{}", p.gray, notice.hints.join(", "), p.reset)?;
    }
    Ok(())
}
