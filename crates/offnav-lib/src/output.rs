use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::routing::{NotFoundReason, RouteFailure, RoutePlan, RouteResult};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Start, goal and overall length of a route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteHeader {
    pub start: String,
    pub goal: String,
    pub total_distance_km: f64,
}

/// One instruction of a route: travel to `destination`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    /// One-based position within the route.
    pub index: usize,
    pub destination: String,
    pub distance_km: f64,
}

/// Terminal marker closing every found route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Arrival {
    pub destination: String,
}

/// Step-by-step description of a found route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteDirections {
    pub header: RouteHeader,
    pub steps: Vec<RouteStep>,
    pub arrival: Arrival,
}

/// Guidance for a query that produced no route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NoRouteNotice {
    pub reason: NotFoundReason,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

/// Structured, rendering-agnostic description of a routing outcome.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteSummary {
    Found(RouteDirections),
    NotFound(NoRouteNotice),
}

impl RouteSummary {
    /// Convert a [`RouteResult`] into a structured summary.
    pub fn from_result(result: &RouteResult) -> Result<Self> {
        match result {
            RouteResult::Found(plan) => RouteDirections::from_plan(plan).map(RouteSummary::Found),
            RouteResult::NotFound(failure) => {
                Ok(RouteSummary::NotFound(NoRouteNotice::from_failure(failure)))
            }
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteSummary::Found(_))
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match (self, mode) {
            (RouteSummary::Found(directions), RouteRenderMode::PlainText) => {
                directions.render_plain()
            }
            (RouteSummary::Found(directions), RouteRenderMode::RichText) => {
                directions.render_rich()
            }
            (RouteSummary::NotFound(notice), RouteRenderMode::PlainText) => notice.render_plain(),
            (RouteSummary::NotFound(notice), RouteRenderMode::RichText) => notice.render_rich(),
        }
    }
}

impl RouteDirections {
    /// Build directions from a planned route.
    pub fn from_plan(plan: &RoutePlan) -> Result<Self> {
        let (Some(start), Some(goal)) = (plan.start(), plan.goal()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let steps = plan
            .segments
            .iter()
            .enumerate()
            .map(|(index, segment)| RouteStep {
                index: index + 1,
                destination: segment.to.clone(),
                distance_km: segment.distance_km,
            })
            .collect();

        Ok(Self {
            header: RouteHeader {
                start: start.to_string(),
                goal: goal.to_string(),
                total_distance_km: plan.total_distance_km,
            },
            steps,
            arrival: Arrival {
                destination: goal.to_string(),
            },
        })
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} steps)",
            self.header.start,
            self.header.goal,
            self.steps.len()
        );
        let _ = writeln!(
            buffer,
            "Total distance: {}",
            format_km(self.header.total_distance_km)
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>3}. Go to {} ({})",
                step.index,
                step.destination,
                format_km(step.distance_km)
            );
        }
        let _ = writeln!(buffer, "Arrived at {}", self.arrival.destination);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route:** _{} → {}_ (total `{}`)",
            self.header.start,
            self.header.goal,
            format_km(self.header.total_distance_km)
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. Go to **{}** (`{}`)",
                step.index,
                step.destination,
                format_km(step.distance_km)
            );
        }
        let _ = writeln!(buffer, "**Arrived at {}**", self.arrival.destination);
        buffer
    }
}

impl NoRouteNotice {
    /// Build user guidance from a routing failure.
    pub fn from_failure(failure: &RouteFailure) -> Self {
        let input = failure.input.as_deref().unwrap_or_default();
        let message = match failure.reason {
            NotFoundReason::UnresolvedStart => format!("Start location '{input}' not found."),
            NotFoundReason::UnresolvedEnd => format!("End location '{input}' not found."),
            NotFoundReason::NoPathExists => format!(
                "No road connection found between {} and {}.",
                failure.start.as_deref().unwrap_or("<unknown>"),
                failure.goal.as_deref().unwrap_or("<unknown>")
            ),
        };

        Self {
            reason: failure.reason,
            message,
            input: failure.input.clone(),
            suggestions: failure.suggestions.clone(),
            hints: failure.hints.clone(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.message);
        if !self.suggestions.is_empty() {
            let _ = writeln!(buffer, "Did you mean: {}?", self.suggestions.join(", "));
        }
        if !self.hints.is_empty() {
            let _ = writeln!(buffer, "Try: {}...", self.hints.join(", "));
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "**No route:** {}", self.message);
        if !self.suggestions.is_empty() {
            let quoted = self
                .suggestions
                .iter()
                .map(|name| format!("`{name}`"))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(buffer, "* Did you mean: {quoted}?");
        }
        if !self.hints.is_empty() {
            let _ = writeln!(buffer, "* Try: {}...", self.hints.join(", "));
        }
        buffer
    }
}

/// Format a distance with a `km` suffix, keeping up to two decimals.
///
/// Whole and one-decimal distances print with exactly one decimal place.
pub fn format_km(distance_km: f64) -> String {
    let mut text = format!("{distance_km:.2}");
    if text.ends_with('0') {
        text.pop();
    }
    format!("{text} km")
}
