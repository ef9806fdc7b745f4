//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Path, Priority};
use crate::graph::Network;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Route planner page: query form plus the result, if any.
#[derive(Template)]
#[template(path = "navi.html")]
pub struct NaviTemplate {
    pub world: String,
    pub from: String,
    pub to: String,
    pub stations: Vec<String>,
    pub priorities: Vec<PriorityOption>,
    pub result: Option<RouteView>,
}

/// Interleave demo page.
#[derive(Template)]
#[template(path = "pata.html")]
pub struct PataTemplate {
    pub a: String,
    pub b: String,
    pub result: String,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A choice in the priority selector.
#[derive(Debug, Clone)]
pub struct PriorityOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl PriorityOption {
    /// All priorities, with `current` selected.
    pub fn all(current: Priority) -> Vec<Self> {
        Priority::ALL
            .iter()
            .map(|p| Self {
                value: p.as_str(),
                label: p.label(),
                selected: *p == current,
            })
            .collect()
    }
}

/// One row of the route table.
#[derive(Debug, Clone)]
pub struct HopView {
    pub number: usize,
    pub station: String,
    pub line: String,
    pub color: String,
    /// Whether the rider changes onto `line` at this row.
    pub is_transfer: bool,
}

/// A planned route for display.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub priority_label: &'static str,
    pub found: bool,
    pub hops: Vec<HopView>,
    pub transfers: usize,
    pub lines: Vec<String>,
}

impl RouteView {
    /// Create from a planning result.
    pub fn new(network: &Network, priority: Priority, path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self {
                priority_label: priority.label(),
                found: false,
                hops: Vec::new(),
                transfers: 0,
                lines: Vec::new(),
            };
        };

        let hops = path
            .hops()
            .iter()
            .enumerate()
            .map(|(i, hop)| {
                let line = hop.line_name().to_string();
                let is_transfer = i >= 2 && path.hops()[i - 1].line != hop.line;
                HopView {
                    number: i,
                    station: hop.station.clone(),
                    color: network.line_color(&line).to_string(),
                    line,
                    is_transfer,
                }
            })
            .collect();

        Self {
            priority_label: priority.label(),
            found: true,
            hops,
            transfers: path.transfers(),
            lines: path.lines(),
        }
    }

    /// Whether the origin already is the destination.
    pub fn already_there(&self) -> bool {
        self.found && self.hops.is_empty()
    }

    /// Number of stops travelled.
    pub fn stops(&self) -> usize {
        self.hops.len().saturating_sub(1)
    }

    /// e.g. "4 stops, 1 transfer"
    pub fn summary(&self) -> String {
        let plural = |n: usize, word: &str| {
            if n == 1 {
                format!("{n} {word}")
            } else {
                format!("{n} {word}s")
            }
        };
        format!(
            "{}, {}",
            plural(self.stops(), "stop"),
            plural(self.transfers, "transfer")
        )
    }
}
