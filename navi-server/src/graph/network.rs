//! A world's lines together with both graphs built from them.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::Line;

use super::Adjacency;

/// Color used for lines the provider gave no color for.
pub const DEFAULT_LINE_COLOR: &str = "black";

/// Everything the planner and the exporters need about one world.
///
/// Immutable once built, so it can be shared behind an `Arc` and read from
/// any number of requests at once.
#[derive(Debug, Clone)]
pub struct Network {
    world: String,
    lines: Vec<Line>,
    by_name: HashMap<String, usize>,
    adjacency: Adjacency,
    line_adjacency: Adjacency,
}

impl Network {
    /// Build both graphs for `lines`.
    ///
    /// If two lines share a name, the later one wins for color lookup.
    pub fn build(world: impl Into<String>, lines: Vec<Line>) -> Self {
        let world = world.into();
        let adjacency = Adjacency::direct(&lines);
        let line_adjacency = Adjacency::line_level(&lines);
        let by_name = lines
            .iter()
            .enumerate()
            .map(|(idx, line)| (line.name().to_string(), idx))
            .collect();

        debug!(
            world = %world,
            lines = lines.len(),
            stations = adjacency.len(),
            "built network"
        );

        Self {
            world,
            lines,
            by_name,
            adjacency,
            line_adjacency,
        }
    }

    /// The world identifier this network was loaded for.
    pub fn world(&self) -> &str {
        &self.world
    }

    /// Lines in provider order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Look up a line by name.
    pub fn line(&self, name: &str) -> Option<&Line> {
        self.by_name.get(name).map(|&idx| &self.lines[idx])
    }

    /// Display color of a line, falling back to [`DEFAULT_LINE_COLOR`].
    pub fn line_color(&self, name: &str) -> &str {
        self.line(name)
            .and_then(Line::color)
            .unwrap_or(DEFAULT_LINE_COLOR)
    }

    /// Direct (stop-to-stop) graph.
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Line-level graph.
    pub fn line_adjacency(&self) -> &Adjacency {
        &self.line_adjacency
    }

    /// Whether `station` is served by any line with at least two stops.
    pub fn has_station(&self, station: &str) -> bool {
        self.adjacency.contains(station)
    }

    /// Known stations, sorted.
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.adjacency.stations()
    }
}
