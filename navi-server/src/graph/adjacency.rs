//! Station adjacency built from line data.
//!
//! Two graphs come out of the same lines:
//!
//! - the *direct* graph links stations that are consecutive stops on a
//!   line, and is what paths are actually made of;
//! - the *line-level* graph links every pair of stations sharing a line,
//!   so one edge there is one ride with no change.
//!
//! Both use ordered maps. Neighbor iteration order therefore decides which
//! of several equally short paths a search finds, and it is the same on
//! every run.

use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::{Line, LineSet};

/// One outgoing edge: the neighbor and every line that makes the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    pub station: &'a str,
    pub lines: &'a LineSet,
}

/// Adjacency from each station to its neighbors.
///
/// A station is known iff it has at least one edge. Callers test
/// existence with [`Adjacency::contains`], never by looking at an empty
/// neighbor list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    edges: BTreeMap<String, BTreeMap<String, LineSet>>,
}

impl Adjacency {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the direct graph: an edge between consecutive stops of each
    /// line, in both directions.
    ///
    /// # Examples
    ///
    /// ```
    /// use navi_server::domain::Line;
    /// use navi_server::graph::Adjacency;
    ///
    /// let g = Adjacency::direct(&[Line::new("A", ["S1", "S2", "S3"])]);
    ///
    /// assert!(g.edge("S1", "S2").is_some());
    /// assert!(g.edge("S2", "S1").is_some());
    /// assert!(g.edge("S1", "S3").is_none());
    /// ```
    pub fn direct(lines: &[Line]) -> Self {
        let mut graph = Self::new();
        for line in lines.iter().filter(|l| l.has_edges()) {
            for (prev, next) in line.consecutive_pairs() {
                graph.connect(prev, next, line.name());
            }
        }
        trace!(
            stations = graph.len(),
            edges = graph.edge_count(),
            "built direct adjacency"
        );
        graph
    }

    /// Build the line-level graph: an edge from every stop of a line to
    /// every stop of the same line, itself included.
    ///
    /// Quadratic in the length of each line.
    ///
    /// # Examples
    ///
    /// ```
    /// use navi_server::domain::Line;
    /// use navi_server::graph::Adjacency;
    ///
    /// let g = Adjacency::line_level(&[Line::new("A", ["S1", "S2", "S3"])]);
    ///
    /// assert!(g.edge("S1", "S3").is_some());
    /// assert!(g.edge("S2", "S2").is_some());
    /// ```
    pub fn line_level(lines: &[Line]) -> Self {
        let mut graph = Self::new();
        for line in lines.iter().filter(|l| l.has_edges()) {
            let stops = line.stations();
            for from in stops {
                for to in stops {
                    graph.insert(from, to, line.name());
                }
            }
        }
        trace!(
            stations = graph.len(),
            edges = graph.edge_count(),
            "built line-level adjacency"
        );
        graph
    }

    /// Add a one-way edge `from -> to` carried by `line`.
    pub fn insert(&mut self, from: &str, to: &str, line: &str) {
        self.edges
            .entry(from.to_string())
            .or_default()
            .entry(to.to_string())
            .or_default()
            .insert(line.to_string());
    }

    /// Add an edge in both directions.
    pub fn connect(&mut self, a: &str, b: &str, line: &str) {
        self.insert(a, b, line);
        self.insert(b, a, line);
    }

    /// Whether `station` is a known station.
    pub fn contains(&self, station: &str) -> bool {
        self.edges.contains_key(station)
    }

    /// Lines carrying the edge `from -> to`, if any.
    pub fn edge(&self, from: &str, to: &str) -> Option<&LineSet> {
        self.edges.get(from)?.get(to)
    }

    /// Outgoing edges of `station`, ordered by neighbor name.
    ///
    /// Unknown stations have no edges.
    pub fn neighbors<'a>(&'a self, station: &str) -> impl Iterator<Item = Edge<'a>> + use<'a> {
        self.edges
            .get(station)
            .into_iter()
            .flat_map(|neighbors| {
                neighbors.iter().map(|(station, lines)| Edge {
                    station: station.as_str(),
                    lines,
                })
            })
    }

    /// All known stations, sorted.
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// All edges as `(from, to, lines)`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &LineSet)> {
        self.edges.iter().flat_map(|(from, neighbors)| {
            neighbors
                .iter()
                .map(move |(to, lines)| (from.as_str(), to.as_str(), lines))
        })
    }

    /// Number of known stations.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum()
    }
}
