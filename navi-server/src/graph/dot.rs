//! GraphViz export of a network's graphs.
//!
//! A debugging aid: `dot -Kneato` on the output gives a quick picture of
//! how the lines fit together. Not used by the planner.

use std::collections::HashSet;
use std::fmt::Write;

use super::{Adjacency, Network};

/// Which of the two graphs to export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphKind {
    /// Stop-to-stop graph, drawn with thick edges.
    #[default]
    Stations,
    /// Line-level graph, drawn with thin edges.
    Lines,
}

impl GraphKind {
    /// Parse the `adj` query value. Anything but `"lines"` means stations.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("lines") => GraphKind::Lines,
            _ => GraphKind::Stations,
        }
    }

    fn pen_width(self) -> u32 {
        match self {
            GraphKind::Stations => 5,
            GraphKind::Lines => 1,
        }
    }

    fn graph(self, network: &Network) -> &Adjacency {
        match self {
            GraphKind::Stations => network.adjacency(),
            GraphKind::Lines => network.line_adjacency(),
        }
    }
}

/// Render one of `network`'s graphs as an undirected GraphViz graph.
///
/// Each unordered station pair is emitted once, with one edge per line
/// colored by that line. Self-edges are skipped.
pub fn render(network: &Network, kind: GraphKind) -> String {
    let pen_width = kind.pen_width();
    let mut out = String::new();
    out.push_str("graph g {\n");
    out.push_str("  graph [overlap=scale]\n");

    let mut done: HashSet<(&str, &str)> = HashSet::new();
    for (x, y, lines) in kind.graph(network).edges() {
        if x == y {
            continue;
        }
        let key = if x < y { (x, y) } else { (y, x) };
        if !done.insert(key) {
            continue;
        }
        for line in lines {
            // Writing to a String cannot fail
            let _ = writeln!(
                out,
                "  \"{}\" -- \"{}\" [color=\"{}\" penwidth={}]",
                escape(x),
                escape(y),
                escape(network.line_color(line)),
                pen_width
            );
        }
    }

    out.push_str("}\n");
    out
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
