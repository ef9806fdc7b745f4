//! Breadth-first search over an adjacency graph.
//!
//! The same search serves both graphs: unconstrained over the line-level
//! graph to find where to change, and constrained to one line over the
//! direct graph to fill in the stops between changes.

use std::collections::{HashSet, VecDeque};

use tracing::trace;

use crate::domain::Path;
use crate::graph::Adjacency;

/// Find a path from `from` to `to` with the fewest hops.
///
/// With `line` set, only edges carried by that line are followed and the
/// origin hop starts out on it.
///
/// Returns:
/// - `Some` of an empty path when `from == to`;
/// - `Some` of a minimum-hop path otherwise, the first one found in
///   neighbor order among equally short ones;
/// - `None` when `to` cannot be reached, including when `from` is not in
///   the graph at all.
///
/// Every station is queued at most once, so the search terminates on any
/// graph, self-loops and cycles included.
///
/// # Examples
///
/// ```
/// use navi_server::domain::Line;
/// use navi_server::graph::Adjacency;
/// use navi_server::planner::search;
///
/// let g = Adjacency::direct(&[Line::new("A", ["S1", "S2", "S3"])]);
///
/// let path = search(&g, "S1", "S3", None).unwrap();
/// assert_eq!(path.stations().collect::<Vec<_>>(), ["S1", "S2", "S3"]);
///
/// assert!(search(&g, "S2", "S2", None).unwrap().is_empty());
/// assert!(search(&g, "S1", "S9", None).is_none());
/// ```
pub fn search(graph: &Adjacency, from: &str, to: &str, line: Option<&str>) -> Option<Path> {
    if from == to {
        return Some(Path::empty());
    }

    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(from);

    let mut queue: VecDeque<Path> = VecDeque::new();
    queue.push_back(Path::origin(from, line.map(str::to_string)));

    let mut explored = 0usize;
    while let Some(path) = queue.pop_front() {
        explored += 1;
        let Some(last) = path.last() else {
            continue;
        };
        if last.station == to {
            trace!(from, to, line, explored, hops = path.len(), "path found");
            return Some(path);
        }

        for edge in graph.neighbors(&last.station) {
            if let Some(line) = line
                && !edge.lines.contains(line)
            {
                continue;
            }
            if !visited.insert(edge.station) {
                continue;
            }
            queue.push_back(path.grow(edge.station, edge.lines));
        }
    }

    trace!(from, to, line, explored, "no path");
    None
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Line;
    use proptest::prelude::*;
    use std::collections::HashMap;

    /// Small random networks over stations "S0".."S7".
    fn arb_lines() -> impl Strategy<Value = Vec<Line>> {
        prop::collection::vec(prop::collection::vec(0u8..8, 0..6), 1..5).prop_map(|lines| {
            lines
                .into_iter()
                .enumerate()
                .map(|(i, stops)| {
                    Line::new(
                        format!("L{i}"),
                        stops.into_iter().map(|s| format!("S{s}")),
                    )
                })
                .collect()
        })
    }

    /// Hop distances from `from` by exhaustive relaxation, independent of
    /// the queue-based search.
    fn distances(graph: &Adjacency, from: &str) -> HashMap<String, usize> {
        let mut dist: HashMap<String, usize> = HashMap::new();
        dist.insert(from.to_string(), 0);
        loop {
            let mut changed = false;
            for (a, b, _) in graph.edges() {
                if let Some(&d) = dist.get(a) {
                    let better = dist.get(b).is_none_or(|&cur| d + 1 < cur);
                    if better {
                        dist.insert(b.to_string(), d + 1);
                        changed = true;
                    }
                }
            }
            if !changed {
                return dist;
            }
        }
    }

    proptest! {
        /// Found paths have exactly the shortest hop count; unreachable
        /// pairs find nothing.
        #[test]
        fn matches_exhaustive_distance(lines in arb_lines(), from in 0u8..8, to in 0u8..8) {
            let graph = Adjacency::direct(&lines);
            let (from, to) = (format!("S{from}"), format!("S{to}"));
            let result = search(&graph, &from, &to, None);

            if from == to {
                prop_assert_eq!(result, Some(Path::empty()));
            } else {
                match distances(&graph, &from).get(&to) {
                    Some(&d) => {
                        let path = result.expect("reachable pair must have a path");
                        prop_assert_eq!(path.len(), d + 1);
                    }
                    None => prop_assert!(result.is_none()),
                }
            }
        }

        /// Every step is an edge carrying the recorded line.
        #[test]
        fn steps_follow_edges(lines in arb_lines(), from in 0u8..8, to in 0u8..8, constrain in any::<bool>()) {
            let graph = Adjacency::direct(&lines);
            let (from, to) = (format!("S{from}"), format!("S{to}"));
            let line = constrain.then_some("L0");

            if let Some(path) = search(&graph, &from, &to, line) {
                for pair in path.hops().windows(2) {
                    let carried = graph.edge(&pair[0].station, &pair[1].station);
                    let hop_line = pair[1].line.as_deref();
                    prop_assert!(carried.is_some_and(|l| hop_line.is_some_and(|h| l.contains(h))));
                    if let Some(line) = line {
                        prop_assert_eq!(hop_line, Some(line));
                    }
                }
                if let Some(first) = path.first() {
                    prop_assert_eq!(first.station.as_str(), from.as_str());
                }
                if let Some(last) = path.last() {
                    prop_assert_eq!(last.station.as_str(), to.as_str());
                }
            }
        }
    }
}
