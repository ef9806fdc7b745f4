//! Route planning over a network.
//!
//! Picks a search strategy from the requested [`Priority`]:
//!
//! - fewest stations is a single search over the direct graph;
//! - fewest transfers first searches the line-level graph, where one edge
//!   is one ride, to find the fewest change points ("landmarks"). It then
//!   fills in the stops of each ride with a search over the direct graph
//!   restricted to that ride's line.

use tracing::debug;

use crate::domain::{Hop, Path, Priority};
use crate::graph::{Adjacency, Network};

use super::bfs::search;

/// A routing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    /// Origin station.
    pub from: String,

    /// Destination station.
    pub to: String,

    /// What to minimise.
    pub priority: Priority,
}

impl RouteRequest {
    /// Create a new route request.
    pub fn new(from: impl Into<String>, to: impl Into<String>, priority: Priority) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            priority,
        }
    }
}

/// Route planner borrowing a network's graphs.
///
/// Holds no state of its own; any number of planners may share one
/// network across threads.
pub struct Planner<'a> {
    adjacency: &'a Adjacency,
    line_adjacency: &'a Adjacency,
}

impl<'a> Planner<'a> {
    /// Create a planner over a built network.
    pub fn new(network: &'a Network) -> Self {
        Self::from_graphs(network.adjacency(), network.line_adjacency())
    }

    /// Create a planner over explicit direct and line-level graphs.
    pub fn from_graphs(adjacency: &'a Adjacency, line_adjacency: &'a Adjacency) -> Self {
        Self {
            adjacency,
            line_adjacency,
        }
    }

    /// Plan a route.
    ///
    /// Returns `None` when there is no route. With
    /// [`Priority::FewerStations`] an origin equal to the destination gives
    /// an empty path; with [`Priority::FewerTransfers`] it gives `None`,
    /// since there is no ride to plan.
    pub fn route(&self, request: &RouteRequest) -> Option<Path> {
        let path = match request.priority {
            Priority::FewerStations => self.fewer_stations(&request.from, &request.to),
            Priority::FewerTransfers => self.fewer_transfers(&request.from, &request.to),
        };

        debug!(
            from = %request.from,
            to = %request.to,
            priority = %request.priority,
            hops = path.as_ref().map(Path::len),
            transfers = path.as_ref().map(Path::transfers),
            "route planned"
        );

        path
    }

    fn fewer_stations(&self, from: &str, to: &str) -> Option<Path> {
        search(self.adjacency, from, to, None)
    }

    fn fewer_transfers(&self, from: &str, to: &str) -> Option<Path> {
        let landmarks = search(self.line_adjacency, from, to, None)?;
        if landmarks.len() < 2 {
            return None;
        }

        let mut hops: Vec<Hop> = Vec::new();
        for pair in landmarks.hops().windows(2) {
            let ride = self.ride(&pair[0].station, &pair[1])?;
            // Each ride starts where the previous one ended
            let skip = if hops.is_empty() { 0 } else { 1 };
            hops.extend(ride.into_hops().into_iter().skip(skip));
        }

        // Show the origin on the line actually departed on
        if hops.len() >= 2 {
            hops[0].line = hops[1].line.clone();
        }

        Some(Path::from_hops(hops))
    }

    /// Stops between two landmarks, riding a single line.
    ///
    /// The landmark's recorded line is tried first. When the line-level
    /// edge is carried by several lines, the one with the fewest stops
    /// wins, so a ride is never longer than it needs to be.
    fn ride(&self, from: &str, landmark: &Hop) -> Option<Path> {
        let recorded = landmark.line.as_deref();
        let candidates = self
            .line_adjacency
            .edge(from, &landmark.station)
            .into_iter()
            .flatten()
            .map(String::as_str)
            .filter(|line| Some(*line) != recorded);

        let mut best = search(self.adjacency, from, &landmark.station, recorded);
        for line in candidates {
            let Some(path) = search(self.adjacency, from, &landmark.station, Some(line)) else {
                continue;
            };
            if best.as_ref().is_none_or(|b| path.len() < b.len()) {
                best = Some(path);
            }
        }
        best
    }
}

/// Plan a route over `network`.
///
/// Convenience wrapper around [`Planner::route`].
///
/// # Examples
///
/// ```
/// use navi_server::domain::{Line, Priority};
/// use navi_server::graph::Network;
/// use navi_server::planner::route;
///
/// let network = Network::build(
///     "demo",
///     vec![
///         Line::new("A", ["S1", "S2", "S3"]),
///         Line::new("B", ["S3", "S4", "S5"]),
///     ],
/// );
///
/// let path = route(&network, "S1", "S5", Priority::FewerStations).unwrap();
/// assert_eq!(path.len(), 5);
/// assert_eq!(path.transfers(), 1);
/// ```
pub fn route(network: &Network, from: &str, to: &str, priority: Priority) -> Option<Path> {
    Planner::new(network).route(&RouteRequest::new(from, to, priority))
}
