//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Hop, Leg, Path, Priority};
use crate::graph::Network;

/// Query for the route page and the route API.
///
/// Every field is optional so the page can render an empty form.
#[derive(Debug, Default, Deserialize)]
pub struct RouteQuery {
    /// World identifier
    pub world: Option<String>,

    /// Origin station
    pub from: Option<String>,

    /// Destination station
    pub to: Option<String>,

    /// "stations" or "transfers" (defaults to stations)
    pub priority: Option<String>,
}

/// Query naming a world only.
#[derive(Debug, Deserialize)]
pub struct WorldQuery {
    /// World identifier
    pub world: String,
}

/// Query for the GraphViz export.
#[derive(Debug, Deserialize)]
pub struct GraphQuery {
    /// World identifier
    pub world: String,

    /// "lines" for the line-level graph, anything else for stations
    pub adj: Option<String>,
}

/// Query for the interleave demo.
#[derive(Debug, Default, Deserialize)]
pub struct PataQuery {
    #[serde(default)]
    pub a: String,
    #[serde(default)]
    pub b: String,
}

/// A line in the stations listing.
#[derive(Debug, Serialize)]
pub struct LineResult {
    /// Line name
    pub name: String,

    /// Display color
    pub color: String,

    /// Stops in order
    pub stations: Vec<String>,
}

/// Response listing a world's stations and lines.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// World identifier
    pub world: String,

    /// Known stations, sorted
    pub stations: Vec<String>,

    /// Lines in provider order
    pub lines: Vec<LineResult>,
}

impl StationsResponse {
    /// Describe a network.
    pub fn from_network(network: &Network) -> Self {
        Self {
            world: network.world().to_string(),
            stations: network.stations().map(str::to_string).collect(),
            lines: network
                .lines()
                .iter()
                .map(|line| LineResult {
                    name: line.name().to_string(),
                    color: network.line_color(line.name()).to_string(),
                    stations: line.stations().to_vec(),
                })
                .collect(),
        }
    }
}

/// One hop of a route.
#[derive(Debug, Serialize)]
pub struct HopResult {
    /// Station name
    pub station: String,

    /// Line used to arrive (the departure line for the origin)
    pub line: Option<String>,

    /// Display color of `line`
    pub color: Option<String>,
}

impl HopResult {
    fn from_hop(hop: &Hop, network: &Network) -> Self {
        Self {
            station: hop.station.clone(),
            line: hop.line.clone(),
            color: hop
                .line
                .as_deref()
                .map(|l| network.line_color(l).to_string()),
        }
    }
}

/// One single-line ride of a route.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub line: String,
    pub from: String,
    pub to: String,
    pub stops: usize,
}

impl From<Leg> for LegResult {
    fn from(leg: Leg) -> Self {
        Self {
            line: leg.line,
            from: leg.from,
            to: leg.to,
            stops: leg.stops,
        }
    }
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// World identifier
    pub world: String,

    /// Origin station
    pub from: String,

    /// Destination station
    pub to: String,

    /// Priority used
    pub priority: Priority,

    /// Whether a route exists. An empty `hops` with `found` set means the
    /// origin is the destination.
    pub found: bool,

    /// Hops, origin first
    pub hops: Vec<HopResult>,

    /// Rides grouped by line
    pub legs: Vec<LegResult>,

    /// Number of line changes
    pub transfers: usize,
}

impl RouteResponse {
    /// Build a response for a planned route.
    pub fn new(
        network: &Network,
        from: &str,
        to: &str,
        priority: Priority,
        path: Option<&Path>,
    ) -> Self {
        Self {
            world: network.world().to_string(),
            from: from.to_string(),
            to: to.to_string(),
            priority,
            found: path.is_some(),
            hops: path
                .map(|p| {
                    p.hops()
                        .iter()
                        .map(|h| HopResult::from_hop(h, network))
                        .collect()
                })
                .unwrap_or_default(),
            legs: path
                .map(|p| p.legs().into_iter().map(LegResult::from).collect())
                .unwrap_or_default(),
            transfers: path.map(Path::transfers).unwrap_or(0),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
