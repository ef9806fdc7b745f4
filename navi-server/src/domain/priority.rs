//! Routing priority.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown priority.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid priority {value:?}: expected \"stations\" or \"transfers\"")]
pub struct InvalidPriority {
    value: String,
}

/// What the planner should minimise.
///
/// # Examples
///
/// ```
/// use navi_server::domain::Priority;
///
/// assert_eq!("transfers".parse::<Priority>().unwrap(), Priority::FewerTransfers);
/// assert_eq!("fewest-stations".parse::<Priority>().unwrap(), Priority::FewerStations);
/// assert!("fastest".parse::<Priority>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Fewest stations travelled through.
    #[default]
    #[serde(rename = "stations", alias = "fewest-stations")]
    FewerStations,

    /// Fewest changes between lines.
    #[serde(rename = "transfers", alias = "fewest-transfers")]
    FewerTransfers,
}

impl Priority {
    /// Both variants, in display order.
    pub const ALL: [Priority; 2] = [Priority::FewerStations, Priority::FewerTransfers];

    /// Short identifier used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::FewerStations => "stations",
            Priority::FewerTransfers => "transfers",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::FewerStations => "Fewest stations",
            Priority::FewerTransfers => "Fewest transfers",
        }
    }
}

impl FromStr for Priority {
    type Err = InvalidPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stations" | "fewest-stations" => Ok(Priority::FewerStations),
            "transfers" | "fewest-transfers" => Ok(Priority::FewerTransfers),
            _ => Err(InvalidPriority {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
