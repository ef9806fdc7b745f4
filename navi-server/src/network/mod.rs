//! Network data provider.
//!
//! Lines for a world come either from the fantasy-transit HTTP provider
//! or from JSON files on disk. Both produce the same [`Line`] values.

mod client;
mod error;
mod fixture;
mod types;

pub use client::{DEFAULT_BASE_URL, NetworkClient, NetworkClientConfig};
pub use error::{NetworkError, validate_world};
pub use fixture::FixtureNetwork;
pub use types::{LineDto, parse_lines};

use crate::domain::Line;

/// Where a world's lines are loaded from.
#[derive(Debug, Clone)]
pub enum NetworkSource {
    /// The remote provider
    Remote(NetworkClient),
    /// A directory of `{world}.json` files
    Fixture(FixtureNetwork),
}

impl NetworkSource {
    /// Load the lines of `world`.
    pub async fn fetch(&self, world: &str) -> Result<Vec<Line>, NetworkError> {
        match self {
            NetworkSource::Remote(client) => client.fetch(world).await,
            NetworkSource::Fixture(fixture) => fixture.fetch(world).await,
        }
    }

    /// Short description for startup logs.
    pub fn describe(&self) -> String {
        match self {
            NetworkSource::Remote(client) => format!("remote provider at {}", client.net_url()),
            NetworkSource::Fixture(fixture) => {
                format!("fixture files in {}", fixture.dir().display())
            }
        }
    }
}
