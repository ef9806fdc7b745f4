//! Graphs over a transit network.
//!
//! `Adjacency` is the single representation used for both the direct and
//! the line-level graph; `Network` bundles a world's lines with both.

mod adjacency;
pub mod dot;
mod network;

pub use adjacency::{Adjacency, Edge};
pub use network::{DEFAULT_LINE_COLOR, Network};
