//! Domain types for the transit navigator.
//!
//! Lines come in from the network provider, paths go out to whoever
//! renders them. Everything here is plain data with no I/O.

mod line;
mod path;
mod priority;

pub use line::Line;
pub use path::{Hop, Leg, LineSet, Path};
pub use priority::{InvalidPriority, Priority};
