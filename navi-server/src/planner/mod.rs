//! Route planner using BFS search.
//!
//! This module answers "how do I get from station A to station B", either
//! through the fewest stations or with the fewest changes of line.
//!
//! Everything here is synchronous and allocation-only: graphs go in, a
//! [`Path`](crate::domain::Path) comes out.

mod bfs;
mod route;


pub use bfs::search;
pub use route::{Planner, RouteRequest, route};
