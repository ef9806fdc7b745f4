//! Transit route planner server.
//!
//! Loads a fantasy world's lines, builds station and line graphs from them,
//! and answers: "how do I get from here to there with the fewest stations,
//! or with the fewest changes?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod graph;
pub mod network;
pub mod pata;
pub mod planner;
pub mod web;
