//! Evaluation module for Filler positions
//!
//! The evaluation is the territory differential, with decided games pinned
//! to the extremes of the score range.

pub mod heuristic;

pub use heuristic::{evaluate, Score, WIN_SCORE};
