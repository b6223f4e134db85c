//! Search module for the Filler AI
//!
//! Contains depth-limited minimax with alpha-beta pruning.

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher, DEFAULT_DEPTH, INF};
