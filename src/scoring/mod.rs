//! Score arithmetic.
//!
//! - `calculator`: cumulative frame scores, recomputed from frame 1 on
//!   every roll
//! - `potential`: the best final score still reachable

pub mod calculator;
pub mod potential;

pub use calculator::{frame_points, rescore};
pub use potential::max_possible_score;
