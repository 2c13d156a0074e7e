//! The game engine: a scorecard plus change notification.
//!
//! [`Game`] is the single implementation of
//! [`ScoreKeeper`](crate::rules::ScoreKeeper).

mod engine;

pub use engine::Game;
