//! Core scoring types: frames, the scorecard, roll errors, rule constants.
//!
//! Everything here is plain state. Legality lives in `rules`, score
//! arithmetic in `scoring`; the scorecard wires them together.

pub mod config;
pub mod error;
pub mod frame;
pub mod scorecard;

pub use config::{FRAME_COUNT, LAST_FRAME, MAX_ROLLS, PERFECT_SCORE, PIN_COUNT};
pub use error::{Result, RollError};
pub use frame::Frame;
pub use scorecard::Scorecard;
