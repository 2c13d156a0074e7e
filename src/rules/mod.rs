//! Bowling rules: what a frame may accept, and the scorer contract.
//!
//! `legality` answers "can this roll be recorded?" for a single frame.
//! `keeper` defines [`ScoreKeeper`], the one interface a presentation
//! layer needs.

pub mod keeper;
pub mod legality;

pub use keeper::ScoreKeeper;
pub use legality::{check_roll, legal_rolls, pins_standing, roll_capacity};
