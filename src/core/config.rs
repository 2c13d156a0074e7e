//! Rule constants for ten-pin bowling.
//!
//! The scorer has no runtime configuration. Every game uses the same
//! frame count and pin count, so the rules live here as constants and the
//! rest of the crate sizes its storage from them.

/// Number of frames in a game.
pub const FRAME_COUNT: usize = 10;

/// 0-based index of the tenth frame, the only frame with a bonus roll.
pub const LAST_FRAME: usize = FRAME_COUNT - 1;

/// Pins racked at the start of every frame (and after every tenth-frame reset).
pub const PIN_COUNT: u8 = 10;

/// Most rolls a single game can take: nine open frames plus three in the tenth.
pub const MAX_ROLLS: usize = 2 * LAST_FRAME + 3;

/// Score of a perfect game (twelve strikes).
pub const PERFECT_SCORE: u16 = 300;
