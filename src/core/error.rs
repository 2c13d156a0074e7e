//! Roll rejection reasons.

use thiserror::Error;

/// Why a roll was not accepted.
///
/// Rejected rolls never change game state. `Game::add_roll` discards these
/// so a UI can forward raw input without checking it first;
/// `Game::try_add_roll` hands them back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RollError {
    /// The tenth frame is closed; the game takes no more rolls.
    #[error("game is complete")]
    GameComplete,

    /// The pin count is negative or larger than a full rack.
    #[error("{pins} is not a valid pin count (expected 0-10)")]
    OutOfRange { pins: i32 },

    /// The roll knocks down more pins than are standing in the frame.
    #[error("cannot knock down {pins} pins with only {standing} standing")]
    ExceedsPinsStanding { pins: u8, standing: u8 },
}

/// Result alias for roll operations.
pub type Result<T> = std::result::Result<T, RollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(RollError::GameComplete.to_string(), "game is complete");
        assert_eq!(
            RollError::OutOfRange { pins: -1 }.to_string(),
            "-1 is not a valid pin count (expected 0-10)"
        );
        assert_eq!(
            RollError::ExceedsPinsStanding { pins: 5, standing: 4 }.to_string(),
            "cannot knock down 5 pins with only 4 standing"
        );
    }
}
