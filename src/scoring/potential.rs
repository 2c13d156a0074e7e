//! Best achievable final score.

use crate::core::Scorecard;
use crate::rules::pins_standing;

/// Final score reached if every remaining roll knocks down all standing
/// pins.
///
/// Clearing the rack is optimal at every step: a bigger roll never costs
/// pins on a later roll and can only add bonus rolls, so rolling greedily
/// on a copy of the card gives the maximum. Returns the actual final score
/// once the game is complete.
#[must_use]
pub fn max_possible_score(card: &Scorecard) -> u16 {
    let mut projected = card.clone();

    while let Some(standing) = pins_standing(projected.current_frame()) {
        if projected.try_roll(i32::from(standing)).is_err() {
            break;
        }
    }

    projected.total_score().unwrap_or_default()
}
