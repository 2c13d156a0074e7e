//! Cumulative score recomputation.
//!
//! Every accepted roll rescans the card from frame 1. A frame is scored
//! once all of its bonus rolls exist; until then it and every frame after
//! it stay unscored, because their cumulative totals would be missing the
//! pending frame's points.

use tracing::trace;

use crate::core::config::{FRAME_COUNT, PIN_COUNT};
use crate::core::Frame;

/// Recompute cumulative scores for frames `0..=through`.
///
/// Frames past `through` hold no rolls and are left alone.
pub fn rescore(frames: &mut [Frame; FRAME_COUNT], through: usize) {
    let mut running_total: u16 = 0;
    let mut chain_intact = true;

    for index in 0..=through.min(FRAME_COUNT - 1) {
        let points = if chain_intact {
            frame_points(&frames[..], index)
        } else {
            None
        };

        let score = points.map(|points| {
            running_total += points;
            running_total
        });
        chain_intact = score.is_some();

        trace!(frame = index + 1, ?points, ?score, "rescored frame");
        frames[index].set_score(score);
    }
}

/// Points frame `index` contributes on its own, bonuses included.
///
/// `None` while any roll the frame depends on is still to be thrown.
#[must_use]
pub fn frame_points(frames: &[Frame], index: usize) -> Option<u16> {
    let frame = &frames[index];

    if frame.is_last() {
        return tenth_frame_points(frame);
    }

    if frame.is_strike() {
        return strike_bonus(frames, index).map(|bonus| u16::from(PIN_COUNT) + bonus);
    }

    if frame.is_spare() {
        return frames[index + 1]
            .first_roll()
            .map(|bonus| u16::from(PIN_COUNT) + u16::from(bonus));
    }

    match (frame.first_roll(), frame.second_roll()) {
        (Some(first), Some(second)) => Some(u16::from(first) + u16::from(second)),
        _ => None,
    }
}

/// The two rolls after a strike in frames 1-9.
///
/// A strike in frames 1-8 followed by another strike borrows the first
/// roll of the frame after that. A strike in frame 9 always reads the
/// first two rolls of the tenth frame, which holds them even on a strike.
fn strike_bonus(frames: &[Frame], index: usize) -> Option<u16> {
    let next = &frames[index + 1];
    let first = next.first_roll()?;

    let second = if next.is_strike() && !next.is_last() {
        frames[index + 2].first_roll()?
    } else {
        next.second_roll()?
    };

    Some(u16::from(first) + u16::from(second))
}

/// The tenth frame scores its own pinfall, once it is closed.
fn tenth_frame_points(frame: &Frame) -> Option<u16> {
    let closing_roll = if frame.is_strike() || frame.is_spare() {
        frame.third_roll()
    } else {
        frame.second_roll()
    };

    closing_roll.map(|_| frame.pinfall())
}
