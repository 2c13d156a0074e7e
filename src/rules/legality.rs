//! Roll legality.
//!
//! How many rolls a frame may hold and how many pins are standing for the
//! next one. The tenth frame is the only interesting case: the rack is
//! reset after a strike, after a second strike, and after a spare.

use std::ops::RangeInclusive;

use crate::core::config::PIN_COUNT;
use crate::core::{Frame, Result, RollError};

/// Maximum number of rolls `frame` can hold given what it holds now.
///
/// - Frames 1-9: one roll on a strike, otherwise two.
/// - Tenth frame: three on a strike or spare, otherwise two.
#[must_use]
pub fn roll_capacity(frame: &Frame) -> usize {
    let cleared = frame.is_strike() || frame.is_spare();
    match (frame.is_last(), cleared) {
        (false, _) if frame.is_strike() => 1,
        (false, _) => 2,
        (true, true) => 3,
        (true, false) => 2,
    }
}

/// Largest roll the frame accepts next, or `None` once it is closed.
#[must_use]
pub fn pins_standing(frame: &Frame) -> Option<u8> {
    if frame.rolls().len() >= roll_capacity(frame) {
        return None;
    }

    let standing = match (frame.first_roll(), frame.second_roll()) {
        (None, _) => PIN_COUNT,
        (Some(first), None) if first == PIN_COUNT => PIN_COUNT,
        (Some(first), None) => PIN_COUNT - first,
        // Only a tenth-frame strike or spare gets this far.
        (Some(first), Some(second)) if first == PIN_COUNT && second < PIN_COUNT => {
            PIN_COUNT - second
        }
        (Some(_), Some(_)) => PIN_COUNT,
    };

    Some(standing)
}

/// Pin counts the frame accepts next. Empty once the frame is closed.
#[must_use]
pub fn legal_rolls(frame: &Frame) -> RangeInclusive<u8> {
    match pins_standing(frame) {
        Some(standing) => 0..=standing,
        #[allow(clippy::reversed_empty_ranges)]
        None => 1..=0,
    }
}

/// Validate a raw pin count against the frame's remaining pins.
///
/// Returns the count narrowed to `u8`. A closed frame is not rejected
/// here: the cursor never rests on a closed frame outside a finished
/// game, so recording into one is an invariant violation, not bad input.
pub fn check_roll(frame: &Frame, pins: i32) -> Result<u8> {
    let pins = u8::try_from(pins)
        .ok()
        .filter(|&p| p <= PIN_COUNT)
        .ok_or(RollError::OutOfRange { pins })?;

    match pins_standing(frame) {
        Some(standing) if pins > standing => {
            Err(RollError::ExceedsPinsStanding { pins, standing })
        }
        _ => Ok(pins),
    }
}
