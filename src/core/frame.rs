//! A single frame on the scoresheet.
//!
//! Frames are plain data. Strike and spare are derived from the recorded
//! rolls on every call rather than stored, and all mutation goes through
//! the owning [`Scorecard`](super::Scorecard) so roll acceptance stays in
//! one place.

use serde::Serialize;
use smallvec::SmallVec;

use super::config::{FRAME_COUNT, PIN_COUNT};
use crate::rules::roll_capacity;

/// One of the ten frames of a game.
///
/// Frames 1-9 hold at most two rolls (one on a strike). The tenth frame
/// holds a third, bonus roll when it starts with a strike or spare.
///
/// `score` is the *cumulative* game score through this frame, and stays
/// `None` until every roll it depends on has been thrown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Frame {
    index: u8,
    first_roll: Option<u8>,
    second_roll: Option<u8>,
    third_roll: Option<u8>,
    score: Option<u16>,
}

impl Frame {
    /// Create an empty frame at 1-based position `index`.
    pub(crate) fn new(index: u8) -> Self {
        assert!(
            (1..=FRAME_COUNT as u8).contains(&index),
            "frame index must be 1-{FRAME_COUNT}, got {index}"
        );

        Self {
            index,
            first_roll: None,
            second_roll: None,
            third_roll: None,
            score: None,
        }
    }

    /// 1-based position of this frame in the game.
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    #[must_use]
    pub const fn first_roll(&self) -> Option<u8> {
        self.first_roll
    }

    #[must_use]
    pub const fn second_roll(&self) -> Option<u8> {
        self.second_roll
    }

    /// Bonus roll; only ever set on the tenth frame.
    #[must_use]
    pub const fn third_roll(&self) -> Option<u8> {
        self.third_roll
    }

    /// Cumulative score through this frame, once computable.
    #[must_use]
    pub const fn score(&self) -> Option<u16> {
        self.score
    }

    /// Is this the tenth frame?
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.index as usize == FRAME_COUNT
    }

    /// All ten pins on the first roll.
    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.first_roll == Some(PIN_COUNT)
    }

    /// All ten pins across the first two rolls, without a strike.
    #[must_use]
    pub fn is_spare(&self) -> bool {
        if self.is_strike() {
            return false;
        }
        match (self.first_roll, self.second_roll) {
            (Some(first), Some(second)) => first + second == PIN_COUNT,
            _ => false,
        }
    }

    /// Both rolls thrown and pins left standing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.second_roll.is_some() && !self.is_strike() && !self.is_spare()
    }

    /// Recorded rolls in the order they were thrown.
    #[must_use]
    pub fn rolls(&self) -> SmallVec<[u8; 3]> {
        [self.first_roll, self.second_roll, self.third_roll]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Total pins knocked down in this frame alone (no bonuses).
    #[must_use]
    pub fn pinfall(&self) -> u16 {
        self.rolls().iter().map(|&pins| u16::from(pins)).sum()
    }

    /// Write `pins` into the first empty roll slot.
    ///
    /// # Panics
    ///
    /// Panics if the frame has no slot left for its kind. Callers validate
    /// rolls and advance the cursor before this point, so reaching it means
    /// the scorecard's state machine is inconsistent.
    pub(crate) fn record(&mut self, pins: u8) {
        let recorded = self.rolls().len();
        assert!(
            recorded < roll_capacity(self),
            "frame {} has no open roll slot (rolls: {:?})",
            self.index,
            self.rolls()
        );

        let slot = match recorded {
            0 => &mut self.first_roll,
            1 => &mut self.second_roll,
            _ => &mut self.third_roll,
        };
        *slot = Some(pins);
    }

    pub(crate) fn set_score(&mut self, score: Option<u16>) {
        self.score = score;
    }
}

/// Scoresheet notation: `X` strike, `/` spare, `-` miss, digits otherwise.
///
/// Tenth-frame rolls that follow a full clear are marked against a fresh
/// rack, so three strikes print as `XXX` and strike-then-spare as `X7/`.
impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut standing = PIN_COUNT;
        let mut fresh_rack = true;

        for pins in self.rolls() {
            let mark = match pins {
                0 => '-',
                p if p == standing && fresh_rack => 'X',
                p if p == standing => '/',
                p => char::from(b'0' + p),
            };
            write!(f, "{mark}")?;

            standing -= pins;
            fresh_rack = standing == 0;
            if fresh_rack {
                standing = PIN_COUNT;
            }
        }

        Ok(())
    }
}
