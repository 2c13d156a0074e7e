//! Scorecard: the complete state of one game.
//!
//! Ten frames, a cursor to the frame accepting rolls, and the log of
//! accepted rolls. `try_roll` is the only mutation and performs the whole
//! transition (validate, record, rescore, advance) before returning.
//! The scorecard knows nothing about listeners; [`Game`](crate::game::Game)
//! layers notification on top.

use std::ops::RangeInclusive;

use serde::Serialize;
use smallvec::SmallVec;

use super::config::{FRAME_COUNT, LAST_FRAME, MAX_ROLLS};
use super::error::{Result, RollError};
use super::frame::Frame;
use crate::rules;
use crate::scoring;

/// Frames, cursor and roll history for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    frames: [Frame; FRAME_COUNT],

    /// 0-based index of the frame accepting rolls. Never decreases.
    current: usize,

    /// Every accepted roll, in order.
    rolls: SmallVec<[u8; MAX_ROLLS]>,
}

impl Default for Scorecard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorecard {
    /// Ten empty frames with the cursor on the first.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(|i| Frame::new(i as u8 + 1)),
            current: 0,
            rolls: SmallVec::new(),
        }
    }

    /// Build a scorecard by rolling `rolls` in order.
    ///
    /// Stops at the first rejected roll and returns its error.
    ///
    /// ```
    /// use bowling_score::Scorecard;
    ///
    /// let card = Scorecard::replay([10, 7, 3, 9, 0]).unwrap();
    /// assert_eq!(card.frame(0).and_then(|f| f.score()), Some(20));
    /// assert_eq!(card.frame(1).and_then(|f| f.score()), Some(39));
    /// assert_eq!(card.total_score(), Some(48));
    /// ```
    pub fn replay(rolls: impl IntoIterator<Item = i32>) -> Result<Self> {
        let mut card = Self::new();
        for pins in rolls {
            card.try_roll(pins)?;
        }
        Ok(card)
    }

    /// Record one roll.
    ///
    /// Checks run in order: game complete, pin count in `0..=10`, pin
    /// count within the pins standing. On success the roll is written to
    /// the current frame, every score up to the cursor is recomputed, and
    /// the cursor advances if the frame closed.
    pub fn try_roll(&mut self, pins: i32) -> Result<()> {
        if self.is_complete() {
            return Err(RollError::GameComplete);
        }

        let pins = rules::check_roll(self.current_frame(), pins)?;

        self.frames[self.current].record(pins);
        self.rolls.push(pins);
        scoring::rescore(&mut self.frames, self.current);
        self.advance();

        Ok(())
    }

    fn advance(&mut self) {
        let frame = &self.frames[self.current];
        if !frame.is_last() && (frame.is_strike() || frame.second_roll().is_some()) {
            self.current += 1;
        }
    }

    // === Accessors ===

    /// All ten frames, first to last.
    #[must_use]
    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    /// Frame at 0-based `index`.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// 0-based index of the frame accepting rolls.
    #[must_use]
    pub fn current_frame_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current]
    }

    /// Accepted rolls in the order they were thrown.
    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// The tenth frame is closed: it holds its bonus roll after a strike
    /// or spare, or its second roll otherwise.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let tenth = &self.frames[LAST_FRAME];
        if tenth.is_strike() || tenth.is_spare() {
            tenth.third_roll().is_some()
        } else {
            tenth.second_roll().is_some()
        }
    }

    /// Latest known cumulative score.
    #[must_use]
    pub fn total_score(&self) -> Option<u16> {
        self.frames.iter().rev().find_map(Frame::score)
    }

    /// Final score if every remaining roll clears the standing pins.
    #[must_use]
    pub fn max_possible_score(&self) -> u16 {
        scoring::max_possible_score(self)
    }

    /// Pin counts the next roll may take. Empty once the game is complete.
    #[must_use]
    pub fn legal_rolls(&self) -> RangeInclusive<u8> {
        rules::legal_rolls(self.current_frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scorecard() {
        let card = Scorecard::new();
        assert_eq!(card.frames().len(), FRAME_COUNT);
        for (i, frame) in card.frames().iter().enumerate() {
            assert_eq!(frame.index() as usize, i + 1);
            assert!(frame.rolls().is_empty());
            assert_eq!(frame.score(), None);
        }
        assert_eq!(card.current_frame_index(), 0);
        assert!(card.rolls().is_empty());
        assert!(!card.is_complete());
        assert_eq!(card.total_score(), None);
    }

    #[test]
    fn test_cursor_advances_on_second_roll() {
        let mut card = Scorecard::new();
        card.try_roll(4).unwrap();
        assert_eq!(card.current_frame_index(), 0);
        card.try_roll(2).unwrap();
        assert_eq!(card.current_frame_index(), 1);
    }

    #[test]
    fn test_cursor_advances_on_strike() {
        let mut card = Scorecard::new();
        card.try_roll(10).unwrap();
        assert_eq!(card.current_frame_index(), 1);
        assert_eq!(card.frames()[0].second_roll(), None);
    }

    #[test]
    fn test_cursor_stops_at_tenth_frame() {
        let mut card = Scorecard::replay(std::iter::repeat(10).take(9)).unwrap();
        assert_eq!(card.current_frame_index(), 9);
        card.try_roll(10).unwrap();
        card.try_roll(10).unwrap();
        assert_eq!(card.current_frame_index(), 9);
    }

    #[test]
    fn test_rejected_roll_leaves_card_unchanged() {
        let mut card = Scorecard::replay([6]).unwrap();
        let before = card.clone();

        assert_eq!(card.try_roll(5), Err(RollError::ExceedsPinsStanding { pins: 5, standing: 4 }));
        assert_eq!(card.try_roll(-3), Err(RollError::OutOfRange { pins: -3 }));
        assert_eq!(card.try_roll(11), Err(RollError::OutOfRange { pins: 11 }));
        assert_eq!(card, before);
    }

    #[test]
    fn test_complete_card_rejects_rolls() {
        let mut card = Scorecard::replay(std::iter::repeat(0).take(20)).unwrap();
        assert!(card.is_complete());
        assert_eq!(card.try_roll(0), Err(RollError::GameComplete));
        assert_eq!(card.rolls().len(), 20);
        assert!(card.legal_rolls().is_empty());
    }

    #[test]
    fn test_completion_checked_before_range() {
        let mut card = Scorecard::replay(std::iter::repeat(0).take(20)).unwrap();
        assert_eq!(card.try_roll(42), Err(RollError::GameComplete));
    }

    #[test]
    fn test_replay_stops_at_first_rejection() {
        let result = Scorecard::replay([3, 4, 9, 9]);
        assert_eq!(result, Err(RollError::ExceedsPinsStanding { pins: 9, standing: 1 }));
    }

    #[test]
    fn test_roll_log() {
        let card = Scorecard::replay([10, 3, 7, 0]).unwrap();
        assert_eq!(card.rolls(), &[10, 3, 7, 0]);
    }

    #[test]
    fn test_frame_lookup() {
        let card = Scorecard::new();
        assert_eq!(card.frame(9).map(Frame::index), Some(10));
        assert!(card.frame(10).is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let card = Scorecard::replay([5, 4]).unwrap();
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["current"], 1);
        assert_eq!(json["rolls"], serde_json::json!([5, 4]));
        assert_eq!(json["frames"].as_array().map(Vec::len), Some(FRAME_COUNT));
        assert_eq!(json["frames"][0]["index"], 1);
        assert_eq!(json["frames"][0]["first_roll"], 5);
        assert_eq!(json["frames"][0]["score"], 9);
        assert!(json["frames"][1]["first_roll"].is_null());
    }
}
