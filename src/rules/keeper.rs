//! The score keeper contract.
//!
//! A presentation layer (UI, CLI, test harness) talks to the scorer only
//! through this trait: push rolls, read frames and the cursor, and listen
//! for changes. [`Game`](crate::game::Game) is the implementation.

use crate::core::Frame;
use crate::events::{Listener, SubscriptionId};

/// Capability contract for an incremental bowling scorer.
///
/// ## Implementation Notes
///
/// - `add_roll`: never fails; rejected rolls leave state untouched and
///   fire no notification
/// - `frames`: always exactly ten frames, in order
/// - Listeners fire once per accepted roll, after all state is updated
pub trait ScoreKeeper {
    /// All ten frames, first to last.
    fn frames(&self) -> &[Frame];

    /// 0-based index of the frame accepting rolls.
    fn current_frame_index(&self) -> usize;

    /// Record a roll if it is legal; otherwise do nothing.
    fn add_roll(&mut self, pins: i32);

    /// Register a change listener. Listeners carry no payload and re-read
    /// state through the accessors.
    fn subscribe(&mut self, listener: Listener) -> SubscriptionId;

    /// Remove a listener. Returns `false` if it was not registered.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    /// Has the tenth frame been closed?
    fn is_complete(&self) -> bool;

    // === Convenience Methods ===

    /// The frame accepting rolls.
    fn current_frame(&self) -> &Frame {
        &self.frames()[self.current_frame_index()]
    }

    /// Latest known cumulative score, if any frame is scored.
    fn total_score(&self) -> Option<u16> {
        self.frames().iter().rev().find_map(Frame::score)
    }
}
