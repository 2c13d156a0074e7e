//! The bowling game engine.

use std::ops::RangeInclusive;

use tracing::{debug, trace};

use crate::core::{Frame, Result, Scorecard, FRAME_COUNT};
use crate::events::{Listener, ListenerRegistry, SubscriptionId};
use crate::rules::ScoreKeeper;

/// One game of ten-pin bowling, scored roll by roll.
///
/// Owns the [`Scorecard`] and the change listeners. Each accepted roll
/// updates the card completely and then notifies listeners; rejected rolls
/// change nothing and notify no one.
///
/// `Game` performs no locking. Share it across threads behind one mutex
/// per game.
///
/// ## Example
///
/// ```
/// use bowling_score::Game;
///
/// let mut game = Game::new();
/// game.add_roll(5);
/// game.add_roll(5);
/// game.add_roll(3);
///
/// assert_eq!(game.frames()[0].score(), Some(13));
/// assert_eq!(game.current_frame_index(), 1);
///
/// // Eight pins can't fall with seven standing; the roll is ignored.
/// game.add_roll(8);
/// assert_eq!(game.current_frame().second_roll(), None);
/// ```
#[derive(Debug, Default)]
pub struct Game {
    card: Scorecard,
    listeners: ListenerRegistry,
}

impl Game {
    /// Ten empty frames, cursor on the first, no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a roll if it is legal; otherwise do nothing.
    ///
    /// Out-of-range counts, counts above the pins standing, and rolls
    /// after the game is complete are all ignored without notification.
    pub fn add_roll(&mut self, pins: i32) {
        let _ = self.try_add_roll(pins);
    }

    /// Record a roll, reporting why it was rejected.
    ///
    /// Listeners are notified only when the roll is accepted, after the
    /// frames, scores, and cursor are all updated.
    pub fn try_add_roll(&mut self, pins: i32) -> Result<()> {
        // Frame the roll lands in; the cursor may advance past it.
        let frame = self.card.current_frame().index();

        if let Err(err) = self.card.try_roll(pins) {
            debug!(pins, frame, %err, "roll rejected");
            return Err(err);
        }

        trace!(
            pins,
            frame,
            cursor = self.card.current_frame_index(),
            total = ?self.card.total_score(),
            "roll recorded"
        );
        if self.card.is_complete() {
            debug!(score = ?self.card.total_score(), rolls = self.card.rolls().len(), "game complete");
        }

        self.listeners.notify();
        Ok(())
    }

    /// Register a change listener, fired once per accepted roll.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut() + Send + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // === State Access ===

    /// The full game state, e.g. for serialization.
    #[must_use]
    pub fn scorecard(&self) -> &Scorecard {
        &self.card
    }

    #[must_use]
    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        self.card.frames()
    }

    #[must_use]
    pub fn current_frame_index(&self) -> usize {
        self.card.current_frame_index()
    }

    #[must_use]
    pub fn current_frame(&self) -> &Frame {
        self.card.current_frame()
    }

    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        self.card.rolls()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.card.is_complete()
    }

    #[must_use]
    pub fn total_score(&self) -> Option<u16> {
        self.card.total_score()
    }

    #[must_use]
    pub fn max_possible_score(&self) -> u16 {
        self.card.max_possible_score()
    }

    #[must_use]
    pub fn legal_rolls(&self) -> RangeInclusive<u8> {
        self.card.legal_rolls()
    }
}

impl ScoreKeeper for Game {
    fn frames(&self) -> &[Frame] {
        self.card.frames()
    }

    fn current_frame_index(&self) -> usize {
        self.card.current_frame_index()
    }

    fn add_roll(&mut self, pins: i32) {
        Game::add_roll(self, pins);
    }

    fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn is_complete(&self) -> bool {
        self.card.is_complete()
    }
}
