//! # bowling-score
//!
//! Incremental ten-pin bowling scoring.
//!
//! Rolls arrive one at a time, and after every roll each frame whose score
//! is knowable carries its cumulative total. Frames still waiting on bonus
//! rolls stay unscored until those rolls are thrown.
//!
//! ## Design Principles
//!
//! 1. **Pure state transitions**: `add_roll` validates, records, rescores,
//!    and advances before it returns. No I/O, no persistence.
//!
//! 2. **Forgiving input**: illegal rolls are ignored rather than fatal, so
//!    a UI can forward raw input. `try_add_roll` reports the reason when a
//!    caller wants it.
//!
//! 3. **Fixed shape**: exactly ten frames in an array, addressed by index.
//!    Lookahead for strike and spare bonuses is plain index arithmetic.
//!
//! ## Modules
//!
//! - `core`: frames, the scorecard, roll errors, rule constants
//! - `rules`: roll legality and the `ScoreKeeper` contract
//! - `scoring`: cumulative score recomputation and best-possible score
//! - `events`: change listeners
//! - `game`: the `Game` engine
//! - `sim`: seeded random bowler
//!
//! ## Example
//!
//! ```
//! use bowling_score::Game;
//!
//! let mut game = Game::new();
//! for _ in 0..12 {
//!     game.add_roll(10);
//! }
//! assert!(game.is_complete());
//! assert_eq!(game.total_score(), Some(300));
//! ```

pub mod core;
pub mod rules;
pub mod scoring;
pub mod events;
pub mod game;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Frame, Scorecard,
    Result, RollError,
    FRAME_COUNT, LAST_FRAME, MAX_ROLLS, PERFECT_SCORE, PIN_COUNT,
};

pub use crate::rules::ScoreKeeper;

pub use crate::events::{Listener, ListenerRegistry, SubscriptionId};

pub use crate::game::Game;

pub use crate::sim::RandomBowler;
