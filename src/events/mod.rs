//! Change notification.
//!
//! The scorer signals "state changed" once per accepted roll. Subscribers
//! get no payload and re-read whatever they display through the
//! [`ScoreKeeper`](crate::rules::ScoreKeeper) accessors.

mod registry;

pub use registry::{Listener, ListenerRegistry, SubscriptionId};
