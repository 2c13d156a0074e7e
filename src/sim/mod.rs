//! Simulated bowlers for tests and benchmarks.

mod bowler;

pub use bowler::RandomBowler;
