//! Host service traits and default implementations.
//!
//! The shell core never touches the host clock or a random source directly;
//! both are injected as trait objects so tests can substitute a fixed clock
//! and a seeded generator.

mod services;

pub use services::{Clock, Entropy, SimpleRng, SystemClock, Timestamp};
