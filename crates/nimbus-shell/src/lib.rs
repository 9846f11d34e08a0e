//! Interactive interpreter for a simulated cloud operations console.
//!
//! The shell holds all state in memory: instances, cloned repositories,
//! SSH keys, and the command transcript. Commands are registered into a
//! [`CommandRegistry`] and dispatched by verb; every executed line is
//! recorded in the session transcript with a timestamp from the injected
//! clock.

mod artifacts;
mod commands;
mod interpreter;
mod session;

pub mod cloud_commands;
pub mod git_commands;
pub mod net_commands;
pub mod ssh_commands;

pub use interpreter::{
    Command, CommandOutput, CommandRegistry, Environment, Shell, tokenize,
};
pub use session::Session;

#[cfg(test)]
pub mod testutil {
    //! Shared fixtures: a frozen clock and a seeded entropy source so
    //! command output is reproducible across runs.

    use nimbus_platform::{Clock, SimpleRng, Timestamp};
    use nimbus_types::ShellConfig;

    use crate::Shell;

    /// 2026-08-30 12:04:05 UTC, a Sunday.
    pub const FIXED_UNIX: u64 = 1_788_091_445;

    pub struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> Timestamp {
            Timestamp::from_unix(FIXED_UNIX)
        }
    }

    /// A shell with the default config, a frozen clock, and a fixed seed.
    pub fn test_shell() -> Shell {
        Shell::new(
            ShellConfig::default(),
            Box::new(FixedClock),
            Box::new(SimpleRng::new(42)),
        )
    }
}
