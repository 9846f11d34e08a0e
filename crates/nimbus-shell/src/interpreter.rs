//! Command trait, registry, and dispatch logic.
//!
//! Commands are registered by verb. The dispatcher routes a tokenized line
//! to exactly one handler; compound tools (`git`, `create instance`, ...)
//! validate their literal sub-verb token inside `execute`.

use std::collections::HashMap;

use nimbus_platform::{Clock, Entropy};
use nimbus_types::error::Result;
use nimbus_types::{ShellConfig, model::TranscriptEntry};

use crate::session::Session;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text lines.
    Text(String),
    /// Command produced no visible output (still logged).
    None,
    /// Signal to empty the session transcript without logging this command.
    Clear,
}

/// Shared mutable environment passed to every command.
pub struct Environment<'a> {
    /// Entity store, transcript, and working path for this session.
    pub session: &'a mut Session,
    /// Simulated identity (user, host, home, default key comment).
    pub config: &'a ShellConfig,
    /// Host wall clock.
    pub clock: &'a dyn Clock,
    /// Host random source for ids, fingerprints, and telemetry.
    pub rng: &'a mut dyn Entropy,
}

/// A single executable command.
pub trait Command {
    /// The verb (what the user types first).
    fn name(&self) -> &str;

    /// One-line description.
    fn description(&self) -> &str;

    /// Usage string (e.g. "ping \<host\>").
    fn usage(&self) -> &str;

    /// Command category for grouping.
    fn category(&self) -> &str {
        "session"
    }

    /// Execute the command with the given arguments and environment.
    ///
    /// Errors are the recoverable usage/not-found kind; the shell renders
    /// them as the command's text output.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// Split a raw line into tokens on runs of whitespace.
///
/// The first token is the verb, the rest are positional arguments. Blank
/// input yields an empty vec and must not be dispatched.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// Registry of available commands with verb-keyed dispatch.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same verb.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Dispatch pre-tokenized input to its handler.
    ///
    /// An unrecognized verb is a normal outcome with a defined message, not
    /// an error.
    pub fn dispatch(&self, tokens: &[String], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let verb = &tokens[0];
        let arg_strings = &tokens[1..];
        let args: Vec<&str> = arg_strings.iter().map(String::as_str).collect();
        match self.commands.get(verb.as_str()) {
            Some(cmd) => cmd.execute(&args, env),
            None => Ok(CommandOutput::Text(format!(
                "Command '{verb}' not found. Type 'help' to see available commands."
            ))),
        }
    }

}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Shell: registry + session + services, one command at a time
// ---------------------------------------------------------------------------

/// The interactive shell: owns the dispatcher, the session state, and the
/// injected host services. One command is fully tokenized, dispatched, and
/// logged before the next is accepted.
pub struct Shell {
    registry: CommandRegistry,
    session: Session,
    config: ShellConfig,
    clock: Box<dyn Clock>,
    rng: Box<dyn Entropy>,
}

impl Shell {
    /// Build a shell with all built-in commands registered and an empty
    /// session rooted at the configured home path.
    pub fn new(config: ShellConfig, clock: Box<dyn Clock>, rng: Box<dyn Entropy>) -> Self {
        let mut registry = CommandRegistry::new();
        crate::commands::register_builtins(&mut registry);
        let session = Session::new(&config.home);
        Self {
            registry,
            session,
            config,
            clock,
            rng,
        }
    }

    /// Execute one raw input line.
    ///
    /// Returns `None` for blank input (nothing is dispatched or logged).
    /// Otherwise returns the produced output text -- possibly empty -- and
    /// appends exactly one transcript entry, except for `clear`, which
    /// empties the transcript and logs nothing.
    pub fn run_line(&mut self, line: &str) -> Option<String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let tokens = tokenize(trimmed);

        let mut env = Environment {
            session: &mut self.session,
            config: &self.config,
            clock: self.clock.as_ref(),
            rng: self.rng.as_mut(),
        };
        let output = match self.registry.dispatch(&tokens, &mut env) {
            Ok(CommandOutput::Text(text)) => text,
            Ok(CommandOutput::None) => String::new(),
            Ok(CommandOutput::Clear) => {
                self.session.clear_transcript();
                return Some(String::new());
            },
            // Usage and lookup errors become the command's output.
            Err(e) => e.to_string(),
        };

        let timestamp = self.clock.now().to_string();
        self.session.append_transcript(TranscriptEntry {
            input: trimmed.to_string(),
            output: output.clone(),
            timestamp,
        });
        Some(output)
    }

    /// Read access to the session for the presentation layer (status
    /// summary, transcript rendering).
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The active configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }
}
