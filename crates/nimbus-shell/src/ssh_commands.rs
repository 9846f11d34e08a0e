//! Simulated SSH suite: ssh-keygen, ssh-list, ssh-add, ssh, ssh-copy-id,
//! ssh-remove.
//!
//! Key records are metadata only; no cryptography happens anywhere here.

use nimbus_types::error::{NimbusError, Result};
use nimbus_types::model::KeyRecord;

use crate::artifacts;
use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register the SSH commands into a registry.
pub fn register_ssh_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(SshKeygenCmd));
    reg.register(Box::new(SshListCmd));
    reg.register(Box::new(SshAddCmd));
    reg.register(Box::new(SshCmd));
    reg.register(Box::new(SshCopyIdCmd));
    reg.register(Box::new(SshRemoveCmd));
}

/// Displayed public keys are truncated to this many characters.
const KEY_DISPLAY_LEN: usize = 50;

/// Split a `user@host` argument. Usage error if the separator is missing.
fn split_target<'a>(args: &[&'a str], usage: &str) -> Result<(&'a str, &'a str)> {
    let target = args
        .first()
        .ok_or_else(|| NimbusError::Usage(format!("usage: {usage}")))?;
    target
        .split_once('@')
        .ok_or_else(|| NimbusError::Usage(format!("usage: {usage}")))
}

// ---------------------------------------------------------------------------
// ssh-keygen
// ---------------------------------------------------------------------------

struct SshKeygenCmd;
impl Command for SshKeygenCmd {
    fn name(&self) -> &str {
        "ssh-keygen"
    }
    fn description(&self) -> &str {
        "Generate a simulated SSH key pair"
    }
    fn usage(&self) -> &str {
        "ssh-keygen -t rsa -b 4096 -C <comment>"
    }
    fn category(&self) -> &str {
        "ssh"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        // The flag tokens are matched literally and in order.
        let flags_ok = args.len() >= 4 && args[..4] == ["-t", "rsa", "-b", "4096"];
        let comment = match (flags_ok, &args[4.min(args.len())..]) {
            (true, []) => env.config.default_key_comment.clone(),
            (true, ["-C", comment]) => (*comment).to_string(),
            _ => {
                return Err(NimbusError::Usage(format!("usage: {}", self.usage())));
            },
        };

        if env.session.key(&comment).is_some() {
            return Ok(CommandOutput::Text(format!(
                "Key with comment '{comment}' already exists."
            )));
        }

        let fingerprint = artifacts::fingerprint(env.rng);
        let public_key = artifacts::public_key(&comment, env.rng);
        let created_at = env.clock.now().to_string();
        let art = artifacts::randomart(&fingerprint);

        let output = format!(
            "Generating public/private rsa key pair.\n\
             Your identification has been saved in {home}/.ssh/id_rsa\n\
             Your public key has been saved in {home}/.ssh/id_rsa.pub\n\
             The key fingerprint is:\n\
             {fingerprint} {comment}\n\
             The key's randomart image is:\n\
             {art}",
            home = env.config.home,
        );

        env.session.add_key(KeyRecord {
            name: comment,
            public_key,
            fingerprint,
            created_at,
        });
        Ok(CommandOutput::Text(output))
    }
}

// ---------------------------------------------------------------------------
// ssh-list
// ---------------------------------------------------------------------------

struct SshListCmd;
impl Command for SshListCmd {
    fn name(&self) -> &str {
        "ssh-list"
    }
    fn description(&self) -> &str {
        "List stored SSH keys"
    }
    fn usage(&self) -> &str {
        "ssh-list"
    }
    fn category(&self) -> &str {
        "ssh"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if env.session.keys().next().is_none() {
            return Ok(CommandOutput::Text("No SSH keys found.".to_string()));
        }
        let mut blocks = Vec::new();
        for key in env.session.keys() {
            let shown: String = key.public_key.chars().take(KEY_DISPLAY_LEN).collect();
            blocks.push(format!(
                "{}\n  Fingerprint: {}\n  Created: {}\n  Public key: {}...",
                key.name, key.fingerprint, key.created_at, shown,
            ));
        }
        Ok(CommandOutput::Text(blocks.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// ssh-add
// ---------------------------------------------------------------------------

struct SshAddCmd;
impl Command for SshAddCmd {
    fn name(&self) -> &str {
        "ssh-add"
    }
    fn description(&self) -> &str {
        "Add a stored key to the simulated agent"
    }
    fn usage(&self) -> &str {
        "ssh-add <name>"
    }
    fn category(&self) -> &str {
        "ssh"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let name = args
            .first()
            .ok_or_else(|| NimbusError::Usage(format!("usage: {}", self.usage())))?;
        let key = env
            .session
            .key(name)
            .ok_or_else(|| NimbusError::NotFound(format!("Key '{name}' not found.")))?;
        Ok(CommandOutput::Text(format!(
            "Identity added: {}/.ssh/id_rsa ({})",
            env.config.home, key.fingerprint,
        )))
    }
}

// ---------------------------------------------------------------------------
// ssh
// ---------------------------------------------------------------------------

struct SshCmd;
impl Command for SshCmd {
    fn name(&self) -> &str {
        "ssh"
    }
    fn description(&self) -> &str {
        "Connect to a host (always denied)"
    }
    fn usage(&self) -> &str {
        "ssh <user>@<host>"
    }
    fn category(&self) -> &str {
        "ssh"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let (user, host) = split_target(args, self.usage())?;
        // No authentication is modeled; every attempt is denied.
        Ok(CommandOutput::Text(format!(
            "Connecting to {host} as {user}...\n\
             {user}@{host}: Permission denied (publickey,password)."
        )))
    }
}

// ---------------------------------------------------------------------------
// ssh-copy-id
// ---------------------------------------------------------------------------

struct SshCopyIdCmd;
impl Command for SshCopyIdCmd {
    fn name(&self) -> &str {
        "ssh-copy-id"
    }
    fn description(&self) -> &str {
        "Install a key on a host (always refused)"
    }
    fn usage(&self) -> &str {
        "ssh-copy-id <user>@<host>"
    }
    fn category(&self) -> &str {
        "ssh"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let (_user, host) = split_target(args, self.usage())?;
        Ok(CommandOutput::Text(format!(
            "/usr/bin/ssh-copy-id: INFO: Source of key(s) to be installed: \"{home}/.ssh/id_rsa.pub\"\n\
             /usr/bin/ssh-copy-id: INFO: attempting to log in with the new key(s)\n\
             ssh: connect to host {host} port 22: Connection refused",
            home = env.config.home,
        )))
    }
}

// ---------------------------------------------------------------------------
// ssh-remove
// ---------------------------------------------------------------------------

struct SshRemoveCmd;
impl Command for SshRemoveCmd {
    fn name(&self) -> &str {
        "ssh-remove"
    }
    fn description(&self) -> &str {
        "Remove a stored SSH key"
    }
    fn usage(&self) -> &str {
        "ssh-remove <name>"
    }
    fn category(&self) -> &str {
        "ssh"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let name = args
            .first()
            .ok_or_else(|| NimbusError::Usage(format!("usage: {}", self.usage())))?;
        match env.session.remove_key(name) {
            Some(_) => Ok(CommandOutput::Text(format!("Key '{name}' removed."))),
            None => Err(NimbusError::NotFound(format!("Key '{name}' not found."))),
        }
    }
}
