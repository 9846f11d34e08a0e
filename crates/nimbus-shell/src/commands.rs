//! Built-in session commands: help, echo, cd, pwd, ls, whoami, uname,
//! date, time, history, clear.

use nimbus_types::error::{NimbusError, Result};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register all built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(UnameCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(TimeCmd));
    reg.register(Box::new(HistoryCmd));
    reg.register(Box::new(ClearCmd));
    crate::ssh_commands::register_ssh_commands(reg);
    crate::git_commands::register_git_commands(reg);
    crate::cloud_commands::register_cloud_commands(reg);
    crate::net_commands::register_net_commands(reg);
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

const HELP_TEXT: &str = "\
Nimbus -- simulated cloud control plane

SSH:
  ssh-keygen -t rsa -b 4096 -C <comment>   Generate an SSH key pair
  ssh-list                                 List stored SSH keys
  ssh-add <name>                           Add a key to the agent
  ssh <user>@<host>                        Connect to a host
  ssh-copy-id <user>@<host>                Install a key on a host
  ssh-remove <name>                        Remove a stored key

Git:
  git clone <url>                          Clone a repository
  git status                               Show working tree status
  git list                                 List cloned repositories
  git config --global user.name <value>    Set the commit author name
  git config --global user.email <value>   Set the commit author email

Cloud resources:
  gcloud                                   Cloud CLI usage summary
  instances list                           List instances
  create instance <name> <kind>            Create an instance
  describe instance <name>                 Show instance details
  start instance <name>                    Start an instance
  stop instance <name>                     Stop an instance
  delete instance <name>                   Delete an instance
  logs <name>                              Show instance logs
  metrics <name>                           Show instance metrics

Network:
  ping <host>                              Send simulated ICMP echoes
  ifconfig                                 Show network interfaces
  netstat                                  Show network connections

Session:
  help, history, clear, echo <text>, cd <path>, pwd, ls,
  whoami, uname, date, time";

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show available commands"
    }
    fn usage(&self) -> &str {
        "help"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(HELP_TEXT.to_string()))
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print arguments"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(args.join(" ")))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Change the working path"
    }
    fn usage(&self) -> &str {
        "cd <path>"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let path = args
            .first()
            .ok_or_else(|| NimbusError::Usage("cd: missing path argument".to_string()))?;
        // No filesystem validation -- the path is taken literally.
        env.session.set_cwd(path);
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print the working path"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.session.cwd().to_string()))
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List directory entries"
    }
    fn usage(&self) -> &str {
        "ls"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut entries = vec!["Documents/".to_string(), "Downloads/".to_string()];
        if env.session.keys().next().is_some() {
            entries.push(".ssh/".to_string());
        }
        for repo in env.session.repositories() {
            entries.push(format!("{}/", repo.name));
        }
        entries.push("notes.txt".to_string());
        entries.push("readme.md".to_string());
        entries.push("todo.txt".to_string());
        Ok(CommandOutput::Text(entries.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// whoami / uname
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Print the session user name"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.config.username.clone()))
    }
}

struct UnameCmd;
impl Command for UnameCmd {
    fn name(&self) -> &str {
        "uname"
    }
    fn description(&self) -> &str {
        "Print system information"
    }
    fn usage(&self) -> &str {
        "uname"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(format!(
            "Linux {} 6.1.0-nimbus #1 SMP x86_64 GNU/Linux",
            env.config.hostname
        )))
    }
}

// ---------------------------------------------------------------------------
// date / time
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Print the current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.clock.now().date_line()))
    }
}

struct TimeCmd;
impl Command for TimeCmd {
    fn name(&self) -> &str {
        "time"
    }
    fn description(&self) -> &str {
        "Print the current time"
    }
    fn usage(&self) -> &str {
        "time"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.clock.now().clock_line()))
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show executed commands in order"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let lines: Vec<&str> = env
            .session
            .transcript()
            .iter()
            .map(|entry| entry.input.as_str())
            .collect();
        if lines.is_empty() {
            return Ok(CommandOutput::None);
        }
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the session transcript"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        // The shell intercepts this signal: transcript emptied, nothing logged.
        Ok(CommandOutput::Clear)
    }
}

#[cfg(test)]
mod tests {
    use crate::testutil::test_shell;

    #[test]
    fn help_lists_every_section() {
        let mut shell = test_shell();
        let out = shell.run_line("help").unwrap();
        for section in ["SSH:", "Git:", "Cloud resources:", "Network:", "Session:"] {
            assert!(out.contains(section), "missing section {section}");
        }
    }

    #[test]
    fn echo_joins_tokens_with_single_spaces() {
        let mut shell = test_shell();
        assert_eq!(shell.run_line("echo hello   cloud  world").unwrap(), "hello cloud world");
    }

    #[test]
    fn echo_no_args_is_empty() {
        let mut shell = test_shell();
        assert_eq!(shell.run_line("echo").unwrap(), "");
    }

    #[test]
    fn cd_sets_literal_path_and_pwd_reads_it() {
        let mut shell = test_shell();
        assert_eq!(shell.run_line("cd /var/log").unwrap(), "");
        assert_eq!(shell.run_line("pwd").unwrap(), "/var/log");
    }

    #[test]
    fn cd_without_argument_errors() {
        let mut shell = test_shell();
        let out = shell.run_line("cd").unwrap();
        assert!(out.contains("missing path"));
    }

    #[test]
    fn pwd_defaults_to_home() {
        let mut shell = test_shell();
        assert_eq!(shell.run_line("pwd").unwrap(), "/home/admin");
    }

    #[test]
    fn whoami_reports_configured_user() {
        let mut shell = test_shell();
        assert_eq!(shell.run_line("whoami").unwrap(), "admin");
    }

    #[test]
    fn uname_names_the_host() {
        let mut shell = test_shell();
        let out = shell.run_line("uname").unwrap();
        assert!(out.starts_with("Linux nimbus "));
    }

    #[test]
    fn date_uses_injected_clock() {
        let mut shell = test_shell();
        assert_eq!(shell.run_line("date").unwrap(), "Sun Aug 30 12:04:05 UTC 2026");
    }

    #[test]
    fn time_uses_injected_clock() {
        let mut shell = test_shell();
        assert_eq!(shell.run_line("time").unwrap(), "12:04:05");
    }

    #[test]
    fn ls_without_state_shows_fixed_entries_only() {
        let mut shell = test_shell();
        let out = shell.run_line("ls").unwrap();
        assert!(out.contains("Documents/"));
        assert!(out.contains("notes.txt"));
        assert!(out.contains("readme.md"));
        assert!(out.contains("todo.txt"));
        assert!(!out.contains(".ssh/"));
    }

    #[test]
    fn ls_shows_ssh_dir_once_a_key_exists() {
        let mut shell = test_shell();
        shell.run_line("ssh-keygen -t rsa -b 4096 -C me@x").unwrap();
        let out = shell.run_line("ls").unwrap();
        assert!(out.contains(".ssh/"));
    }

    #[test]
    fn ls_lists_cloned_repositories() {
        let mut shell = test_shell();
        shell.run_line("git clone https://example.com/org/repo.git").unwrap();
        let out = shell.run_line("ls").unwrap();
        assert!(out.contains("repo/"));
    }

    #[test]
    fn history_lists_inputs_in_arrival_order() {
        let mut shell = test_shell();
        shell.run_line("pwd").unwrap();
        shell.run_line("whoami").unwrap();
        shell.run_line("bogus-verb").unwrap();
        let out = shell.run_line("history").unwrap();
        assert_eq!(out, "pwd\nwhoami\nbogus-verb");
    }

    #[test]
    fn history_when_empty_is_empty() {
        let mut shell = test_shell();
        assert_eq!(shell.run_line("history").unwrap(), "");
    }

    #[test]
    fn clear_resets_history_but_not_entities() {
        let mut shell = test_shell();
        shell.run_line("create instance web-1 compute").unwrap();
        shell.run_line("pwd").unwrap();
        shell.run_line("clear").unwrap();
        assert_eq!(shell.run_line("history").unwrap(), "");
        assert_eq!(shell.session().counts().0, 1);
    }
}
