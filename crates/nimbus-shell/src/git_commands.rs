//! Simulated git client: clone, status, list, config.
//!
//! A single `git` verb with sub-verb dispatch; anything unrecognized falls
//! back to the usage summary, like the real tool.

use nimbus_types::error::{NimbusError, Result};
use nimbus_types::model::{RepoStatus, Repository, repo_name_from_url};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register the git command into a registry.
pub fn register_git_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(GitCmd));
}

const GIT_USAGE: &str = "\
usage: git <command> [<args>]

Available commands:
   clone <url>       Clone a repository into a new directory
   status            Show the working tree status
   list              List cloned repositories
   config --global user.name|user.email <value>
                     Set a global configuration value";

struct GitCmd;
impl Command for GitCmd {
    fn name(&self) -> &str {
        "git"
    }
    fn description(&self) -> &str {
        "Simulated version-control client"
    }
    fn usage(&self) -> &str {
        "git <clone|status|list|config> [...]"
    }
    fn category(&self) -> &str {
        "git"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        match args.first().copied() {
            Some("clone") => clone(&args[1..], env),
            Some("status") => status(env),
            Some("list") => list(env),
            Some("config") => config(&args[1..]),
            _ => Ok(CommandOutput::Text(GIT_USAGE.to_string())),
        }
    }
}

fn clone(args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
    let url = args
        .first()
        .ok_or_else(|| NimbusError::Usage("usage: git clone <url>".to_string()))?;
    let name = repo_name_from_url(url);

    if env.session.repository(&name).is_some() {
        return Ok(CommandOutput::Text(format!(
            "fatal: destination path '{name}' already exists and is not an empty directory."
        )));
    }

    env.session.add_repository(Repository {
        name: name.clone(),
        url: (*url).to_string(),
        status: RepoStatus::Cloned,
    });

    // Fixed illustrative numbers; the clone always completes synchronously.
    Ok(CommandOutput::Text(format!(
        "Cloning into '{name}'...\n\
         remote: Enumerating objects: 1247, done.\n\
         remote: Counting objects: 100% (1247/1247), done.\n\
         remote: Compressing objects: 100% (684/684), done.\n\
         remote: Total 1247 (delta 512), reused 1190 (delta 455), pack-reused 0\n\
         Receiving objects: 100% (1247/1247), 2.35 MiB | 4.12 MiB/s, done.\n\
         Resolving deltas: 100% (512/512), done."
    )))
}

fn status(env: &mut Environment<'_>) -> Result<CommandOutput> {
    if env.session.repositories().next().is_none() {
        return Ok(CommandOutput::Text(
            "fatal: Not a git repository (or any of the parent directories): .git".to_string(),
        ));
    }
    // Same clean-tree message regardless of which or how many repos exist.
    Ok(CommandOutput::Text(
        "On branch main\n\
         Your branch is up to date with 'origin/main'.\n\
         \n\
         nothing to commit, working tree clean"
            .to_string(),
    ))
}

fn list(env: &mut Environment<'_>) -> Result<CommandOutput> {
    if env.session.repositories().next().is_none() {
        return Ok(CommandOutput::Text("No repositories found.".to_string()));
    }
    let mut lines = vec![format!("{:<20} {:<8} URL", "NAME", "STATUS")];
    for repo in env.session.repositories() {
        lines.push(format!(
            "{:<20} {:<8} {}",
            repo.name, repo.status, repo.url
        ));
    }
    Ok(CommandOutput::Text(lines.join("\n")))
}

fn config(args: &[&str]) -> Result<CommandOutput> {
    // Confirmed but deliberately not persisted anywhere.
    match args {
        ["--global", key @ ("user.name" | "user.email"), value @ ..] if !value.is_empty() => {
            Ok(CommandOutput::Text(format!(
                "Updated global {key} to '{}'",
                value.join(" ")
            )))
        },
        _ => Err(NimbusError::Usage(
            "usage: git config --global user.name|user.email <value>".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::testutil::test_shell;

    #[test]
    fn clone_derives_name_from_last_segment() {
        let mut shell = test_shell();
        let out = shell
            .run_line("git clone https://example.com/org/repo.git")
            .unwrap();
        assert!(out.starts_with("Cloning into 'repo'..."));
        assert!(out.ends_with("Resolving deltas: 100% (512/512), done."));
        let repo = shell.session().repository("repo").expect("repo record");
        assert_eq!(repo.url, "https://example.com/org/repo.git");
        assert_eq!(repo.status.to_string(), "cloned");
    }

    #[test]
    fn clone_duplicate_is_rejected_without_second_entry() {
        let mut shell = test_shell();
        shell
            .run_line("git clone https://example.com/org/repo.git")
            .unwrap();
        let out = shell
            .run_line("git clone https://example.com/org/repo.git")
            .unwrap();
        assert_eq!(
            out,
            "fatal: destination path 'repo' already exists and is not an empty directory."
        );
        assert_eq!(shell.session().counts().1, 1);
    }

    #[test]
    fn clone_without_url_is_usage() {
        let mut shell = test_shell();
        assert_eq!(shell.run_line("git clone").unwrap(), "usage: git clone <url>");
    }

    #[test]
    fn status_without_repos_is_not_a_repository() {
        let mut shell = test_shell();
        let out = shell.run_line("git status").unwrap();
        assert!(out.contains("Not a git repository"));
    }

    #[test]
    fn status_with_any_repos_is_clean_tree_on_main() {
        let mut shell = test_shell();
        shell.run_line("git clone https://example.com/a.git").unwrap();
        shell.run_line("git clone https://example.com/b.git").unwrap();
        let out = shell.run_line("git status").unwrap();
        assert!(out.starts_with("On branch main"));
        assert!(out.contains("up to date with 'origin/main'"));
        assert!(out.ends_with("working tree clean"));
    }

    #[test]
    fn list_empty_reports_none() {
        let mut shell = test_shell();
        assert_eq!(shell.run_line("git list").unwrap(), "No repositories found.");
    }

    #[test]
    fn list_shows_exactly_one_entry_per_repo() {
        let mut shell = test_shell();
        shell
            .run_line("git clone https://example.com/org/repo.git")
            .unwrap();
        let out = shell.run_line("git list").unwrap();
        let repo_lines: Vec<&str> = out.lines().filter(|l| l.contains("repo")).collect();
        assert_eq!(repo_lines.len(), 1);
        assert!(repo_lines[0].contains("cloned"));
        assert!(repo_lines[0].contains("https://example.com/org/repo.git"));
    }

    #[test]
    fn list_rows_align_with_header_columns() {
        let mut shell = test_shell();
        shell
            .run_line("git clone https://example.com/org/repo.git")
            .unwrap();
        let out = shell.run_line("git list").unwrap();
        let mut lines = out.lines();
        let header = lines.next().unwrap();
        let row = lines.next().unwrap();
        assert_eq!(header.find("STATUS"), Some(21));
        assert_eq!(header.find("URL"), Some(30));
        assert_eq!(row.find("cloned"), Some(21));
        assert_eq!(row.find("https://"), Some(30));
    }

    #[test]
    fn config_echoes_name_and_email_values() {
        let mut shell = test_shell();
        assert_eq!(
            shell.run_line("git config --global user.name Ada Lovelace").unwrap(),
            "Updated global user.name to 'Ada Lovelace'"
        );
        assert_eq!(
            shell.run_line("git config --global user.email ada@lab").unwrap(),
            "Updated global user.email to 'ada@lab'"
        );
    }

    #[test]
    fn config_other_shapes_are_usage() {
        let mut shell = test_shell();
        for line in [
            "git config",
            "git config user.name Ada",
            "git config --global core.editor vim",
            "git config --global user.name",
        ] {
            let out = shell.run_line(line).unwrap();
            assert!(out.contains("usage: git config"), "accepted: {line}");
        }
    }

    #[test]
    fn unknown_subcommand_prints_usage_summary() {
        let mut shell = test_shell();
        let out = shell.run_line("git push").unwrap();
        assert!(out.starts_with("usage: git <command>"));
        let bare = shell.run_line("git").unwrap();
        assert!(bare.starts_with("usage: git <command>"));
    }
}
