//! Entity model for the simulated control plane.
//!
//! Three independent collections, each keyed by a human-chosen unique name:
//! instances, repository clones, and SSH key records. Entities store identity
//! and status only -- telemetry is synthesized fresh on every query and never
//! persisted.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Instance
// ---------------------------------------------------------------------------

/// Lifecycle state of a simulated instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceStatus {
    Running,
    Stopped,
}

impl fmt::Display for InstanceStatus {
    // f.pad so table columns can apply width specifiers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
        })
    }
}

/// Resource category of a simulated instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceKind {
    Compute,
    Database,
    Storage,
    Network,
    Security,
}

impl InstanceKind {
    /// All valid kinds, for usage messages.
    pub const ALL: [InstanceKind; 5] = [
        Self::Compute,
        Self::Database,
        Self::Storage,
        Self::Network,
        Self::Security,
    ];
}

impl fmt::Display for InstanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Compute => "compute",
            Self::Database => "database",
            Self::Storage => "storage",
            Self::Network => "network",
            Self::Security => "security",
        })
    }
}

impl FromStr for InstanceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "compute" => Ok(Self::Compute),
            "database" => Ok(Self::Database),
            "storage" => Ok(Self::Storage),
            "network" => Ok(Self::Network),
            "security" => Ok(Self::Security),
            other => Err(format!("invalid instance kind: {other}")),
        }
    }
}

/// A simulated cloud resource with a lifecycle but no real provisioning.
///
/// `name` is the unique lookup key; `id` is assigned once at creation and
/// is a display attribute only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub id: String,
    pub name: String,
    pub status: InstanceStatus,
    pub kind: InstanceKind,
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

/// Clone state of a simulated repository.
///
/// The simulated clone always completes synchronously, so live sessions only
/// ever hold `Cloned`; the other states exist for the wire-compatible status
/// column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoStatus {
    Cloned,
    Cloning,
    Error,
}

impl fmt::Display for RepoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Cloned => "cloned",
            Self::Cloning => "cloning",
            Self::Error => "error",
        })
    }
}

/// A simulated clone record: metadata only, no file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Unique key, derived from the URL's final path segment with a
    /// trailing ".git" stripped.
    pub name: String,
    pub url: String,
    pub status: RepoStatus,
}

/// Derive a repository name from a clone URL.
pub fn repo_name_from_url(url: &str) -> String {
    let last = url.trim_end_matches('/').rsplit('/').next().unwrap_or(url);
    last.strip_suffix(".git").unwrap_or(last).to_string()
}

// ---------------------------------------------------------------------------
// KeyRecord
// ---------------------------------------------------------------------------

/// Simulated SSH key pair metadata. Never a real cryptographic key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    /// The comment/label, unique key.
    pub name: String,
    /// Synthesized public key line.
    pub public_key: String,
    /// 16 colon-separated two-hex-digit octets.
    pub fingerprint: String,
    /// Creation timestamp, preformatted.
    pub created_at: String,
}

// ---------------------------------------------------------------------------
// TranscriptEntry
// ---------------------------------------------------------------------------

/// One executed command in the session log: raw input, produced output,
/// and the timestamp of execution. Appended in arrival order, removed only
/// by the explicit clear command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub input: String,
    pub output: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_status_display() {
        assert_eq!(InstanceStatus::Running.to_string(), "running");
        assert_eq!(InstanceStatus::Stopped.to_string(), "stopped");
    }

    #[test]
    fn instance_kind_display_all_variants() {
        let rendered: Vec<String> = InstanceKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            rendered,
            ["compute", "database", "storage", "network", "security"]
        );
    }

    #[test]
    fn instance_kind_parse_roundtrip() {
        for kind in InstanceKind::ALL {
            assert_eq!(kind.to_string().parse::<InstanceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn instance_kind_parse_rejects_unknown() {
        assert!("quantum".parse::<InstanceKind>().is_err());
        assert!("Compute".parse::<InstanceKind>().is_err());
        assert!("".parse::<InstanceKind>().is_err());
    }

    #[test]
    fn repo_status_display() {
        assert_eq!(RepoStatus::Cloned.to_string(), "cloned");
        assert_eq!(RepoStatus::Cloning.to_string(), "cloning");
        assert_eq!(RepoStatus::Error.to_string(), "error");
    }

    #[test]
    fn display_honors_width_specifiers() {
        assert_eq!(format!("{:<10}", InstanceKind::Compute), "compute   ");
        assert_eq!(format!("{:<8}", RepoStatus::Cloned), "cloned  ");
        assert_eq!(format!("{:<9}", InstanceStatus::Running), "running  ");
        assert_eq!(format!("{:>9}", InstanceStatus::Stopped), "  stopped");
    }

    #[test]
    fn repo_name_strips_git_suffix() {
        assert_eq!(
            repo_name_from_url("https://example.com/org/repo.git"),
            "repo"
        );
    }

    #[test]
    fn repo_name_without_git_suffix() {
        assert_eq!(repo_name_from_url("https://example.com/org/repo"), "repo");
    }

    #[test]
    fn repo_name_trailing_slash() {
        assert_eq!(repo_name_from_url("https://example.com/org/repo/"), "repo");
    }

    #[test]
    fn repo_name_bare_token() {
        assert_eq!(repo_name_from_url("dotfiles.git"), "dotfiles");
    }

    #[test]
    fn instance_clone_equality() {
        let a = Instance {
            id: "k3jd9s2f".into(),
            name: "web-1".into(),
            status: InstanceStatus::Stopped,
            kind: InstanceKind::Compute,
        };
        assert_eq!(a, a.clone());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn repo_name_has_no_slash(url in "[a-z0-9./-]{1,40}") {
                let name = repo_name_from_url(&url);
                prop_assert!(!name.contains('/'), "derived name contains /: {name}");
            }

            #[test]
            fn repo_name_strips_git_suffix_from_any_stem(stem in "[a-z0-9-]{1,16}") {
                let url = format!("https://example.com/org/{stem}.git");
                prop_assert_eq!(repo_name_from_url(&url), stem);
            }

            #[test]
            fn repo_name_ignores_trailing_slashes(
                stem in "[a-z0-9-]{1,16}",
                slashes in 0usize..4,
            ) {
                let url = format!("https://example.com/{stem}{}", "/".repeat(slashes));
                prop_assert_eq!(repo_name_from_url(&url), stem);
            }

            #[test]
            fn kind_display_parse_roundtrip(idx in 0usize..5) {
                let kind = InstanceKind::ALL[idx];
                prop_assert_eq!(kind.to_string().parse::<InstanceKind>().unwrap(), kind);
            }

            #[test]
            fn kind_parse_accepts_exactly_the_canonical_names(s in "[A-Za-z]{1,12}") {
                let canonical = InstanceKind::ALL.iter().any(|k| k.to_string() == s);
                prop_assert_eq!(s.parse::<InstanceKind>().is_ok(), canonical);
            }
        }
    }
}
