//! Session state: the three entity collections, the transcript, and the
//! current working path.
//!
//! Single writer (the dispatcher), single lifecycle: created empty at
//! session start, discarded at session end. Collections are keyed by name;
//! BTreeMap iteration gives deterministic sorted listings.

use std::collections::BTreeMap;

use nimbus_types::model::{Instance, KeyRecord, Repository, TranscriptEntry};

/// Process-scoped mutable state for one interactive session.
pub struct Session {
    cwd: String,
    instances: BTreeMap<String, Instance>,
    repositories: BTreeMap<String, Repository>,
    keys: BTreeMap<String, KeyRecord>,
    transcript: Vec<TranscriptEntry>,
}

impl Session {
    /// Create an empty session rooted at the given working path.
    pub fn new(home: &str) -> Self {
        Self {
            cwd: home.to_string(),
            instances: BTreeMap::new(),
            repositories: BTreeMap::new(),
            keys: BTreeMap::new(),
            transcript: Vec::new(),
        }
    }

    // -- Working path --

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Set the working path to the literal argument. No validation -- the
    /// filesystem is simulated.
    pub fn set_cwd(&mut self, path: &str) {
        self.cwd = path.to_string();
    }

    // -- Instances --

    /// Insert an instance. Returns `false` (without mutating) if the name
    /// is already taken.
    pub fn add_instance(&mut self, instance: Instance) -> bool {
        if self.instances.contains_key(&instance.name) {
            return false;
        }
        self.instances.insert(instance.name.clone(), instance);
        true
    }

    pub fn instance(&self, name: &str) -> Option<&Instance> {
        self.instances.get(name)
    }

    pub fn instance_mut(&mut self, name: &str) -> Option<&mut Instance> {
        self.instances.get_mut(name)
    }

    pub fn remove_instance(&mut self, name: &str) -> Option<Instance> {
        self.instances.remove(name)
    }

    /// All instances, sorted by name.
    pub fn instances(&self) -> impl Iterator<Item = &Instance> {
        self.instances.values()
    }

    // -- Repositories --

    /// Insert a repository. Returns `false` (without mutating) if the name
    /// is already taken.
    pub fn add_repository(&mut self, repo: Repository) -> bool {
        if self.repositories.contains_key(&repo.name) {
            return false;
        }
        self.repositories.insert(repo.name.clone(), repo);
        true
    }

    pub fn repository(&self, name: &str) -> Option<&Repository> {
        self.repositories.get(name)
    }

    /// All repositories, sorted by name.
    pub fn repositories(&self) -> impl Iterator<Item = &Repository> {
        self.repositories.values()
    }

    // -- Key records --

    /// Insert a key record. Returns `false` (without mutating) if the name
    /// is already taken.
    pub fn add_key(&mut self, key: KeyRecord) -> bool {
        if self.keys.contains_key(&key.name) {
            return false;
        }
        self.keys.insert(key.name.clone(), key);
        true
    }

    pub fn key(&self, name: &str) -> Option<&KeyRecord> {
        self.keys.get(name)
    }

    pub fn remove_key(&mut self, name: &str) -> Option<KeyRecord> {
        self.keys.remove(name)
    }

    /// All key records, sorted by name.
    pub fn keys(&self) -> impl Iterator<Item = &KeyRecord> {
        self.keys.values()
    }

    // -- Transcript --

    pub fn append_transcript(&mut self, entry: TranscriptEntry) {
        self.transcript.push(entry);
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    /// Collection sizes (instances, repositories, keys) for the host's
    /// status summary.
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.instances.len(),
            self.repositories.len(),
            self.keys.len(),
        )
    }
}
