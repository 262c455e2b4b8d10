// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Scripted in-memory engine for unit tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use git2::Oid;

use crate::commit::Commit;
use crate::engine::GitEngine;
use crate::error::GitError;
use crate::fetch::FetchSettings;

/// Deterministic commit id for position `n` in a scripted history
pub(crate) fn oid(n: usize) -> Oid {
    Oid::from_str(&format!("{:040x}", n + 1)).expect("valid hex oid")
}

/// One recorded engine call
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Fetch(String),
    Status,
    Stash(String),
    Resolve(String),
    CreateBranch(String, Oid),
    Checkout(String),
    MergeBase(Oid, Oid),
    Walk(Oid, Oid),
    HeadCommit,
    HeadBranch,
}

/// Engine over a linear history `0 <- 1 <- ... <- n` with HEAD at `n`
pub(crate) struct RecordingEngine {
    commits: Vec<Commit>,
    refs: HashMap<String, Oid>,
    branches: Vec<String>,
    head_branch: Option<String>,
    merge_base: Oid,
    dirty: bool,
    failing: Option<&'static str>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingEngine {
    pub(crate) fn linear(tip: usize) -> Self {
        let commits = (0..=tip)
            .map(|i| Commit {
                sha: oid(i).to_string(),
                message: format!("Commit {i}"),
                parents: if i == 0 { vec![] } else { vec![oid(i - 1).to_string()] },
            })
            .collect();

        Self {
            commits,
            refs: HashMap::new(),
            branches: Vec::new(),
            head_branch: Some("topic".to_string()),
            merge_base: oid(0),
            dirty: false,
            failing: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn with_messages(mut self, messages: &[(usize, &str)]) -> Self {
        for (i, message) in messages {
            self.commits[*i].message = (*message).to_string();
        }
        self
    }

    pub(crate) fn with_ref(mut self, name: &str, target: Oid) -> Self {
        self.refs.insert(name.to_string(), target);
        self
    }

    pub(crate) fn with_merge_base(mut self, merge_base: Oid) -> Self {
        self.merge_base = merge_base;
        self
    }

    pub(crate) fn with_branch(mut self, name: &str) -> Self {
        self.head_branch = Some(name.to_string());
        self
    }

    pub(crate) fn detached(mut self) -> Self {
        self.head_branch = None;
        self
    }

    pub(crate) fn dirty(mut self) -> Self {
        self.dirty = true;
        self
    }

    /// Make the named step fail with an engine error
    pub(crate) fn failing_at(mut self, step: &'static str) -> Self {
        self.failing = Some(step);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("call log").clone()
    }

    /// Shared handle to the call log, usable after the engine is moved
    pub(crate) fn call_log(&self) -> Arc<Mutex<Vec<Call>>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("call log").push(call);
    }

    fn check(&self, step: &str) -> Result<(), GitError> {
        if self.failing == Some(step) {
            return Err(git2::Error::from_str(&format!("{step} failed")).into());
        }
        Ok(())
    }

    fn head(&self) -> Oid {
        oid(self.commits.len() - 1)
    }
}

impl GitEngine for RecordingEngine {
    fn fetch(&mut self, remote: &str, _settings: &FetchSettings) -> Result<(), GitError> {
        self.record(Call::Fetch(remote.to_string()));
        self.check("fetch")
    }

    fn is_worktree_dirty(&self) -> Result<bool, GitError> {
        self.record(Call::Status);
        self.check("status")?;
        Ok(self.dirty)
    }

    fn stash_all(&mut self, message: &str) -> Result<Oid, GitError> {
        self.record(Call::Stash(message.to_string()));
        self.check("stash")?;
        self.dirty = false;
        Ok(oid(999))
    }

    fn resolve_commit(&self, reference: &str) -> Result<Oid, GitError> {
        self.record(Call::Resolve(reference.to_string()));
        self.check("resolve")?;
        self.refs
            .get(reference)
            .copied()
            .ok_or_else(|| GitError::InvalidReference {
                reference: reference.to_string(),
            })
    }

    fn create_branch(&mut self, name: &str, start: Oid) -> Result<(), GitError> {
        self.record(Call::CreateBranch(name.to_string(), start));
        self.check("create_branch")?;
        if self.branches.iter().any(|b| b == name) {
            return Err(git2::Error::from_str(&format!("branch '{name}' already exists")).into());
        }
        self.branches.push(name.to_string());
        Ok(())
    }

    fn checkout_branch(&mut self, name: &str) -> Result<(), GitError> {
        self.record(Call::Checkout(name.to_string()));
        self.check("checkout")?;
        if !self.branches.iter().any(|b| b == name) {
            return Err(GitError::InvalidReference {
                reference: name.to_string(),
            });
        }
        self.head_branch = Some(name.to_string());
        Ok(())
    }

    fn merge_base(&self, one: Oid, two: Oid) -> Result<Oid, GitError> {
        self.record(Call::MergeBase(one, two));
        self.check("merge_base")?;
        Ok(self.merge_base)
    }

    fn walk_until(&self, tip: Oid, stop: Oid) -> Result<Vec<Commit>, GitError> {
        self.record(Call::Walk(tip, stop));
        self.check("walk")?;
        let tip_sha = tip.to_string();
        let stop_sha = stop.to_string();
        let start = self
            .commits
            .iter()
            .position(|c| c.sha == tip_sha)
            .ok_or_else(|| GitError::InvalidReference { reference: tip_sha })?;

        Ok(self.commits[..=start]
            .iter()
            .rev()
            .take_while(|c| c.sha != stop_sha)
            .cloned()
            .collect())
    }

    fn head_commit(&self) -> Result<Oid, GitError> {
        self.record(Call::HeadCommit);
        self.check("head")?;
        Ok(self.head())
    }

    fn head_branch_name(&self) -> Result<String, GitError> {
        self.record(Call::HeadBranch);
        self.head_branch.clone().ok_or(GitError::DetachedHead)
    }
}
