// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Branch history reconstruction
//!
//! Finds the commits a branch adds on top of its base: the merge base of the
//! two tips is computed, the graph is walked back from the branch tip until
//! that ancestor is reached, and the result is returned oldest first.

use git2::Oid;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::commit::Commit;
use crate::engine::GitEngine;
use crate::error::GitError;
use crate::message::ParsedCommit;

/// Summary of the checked out branch relative to its base
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchInfo {
    /// Short name of the branch
    pub name: String,
    /// Commits unique to the branch, oldest first
    pub commits: Vec<ParsedCommit>,
}

impl BranchInfo {
    /// Every issue referenced by the branch, deduplicated, in first-seen order
    #[must_use]
    pub fn issues(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for issue in self.commits.iter().flat_map(|c| c.issues.iter()) {
            if !seen.contains(&issue.as_str()) {
                seen.push(issue);
            }
        }
        seen
    }
}

/// Commits reachable from `tip` but not from its merge base with `base`,
/// oldest first and excluding the merge base itself
///
/// # Errors
///
/// Returns `GitError::NoChanges` if `tip` and `base` are the same commit, or
/// the engine error if the merge base cannot be computed or the walk fails.
pub fn commits_since_base<E: GitEngine + ?Sized>(
    engine: &E,
    tip: Oid,
    base: Oid,
) -> Result<Vec<Commit>, GitError> {
    if tip == base {
        return Err(GitError::NoChanges {
            commit: tip.to_string(),
        });
    }

    let merge_base = engine.merge_base(tip, base)?;
    debug!(%tip, %base, %merge_base, "Walking history back to merge base");

    let mut commits = engine.walk_until(tip, merge_base)?;
    commits.reverse();
    Ok(commits)
}

/// Parsed commits between two references, oldest first
///
/// # Errors
///
/// Returns `GitError::InvalidReference` if either reference does not resolve,
/// plus every error of [`commits_since_base`].
pub fn parsed_history<E: GitEngine + ?Sized>(
    engine: &E,
    tip: &str,
    base: &str,
) -> Result<Vec<ParsedCommit>, GitError> {
    let tip = engine.resolve_commit(tip)?;
    let base = engine.resolve_commit(base)?;
    let commits = commits_since_base(engine, tip, base)?;
    Ok(commits.iter().map(Commit::parse).collect())
}

/// Summarize the checked out branch against `base_ref`
///
/// # Errors
///
/// Fails if HEAD or `base_ref` cannot be resolved, if they point at the same
/// commit (`GitError::NoChanges`), or if HEAD is not on a branch.
pub fn branch_info<E: GitEngine + ?Sized>(
    engine: &E,
    base_ref: &str,
) -> Result<BranchInfo, GitError> {
    debug!(base = base_ref, "Getting branch commit history");
    let head = engine.head_commit()?;
    let base = engine.resolve_commit(base_ref)?;

    let commits: Vec<ParsedCommit> = commits_since_base(engine, head, base)?
        .iter()
        .map(Commit::parse)
        .collect();
    let name = engine.head_branch_name()?;

    info!(branch = %name, commits = commits.len(), "Collected branch history");
    Ok(BranchInfo { name, commits })
}
