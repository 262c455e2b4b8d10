// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Issue branch creation
//!
//! Creating a branch for an issue runs these steps in order, aborting on
//! the first failure:
//!
//! 1. fetch the configured remote
//! 2. stash local changes (untracked files included) if the tree is dirty
//! 3. resolve `<remote>/<branch>`
//! 4. create the issue branch at that commit
//! 5. check the new branch out
//!
//! Completed steps are never rolled back. A stash made in step 2 is left on
//! the stash stack for the user to restore with `git stash pop`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::engine::GitEngine;
use crate::error::GitError;
use crate::naming::create_branch_name;
use crate::settings::GitSettings;

/// Message of stashes created by the workflow
pub const STASH_MESSAGE: &str = "auto generated stash by ticketbranch";

/// Outcome of a successful issue branch creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedBranch {
    /// Name of the new, checked out branch
    pub name: String,
    /// Remote-tracking reference the branch starts from
    pub base_ref: String,
    /// SHA of the commit the branch starts at
    pub start: String,
    /// SHA of the stash holding local changes, if any were stashed
    pub stash: Option<String>,
}

/// Create and check out the branch for `issue`, rooted at the remote tip
///
/// # Errors
///
/// Returns `GitError::InvalidIssue` before touching the repository if the
/// issue cannot be named, otherwise the error of the first failing step.
pub fn create_issue_branch<E: GitEngine + ?Sized>(
    engine: &mut E,
    settings: &GitSettings,
    issue: &str,
) -> Result<CreatedBranch, GitError> {
    let name = create_branch_name(issue)?;
    debug!(issue, branch = %name, "Creating branch for issue");

    debug!(remote = %settings.remote, "Fetching data from remote");
    engine.fetch(&settings.remote, &settings.fetch)?;

    debug!("Getting local repository status");
    let stash = if engine.is_worktree_dirty()? {
        let stash = engine.stash_all(STASH_MESSAGE)?;
        warn!(%stash, "Stashed local changes; restore them with `git stash pop`");
        Some(stash.to_string())
    } else {
        None
    };

    let base_ref = settings.base_ref();
    let start = engine.resolve_commit(&base_ref)?;

    debug!(branch = %name, %start, "Creating new branch");
    engine.create_branch(&name, start)?;
    engine.checkout_branch(&name)?;

    info!(branch = %name, base = %base_ref, "Checked out issue branch");
    Ok(CreatedBranch {
        name,
        base_ref,
        start: start.to_string(),
        stash,
    })
}
