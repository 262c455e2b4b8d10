// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for ticketbranch-git

use thiserror::Error;

/// Errors that can occur during git operations
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository could not be opened at the specified path
    #[error("Could not initialize repository: {path}")]
    RepositoryNotFound {
        /// The path that was opened
        path: String,
    },

    /// The current branch and the base reference point at the same commit
    #[error("No changes: HEAD and base both point at {commit}")]
    NoChanges {
        /// The shared commit SHA
        commit: String,
    },

    /// Invalid commit reference (branch, tag, or SHA)
    #[error("Invalid commit reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
    },

    /// HEAD does not point at a named branch
    #[error("HEAD is detached; no current branch")]
    DetachedHead,

    /// An issue identifier that cannot be turned into a branch name
    #[error("Invalid issue identifier: {issue}")]
    InvalidIssue {
        /// The rejected issue identifier
        issue: String,
    },

    /// Branch name carries no issue identifier
    #[error("No issue identifier found in branch: {branch}")]
    NoIssueInBranch {
        /// The branch name that was inspected
        branch: String,
    },

    /// A background git task panicked or was cancelled
    #[error("Git task failed: {0}")]
    Task(String),
}

impl GitError {
    /// Whether this is the "nothing to summarize" condition
    #[must_use]
    pub fn is_no_changes(&self) -> bool {
        matches!(self, Self::NoChanges { .. })
    }
}
