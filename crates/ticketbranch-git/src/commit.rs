//! Commits visited by the history walker

use serde::{Deserialize, Serialize};

use crate::message::{ParsedCommit, parse_commit_message};

/// Read-only projection of a commit visited by the history walker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit SHA (40 hex characters)
    pub sha: String,
    /// Raw commit message; bytes that are not UTF-8 are replaced
    pub message: String,
    /// Parent commit SHAs
    pub parents: Vec<String>,
}

impl Commit {
    /// Build the projection from a git2 commit
    #[must_use]
    pub fn from_git2(git_commit: &git2::Commit<'_>) -> Self {
        Self {
            sha: git_commit.id().to_string(),
            message: String::from_utf8_lossy(git_commit.message_bytes()).into_owned(),
            parents: git_commit.parent_ids().map(|id| id.to_string()).collect(),
        }
    }

    /// Split the message into body and referenced issues
    #[must_use]
    pub fn parse(&self) -> ParsedCommit {
        parse_commit_message(&self.message)
    }
}
