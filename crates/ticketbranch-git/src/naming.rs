// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Issue identifier and branch name conversion
//!
//! Issue branches are named `feature/<PROJECT>-<NUMBER>`. The issue is read
//! back from the last path segment of a branch name and reported in footer
//! form, `#<PROJECT>-<NUMBER>`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::GitError;

/// Prefix of every branch created for an issue
pub const BRANCH_PREFIX: &str = "feature/";

static ISSUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([A-Za-z][A-Za-z0-9]*)-(\d+)$").expect("Failed to compile issue regex")
});

static BRANCH_ISSUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z][A-Za-z0-9]*)-(\d+)").expect("Failed to compile branch issue regex")
});

/// Branch name for an issue identifier such as `#abc-123` or `ABC-123`
///
/// # Errors
///
/// Returns `GitError::InvalidIssue` if the input is not `<PROJECT>-<NUMBER>`.
pub fn create_branch_name(issue: &str) -> Result<String, GitError> {
    let captures = ISSUE_PATTERN
        .captures(issue.trim())
        .ok_or_else(|| GitError::InvalidIssue {
            issue: issue.to_string(),
        })?;
    Ok(format!(
        "{BRANCH_PREFIX}{}-{}",
        captures[1].to_uppercase(),
        &captures[2]
    ))
}

/// Issue identifier carried by a branch name, e.g. `#ABC-123`
///
/// # Errors
///
/// Returns `GitError::NoIssueInBranch` if no `<PROJECT>-<NUMBER>` token is found.
pub fn issue_from_branch_name(branch: &str) -> Result<String, GitError> {
    let segment = branch.rsplit('/').next().unwrap_or(branch);
    BRANCH_ISSUE_PATTERN
        .captures(segment)
        .map(|caps| format!("#{}-{}", caps[1].to_uppercase(), &caps[2]))
        .ok_or_else(|| GitError::NoIssueInBranch {
            branch: branch.to_string(),
        })
}
