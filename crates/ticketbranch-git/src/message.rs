// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit message parsing
//!
//! Splits a raw commit message into its free-form body and the issue
//! identifiers referenced by a `Closes`/`Fixes` footer line, e.g.
//!
//! ```text
//! Add feature
//!
//! Fixes #JIRA-42, #JIRA-43
//! ```
//!
//! Parsing never fails: a missing or malformed footer yields no issues.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Footer line: `closes`/`fixes` followed by comma-separated
/// `#<word>-<digits>` tokens. Word characters are ASCII only.
static FOOTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(closes|fixes)\s+(#[A-Za-z0-9_]+-\d+(?:,\s*#[A-Za-z0-9_]+-\d+)*)\s*$")
        .expect("Failed to compile commit footer regex")
});

/// A commit message with its issue footer extracted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// Non-empty message lines, footer removed
    pub message: String,
    /// Issue identifiers referenced by the footer, in order of appearance
    pub issues: Vec<String>,
}

impl ParsedCommit {
    /// Whether the commit references any issue
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Parse a raw commit message
#[must_use]
pub fn parse_commit_message(raw: &str) -> ParsedCommit {
    let lines = non_empty_lines(raw);
    let issues = lines.last().map(|footer| footer_issues(footer)).unwrap_or_default();

    // A lone line stays the body even when it is also the footer.
    let body = if !issues.is_empty() && lines.len() > 1 {
        &lines[..lines.len() - 1]
    } else {
        &lines[..]
    };

    ParsedCommit {
        message: body.join("\n"),
        issues,
    }
}

/// Issue identifiers carried by a footer line, or empty if it is not one
#[must_use]
pub fn footer_issues(line: &str) -> Vec<String> {
    FOOTER_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(2))
        .map(|list| {
            list.as_str()
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn non_empty_lines(raw: &str) -> Vec<&str> {
    raw.split('\n')
        .filter(|line| !line.trim_end().is_empty())
        .collect()
}
