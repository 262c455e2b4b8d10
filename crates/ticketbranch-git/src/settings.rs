// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Settings for the `git` namespace: which remote and default branch new
//! issue branches start from, and how to fetch them.

use serde::{Deserialize, Serialize};

use crate::fetch::FetchSettings;

/// Remote used when none is configured
pub const DEFAULT_REMOTE: &str = "origin";

/// Default branch used when none is configured
pub const DEFAULT_BRANCH: &str = "master";

/// Remote and default branch the workflow syncs against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitSettings {
    /// Name of the remote to fetch from
    pub remote: String,
    /// Default branch on that remote
    pub branch: String,
    /// Fetch authentication and trust settings
    #[serde(default)]
    pub fetch: FetchSettings,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            fetch: FetchSettings::default(),
        }
    }
}

impl GitSettings {
    /// Create settings for a remote and default branch
    #[must_use]
    pub fn new(remote: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            branch: branch.into(),
            ..Default::default()
        }
    }

    /// Replace the fetch settings
    #[must_use]
    pub fn with_fetch(mut self, fetch: FetchSettings) -> Self {
        self.fetch = fetch;
        self
    }

    /// Remote-tracking reference of the default branch, e.g. `origin/master`
    #[must_use]
    pub fn base_ref(&self) -> String {
        format!("{}/{}", self.remote, self.branch)
    }
}
