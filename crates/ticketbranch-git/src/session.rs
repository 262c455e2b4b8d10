// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository session
//!
//! A [`Session`] owns the single open repository the tool works on. It can
//! only be obtained from [`Session::init`] (or [`Session::with_engine`]), so
//! every operation runs against an initialized repository.
//!
//! Each operation runs its engine steps on the blocking thread pool while
//! holding the engine lock, so steps of one operation never interleave with
//! another's. Callers are still expected to run one operation at a time.

use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::engine::{Git2Engine, GitEngine};
use crate::error::GitError;
use crate::history::{self, BranchInfo};
use crate::naming::issue_from_branch_name;
use crate::settings::GitSettings;
use crate::workflow::{self, CreatedBranch};

/// An initialized repository plus the settings it is used with
pub struct Session<E = Git2Engine> {
    engine: Arc<Mutex<E>>,
    settings: GitSettings,
}

impl Session<Git2Engine> {
    /// Open the repository at `path`
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` carrying the path if the
    /// repository cannot be opened.
    pub async fn init(path: impl AsRef<Path>, settings: GitSettings) -> Result<Self, GitError> {
        let path = path.as_ref().to_path_buf();
        debug!(path = %path.display(), "Initializing repository");

        let engine = tokio::task::spawn_blocking(move || Git2Engine::open(&path))
            .await
            .map_err(|e| GitError::Task(e.to_string()))??;
        Ok(Self::with_engine(engine, settings))
    }
}

impl<E: GitEngine + Send + 'static> Session<E> {
    /// Wrap an already opened engine
    #[must_use]
    pub fn with_engine(engine: E, settings: GitSettings) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            settings,
        }
    }

    /// Settings this session was created with
    #[must_use]
    pub fn settings(&self) -> &GitSettings {
        &self.settings
    }

    /// Create and check out the branch for `issue` from the remote tip
    ///
    /// Local changes are stashed first and left stashed.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step; earlier steps are not
    /// undone.
    pub async fn create_issue_branch(&self, issue: &str) -> Result<CreatedBranch, GitError> {
        let settings = self.settings.clone();
        let issue = issue.to_string();
        self.run(move |engine| workflow::create_issue_branch(engine, &settings, &issue))
            .await
    }

    /// Push the current branch to the hosting service
    ///
    /// Pushing is not implemented; the settings are handed back unchanged and
    /// nothing leaves the machine.
    ///
    /// # Errors
    ///
    /// Currently never fails.
    pub async fn push_branch(&self, settings: GitSettings) -> Result<GitSettings, GitError> {
        info!(remote = %settings.remote, "Pushing branches is not implemented; nothing was pushed");
        Ok(settings)
    }

    /// Issue identifier encoded in the checked out branch's name
    ///
    /// # Errors
    ///
    /// Returns `GitError::DetachedHead` if no branch is checked out, or
    /// `GitError::NoIssueInBranch` if its name carries no issue.
    pub async fn issue_from_current_branch(&self) -> Result<String, GitError> {
        self.run(|engine| {
            let branch = engine.head_branch_name()?;
            debug!(%branch, "Extracting issue from current branch");
            issue_from_branch_name(&branch)
        })
        .await
    }

    /// Commits of the checked out branch relative to `<remote>/<branch>`
    ///
    /// # Errors
    ///
    /// Returns `GitError::NoChanges` when HEAD is the remote tip, or the
    /// engine error of a failed lookup.
    pub async fn branch_info(&self) -> Result<BranchInfo, GitError> {
        self.branch_info_against(&self.settings.base_ref()).await
    }

    /// Commits of the checked out branch relative to an arbitrary base
    ///
    /// # Errors
    ///
    /// See [`Session::branch_info`].
    pub async fn branch_info_against(&self, base_ref: &str) -> Result<BranchInfo, GitError> {
        let base_ref = base_ref.to_string();
        self.run(move |engine| history::branch_info(engine, &base_ref))
            .await
    }

    async fn run<T, F>(&self, op: F) -> Result<T, GitError>
    where
        F: FnOnce(&mut E) -> Result<T, GitError> + Send + 'static,
        T: Send + 'static,
    {
        let engine = Arc::clone(&self.engine);
        tokio::task::spawn_blocking(move || {
            let mut guard = engine
                .lock()
                .map_err(|_| GitError::Task("repository session lock poisoned".to_string()))?;
            op(&mut *guard)
        })
        .await
        .map_err(|e| GitError::Task(e.to_string()))?
    }
}
