// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Version-control engine primitives
//!
//! The workflow and history modules only talk to git through the
//! [`GitEngine`] trait. [`Git2Engine`] is the `git2` implementation used in
//! production.

use std::path::Path;

use git2::{BranchType, ErrorCode, Oid, Repository, Sort, StashFlags, StatusOptions};
use tracing::debug;

use crate::commit::Commit;
use crate::error::GitError;
use crate::fetch::FetchSettings;

/// Blocking repository primitives used by the issue branch workflow
pub trait GitEngine {
    /// Fetch all configured refspecs of `remote`
    fn fetch(&mut self, remote: &str, settings: &FetchSettings) -> Result<(), GitError>;

    /// Whether the working tree has modified or untracked files
    fn is_worktree_dirty(&self) -> Result<bool, GitError>;

    /// Stash every change, untracked files included, returning the stash commit
    fn stash_all(&mut self, message: &str) -> Result<Oid, GitError>;

    /// Resolve a reference such as `origin/master` or a SHA to a commit
    fn resolve_commit(&self, reference: &str) -> Result<Oid, GitError>;

    /// Create a local branch pointing at `start`
    fn create_branch(&mut self, name: &str, start: Oid) -> Result<(), GitError>;

    /// Check out a local branch and move HEAD to it
    fn checkout_branch(&mut self, name: &str) -> Result<(), GitError>;

    /// Best common ancestor of two commits
    fn merge_base(&self, one: Oid, two: Oid) -> Result<Oid, GitError>;

    /// Commits reachable from `tip`, newest first, up to but excluding `stop`
    fn walk_until(&self, tip: Oid, stop: Oid) -> Result<Vec<Commit>, GitError>;

    /// Commit HEAD points at
    fn head_commit(&self) -> Result<Oid, GitError>;

    /// Short name of the checked out branch
    fn head_branch_name(&self) -> Result<String, GitError>;
}

/// A git repository opened through `git2`
pub struct Git2Engine {
    repo: Repository,
}

impl Git2Engine {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }
}

impl GitEngine for Git2Engine {
    fn fetch(&mut self, remote: &str, settings: &FetchSettings) -> Result<(), GitError> {
        let mut remote = self.repo.find_remote(remote)?;
        let mut options = settings.to_fetch_options();
        // Empty refspec list means "use the remote's configured refspecs".
        let refspecs: [&str; 0] = [];
        remote.fetch(&refspecs, Some(&mut options), None)?;
        Ok(())
    }

    fn is_worktree_dirty(&self) -> Result<bool, GitError> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);
        let statuses = self.repo.statuses(Some(&mut options))?;
        debug!(changed = statuses.len(), "Read working tree status");
        Ok(!statuses.is_empty())
    }

    fn stash_all(&mut self, message: &str) -> Result<Oid, GitError> {
        let signature = self.repo.signature()?;
        let oid = self
            .repo
            .stash_save(&signature, message, Some(StashFlags::INCLUDE_UNTRACKED))?;
        Ok(oid)
    }

    fn resolve_commit(&self, reference: &str) -> Result<Oid, GitError> {
        let commit = self
            .repo
            .revparse_single(reference)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| reference_error(reference, e))?;
        Ok(commit.id())
    }

    fn create_branch(&mut self, name: &str, start: Oid) -> Result<(), GitError> {
        let commit = self.repo.find_commit(start)?;
        self.repo.branch(name, &commit, false)?;
        Ok(())
    }

    fn checkout_branch(&mut self, name: &str) -> Result<(), GitError> {
        let branch = self.repo.find_branch(name, BranchType::Local)?;
        let refname = branch
            .get()
            .name()
            .ok_or_else(|| GitError::InvalidReference {
                reference: name.to_string(),
            })?
            .to_string();
        let target = branch.get().peel_to_commit()?;

        self.repo.checkout_tree(target.as_object(), None)?;
        self.repo.set_head(&refname)?;
        Ok(())
    }

    fn merge_base(&self, one: Oid, two: Oid) -> Result<Oid, GitError> {
        Ok(self.repo.merge_base(one, two)?)
    }

    fn walk_until(&self, tip: Oid, stop: Oid) -> Result<Vec<Commit>, GitError> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(tip)?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            if oid == stop {
                break;
            }
            let git_commit = self.repo.find_commit(oid)?;
            commits.push(Commit::from_git2(&git_commit));
        }

        Ok(commits)
    }

    fn head_commit(&self) -> Result<Oid, GitError> {
        let head = self.repo.head()?;
        Ok(head.peel_to_commit()?.id())
    }

    fn head_branch_name(&self) -> Result<String, GitError> {
        let head = self.repo.head()?;
        if !head.is_branch() {
            return Err(GitError::DetachedHead);
        }
        head.shorthand()
            .map(str::to_string)
            .ok_or(GitError::DetachedHead)
    }
}

/// Unknown or malformed references become `InvalidReference`; every other
/// failure is passed through as an engine error.
fn reference_error(reference: &str, error: git2::Error) -> GitError {
    match error.code() {
        ErrorCode::NotFound | ErrorCode::InvalidSpec => GitError::InvalidReference {
            reference: reference.to_string(),
        },
        _ => GitError::Git2(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::ErrorClass;

    #[test]
    fn test_open_nonexistent_repository() {
        let result = Git2Engine::open("/nonexistent/path");
        match result {
            Err(GitError::RepositoryNotFound { path }) => {
                assert!(path.contains("nonexistent"));
            }
            _ => panic!("Expected RepositoryNotFound error"),
        }
    }

    #[test]
    fn test_missing_reference_is_invalid_reference() {
        let error = git2::Error::new(ErrorCode::NotFound, ErrorClass::Reference, "not found");
        match reference_error("origin/missing", error) {
            GitError::InvalidReference { reference } => assert_eq!(reference, "origin/missing"),
            other => panic!("Expected InvalidReference, got {other:?}"),
        }

        let error = git2::Error::new(ErrorCode::InvalidSpec, ErrorClass::Invalid, "bad spec");
        assert!(matches!(
            reference_error("a..b..c", error),
            GitError::InvalidReference { .. }
        ));
    }

    #[test]
    fn test_storage_failure_is_passed_through() {
        let error = git2::Error::new(ErrorCode::GenericError, ErrorClass::Odb, "corrupt pack");
        match reference_error("origin/master", error) {
            GitError::Git2(inner) => assert_eq!(inner.class(), ErrorClass::Odb),
            other => panic!("Expected Git2 error, got {other:?}"),
        }
    }
}
