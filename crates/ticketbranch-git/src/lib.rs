// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! ticketbranch-git: issue branch workflow and history reconstruction
//!
//! This library crate creates feature branches for issue tickets, synced to
//! the remote's default branch, and rebuilds the list of commits (with the
//! issues their footers reference) that a branch adds on top of that base.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use ticketbranch_git::{GitSettings, Session};
//!
//! # async fn run() -> Result<(), ticketbranch_git::GitError> {
//! let session = Session::init(".", GitSettings::default()).await?;
//! session.create_issue_branch("#ABC-123").await?;
//!
//! let info = session.branch_info().await?;
//! for commit in &info.commits {
//!     println!("{} {:?}", commit.message, commit.issues);
//! }
//! # Ok(())
//! # }
//! ```

pub mod commit;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod history;
pub mod message;
pub mod naming;
pub mod session;
pub mod settings;
pub mod workflow;

#[cfg(test)]
mod testing;

pub use commit::Commit;
pub use engine::{Git2Engine, GitEngine};
pub use error::GitError;
pub use fetch::FetchSettings;
pub use history::{BranchInfo, branch_info, commits_since_base, parsed_history};
pub use message::{ParsedCommit, parse_commit_message};
pub use naming::{create_branch_name, issue_from_branch_name};
pub use session::Session;
pub use settings::GitSettings;
pub use workflow::{CreatedBranch, create_issue_branch};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::GitError;
    pub use crate::history::BranchInfo;
    pub use crate::message::ParsedCommit;
    pub use crate::session::Session;
    pub use crate::settings::GitSettings;
}
