//! Configuration for the ticketbranch command line
//!
//! Every option can also be set through a `TICKETBRANCH_*` environment
//! variable, which is how the `git` settings namespace (remote and default
//! branch) is usually configured per shell or per project.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ticketbranch_git::settings::{DEFAULT_BRANCH, DEFAULT_REMOTE};
use ticketbranch_git::{FetchSettings, GitSettings};

/// Ticketbranch - issue branches synced to the remote default branch
#[derive(Parser, Debug, Clone)]
#[command(name = "ticketbranch")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to the git repository
    ///
    /// Defaults to the current working directory.
    #[arg(short = 'C', long, env = "TICKETBRANCH_REPO", global = true)]
    pub repo: Option<PathBuf>,

    /// Remote that new branches are synced with
    #[arg(long, env = "TICKETBRANCH_REMOTE", default_value = DEFAULT_REMOTE, global = true)]
    pub remote: String,

    /// Default branch on the remote
    #[arg(long, env = "TICKETBRANCH_BRANCH", default_value = DEFAULT_BRANCH, global = true)]
    pub branch: String,

    /// Accept any server certificate when fetching
    ///
    /// Disables TLS certificate validation. Only use this against hosts you
    /// trust on networks you control.
    #[arg(long, env = "TICKETBRANCH_INSECURE", default_value = "false", global = true)]
    pub insecure_skip_cert_check: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value = "false", global = true)]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false", global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the remote and check out a new branch for an issue
    ///
    /// Uncommitted changes (including untracked files) are stashed first and
    /// left in the stash; run `git stash pop` to get them back.
    ///
    /// Example:
    ///   ticketbranch start '#ABC-123'
    Start {
        /// Issue identifier, e.g. `#ABC-123` or `ABC-123`
        issue: String,
    },

    /// List the commits the current branch adds on top of the remote branch
    Info {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the issue identifier encoded in the current branch name
    Issue,

    /// Push the current branch (not implemented yet)
    Push,
}

impl Config {
    /// Get the repository path, using current directory as default
    ///
    /// Returns `None` if no path is specified and the current directory
    /// cannot be determined.
    #[must_use]
    pub fn repo_path(&self) -> Option<PathBuf> {
        self.repo.clone().or_else(|| std::env::current_dir().ok())
    }

    /// Settings for the `git` namespace
    #[must_use]
    pub fn git_settings(&self) -> GitSettings {
        let fetch = if self.insecure_skip_cert_check {
            FetchSettings::insecure()
        } else {
            FetchSettings::default()
        };
        GitSettings::new(&self.remote, &self.branch).with_fetch(fetch)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the repository path is specified but doesn't
    /// exist or isn't a directory, or if the remote or branch is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref repo) = self.repo {
            if !repo.exists() {
                return Err(ConfigError::RepoNotFound(repo.clone()));
            }
            if !repo.is_dir() {
                return Err(ConfigError::RepoNotDirectory(repo.clone()));
            }
        }
        if self.remote.trim().is_empty() {
            return Err(ConfigError::EmptySetting("remote"));
        }
        if self.branch.trim().is_empty() {
            return Err(ConfigError::EmptySetting("branch"));
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    RepoNotFound(PathBuf),

    /// Repository path is not a directory
    #[error("Repository path is not a directory: {0}")]
    RepoNotDirectory(PathBuf),

    /// A required setting is empty
    #[error("Setting must not be empty: {0}")]
    EmptySetting(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["ticketbranch"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).expect("parse should succeed")
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["issue"]);
        assert_eq!(config.command, Command::Issue);
        assert!(config.repo.is_none());
        assert_eq!(config.remote, "origin");
        assert_eq!(config.branch, "master");
        assert!(!config.insecure_skip_cert_check);
        assert!(!config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn test_start_takes_issue() {
        let config = parse(&["start", "#ABC-1"]);
        assert_eq!(
            config.command,
            Command::Start {
                issue: "#ABC-1".to_string()
            }
        );
    }

    #[test]
    fn test_git_settings() {
        let config = parse(&["--remote", "upstream", "--branch", "main", "info"]);
        let settings = config.git_settings();
        assert_eq!(settings.base_ref(), "upstream/main");
        assert!(!settings.fetch.trust_invalid_certificates);
    }

    #[test]
    fn test_insecure_flag() {
        let config = parse(&["start", "ABC-1", "--insecure-skip-cert-check"]);
        assert!(config.git_settings().fetch.trust_invalid_certificates);
    }

    #[test]
    fn test_repo_path_default() {
        let config = parse(&["info"]);
        assert!(config.repo_path().is_some());
    }

    #[test]
    fn test_repo_path_custom() {
        let config = parse(&["-C", "/tmp", "info"]);
        assert_eq!(config.repo_path(), Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(parse(&["info"]).log_level(), tracing::Level::INFO);
        assert_eq!(parse(&["-v", "info"]).log_level(), tracing::Level::DEBUG);
        assert_eq!(parse(&["info", "-q"]).log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_validate_nonexistent_repo() {
        let config = parse(&["-C", "/nonexistent/path/12345", "info"]);
        assert!(matches!(config.validate(), Err(ConfigError::RepoNotFound(_))));
    }

    #[test]
    fn test_validate_empty_remote() {
        let config = parse(&["--remote", " ", "info"]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptySetting("remote"))
        ));
    }

    #[test]
    fn test_validate_valid_repo() {
        let config = parse(&["-C", "/tmp", "info"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Config::try_parse_from(["ticketbranch"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
