//! Command dispatch
//!
//! Commands return their stdout text instead of printing it, so the binary
//! decides where output goes and tests can inspect it directly.

use anyhow::Context;
use ticketbranch_git::{GitEngine, Session};
use tracing::{debug, info};

use crate::config::{Command, Config};
use crate::output;

/// Printed by `info` when HEAD sits on the remote tip
pub const NOTHING_TO_SUMMARIZE: &str = "Nothing to summarize: HEAD is at the remote branch\n";

/// Validate `config`, open the repository and run its command
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the repository cannot
/// be opened, or the command fails.
pub async fn run(config: &Config) -> anyhow::Result<String> {
    config.validate()?;
    let repo = config
        .repo_path()
        .context("Could not determine the repository path")?;
    debug!(repo = %repo.display(), command = ?config.command, "Running command");

    let session = Session::init(&repo, config.git_settings()).await?;
    execute(&session, &config.command).await
}

/// Run a single command against an open session
///
/// # Errors
///
/// Returns the session error of the failed operation. `info` on a branch
/// without commits of its own is not an error.
pub async fn execute<E>(session: &Session<E>, command: &Command) -> anyhow::Result<String>
where
    E: GitEngine + Send + 'static,
{
    match command {
        Command::Start { issue } => {
            let created = session
                .create_issue_branch(issue)
                .await
                .with_context(|| format!("Failed to start a branch for {issue}"))?;
            Ok(output::render_created_branch(&created))
        }
        Command::Info { json } => {
            let info = match session.branch_info().await {
                Ok(info) => info,
                Err(e) if e.is_no_changes() => {
                    info!("{e}");
                    return Ok(NOTHING_TO_SUMMARIZE.to_string());
                }
                Err(e) => return Err(e).context("Failed to summarize the current branch"),
            };
            if *json {
                let mut rendered = output::render_branch_info_json(&info)?;
                rendered.push('\n');
                Ok(rendered)
            } else {
                Ok(output::render_branch_info(&info))
            }
        }
        Command::Issue => {
            let issue = session.issue_from_current_branch().await?;
            Ok(format!("{issue}\n"))
        }
        Command::Push => {
            let settings = session.push_branch(session.settings().clone()).await?;
            Ok(format!(
                "Nothing pushed to {}: pushing is not implemented\n",
                settings.remote
            ))
        }
    }
}
