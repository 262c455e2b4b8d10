//! Rendering of command results for stdout

use ticketbranch_git::{BranchInfo, CreatedBranch};

/// Plain-text branch summary: the name, then one block per commit
#[must_use]
pub fn render_branch_info(info: &BranchInfo) -> String {
    let mut out = format!("{}\n", info.name);
    for commit in &info.commits {
        out.push('\n');
        for line in commit.message.lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
        if !commit.issues.is_empty() {
            out.push_str(&format!("    issues: {}\n", commit.issues.join(", ")));
        }
    }
    out
}

/// JSON branch summary
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_branch_info_json(info: &BranchInfo) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(info)
}

/// One-line report of a created branch, plus a stash reminder when needed
#[must_use]
pub fn render_created_branch(created: &CreatedBranch) -> String {
    let mut out = format!(
        "Switched to new branch '{}' at {} ({})\n",
        created.name,
        short(&created.start),
        created.base_ref
    );
    if let Some(stash) = &created.stash {
        out.push_str(&format!(
            "Local changes were stashed as {}; run `git stash pop` to restore them\n",
            short(stash)
        ));
    }
    out
}

fn short(sha: &str) -> &str {
    &sha[..7.min(sha.len())]
}
