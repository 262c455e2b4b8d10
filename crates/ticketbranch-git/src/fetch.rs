// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Remote fetch options
//!
//! Credentials are always resolved through the local SSH agent. Server
//! certificates are validated by libgit2 unless
//! [`FetchSettings::trust_invalid_certificates`] is set.

use git2::{CertificateCheckStatus, Cred, CredentialType, FetchOptions, RemoteCallbacks};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Username used when the remote URL does not carry one
const DEFAULT_SSH_USER: &str = "git";

/// Authentication and trust settings for fetching from a remote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchSettings {
    /// Accept any server certificate without validation
    pub trust_invalid_certificates: bool,
}

impl FetchSettings {
    /// Settings that accept every server certificate
    #[must_use]
    pub fn insecure() -> Self {
        Self {
            trust_invalid_certificates: true,
        }
    }

    /// Build the git2 fetch options for a single fetch
    #[must_use]
    pub fn to_fetch_options(self) -> FetchOptions<'static> {
        let mut callbacks = RemoteCallbacks::new();

        // One agent attempt per fetch.
        let mut agent_attempted = false;
        callbacks.credentials(move |_url, username_from_url, allowed| {
            agent_credentials(username_from_url, allowed, &mut agent_attempted)
        });

        if self.trust_invalid_certificates {
            callbacks.certificate_check(|_cert, host| {
                warn!(host, "Accepting server certificate without validation");
                Ok(CertificateCheckStatus::CertificateOk)
            });
        }

        let mut options = FetchOptions::new();
        options.remote_callbacks(callbacks);
        options
    }
}

/// Answer one libgit2 credential request from the SSH agent
///
/// A username request is answered before any key is offered; the agent key is
/// offered at most once per fetch.
fn agent_credentials(
    username_from_url: Option<&str>,
    allowed: CredentialType,
    agent_attempted: &mut bool,
) -> Result<Cred, git2::Error> {
    let user = username_from_url.unwrap_or(DEFAULT_SSH_USER);
    if allowed.contains(CredentialType::USERNAME) {
        debug!(user, "Answering username request");
        return Cred::username(user);
    }
    if !allowed.contains(CredentialType::SSH_KEY) {
        return Err(git2::Error::from_str(
            "remote requires credentials other than an SSH key",
        ));
    }
    if *agent_attempted {
        return Err(git2::Error::from_str(
            "SSH agent authentication failed; is a key loaded in the agent?",
        ));
    }
    *agent_attempted = true;

    debug!(user, "Getting authentication from SSH agent");
    Cred::ssh_key_from_agent(user)
}
