//! Interactive trust prompts over dialoguer.

use anteroom_admission::{DecisionHandler, TrustDecision};
use anteroom_core::NormalizedPath;
use async_trait::async_trait;
use colored::Colorize;
use dialoguer::Confirm;
use tracing::debug;

/// Terminal confirmation surface for pending trust decisions.
///
/// Presents the pending folders and asks for one bulk decision. A
/// failed or interrupted prompt counts as the surface going away, which
/// leaves the admission unresolved.
pub(crate) struct DialogTrustPrompt;

#[async_trait]
impl DecisionHandler for DialogTrustPrompt {
    async fn decide(&self, folders: &[String]) -> Option<TrustDecision> {
        let folders = folders.to_vec();
        let decision = tokio::task::spawn_blocking(move || {
            println!();
            println!(
                "{}",
                "Trust required for the following directories:".yellow().bold()
            );
            for folder in &folders {
                println!("  - {folder}");
            }
            let confirmed = Confirm::new()
                .with_prompt("Do you trust these directories?")
                .default(false)
                .interact()
                .ok()?;
            Some(if confirmed {
                TrustDecision::TrustAll
            } else {
                TrustDecision::DenyAll
            })
        })
        .await
        .ok()
        .flatten();

        debug!(?decision, "trust prompt finished");
        decision
    }
}

/// Ask whether the workspace itself should be trusted.
///
/// Used when the configuration leaves the workspace verdict
/// undetermined. Any prompt failure resolves to untrusted.
pub(crate) async fn confirm_workspace_trust(root: &NormalizedPath) -> bool {
    let display = root.to_string();
    tokio::task::spawn_blocking(move || {
        println!();
        println!("{}", "Workspace trust required".yellow().bold());
        println!("  {display}");
        Confirm::new()
            .with_prompt("Do you trust this workspace?")
            .default(false)
            .interact()
            .unwrap_or(false)
    })
    .await
    .unwrap_or(false)
}
