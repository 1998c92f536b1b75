//! The `directory` command: add paths to the workspace, show the set.

use anteroom_admission::{AdmissionError, DecisionHandler, PendingAdmission, await_decision};
use anteroom_core::UserMessage;

use crate::session::Session;

/// Split a comma-separated argument string, dropping blank tokens.
fn split_paths(args: &str) -> Vec<String> {
    args.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// `directory add`: admit comma-separated paths into the workspace.
///
/// Structural rejections (no paths, restrictive sandbox) emit a single
/// ERROR and leave all state untouched. Unknown-trust paths suspend on
/// the interactive dialog before the completion report.
pub(crate) async fn add(session: &Session, args: &str, dialog: &dyn DecisionHandler) {
    let paths = split_paths(args);
    if paths.is_empty() {
        session.emit(UserMessage::error(
            AdmissionError::NoPathsProvided.to_string(),
        ));
        return;
    }

    if session.config().restrictive_sandbox {
        session.emit(UserMessage::error(
            AdmissionError::RestrictiveSandbox.to_string(),
        ));
        return;
    }

    let outcome = session.controller().admit(
        &paths,
        session.workspace_trusted(),
        session.config().folder_trust_enabled,
    );

    if outcome.has_pending() {
        let pending = PendingAdmission::from_outcome(outcome, false);
        await_decision(
            pending,
            dialog,
            session.workspace(),
            session.reporter(),
            None,
        )
        .await;
    } else {
        session
            .reporter()
            .finish(&outcome.added, outcome.errors, false)
            .await;
    }
}

/// `directory show`: list the active workspace directories.
pub(crate) fn show(session: &Session) {
    let listing = session
        .workspace()
        .directories()
        .iter()
        .map(|dir| format!("- {dir}"))
        .collect::<Vec<_>>()
        .join("\n");
    session.emit(UserMessage::info(format!(
        "Current workspace directories:\n{listing}"
    )));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use anteroom_admission::{PendingQueue, TrustDecision};
    use anteroom_core::{
        MessageKind, MessageSink, NormalizedPath, UserMessage, normalize_with_home,
    };
    use anteroom_trust::{TrustStore, TrustVerdict};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingSink {
        messages: Mutex<Vec<UserMessage>>,
    }

    impl RecordingSink {
        fn messages(&self) -> Vec<UserMessage> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl MessageSink for RecordingSink {
        fn emit(&self, message: UserMessage) {
            self.messages.lock().unwrap().push(message);
        }
    }

    #[derive(Default)]
    struct CountingTrustStore {
        lookups: AtomicUsize,
    }

    impl CountingTrustStore {
        fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    impl TrustStore for CountingTrustStore {
        fn verdict(&self, _path: &NormalizedPath) -> TrustVerdict {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            TrustVerdict::Unknown
        }
    }

    struct NoDialog;

    #[async_trait]
    impl DecisionHandler for NoDialog {
        async fn decide(&self, _folders: &[String]) -> Option<TrustDecision> {
            None
        }
    }

    fn session(
        config: SessionConfig,
        store: Arc<CountingTrustStore>,
        sink: Arc<RecordingSink>,
        root: &TempDir,
    ) -> Session {
        Session::assemble(
            config,
            normalize_with_home(root.path().to_str().unwrap(), None),
            store as _,
            Arc::new(PendingQueue::new()),
            None,
            sink as _,
        )
    }

    #[tokio::test]
    async fn blank_only_input_rejects_without_touching_state() {
        let root = TempDir::new().unwrap();
        let store = Arc::new(CountingTrustStore::default());
        let sink = Arc::new(RecordingSink::default());
        let session = session(
            SessionConfig::default(),
            Arc::clone(&store),
            Arc::clone(&sink),
            &root,
        );

        add(&session, " , ,", &NoDialog).await;

        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, MessageKind::Error);
        assert_eq!(messages[0].text, "Please provide at least one path to add.");
        assert_eq!(session.workspace().len(), 1); // root only
        assert_eq!(store.lookups(), 0);
    }

    #[tokio::test]
    async fn restrictive_sandbox_rejects_before_any_path() {
        let root = TempDir::new().unwrap();
        let dir = TempDir::new().unwrap();
        let store = Arc::new(CountingTrustStore::default());
        let sink = Arc::new(RecordingSink::default());
        let config = SessionConfig {
            restrictive_sandbox: true,
            ..SessionConfig::default()
        };
        let session = session(config, Arc::clone(&store), Arc::clone(&sink), &root);

        add(&session, &dir.path().display().to_string(), &NoDialog).await;

        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, MessageKind::Error);
        assert_eq!(
            messages[0].text,
            "The directory add command is not supported in restrictive sandbox profiles. Please use --include-directories when starting the session instead."
        );
        assert_eq!(session.workspace().len(), 1);
        assert_eq!(store.lookups(), 0);
    }

    #[test]
    fn split_paths_drops_blank_tokens() {
        assert_eq!(split_paths("/a, ,/b,,"), vec![
            "/a".to_owned(),
            "/b".to_owned()
        ]);
        assert!(split_paths("").is_empty());
        assert!(split_paths(" , ,").is_empty());
    }

    #[test]
    fn split_paths_trims_whitespace() {
        assert_eq!(split_paths("  ~/x ,\t/y "), vec![
            "~/x".to_owned(),
            "/y".to_owned()
        ]);
    }
}
