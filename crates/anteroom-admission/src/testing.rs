//! Shared stub collaborators for the admission tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anteroom_core::{MessageSink, NormalizedPath, UserMessage};
use anteroom_trust::{TrustStore, TrustVerdict};
use async_trait::async_trait;

use crate::deferred::{DecisionHandler, TrustDecision};
use crate::report::{MemoryLoadRequest, MemoryLoader, MemorySnapshot, SessionNotifier};

/// Message sink that records everything it is given.
#[derive(Default)]
pub(crate) struct RecordingSink {
    messages: Mutex<Vec<UserMessage>>,
}

impl RecordingSink {
    pub(crate) fn messages(&self) -> Vec<UserMessage> {
        self.messages.lock().expect("sink lock").clone()
    }
}

impl MessageSink for RecordingSink {
    fn emit(&self, message: UserMessage) {
        self.messages.lock().expect("sink lock").push(message);
    }
}

/// Trust store that answers `Unknown` and counts its lookups.
#[derive(Default)]
pub(crate) struct CountingTrustStore {
    lookups: AtomicUsize,
}

impl CountingTrustStore {
    pub(crate) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl TrustStore for CountingTrustStore {
    fn verdict(&self, _path: &NormalizedPath) -> TrustVerdict {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        TrustVerdict::Unknown
    }
}

/// Decision handler that replays a fixed decision and records what it
/// was shown.
pub(crate) struct ScriptedHandler {
    decision: Option<TrustDecision>,
    presented: Mutex<Vec<String>>,
}

impl ScriptedHandler {
    pub(crate) fn new(decision: Option<TrustDecision>) -> Self {
        Self {
            decision,
            presented: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn presented(&self) -> Vec<String> {
        self.presented.lock().expect("handler lock").clone()
    }
}

#[async_trait]
impl DecisionHandler for ScriptedHandler {
    async fn decide(&self, folders: &[String]) -> Option<TrustDecision> {
        self.presented
            .lock()
            .expect("handler lock")
            .extend(folders.iter().cloned());
        self.decision
    }
}

/// Memory loader that succeeds with an empty snapshot and remembers the
/// last request it saw.
#[derive(Default)]
pub(crate) struct StaticLoader {
    last: Mutex<Option<MemoryLoadRequest>>,
}

impl StaticLoader {
    pub(crate) fn last_request(&self) -> Option<MemoryLoadRequest> {
        self.last.lock().expect("loader lock").clone()
    }
}

#[async_trait]
impl MemoryLoader for StaticLoader {
    async fn load(&self, request: MemoryLoadRequest) -> anyhow::Result<MemorySnapshot> {
        *self.last.lock().expect("loader lock") = Some(request);
        Ok(MemorySnapshot {
            content: String::new(),
            file_count: 0,
        })
    }
}

/// Memory loader that always fails.
pub(crate) struct FailingLoader;

#[async_trait]
impl MemoryLoader for FailingLoader {
    async fn load(&self, _request: MemoryLoadRequest) -> anyhow::Result<MemorySnapshot> {
        anyhow::bail!("context scan failed")
    }
}

/// Session notifier that counts invocations.
#[derive(Default)]
pub(crate) struct CountingNotifier {
    calls: AtomicUsize,
}

impl CountingNotifier {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionNotifier for CountingNotifier {
    async fn directory_context_changed(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}
