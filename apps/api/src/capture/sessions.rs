use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::capture::capability::SpeechCapability;
use crate::capture::controller::{CaptureController, CaptureState, ToggleOutcome};

/// One capture session exists per interview question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionKey {
    pub interview_id: Uuid,
    pub question_index: usize,
}

/// Point-in-time view of a session, for status responses.
#[derive(Debug, Clone, Copy)]
pub struct SessionSnapshot {
    pub state: CaptureState,
    pub transcript_chars: usize,
}

/// In-memory registry of capture sessions (question key -> controller).
///
/// Sessions are created lazily on the first toggle and evicted once their
/// submission settles; only questions mid-take or holding a retained short
/// take occupy an entry. The lock is never held across an await: a
/// submission extracts its transcript inside the lock, runs outside it,
/// then re-locks to settle.
#[derive(Clone)]
pub struct CaptureSessions {
    capability: SpeechCapability,
    inner: Arc<Mutex<HashMap<QuestionKey, CaptureController>>>,
}

impl CaptureSessions {
    pub fn new(capability: SpeechCapability) -> Self {
        Self {
            capability,
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The capability every session in this registry inherits.
    pub fn capability(&self) -> SpeechCapability {
        self.capability
    }

    /// Toggles the session for `key`, creating it on first use.
    pub async fn toggle(&self, key: QuestionKey) -> ToggleOutcome {
        let mut sessions = self.inner.lock().await;
        sessions
            .entry(key)
            .or_insert_with(|| CaptureController::new(self.capability))
            .toggle()
    }

    /// Relays one transcript fragment to the session for `key`.
    /// Unknown keys are not created: a fragment without a prior toggle can
    /// only belong to a session that is not recording, so it is dropped.
    pub async fn push_fragment(&self, key: QuestionKey, fragment: &str) -> (bool, SessionSnapshot) {
        let mut sessions = self.inner.lock().await;
        match sessions.get_mut(&key) {
            Some(controller) => {
                let accepted = controller.push_fragment(fragment);
                (
                    accepted,
                    SessionSnapshot {
                        state: controller.state(),
                        transcript_chars: controller.transcript_chars(),
                    },
                )
            }
            None => (
                false,
                SessionSnapshot {
                    state: CaptureState::Idle,
                    transcript_chars: 0,
                },
            ),
        }
    }

    /// Reports the session for `key` without creating it.
    pub async fn status(&self, key: QuestionKey) -> SessionSnapshot {
        let sessions = self.inner.lock().await;
        match sessions.get(&key) {
            Some(controller) => SessionSnapshot {
                state: controller.state(),
                transcript_chars: controller.transcript_chars(),
            },
            None => SessionSnapshot {
                state: CaptureState::Idle,
                transcript_chars: 0,
            },
        }
    }

    /// Settles the submission for `key`. A settled session is identical to a
    /// freshly created one, so its entry is evicted instead of kept idle.
    pub async fn finish_submission(&self, key: QuestionKey) {
        let mut sessions = self.inner.lock().await;
        let settled = sessions
            .get_mut(&key)
            .map(|controller| controller.finish_submission())
            .unwrap_or(false);
        if settled {
            sessions.remove(&key);
        }
    }
}
