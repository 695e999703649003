//! Per-session dialogue engine
//!
//! Advances one conversation one user message at a time: classifies the
//! input (or feeds it to the active capture step), produces the bot reply,
//! and appends it to the transcript after the simulated typing delay.
//! Turns are serialized per session; the delay and any generation call are
//! raced against session shutdown so a closed session never receives a
//! late reply.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tokio::sync::watch;

use hostel_nexus_core::{ChatMessage, Complaint, StudentProfile};
use hostel_nexus_llm::{GenerationClient, Message, PromptBuilder};
use hostel_nexus_persistence::ComplaintStore;

use crate::capture::{CaptureFlow, CaptureState, CompletedDraft, StepOutcome};
use crate::conversation::Conversation;
use crate::intent::{Intent, IntentClassifier};
use crate::replies;
use crate::AgentError;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Delay before a bot reply is appended to the transcript
    pub typing_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            typing_delay: Duration::from_millis(1000),
        }
    }
}

/// Per-session conversational engine
pub struct ChatEngine {
    session_id: String,
    config: EngineConfig,
    conversation: Conversation,
    capture: Mutex<CaptureFlow>,
    classifier: IntentClassifier,
    complaints: Arc<dyn ComplaintStore>,
    generation: Option<Arc<dyn GenerationClient>>,
    student: RwLock<Option<StudentProfile>>,
    /// Serializes turns so rapid submissions cannot interleave replies
    turn_lock: tokio::sync::Mutex<()>,
    shutdown_tx: watch::Sender<bool>,
}

impl ChatEngine {
    /// Create a new engine bound to a complaint store and an optional
    /// generation client
    pub fn new(
        session_id: impl Into<String>,
        config: EngineConfig,
        complaints: Arc<dyn ComplaintStore>,
        generation: Option<Arc<dyn GenerationClient>>,
    ) -> Self {
        let (shutdown_tx, _) = watch::channel(false);

        Self {
            session_id: session_id.into(),
            config,
            conversation: Conversation::new(),
            capture: Mutex::new(CaptureFlow::new()),
            classifier: IntentClassifier::new(),
            complaints,
            generation,
            student: RwLock::new(None),
            turn_lock: tokio::sync::Mutex::new(()),
            shutdown_tx,
        }
    }

    /// Get session ID
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Current capture state
    pub fn capture_state(&self) -> CaptureState {
        self.capture.lock().state()
    }

    /// Is a complaint draft in progress?
    pub fn is_capturing(&self) -> bool {
        self.capture.lock().is_active()
    }

    /// Transcript snapshot
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.conversation.messages()
    }

    /// Authenticated student, if any
    pub fn student(&self) -> Option<StudentProfile> {
        self.student.read().clone()
    }

    /// Bind or clear the authenticated student
    pub fn set_student(&self, student: Option<StudentProfile>) {
        *self.student.write() = student;
    }

    /// Discard any in-progress draft
    ///
    /// Returns whether a draft was discarded.
    pub fn cancel_capture(&self) -> bool {
        let cancelled = self.capture.lock().cancel();
        if cancelled {
            tracing::debug!(session_id = %self.session_id, "Complaint draft discarded");
        }
        cancelled
    }

    /// Close the session; any pending reply is dropped
    pub fn close(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Has the session been closed?
    pub fn is_closed(&self) -> bool {
        *self.shutdown_tx.borrow()
    }

    /// Process one user message and return the bot reply
    ///
    /// Empty input is suppressed entirely: nothing is appended and `None`
    /// is returned. `None` is also returned when the session closes before
    /// the reply is due.
    pub async fn process_message(&self, input: &str) -> Result<Option<ChatMessage>, AgentError> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let _turn = self.turn_lock.lock().await;
        if self.is_closed() {
            return Ok(None);
        }

        let capturing = self.is_capturing();
        let intent = if capturing {
            None
        } else {
            Some(self.classifier.classify(text))
        };

        let flagged = capturing || intent == Some(Intent::Complaint);
        self.conversation.push_user(text, flagged);

        let reply = if capturing {
            self.advance_capture(text).await?
        } else {
            match intent.unwrap_or(Intent::Fallback) {
                Intent::Complaint => {
                    self.capture.lock().begin();
                    tracing::debug!(session_id = %self.session_id, "Entering complaint capture");
                    replies::TITLE_PROMPT.to_string()
                }
                Intent::Fallback => self.fallback_reply().await,
                other => {
                    tracing::debug!(session_id = %self.session_id, intent = %other, "Canned reply");
                    replies::canned(other)
                        .unwrap_or(replies::FALLBACK)
                        .to_string()
                }
            }
        };

        if !self.wait_typing_delay().await {
            tracing::debug!(session_id = %self.session_id, "Session closed before reply; dropping it");
            return Ok(None);
        }

        Ok(Some(self.conversation.push_bot(reply)))
    }

    /// Feed one turn to the active capture step
    async fn advance_capture(&self, input: &str) -> Result<String, AgentError> {
        let outcome = self.capture.lock().advance(input);

        let reply = match outcome {
            StepOutcome::TitleRecorded => replies::CATEGORY_PROMPT,
            StepOutcome::InvalidCategory => replies::INVALID_CATEGORY_PROMPT,
            StepOutcome::CategoryRecorded => replies::DESCRIPTION_PROMPT,
            StepOutcome::Cancelled => {
                tracing::debug!(session_id = %self.session_id, "Capture cancelled by user");
                replies::CAPTURE_CANCELLED
            }
            StepOutcome::ReadyToSubmit(draft) => return Ok(self.submit(draft).await),
            StepOutcome::NotCapturing => replies::FALLBACK,
        };

        Ok(reply.to_string())
    }

    /// Hand a completed draft to the complaint store
    ///
    /// The one validation gate: an authenticated student must be bound to
    /// the session. The draft is gone either way; no failure here is fatal
    /// to the session.
    async fn submit(&self, draft: CompletedDraft) -> String {
        let Some(student) = self.student() else {
            tracing::info!(
                session_id = %self.session_id,
                "Complaint submission without authenticated student; draft discarded"
            );
            return replies::MISSING_SESSION.to_string();
        };

        let complaint = Complaint::new(student.id, draft.title, draft.description, draft.category);
        let complaint_id = complaint.id.clone();

        match self.complaints.add(complaint).await {
            Ok(()) => {
                tracing::info!(
                    session_id = %self.session_id,
                    complaint_id = %complaint_id,
                    "Complaint submitted"
                );
                replies::CAPTURE_COMPLETE.to_string()
            }
            Err(e) => {
                tracing::error!(
                    session_id = %self.session_id,
                    error = %e,
                    "Complaint store rejected submission"
                );
                replies::SUBMISSION_FAILED.to_string()
            }
        }
    }

    /// Delegate to the generation service, degrading to local text
    async fn fallback_reply(&self) -> String {
        let Some(client) = &self.generation else {
            return replies::FALLBACK.to_string();
        };

        match client.generate(&self.build_prompt()).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    session_id = %self.session_id,
                    error = %e,
                    "Generation call failed; substituting apology"
                );
                replies::GENERATION_APOLOGY.to_string()
            }
        }
    }

    /// Full transcript (current user message included) behind the fixed
    /// system instruction
    fn build_prompt(&self) -> Vec<Message> {
        let history: Vec<Message> = self
            .conversation
            .messages()
            .into_iter()
            .map(|m| {
                if m.is_user() {
                    Message::user(m.text)
                } else {
                    Message::model(m.text)
                }
            })
            .collect();

        PromptBuilder::new().with_history(&history).build()
    }

    /// Await the simulated typing delay, racing session shutdown
    ///
    /// Returns false when the session closed first; the reply must then be
    /// dropped, never appended late.
    async fn wait_typing_delay(&self) -> bool {
        let mut shutdown = self.shutdown_tx.subscribe();
        if *shutdown.borrow() {
            return false;
        }
        if self.config.typing_delay.is_zero() {
            return true;
        }

        tokio::select! {
            _ = tokio::time::sleep(self.config.typing_delay) => true,
            _ = shutdown.changed() => false,
        }
    }
}
