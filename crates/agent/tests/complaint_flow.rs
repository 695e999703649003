//! End-to-end engine tests: guided complaint capture, generation
//! fallback, and transcript ordering.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use hostel_nexus_agent::{replies, CaptureState, ChatEngine, EngineConfig};
use hostel_nexus_core::{ComplaintCategory, ComplaintStatus, Sender, StudentProfile};
use hostel_nexus_llm::{GenerationClient, LlmError, Message};
use hostel_nexus_persistence::{ComplaintStore, MemoryComplaintStore};

/// Scripted generation client for failure injection
struct MockGeneration {
    reply: Option<String>,
}

impl MockGeneration {
    fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
        }
    }

    fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl GenerationClient for MockGeneration {
    async fn generate(&self, _messages: &[Message]) -> Result<String, LlmError> {
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(LlmError::EmptyResponse),
        }
    }
}

fn sample_student() -> StudentProfile {
    StudentProfile {
        id: "1".to_string(),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "123-456-7890".to_string(),
        room_number: "A101".to_string(),
        hostel_block: "A".to_string(),
        mess_preference: "Vegetarian".to_string(),
        join_date: "2023-09-01".to_string(),
        due_amount: 0,
    }
}

fn test_engine(
    store: Arc<MemoryComplaintStore>,
    generation: Option<Arc<dyn GenerationClient>>,
) -> ChatEngine {
    let config = EngineConfig {
        typing_delay: Duration::ZERO,
    };
    ChatEngine::new("test-session", config, store, generation)
}

#[tokio::test]
async fn guided_capture_submits_one_complaint() {
    let store = Arc::new(MemoryComplaintStore::new());
    let engine = test_engine(store.clone(), None);
    engine.set_student(Some(sample_student()));

    let reply = engine
        .process_message("I have a complaint")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reply.text, replies::TITLE_PROMPT);
    assert!(engine.is_capturing());

    engine.process_message("Leaky faucet").await.unwrap();
    engine.process_message("Room").await.unwrap();
    let confirmation = engine
        .process_message("Water drips from the ceiling")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(confirmation.text, replies::CAPTURE_COMPLETE);
    assert!(!engine.is_capturing());

    let complaints = store.list().await.unwrap();
    assert_eq!(complaints.len(), 1);
    let complaint = &complaints[0];
    assert_eq!(complaint.title, "Leaky faucet");
    assert_eq!(complaint.category, ComplaintCategory::Room);
    assert_eq!(complaint.description, "Water drips from the ceiling");
    assert_eq!(complaint.status, ComplaintStatus::Open);
    assert_eq!(complaint.student_id, "1");
}

#[tokio::test]
async fn invalid_category_reprompts_without_advancing() {
    let store = Arc::new(MemoryComplaintStore::new());
    let engine = test_engine(store.clone(), None);
    engine.set_student(Some(sample_student()));

    engine.process_message("there is a problem").await.unwrap();
    engine.process_message("Leaky faucet").await.unwrap();

    for bad in ["Kitchen", "room", "Kitchen"] {
        let reply = engine.process_message(bad).await.unwrap().unwrap();
        assert_eq!(reply.text, replies::INVALID_CATEGORY_PROMPT);
        assert_eq!(engine.capture_state(), CaptureState::AwaitingCategory);
    }

    // Still no complaint stored
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn cancel_discards_draft_and_restart_is_fresh() {
    let store = Arc::new(MemoryComplaintStore::new());
    let engine = test_engine(store.clone(), None);
    engine.set_student(Some(sample_student()));

    engine.process_message("I want to report something").await.unwrap();
    engine.process_message("Old title").await.unwrap();

    let reply = engine.process_message("cancel").await.unwrap().unwrap();
    assert_eq!(reply.text, replies::CAPTURE_CANCELLED);
    assert!(!engine.is_capturing());

    // New complaint starts from step 1, not resuming the old draft
    let reply = engine.process_message("another complaint").await.unwrap().unwrap();
    assert_eq!(reply.text, replies::TITLE_PROMPT);
    assert_eq!(engine.capture_state(), CaptureState::AwaitingTitle);

    engine.process_message("New title").await.unwrap();
    engine.process_message("Mess").await.unwrap();
    engine.process_message("The dal is cold").await.unwrap();

    let complaints = store.list().await.unwrap();
    assert_eq!(complaints.len(), 1);
    assert_eq!(complaints[0].title, "New title");
}

#[tokio::test]
async fn submission_without_student_never_reaches_store() {
    let store = Arc::new(MemoryComplaintStore::new());
    let engine = test_engine(store.clone(), None);

    engine.process_message("I have an issue").await.unwrap();
    engine.process_message("Broken window").await.unwrap();
    engine.process_message("Facility").await.unwrap();
    let reply = engine
        .process_message("The common room window is cracked")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(reply.text, replies::MISSING_SESSION);
    assert!(!engine.is_capturing());
    assert!(store.list().await.unwrap().is_empty());

    // The session is still usable
    let reply = engine.process_message("hello").await.unwrap().unwrap();
    assert_eq!(reply.text, replies::GREETING);
}

#[tokio::test]
async fn generation_failure_degrades_to_apology() {
    let store = Arc::new(MemoryComplaintStore::new());
    let engine = test_engine(store, Some(Arc::new(MockGeneration::failing())));

    let reply = engine
        .process_message("tell me about quantum physics")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reply.text, replies::GENERATION_APOLOGY);

    // Still idle and accepting input afterwards
    assert!(!engine.is_capturing());
    let reply = engine.process_message("wifi password").await.unwrap().unwrap();
    assert_eq!(reply.text, replies::WIFI);
}

#[tokio::test]
async fn generation_reply_is_used_verbatim() {
    let store = Arc::new(MemoryComplaintStore::new());
    let engine = test_engine(
        store,
        Some(Arc::new(MockGeneration::replying("The gym opens at 6 AM."))),
    );

    let reply = engine
        .process_message("when does the gym open")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reply.text, "The gym opens at 6 AM.");
}

#[tokio::test]
async fn no_client_falls_back_to_canned_reply() {
    let store = Arc::new(MemoryComplaintStore::new());
    let engine = test_engine(store, None);

    let reply = engine
        .process_message("when does the gym open")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reply.text, replies::FALLBACK);
}

#[tokio::test]
async fn transcript_is_strictly_insertion_ordered() {
    let store = Arc::new(MemoryComplaintStore::new());
    let engine = test_engine(store, None);

    engine.process_message("hello").await.unwrap();
    engine.process_message("wifi?").await.unwrap();
    engine.process_message("laundry?").await.unwrap();

    let transcript = engine.transcript();
    // Greeting seed + 3 user/bot pairs
    assert_eq!(transcript.len(), 7);
    for pair in transcript.windows(2) {
        assert!(pair[0].id < pair[1].id);
    }
    // User and bot turns alternate after the seed
    assert_eq!(transcript[0].sender, Sender::Bot);
    assert_eq!(transcript[1].sender, Sender::User);
    assert_eq!(transcript[2].sender, Sender::Bot);
}

#[tokio::test]
async fn empty_input_is_suppressed() {
    let store = Arc::new(MemoryComplaintStore::new());
    let engine = test_engine(store, None);

    assert!(engine.process_message("").await.unwrap().is_none());
    assert!(engine.process_message("   ").await.unwrap().is_none());
    assert_eq!(engine.transcript().len(), 1);
}

#[tokio::test]
async fn closed_session_drops_replies() {
    let store = Arc::new(MemoryComplaintStore::new());
    let engine = test_engine(store, None);

    engine.close();
    assert!(engine.is_closed());
    assert!(engine.process_message("hello").await.unwrap().is_none());
    // Only the greeting seed remains
    assert_eq!(engine.transcript().len(), 1);
}

#[tokio::test]
async fn capture_user_messages_are_flagged() {
    let store = Arc::new(MemoryComplaintStore::new());
    let engine = test_engine(store, None);
    engine.set_student(Some(sample_student()));

    engine.process_message("I have a complaint").await.unwrap();
    engine.process_message("Leaky faucet").await.unwrap();
    engine.process_message("hello again").await.unwrap();

    let transcript = engine.transcript();
    let flagged: Vec<bool> = transcript
        .iter()
        .filter(|m| m.is_user())
        .map(|m| m.complaint_flagged)
        .collect();
    assert_eq!(flagged, vec![true, true, true]);
}
