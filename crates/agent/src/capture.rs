//! Guided complaint capture
//!
//! A small state machine that interprets user turns as structured answers
//! to a fixed sequence of questions (title, category, description), plus
//! the in-progress draft those answers accumulate into.

use hostel_nexus_core::ComplaintCategory;

/// Capture state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureState {
    /// Normal Q&A, no draft in progress
    #[default]
    Idle,
    /// Awaiting the complaint title
    AwaitingTitle,
    /// Awaiting one of the four category literals
    AwaitingCategory,
    /// Awaiting the complaint description
    AwaitingDescription,
}

impl CaptureState {
    /// Get state display name
    pub fn display_name(&self) -> &'static str {
        match self {
            CaptureState::Idle => "idle",
            CaptureState::AwaitingTitle => "awaiting_title",
            CaptureState::AwaitingCategory => "awaiting_category",
            CaptureState::AwaitingDescription => "awaiting_description",
        }
    }

    /// Capture step number; 0 when idle
    pub fn step(&self) -> u8 {
        match self {
            CaptureState::Idle => 0,
            CaptureState::AwaitingTitle => 1,
            CaptureState::AwaitingCategory => 2,
            CaptureState::AwaitingDescription => 3,
        }
    }

    /// Is a draft in progress?
    pub fn is_active(&self) -> bool {
        *self != CaptureState::Idle
    }
}

/// The in-progress, not-yet-submitted complaint
///
/// Field assignment only; the category whitelist and the submission-time
/// session check are the sole validation gates.
#[derive(Debug, Clone, Default)]
pub struct ComplaintDraft {
    pub title: String,
    pub description: String,
    pub category: Option<ComplaintCategory>,
}

/// A draft with every answer collected, ready to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedDraft {
    pub title: String,
    pub category: ComplaintCategory,
    pub description: String,
}

/// What one capture turn produced
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// advance() was called while idle
    NotCapturing,
    /// Title stored, now awaiting category
    TitleRecorded,
    /// Input was not one of the four category literals; state unchanged
    InvalidCategory,
    /// Category stored, now awaiting description
    CategoryRecorded,
    /// Description stored; draft complete, state reset to idle
    ReadyToSubmit(CompletedDraft),
    /// User cancelled; draft discarded, state reset to idle
    Cancelled,
}

/// Cancellation literal accepted at any capture step
fn is_cancel(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("cancel")
}

/// Dialogue state machine plus draft accumulator
///
/// Runs for the lifetime of one conversation; there is no terminal state.
#[derive(Debug, Default)]
pub struct CaptureFlow {
    state: CaptureState,
    draft: ComplaintDraft,
}

impl CaptureFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Is a draft in progress?
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Current draft contents
    pub fn draft(&self) -> &ComplaintDraft {
        &self.draft
    }

    /// Enter capture mode with a fresh draft
    pub fn begin(&mut self) {
        self.draft = ComplaintDraft::default();
        self.state = CaptureState::AwaitingTitle;
    }

    /// Discard the draft and return to idle
    ///
    /// Returns whether a draft was actually in progress.
    pub fn cancel(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.draft = ComplaintDraft::default();
        self.state = CaptureState::Idle;
    }

    /// Consume one user turn as the answer to the active step
    pub fn advance(&mut self, input: &str) -> StepOutcome {
        if !self.is_active() {
            return StepOutcome::NotCapturing;
        }

        if is_cancel(input) {
            self.reset();
            return StepOutcome::Cancelled;
        }

        match self.state {
            CaptureState::AwaitingTitle => {
                self.draft.title = input.to_string();
                self.state = CaptureState::AwaitingCategory;
                StepOutcome::TitleRecorded
            }
            CaptureState::AwaitingCategory => match input.trim().parse::<ComplaintCategory>() {
                Ok(category) => {
                    self.draft.category = Some(category);
                    self.state = CaptureState::AwaitingDescription;
                    StepOutcome::CategoryRecorded
                }
                // Re-prompt without advancing; repeated invalid input is
                // idempotent
                Err(_) => StepOutcome::InvalidCategory,
            },
            CaptureState::AwaitingDescription => {
                self.draft.description = input.to_string();
                let completed = CompletedDraft {
                    title: std::mem::take(&mut self.draft.title),
                    category: self.draft.category.take().unwrap_or(ComplaintCategory::Other),
                    description: std::mem::take(&mut self.draft.description),
                };
                self.reset();
                StepOutcome::ReadyToSubmit(completed)
            }
            CaptureState::Idle => StepOutcome::NotCapturing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_walk() {
        let mut flow = CaptureFlow::new();
        assert_eq!(flow.state(), CaptureState::Idle);

        flow.begin();
        assert_eq!(flow.state().step(), 1);

        assert_eq!(flow.advance("Leaky faucet"), StepOutcome::TitleRecorded);
        assert_eq!(flow.state().step(), 2);

        assert_eq!(flow.advance("Room"), StepOutcome::CategoryRecorded);
        assert_eq!(flow.state().step(), 3);

        let outcome = flow.advance("Water drips from the ceiling");
        match outcome {
            StepOutcome::ReadyToSubmit(draft) => {
                assert_eq!(draft.title, "Leaky faucet");
                assert_eq!(draft.category, ComplaintCategory::Room);
                assert_eq!(draft.description, "Water drips from the ceiling");
            }
            other => panic!("expected ReadyToSubmit, got {:?}", other),
        }

        // Back to idle after completion
        assert_eq!(flow.state(), CaptureState::Idle);
    }

    #[test]
    fn test_invalid_category_does_not_advance() {
        let mut flow = CaptureFlow::new();
        flow.begin();
        flow.advance("Leaky faucet");

        assert_eq!(flow.advance("Kitchen"), StepOutcome::InvalidCategory);
        assert_eq!(flow.state().step(), 2);
        assert!(flow.draft().category.is_none());

        // Repeated invalid input never advances
        assert_eq!(flow.advance("kitchen"), StepOutcome::InvalidCategory);
        assert_eq!(flow.advance("room"), StepOutcome::InvalidCategory);
        assert_eq!(flow.state().step(), 2);
    }

    #[test]
    fn test_category_literal_is_case_sensitive() {
        let mut flow = CaptureFlow::new();
        flow.begin();
        flow.advance("title");

        assert_eq!(flow.advance("ROOM"), StepOutcome::InvalidCategory);
        assert_eq!(flow.advance(" Room "), StepOutcome::CategoryRecorded);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut flow = CaptureFlow::new();
        flow.begin();
        flow.advance("Old title");

        assert_eq!(flow.advance("cancel"), StepOutcome::Cancelled);
        assert_eq!(flow.state(), CaptureState::Idle);

        // A new capture starts a fresh draft, not the old one
        flow.begin();
        assert!(flow.draft().title.is_empty());
        assert_eq!(flow.state().step(), 1);
    }

    #[test]
    fn test_cancel_literal_variants() {
        let mut flow = CaptureFlow::new();
        flow.begin();
        assert_eq!(flow.advance("  Cancel "), StepOutcome::Cancelled);

        flow.begin();
        flow.advance("title");
        assert_eq!(flow.advance("CANCEL"), StepOutcome::Cancelled);
    }

    #[test]
    fn test_explicit_cancel_operation() {
        let mut flow = CaptureFlow::new();
        assert!(!flow.cancel());

        flow.begin();
        assert!(flow.cancel());
        assert_eq!(flow.state(), CaptureState::Idle);
    }

    #[test]
    fn test_advance_while_idle() {
        let mut flow = CaptureFlow::new();
        assert_eq!(flow.advance("anything"), StepOutcome::NotCapturing);
    }
}
