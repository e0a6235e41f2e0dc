//! Phases of the visible form region during a submit
//!
//! `Editing -> Submitting -> Success` on a dispatched message, or
//! `Editing -> Submitting -> Failed` when the bridge rejects it outright.
//! `Failed` shows the form again and accepts a new submit.

use crate::models::{BridgeMessage, LeadDraft, LeadPayload};
use crate::state::FormState;
use crate::validation::{self, FieldErrors};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting,
    Success,
    Failed,
}

impl SubmissionPhase {
    pub fn form_visible(&self) -> bool {
        matches!(self, SubmissionPhase::Editing | SubmissionPhase::Failed)
    }

    pub fn loading_visible(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting)
    }

    pub fn success_visible(&self) -> bool {
        matches!(self, SubmissionPhase::Success)
    }

    /// Whether a submit may start from this phase
    pub fn accepts_submit(&self) -> bool {
        self.form_visible()
    }

    /// Moves to `Submitting` if a submit may start, so a second submit in the
    /// same frame sees the busy phase and is dropped
    pub fn try_start(&mut self) -> bool {
        if !self.accepts_submit() {
            return false;
        }
        *self = SubmissionPhase::Submitting;
        true
    }

    /// Phase after the bridge accepted or rejected the message
    pub fn after_dispatch(self, dispatched: bool) -> Self {
        match (self, dispatched) {
            (SubmissionPhase::Submitting, true) => SubmissionPhase::Success,
            (SubmissionPhase::Submitting, false) => SubmissionPhase::Failed,
            (other, _) => other,
        }
    }
}

/// Host identity attached to the payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadIdentity {
    pub user_id: Option<i64>,
    pub username: Option<String>,
}

/// Builds the payload from the draft and the form collections
pub fn build_payload(draft: &LeadDraft, state: &FormState, identity: &LeadIdentity) -> LeadPayload {
    let draft = draft.trimmed();
    LeadPayload {
        name: draft.name,
        contact: draft.contact,
        description: draft.description,
        dates: state.joined_dates(),
        source: draft.source,
        photos: state.photos().to_vec(),
        user_id: identity.user_id,
        username: identity.username.clone(),
    }
}

/// Runs validation and, if every rule passes, builds the bridge message
///
/// The returned errors always reflect the latest check, also on success where
/// every slot is cleared.
pub fn prepare(
    draft: &LeadDraft,
    state: &FormState,
    identity: &LeadIdentity,
) -> (FieldErrors, Option<BridgeMessage>) {
    let errors = validation::validate(draft, state.dates());
    if !errors.is_valid() {
        return (errors, None);
    }
    let message = BridgeMessage::create_lead(build_payload(draft, state, identity));
    (errors, Some(message))
}
