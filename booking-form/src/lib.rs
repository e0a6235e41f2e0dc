//! # Booking Form
//!
//! State and rules of the tattoo booking form, independent of any host.
//!
//! This crate provides:
//! - Ordered, duplicate-free date selection with calendar validation
//! - Photo attachments encoded as data URLs, capped at [`MAX_PHOTOS`]
//! - Field validation run on submit
//! - The submission phases and the `create_lead` message shape
//!
//! With the `components` feature it also ships the Dioxus fragments that
//! render the date tags and the photo previews.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use booking_form::{FormState, LeadDraft, LeadIdentity};
//!
//! let mut state = FormState::new();
//! state.add_date("01.01.2025")?;
//!
//! let (errors, message) = booking_form::prepare(&draft, &state, &LeadIdentity::default());
//! if let Some(message) = message {
//!     bridge.send_data(&message.to_json()?).await?;
//! }
//! ```

pub mod dates;
pub mod encoding;
pub mod error;
pub mod models;
pub mod state;
pub mod submission;
pub mod validation;

#[cfg(feature = "components")]
pub mod components;

pub use dates::{is_valid_date, parse_booking_date};
pub use error::FormError;
pub use models::{
    BridgeMessage, FileMeta, LeadAction, LeadDraft, LeadPayload, PendingUpload, PhotoEntry,
    SelectedFile, MAX_PHOTOS, MIN_DESCRIPTION_LEN,
};
pub use state::{DateOutcome, FormState};
pub use submission::{build_payload, prepare, LeadIdentity, SubmissionPhase};
pub use validation::{validate, FieldError, FieldErrors, FormField};

#[cfg(feature = "components")]
pub use components::{DateTagList, PhotoPreviewGrid};
