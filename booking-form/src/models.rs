use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of photos attached to one lead
pub const MAX_PHOTOS: usize = 5;

/// Minimum description length in characters
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// An encoded photo attachment as sent to the bot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoEntry {
    /// Local render key, never sent
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    /// `data:<mime>;base64,<payload>` URL
    pub data: String,
    pub name: String,
    #[serde(rename = "type")]
    pub mime: String,
}

impl PhotoEntry {
    pub fn new(data: String, name: String, mime: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            data,
            name,
            mime,
        }
    }
}

/// What the UI knows about a selected file before reading its bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    /// MIME type reported by the browser, `None` or empty if unknown
    pub content_type: Option<String>,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, content_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            content_type,
        }
    }
}

/// A file with its bytes already loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub meta: FileMeta,
    pub bytes: Vec<u8>,
}

/// A reserved photo slot for an image whose bytes are still being read
///
/// Obtained from [`crate::FormState::reserve_batch`] and handed back through
/// either `complete_upload` or `cancel_upload`.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingUpload {
    pub(crate) name: String,
    pub(crate) mime: String,
}

impl PendingUpload {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }
}

/// Free-text fields of the form as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadDraft {
    pub name: String,
    pub contact: String,
    pub description: String,
    pub source: String,
}

impl LeadDraft {
    /// Copy with surrounding whitespace removed from the text fields
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            contact: self.contact.trim().to_string(),
            description: self.description.trim().to_string(),
            source: self.source.clone(),
        }
    }
}

/// Payload of a `create_lead` message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeadPayload {
    pub name: String,
    pub contact: String,
    pub description: String,
    /// Selected dates joined by `", "`
    pub dates: String,
    pub source: String,
    pub photos: Vec<PhotoEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeadAction {
    CreateLead,
}

/// Envelope handed to the host bridge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BridgeMessage {
    pub action: LeadAction,
    pub data: LeadPayload,
}

impl BridgeMessage {
    pub fn create_lead(data: LeadPayload) -> Self {
        Self {
            action: LeadAction::CreateLead,
            data,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
