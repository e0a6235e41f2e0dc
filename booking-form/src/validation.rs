//! Field validation run on submit
//!
//! Rules are checked in a fixed order and every rule always runs, so each
//! field ends up either with an error or with its error cleared.

use crate::models::{LeadDraft, MIN_DESCRIPTION_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Contact,
    Description,
    Dates,
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    ContactRequired,
    DescriptionTooShort,
    DatesRequired,
    /// Set by the date input, not by submit validation
    InvalidDateFormat,
}

impl FieldError {
    pub fn field(&self) -> FormField {
        match self {
            FieldError::NameRequired => FormField::Name,
            FieldError::ContactRequired => FormField::Contact,
            FieldError::DescriptionTooShort => FormField::Description,
            FieldError::DatesRequired | FieldError::InvalidDateFormat => FormField::Dates,
        }
    }
}

/// Error slot per field; `None` means the field's message is hidden
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub contact: Option<FieldError>,
    pub description: Option<FieldError>,
    pub dates: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<FieldError> {
        match field {
            FormField::Name => self.name,
            FormField::Contact => self.contact,
            FormField::Description => self.description,
            FormField::Dates => self.dates,
        }
    }

    pub fn set(&mut self, field: FormField, error: Option<FieldError>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Contact => &mut self.contact,
            FormField::Description => &mut self.description,
            FormField::Dates => &mut self.dates,
        };
        *slot = error;
    }

    pub fn is_valid(&self) -> bool {
        self.name.is_none()
            && self.contact.is_none()
            && self.description.is_none()
            && self.dates.is_none()
    }
}

/// Validates the trimmed draft together with the selected dates
pub fn validate(draft: &LeadDraft, dates: &[String]) -> FieldErrors {
    let draft = draft.trimmed();
    let mut errors = FieldErrors::default();

    let rules = [
        (FormField::Name, draft.name.is_empty(), FieldError::NameRequired),
        (
            FormField::Contact,
            draft.contact.is_empty(),
            FieldError::ContactRequired,
        ),
        (
            FormField::Description,
            draft.description.encode_utf16().count() < MIN_DESCRIPTION_LEN,
            FieldError::DescriptionTooShort,
        ),
        (FormField::Dates, dates.is_empty(), FieldError::DatesRequired),
    ];

    for (field, failed, error) in rules {
        errors.set(field, failed.then_some(error));
    }

    errors
}
