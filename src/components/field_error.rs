use booking_form::{FieldError, MIN_DESCRIPTION_LEN};
use dioxus::prelude::*;
use dioxus_i18n::t;

/// Localized text for a field error
pub fn field_error_message(error: FieldError) -> String {
    match error {
        FieldError::NameRequired => t!("error-name-required"),
        FieldError::ContactRequired => t!("error-contact-required"),
        FieldError::DescriptionTooShort => {
            t!("error-description-short", min: MIN_DESCRIPTION_LEN as i64)
        }
        FieldError::DatesRequired => t!("error-dates-required"),
        FieldError::InvalidDateFormat => t!("error-date-format"),
    }
}

/// Inline error slot below a field, empty while the field is valid
#[component]
pub fn FieldErrorSlot(id: String, error: Option<FieldError>) -> Element {
    rsx! {
        if let Some(error) = error {
            div {
                id: "{id}",
                class: "error-message",
                style: "color: #e57373; font-size: 13px; margin-top: 6px;",
                {field_error_message(error)}
            }
        }
    }
}
