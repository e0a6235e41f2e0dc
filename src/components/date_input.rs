use booking_form::{DateOutcome, DateTagList, FieldError, FieldErrors, FormField, FormState};
use dioxus::prelude::*;
use dioxus_i18n::t;

use super::FieldErrorSlot;

#[component]
pub fn DateInput(mut form: Signal<FormState>, mut errors: Signal<FieldErrors>) -> Element {
    let mut raw = use_signal(String::new);

    let mut add_date = move || {
        let result = form.write().add_date(&raw.read());
        match result {
            Ok(outcome) => {
                if outcome == DateOutcome::AlreadySelected {
                    log::debug!("Date '{}' already selected", raw.read().trim());
                }
                raw.set(String::new());
                errors.write().set(FormField::Dates, None);
            }
            Err(e) => {
                log::debug!("{}", e);
                errors
                    .write()
                    .set(FormField::Dates, Some(FieldError::InvalidDateFormat));
            }
        }
    };

    rsx! {
        div { class: "form-group",
            label { r#for: "dates", class: "form-label", {t!("dates-label")} }
            div { style: "display: flex; gap: 8px;",
                input {
                    id: "dates",
                    name: "dates",
                    r#type: "text",
                    class: "input",
                    inputmode: "numeric",
                    placeholder: t!("dates-placeholder"),
                    value: "{raw}",
                    oninput: move |e| raw.set(e.value()),
                    onkeydown: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            e.prevent_default();
                            add_date();
                        }
                    },
                }
                button {
                    r#type: "button",
                    class: "btn-secondary",
                    onclick: move |_| add_date(),
                    {t!("action-add-date")}
                }
            }
            DateTagList {
                dates: form.read().dates().to_vec(),
                on_remove: move |index| {
                    form.write().remove_date(index);
                },
            }
            FieldErrorSlot { id: "datesError", error: errors.read().dates }
        }
    }
}
