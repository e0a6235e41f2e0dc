use booking_form::{FieldErrors, FormState, LeadDraft, LeadIdentity, SubmissionPhase};
use dioxus::prelude::*;
use dioxus_i18n::t;
use telegram_webapp::{use_host_events, HostBridge, TelegramWebApp};

use super::{DateInput, FieldErrorSlot, LoadingView, PhotoUpload, SuccessView};
use crate::config::SubmissionConfig;
use crate::services;

/// Inquiry sources offered in the select, as sent to the bot
const SOURCES: [&str; 5] = ["instagram", "telegram", "vk", "friends", "other"];

fn source_label(source: &str) -> String {
    match source {
        "instagram" => t!("source-instagram"),
        "telegram" => t!("source-telegram"),
        "vk" => t!("source-vk"),
        "friends" => t!("source-friends"),
        _ => t!("source-other"),
    }
}

#[component]
pub fn BookingScreen(submission: SubmissionConfig) -> Element {
    let bridge = use_context::<TelegramWebApp>();

    let form = use_signal(FormState::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut phase = use_signal(SubmissionPhase::default);
    let mut identity = use_signal(LeadIdentity::default);

    let mut name = use_signal(String::new);
    let mut contact = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut source = use_signal(|| SOURCES[0].to_string());

    use_future(move || async move {
        let Some(user) = services::init_host(&bridge).await else {
            return;
        };
        // Only fill fields the user has not started typing in
        if let Some(full_name) = user.display_name().filter(|_| name.read().is_empty()) {
            name.set(full_name);
        }
        if let Some(handle) = user.contact_handle().filter(|_| contact.read().is_empty()) {
            contact.set(handle);
        }
        identity.set(LeadIdentity {
            user_id: Some(user.id),
            username: user.username.clone(),
        });
    });

    use_host_events(|event| {
        log::info!("Data received from bot ({}): {}", event.name, event.payload);
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !phase().accepts_submit() {
            log::debug!("Submit ignored while {:?}", phase());
            return;
        }

        let draft = LeadDraft {
            name: name(),
            contact: contact(),
            description: description(),
            source: source(),
        };
        let (checked, message) = booking_form::prepare(&draft, &form.read(), &identity.read());
        errors.set(checked);
        let Some(message) = message else {
            log::debug!("Submit blocked by validation");
            return;
        };
        if !phase.write().try_start() {
            log::debug!("Submit already in flight");
            return;
        }

        let submission = submission.clone();
        spawn(async move {
            let result =
                services::submit_lead(&bridge, &message, &submission, move |p| phase.set(p)).await;
            if let Err(e) = result {
                if let Err(alert_err) = bridge.show_alert(&t!(e.message_key())).await {
                    log::warn!("Alert failed: {}", alert_err);
                }
            }
        });
    };

    let form_style = if phase().form_visible() {
        ""
    } else {
        "display: none;"
    };

    rsx! {
        div { class: "container", style: "padding: 16px; max-width: 600px; margin: 0 auto;",
            form {
                id: "bookingForm",
                style: "{form_style}",
                onsubmit: on_submit,

                h1 { class: "title", {t!("form-title")} }
                p { class: "subtitle", {t!("form-subtitle")} }

                div { class: "form-group",
                    label { r#for: "name", class: "form-label", {t!("name-label")} }
                    input {
                        id: "name",
                        name: "name",
                        r#type: "text",
                        class: "input",
                        placeholder: t!("name-placeholder"),
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                    FieldErrorSlot { id: "nameError", error: errors.read().name }
                }

                div { class: "form-group",
                    label { r#for: "contact", class: "form-label", {t!("contact-label")} }
                    input {
                        id: "contact",
                        name: "contact",
                        r#type: "text",
                        class: "input",
                        placeholder: t!("contact-placeholder"),
                        value: "{contact}",
                        oninput: move |e| contact.set(e.value()),
                    }
                    FieldErrorSlot { id: "contactError", error: errors.read().contact }
                }

                div { class: "form-group",
                    label { r#for: "description", class: "form-label", {t!("description-label")} }
                    textarea {
                        id: "description",
                        name: "description",
                        class: "input",
                        rows: "5",
                        placeholder: t!("description-placeholder"),
                        value: "{description}",
                        oninput: move |e| description.set(e.value()),
                    }
                    FieldErrorSlot { id: "descriptionError", error: errors.read().description }
                }

                DateInput { form, errors }

                div { class: "form-group",
                    label { r#for: "source", class: "form-label", {t!("source-label")} }
                    select {
                        id: "source",
                        name: "source",
                        class: "input",
                        value: "{source}",
                        onchange: move |e| source.set(e.value()),
                        for value in SOURCES {
                            option { key: "{value}", value: "{value}", {source_label(value)} }
                        }
                    }
                }

                PhotoUpload { form }

                button {
                    r#type: "submit",
                    class: "btn-primary",
                    style: "width: 100%; padding: 14px; margin-top: 8px;",
                    {t!("action-submit")}
                }
            }

            if phase().loading_visible() {
                LoadingView {}
            }
            if phase().success_visible() {
                SuccessView {}
            }
        }
    }
}
