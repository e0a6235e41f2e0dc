use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn LoadingView() -> Element {
    rsx! {
        div {
            id: "loading",
            class: "loading",
            style: "text-align: center; padding: 48px 16px;",
            div { class: "spinner", style: "font-size: 36px;", "⏳" }
            p { {t!("loading-text")} }
        }
    }
}

#[component]
pub fn SuccessView() -> Element {
    rsx! {
        div {
            id: "successMessage",
            class: "success-message",
            style: "text-align: center; padding: 48px 16px;",
            div { style: "font-size: 48px;", "✅" }
            h2 { {t!("success-title")} }
            p { {t!("success-text")} }
        }
    }
}
