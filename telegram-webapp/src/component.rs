use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::models::HostEvent;

const SUBSCRIBE_SCRIPT: &str = r#"
const tg = window.Telegram && window.Telegram.WebApp;
if (!tg) {
    return;
}
tg.onEvent("webAppDataReceived", (event) => {
    dioxus.send({ name: "webAppDataReceived", payload: event === undefined ? null : event });
});
await new Promise(() => {});
"#;

#[derive(serde::Deserialize)]
struct RawEvent {
    name: String,
    #[serde(default)]
    payload: serde_json::Value,
}

/// Subscribes to inbound host events for the lifetime of the calling component
///
/// The form does not act on these; `on_event` usually just logs them.
pub fn use_host_events(on_event: impl FnMut(HostEvent) + 'static) {
    let handler = use_hook(|| Rc::new(RefCell::new(on_event)));
    use_future(move || {
        let handler = handler.clone();
        async move {
            let mut eval = dioxus::document::eval(SUBSCRIBE_SCRIPT);
            loop {
                match eval.recv::<RawEvent>().await {
                    Ok(raw) => {
                        let mut handle = handler.borrow_mut();
                        (*handle)(HostEvent {
                            name: raw.name,
                            payload: raw.payload,
                        });
                    }
                    Err(e) => {
                        log::debug!("Host event subscription ended: {}", e);
                        break;
                    }
                }
            }
        }
    });
}
