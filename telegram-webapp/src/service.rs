//! Telegram WebApp bridge built on Dioxus `document::eval`
//!
//! Each call runs a small script against `window.Telegram.WebApp`. Scripts
//! answer with a [`ScriptReply`] so a missing host, a thrown error and a
//! normal result can be told apart on the Rust side.

use dioxus::document;
use serde::de::DeserializeOwned;

use crate::bridge::{BridgeError, HostBridge};
use crate::models::{ScriptReply, WebAppUser};

/// Byte limit the host enforces on `sendData`
pub const SEND_DATA_LIMIT: usize = 4096;

const WEBAPP_PRELUDE: &str = r#"
const tg = window.Telegram && window.Telegram.WebApp;
if (!tg) {
    return { status: "unavailable" };
}
"#;

const INIT_DATA_BODY: &str = r#"
const user = tg.initDataUnsafe && tg.initDataUnsafe.user;
return { status: "ok", value: user || null };
"#;

const SEND_DATA_BODY: &str = r#"
const payload = await dioxus.recv();
tg.sendData(payload);
return { status: "ok" };
"#;

const ALERT_SCRIPT: &str = r#"
const message = await dioxus.recv();
const tg = window.Telegram && window.Telegram.WebApp;
try {
    if (tg && tg.isVersionAtLeast && tg.isVersionAtLeast("6.2")) {
        await new Promise((resolve) => tg.showAlert(message, resolve));
    } else {
        window.alert(message);
    }
    return { status: "ok" };
} catch (e) {
    return { status: "error", message: String(e) };
}
"#;

/// Wraps a script body so it runs against the WebApp object and reports throws
fn webapp_script(body: &str) -> String {
    format!(
        "{}try {{\n{}\n}} catch (e) {{\n    return {{ status: \"error\", message: String(e) }};\n}}",
        WEBAPP_PRELUDE, body
    )
}

/// Script calling a no-argument WebApp method
fn method_script(method: &str) -> String {
    webapp_script(&format!("tg.{}();\nreturn {{ status: \"ok\" }};", method))
}

/// Turns a script reply into the value the caller asked for
fn decode_reply<T: DeserializeOwned>(reply: ScriptReply) -> Result<T, BridgeError> {
    match reply {
        ScriptReply::Ok { value } => serde_json::from_value(value)
            .map_err(|e| BridgeError::Decode(format!("Unexpected value: {}", e))),
        ScriptReply::Error { message } => Err(BridgeError::Script(message)),
        ScriptReply::Unavailable => Err(BridgeError::Unavailable),
    }
}

/// Bridge to the Telegram WebApp running the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TelegramWebApp;

impl TelegramWebApp {
    pub fn new() -> Self {
        Self
    }

    /// Runs a script, optionally feeding it one message first
    async fn run<T: DeserializeOwned>(
        &self,
        script: &str,
        input: Option<&str>,
    ) -> Result<T, BridgeError> {
        let eval = document::eval(script);
        if let Some(input) = input {
            eval.send(input)
                .map_err(|e| BridgeError::Script(format!("Send to script failed: {}", e)))?;
        }

        let reply = eval
            .join::<ScriptReply>()
            .await
            .map_err(|e| BridgeError::Decode(format!("Script reply failed: {}", e)))?;
        decode_reply(reply)
    }

    async fn call(&self, method: &str) -> Result<(), BridgeError> {
        log::debug!("WebApp.{}()", method);
        self.run::<serde_json::Value>(&method_script(method), None)
            .await
            .map(|_| ())
    }
}

impl HostBridge for TelegramWebApp {
    async fn init_data(&self) -> Result<Option<WebAppUser>, BridgeError> {
        self.run(&webapp_script(INIT_DATA_BODY), None).await
    }

    async fn expand(&self) -> Result<(), BridgeError> {
        self.call("expand").await
    }

    async fn enable_closing_confirmation(&self) -> Result<(), BridgeError> {
        self.call("enableClosingConfirmation").await
    }

    async fn send_data(&self, data: &str) -> Result<(), BridgeError> {
        if data.len() > SEND_DATA_LIMIT {
            log::warn!(
                "Payload is {} bytes, the host may drop anything over {}",
                data.len(),
                SEND_DATA_LIMIT
            );
        }
        self.run::<serde_json::Value>(&webapp_script(SEND_DATA_BODY), Some(data))
            .await
            .map(|_| ())
    }

    async fn show_alert(&self, message: &str) -> Result<(), BridgeError> {
        self.run::<serde_json::Value>(ALERT_SCRIPT, Some(message))
            .await
            .map(|_| ())
    }

    async fn close(&self) -> Result<(), BridgeError> {
        self.call("close").await
    }
}
