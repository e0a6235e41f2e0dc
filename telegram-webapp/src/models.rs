use serde::{Deserialize, Serialize};

/// User as exposed by `Telegram.WebApp.initDataUnsafe.user`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebAppUser {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl WebAppUser {
    /// First name followed by the last name when present
    pub fn display_name(&self) -> Option<String> {
        let first = self.first_name.as_deref().filter(|n| !n.is_empty())?;
        match self.last_name.as_deref().filter(|n| !n.is_empty()) {
            Some(last) => Some(format!("{} {}", first, last)),
            None => Some(first.to_string()),
        }
    }

    /// `@username`, usable as a contact
    pub fn contact_handle(&self) -> Option<String> {
        self.username
            .as_deref()
            .filter(|u| !u.is_empty())
            .map(|u| format!("@{}", u))
    }
}

/// Reply of every bridge script
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ScriptReply {
    Ok {
        #[serde(default)]
        value: serde_json::Value,
    },
    /// The script threw
    Error { message: String },
    /// `window.Telegram.WebApp` is missing
    Unavailable,
}

/// Event pushed by the host, only logged
#[derive(Debug, Clone, PartialEq)]
pub struct HostEvent {
    pub name: String,
    pub payload: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: Option<&str>, last: Option<&str>, username: Option<&str>) -> WebAppUser {
        WebAppUser {
            id: 1,
            username: username.map(str::to_string),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            user(Some("Anna"), Some("Petrova"), None).display_name(),
            Some("Anna Petrova".to_string())
        );
        assert_eq!(
            user(Some("Anna"), None, None).display_name(),
            Some("Anna".to_string())
        );
        assert_eq!(user(None, Some("Petrova"), None).display_name(), None);
    }

    #[test]
    fn test_contact_handle() {
        assert_eq!(
            user(None, None, Some("anna")).contact_handle(),
            Some("@anna".to_string())
        );
        assert_eq!(user(None, None, Some("")).contact_handle(), None);
        assert_eq!(user(None, None, None).contact_handle(), None);
    }

    #[test]
    fn test_user_from_host_json() {
        let json = r#"{"id": 123456789, "first_name": "Anna", "language_code": "ru"}"#;
        let user: WebAppUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 123456789);
        assert_eq!(user.username, None);
        assert_eq!(user.display_name().as_deref(), Some("Anna"));
    }

    #[test]
    fn test_script_reply() {
        let ok: ScriptReply = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert_eq!(
            ok,
            ScriptReply::Ok {
                value: serde_json::Value::Null
            }
        );

        let err: ScriptReply =
            serde_json::from_str(r#"{"status": "error", "message": "WebAppDataInvalid"}"#)
                .unwrap();
        assert_eq!(
            err,
            ScriptReply::Error {
                message: "WebAppDataInvalid".to_string()
            }
        );

        let missing: ScriptReply = serde_json::from_str(r#"{"status": "unavailable"}"#).unwrap();
        assert_eq!(missing, ScriptReply::Unavailable);
    }
}
