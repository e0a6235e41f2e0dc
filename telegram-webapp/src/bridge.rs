use crate::models::WebAppUser;

/// Error type for host bridge calls
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// The page is not running inside the host
    Unavailable,
    /// The host threw while handling the call
    Script(String),
    /// The reply could not be read
    Decode(String),
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BridgeError::Unavailable => write!(f, "Host bridge not available"),
            BridgeError::Script(msg) => write!(f, "Host bridge error: {}", msg),
            BridgeError::Decode(msg) => write!(f, "Host reply error: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}

/// Calls the mini-app makes into its host
///
/// `send_data` is fire-and-forget: `Ok` only means the host did not throw,
/// not that the bot received anything.
#[allow(async_fn_in_trait)]
pub trait HostBridge {
    /// Identity of the user who opened the mini-app, if the host shares it
    async fn init_data(&self) -> Result<Option<WebAppUser>, BridgeError>;

    async fn expand(&self) -> Result<(), BridgeError>;

    async fn enable_closing_confirmation(&self) -> Result<(), BridgeError>;

    async fn send_data(&self, data: &str) -> Result<(), BridgeError>;

    /// Blocking alert dialog
    async fn show_alert(&self, message: &str) -> Result<(), BridgeError>;

    async fn close(&self) -> Result<(), BridgeError>;
}
