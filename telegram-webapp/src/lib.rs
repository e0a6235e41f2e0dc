//! # Telegram WebApp
//!
//! Host bridge for Dioxus pages running as Telegram mini-apps.
//!
//! This crate provides:
//! - The [`HostBridge`] trait the application talks to
//! - [`TelegramWebApp`], the implementation backed by `window.Telegram.WebApp`
//! - Identity models from `initDataUnsafe`
//! - A hook that subscribes to inbound host events
//!
//! ## Separation of Concerns
//!
//! This crate only forwards calls to the host. It does **not**:
//! - Build or validate payloads (handled by the application)
//! - Wait for delivery acknowledgments (the host offers none)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use telegram_webapp::{HostBridge, TelegramWebApp};
//!
//! let bridge = TelegramWebApp::new();
//! bridge.expand().await?;
//! if let Some(user) = bridge.init_data().await? {
//!     log::info!("Opened by {}", user.id);
//! }
//! bridge.send_data(&json).await?;
//! ```

pub mod bridge;
pub mod component;
pub mod models;
pub mod service;

pub use bridge::{BridgeError, HostBridge};
pub use component::use_host_events;
pub use models::{HostEvent, ScriptReply, WebAppUser};
pub use service::{TelegramWebApp, SEND_DATA_LIMIT};
