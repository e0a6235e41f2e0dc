//! Submit flow once the form has validated
//!
//! The host bridge gives no delivery acknowledgment. A message the host
//! accepts is reported as sent after `success_delay`, even if the bot never
//! receives it. Only a bridge call that fails outright takes the form back to
//! editing.

use booking_form::{BridgeMessage, SubmissionPhase};
use telegram_webapp::HostBridge;

use crate::config::SubmissionConfig;
use crate::error::AppError;
use crate::services::timer;

/// Startup calls into the host, returning the user's identity if shared
pub async fn init_host<B: HostBridge>(bridge: &B) -> Option<telegram_webapp::WebAppUser> {
    if let Err(e) = bridge.expand().await {
        log::warn!("WebApp expand failed: {}", e);
    }
    if let Err(e) = bridge.enable_closing_confirmation().await {
        log::warn!("Enabling closing confirmation failed: {}", e);
    }

    match bridge.init_data().await {
        Ok(Some(user)) => {
            log::info!("Mini-app opened by user {}", user.id);
            Some(user)
        }
        Ok(None) => {
            log::info!("Host shared no user identity");
            None
        }
        Err(e) => {
            log::warn!("Reading host identity failed: {}", e);
            None
        }
    }
}

/// Sends a validated lead and drives the phases until the app closes
///
/// `on_phase` sees `Submitting`, then either `Success` or `Failed`. On
/// `Failed` the error is returned so the caller can alert the user.
pub async fn submit_lead<B, F>(
    bridge: &B,
    message: &BridgeMessage,
    config: &SubmissionConfig,
    mut on_phase: F,
) -> Result<(), AppError>
where
    B: HostBridge,
    F: FnMut(SubmissionPhase),
{
    let phase = SubmissionPhase::Submitting;
    on_phase(phase);
    log::info!(
        "Submitting lead for [{}] with {} photo(s)",
        message.data.dates,
        message.data.photos.len()
    );

    let dispatched = match message.to_json() {
        Ok(json) => bridge.send_data(&json).await.map_err(AppError::from),
        Err(e) => Err(AppError::from(e)),
    };

    if let Err(e) = dispatched {
        log::error!("Lead dispatch failed: {}", e);
        on_phase(phase.after_dispatch(false));
        return Err(e);
    }

    timer::sleep(config.success_delay()).await;
    on_phase(phase.after_dispatch(true));
    log::info!("Lead handed to host");

    timer::sleep(config.close_delay()).await;
    if let Err(e) = bridge.close().await {
        log::warn!("Closing the mini-app failed: {}", e);
    }

    Ok(())
}
