use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;
use telegram_webapp::TelegramWebApp;

mod components;
mod config;
mod error;
mod i18n;
mod services;

use components::BookingScreen;
use config::{AppConfig, LoggingConfig};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config = AppConfig::load();
    init_logging(&config.logging);
    log::info!("Starting booking mini-app ({})", config.locale);

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

/// env_logger on native targets, the Dioxus logger in the browser
fn init_logging(logging: &LoggingConfig) {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::new()
        .filter_level(logging.level_filter())
        .parse_default_env()
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        use dioxus::logger::tracing::Level;
        let level = match logging.level_filter() {
            log::LevelFilter::Off | log::LevelFilter::Error => Level::ERROR,
            log::LevelFilter::Warn => Level::WARN,
            log::LevelFilter::Info => Level::INFO,
            log::LevelFilter::Debug => Level::DEBUG,
            log::LevelFilter::Trace => Level::TRACE,
        };
        // Fails only if a logger is already installed
        let _ = dioxus::logger::init(level);
    }
}

#[component]
fn App() -> Element {
    let config = use_context::<AppConfig>();
    let locale = config.locale.clone();
    use_init_i18n(move || i18n::init_i18n(&locale));
    use_context_provider(TelegramWebApp::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        BookingScreen { submission: config.submission.clone() }
    }
}
