use dioxus_i18n::prelude::*;
use unic_langid::{langid, LanguageIdentifier};

/// Initialize i18n configuration, Russian unless the config names another locale
pub fn init_i18n(locale: &str) -> I18nConfig {
    let selected: LanguageIdentifier = locale.parse().unwrap_or_else(|_| {
        log::warn!("Unknown locale '{}', falling back to ru-RU", locale);
        langid!("ru-RU")
    });

    I18nConfig::new(selected)
        .with_locale(Locale::new_static(
            langid!("ru-RU"),
            include_str!("../locales/ru-RU.ftl"),
        ))
        .with_locale(Locale::new_static(
            langid!("en-US"),
            include_str!("../locales/en-US.ftl"),
        ))
        .with_fallback(langid!("ru-RU"))
}
