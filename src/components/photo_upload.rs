use dioxus::html::HasFileData;
use booking_form::{encoding, FileMeta, FormState, PhotoPreviewGrid, MAX_PHOTOS};
use dioxus::html::FileData;
use dioxus::prelude::*;
use dioxus_i18n::t;
use telegram_webapp::{HostBridge, TelegramWebApp};

use crate::error::AppError;

fn file_meta(file: &FileData) -> FileMeta {
    FileMeta::new(file.name(), file.content_type())
}

/// Upload zone accepting picked or dropped images
#[component]
pub fn PhotoUpload(mut form: Signal<FormState>) -> Element {
    let bridge = use_context::<TelegramWebApp>();
    let mut drag_over = use_signal(|| false);

    let mut accept_files = move |files: Vec<FileData>| {
        if files.is_empty() {
            return;
        }
        let metas: Vec<FileMeta> = files.iter().map(file_meta).collect();

        let reserved = form.write().reserve_batch(&metas);
        let pending = match reserved {
            Ok(pending) => pending,
            Err(e) => {
                let err = AppError::from(e);
                log::warn!("Photo batch rejected: {}", err);
                let message = t!(err.message_key(), max: MAX_PHOTOS as i64);
                spawn(async move {
                    if let Err(e) = bridge.show_alert(&message).await {
                        log::warn!("Alert failed: {}", e);
                    }
                });
                return;
            }
        };

        let images = files
            .into_iter()
            .filter(|f| encoding::resolve_image_mime(&file_meta(f)).is_some());
        for (upload, file) in pending.into_iter().zip(images) {
            spawn(async move {
                match file.read_bytes().await {
                    Ok(bytes) => {
                        let mut state = form.write();
                        if let Some(photo) = state.complete_upload(upload, &bytes) {
                            log::debug!("Attached '{}' ({})", photo.name, photo.mime);
                        }
                    }
                    Err(e) => {
                        log::warn!("Reading '{}' failed: {}", upload.name(), e);
                        form.write().cancel_upload(upload);
                    }
                }
            });
        }
    };

    let zone_style = if drag_over() {
        "border: 2px dashed var(--accent); background: rgba(192, 122, 48, 0.1);"
    } else {
        "border: 2px dashed var(--border); background: rgba(255, 255, 255, 0.01);"
    };
    let state = form.read();
    let attached = state.photos().len() + state.pending_uploads();

    rsx! {
        div { class: "form-group",
            label { class: "form-label", {t!("photos-label")} }
            label {
                id: "fileUpload",
                r#for: "photoInput",
                class: "file-upload",
                style: "display: block; padding: 24px; border-radius: 12px; text-align: center; cursor: pointer; {zone_style}",
                ondragover: move |e: DragEvent| {
                    e.prevent_default();
                    drag_over.set(true);
                },
                ondragleave: move |_| drag_over.set(false),
                ondrop: move |e: DragEvent| {
                    e.prevent_default();
                    drag_over.set(false);
                    accept_files(e.files());
                },
                div { style: "font-size: 28px;", "📷" }
                div { {t!("photos-hint", max: MAX_PHOTOS as i64)} }
                div { style: "font-size: 12px; opacity: 0.7; margin-top: 4px;",
                    "{attached} / {MAX_PHOTOS}"
                }
            }
            input {
                id: "photoInput",
                r#type: "file",
                accept: "image/*",
                multiple: true,
                style: "display: none;",
                onchange: move |e: FormEvent| accept_files(e.files()),
            }
            PhotoPreviewGrid {
                photos: state.photos().to_vec(),
                pending: state.pending_uploads(),
                on_remove: move |index| {
                    form.write().remove_photo(index);
                },
            }
        }
    }
}
