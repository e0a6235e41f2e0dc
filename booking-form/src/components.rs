//! Dioxus fragments bound to the form state
//!
//! Both lists are keyed per item so a removal only re-renders what changed.

use dioxus::prelude::*;

use crate::models::PhotoEntry;

/// Selected dates as removable tags
#[component]
pub fn DateTagList(
    dates: Vec<String>,
    on_remove: EventHandler<usize>,
    #[props(default = "×".to_string())] remove_label: String,
) -> Element {
    rsx! {
        div {
            id: "dateList",
            class: "date-list",
            style: "display: flex; flex-wrap: wrap; gap: 8px; margin-top: 8px;",
            for (index, date) in dates.iter().enumerate() {
                span {
                    key: "{date}",
                    class: "date-tag",
                    style: "display: inline-flex; align-items: center; gap: 6px; padding: 4px 10px; border-radius: 16px; background: rgba(192, 122, 48, 0.15); font-size: 14px;",
                    "{date}"
                    button {
                        r#type: "button",
                        class: "remove-date",
                        style: "border: none; background: transparent; cursor: pointer; font-size: 16px; line-height: 1;",
                        onclick: move |_| on_remove.call(index),
                        "{remove_label}"
                    }
                }
            }
        }
    }
}

/// Thumbnails of the attached photos, plus placeholders for uploads in flight
#[component]
pub fn PhotoPreviewGrid(
    photos: Vec<PhotoEntry>,
    on_remove: EventHandler<usize>,
    #[props(default = 0)] pending: usize,
) -> Element {
    rsx! {
        div {
            id: "photoPreview",
            class: "photo-preview",
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(88px, 1fr)); gap: 8px; margin-top: 12px;",
            for (index, photo) in photos.iter().enumerate() {
                div {
                    key: "{photo.id}",
                    class: "photo-item",
                    style: "position: relative; aspect-ratio: 1; border-radius: 8px; overflow: hidden; background: #222;",
                    img {
                        src: "{photo.data}",
                        alt: "{photo.name}",
                        style: "width: 100%; height: 100%; object-fit: cover;",
                    }
                    button {
                        r#type: "button",
                        class: "remove-photo",
                        style: "position: absolute; top: 4px; right: 4px; width: 24px; height: 24px; border-radius: 50%; border: none; background: rgba(0, 0, 0, 0.6); color: white; cursor: pointer;",
                        onclick: move |_| on_remove.call(index),
                        "×"
                    }
                }
            }
            for slot in 0..pending {
                div {
                    key: "pending-{slot}",
                    class: "photo-item photo-pending",
                    style: "aspect-ratio: 1; border-radius: 8px; display: flex; align-items: center; justify-content: center; background: #222; color: #999;",
                    "⏳"
                }
            }
        }
    }
}
