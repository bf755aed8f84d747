use dioxus::prelude::*;
use store::Gallery;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

/// Hotel image carousel. Prev/next wrap around and are only shown when there
/// is more than one image; an empty list shows the placeholder.
#[component]
pub fn ImageCarousel(images: Vec<String>, alt: String, placeholder: String) -> Element {
    let mut gallery = use_signal(|| Gallery::new(images.len()));
    if gallery.peek().len() != images.len() {
        gallery.set(Gallery::new(images.len()));
    }

    let current = gallery()
        .current(&images)
        .cloned()
        .unwrap_or_else(|| placeholder.clone());

    rsx! {
        div {
            class: "carousel",
            img { class: "carousel-image", src: "{current}", alt: "{alt}" }
            if gallery().has_controls() {
                button {
                    class: "carousel-btn carousel-prev",
                    onclick: move |_| gallery.write().prev(),
                    Icon { icon: FaChevronLeft, width: 16, height: 16 }
                }
                button {
                    class: "carousel-btn carousel-next",
                    onclick: move |_| gallery.write().next(),
                    Icon { icon: FaChevronRight, width: 16, height: 16 }
                }
            }
        }
    }
}
