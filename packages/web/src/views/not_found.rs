use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("No route for /{}", segments.join("/"));

    rsx! {
        div {
            class: "not-found",
            h2 { class: "not-found-title", "Oops! Something went wrong" }
            p { "Please try refreshing the page" }
        }
    }
}
