use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(default)] small: bool) -> Element {
    let class = if small { "spinner spinner-small" } else { "spinner" };
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "{class}" }
        }
    }
}

/// Static inline error. There is no retry; a page refresh recovers.
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "error-message",
            role: "alert",
            "{message}"
        }
    }
}
