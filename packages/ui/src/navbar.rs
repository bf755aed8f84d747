use dioxus::prelude::*;

use crate::{use_auth, LogoutButton};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top navigation. Shows the reservations link and a welcome line while
/// signed in, login/register links otherwise.
#[component]
pub fn Navbar(
    on_navigate_home: EventHandler<()>,
    on_navigate_reservations: EventHandler<()>,
    on_navigate_login: EventHandler<()>,
    on_navigate_register: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let user = auth().user;

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            button {
                class: "navbar-brand",
                onclick: move |_| on_navigate_home.call(()),
                span { class: "brand-accent", "Booking" }
                span { "App" }
            }
            div {
                class: "navbar-links",
                {match user {
                    Some(user) => {
                        let name = user.display_name().to_string();
                        rsx! {
                            button {
                                class: "nav-link",
                                onclick: move |_| on_navigate_reservations.call(()),
                                "Reservations"
                            }
                            span { class: "nav-welcome", "Welcome, {name}" }
                            LogoutButton {
                                class: "btn btn-primary",
                                on_logout: move |_| on_navigate_login.call(()),
                            }
                        }
                    }
                    None => rsx! {
                        button {
                            class: "nav-link",
                            onclick: move |_| on_navigate_login.call(()),
                            "Login"
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_navigate_register.call(()),
                            "Register"
                        }
                    },
                }}
            }
        }
    }
}
