use dioxus::prelude::*;

use store::BookingConfig;
use ui::{AuthProvider, Navbar};
use views::{Home, HotelDetail, Login, NotFound, Register, Reservations};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/hotels/:id")]
        HotelDetail { id: i64 },
        #[route("/reservations")]
        Reservations {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Built-in defaults; `HOTELS_API_URL` at build time overrides the API base.
const CONFIG_TOML: &str = include_str!("../booking.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn load_config() -> BookingConfig {
    let config = BookingConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}: {e}", BookingConfig::filename());
        BookingConfig::default()
    });
    config.with_base_url(option_env!("HOTELS_API_URL"))
}

/// A 401 has already cleared the session; send the user to the login page.
fn redirect_to_login() {
    tracing::info!("Session rejected by the API, redirecting to login");
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config,
            on_unauthorized: move |_| redirect_to_login(),
            Router::<Route> {}
        }
    }
}

/// Layout shared by every page: navbar on top, routed view below.
#[component]
fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        Navbar {
            on_navigate_home: move |_| {
                nav.push(Route::Home {});
            },
            on_navigate_reservations: move |_| {
                nav.push(Route::Reservations {});
            },
            on_navigate_login: move |_| {
                nav.push(Route::Login {});
            },
            on_navigate_register: move |_| {
                nav.push(Route::Register {});
            },
        }
        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}
