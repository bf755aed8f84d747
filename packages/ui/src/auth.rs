//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the one [`AuthStore`] of the app and the [`Client`]
//! built on top of it. The store's session is mirrored into a
//! `Signal<AuthSession>` through [`AuthStore::subscribe`], so anything that
//! changes the session (a login form, the Logout button, a 401 deep inside a
//! request) re-renders every component that reads [`use_auth`].

use api::{ApiClient, ReqwestTransport};
use dioxus::prelude::*;
use store::{AuthSession, AuthStore, BookingConfig, SessionProvider};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = store::FileStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStorage = store::MemoryStorage;

/// The API client every view talks through.
pub type Client = ApiClient<ReqwestTransport, AuthStore<PlatformStorage>>;

/// Session persistence for the current platform:
/// - **Web** (WASM + `web` feature): `window.localStorage`
/// - **Native**: one file per key under `<data_dir>/booking-app/`
fn platform_storage() -> PlatformStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("booking-app");
        store::FileStorage::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStorage::new()
    }
}

/// Current session. Updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthSession> {
    use_context::<Signal<AuthSession>>()
}

pub fn use_api() -> Client {
    use_context::<Client>()
}

pub fn use_config() -> BookingConfig {
    use_context::<BookingConfig>()
}

/// Provider component that restores the persisted session and exposes the
/// session signal, the API client and the config to its children.
#[component]
pub fn AuthProvider(
    config: BookingConfig,
    /// Runs after a 401 has cleared the session.
    on_unauthorized: EventHandler<()>,
    children: Element,
) -> Element {
    let auth_store = use_hook(|| AuthStore::load(platform_storage()));
    let auth_state = use_signal(|| auth_store.snapshot());

    use_hook(|| {
        auth_store.subscribe(move |session| {
            let mut state = auth_state;
            state.set(session.clone());
        });
    });

    let base_url = config.api.base_url.clone();
    let client = use_hook(move || {
        ApiClient::new(base_url, ReqwestTransport::new(), auth_store.clone())
            .with_unauthorized_hook(move || on_unauthorized.call(()))
    });

    use_context_provider(|| auth_state);
    use_context_provider(|| client);
    use_context_provider(|| config.clone());

    rsx! {
        {children}
    }
}

/// Button that clears the session and reports back to the caller.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_api();

    let onclick = move |_| {
        client.session().logout();
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
