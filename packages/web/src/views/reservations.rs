//! Reservations page, reachable only with a signed-in user.

use dioxus::prelude::*;
use ui::use_auth;
use ui::views::ReservationsView;

use crate::Route;

#[component]
pub fn Reservations() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if auth().user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        ReservationsView {
            on_navigate_home: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}
