use dioxus::prelude::*;
use ui::views::HomeView;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        HomeView {
            on_select_hotel: move |id: i64| {
                nav.push(Route::HotelDetail { id });
            },
        }
    }
}
