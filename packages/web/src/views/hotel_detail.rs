use dioxus::prelude::*;
use ui::views::HotelDetailView;

use crate::Route;

#[component]
pub fn HotelDetail(id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        HotelDetailView {
            hotel_id: id,
            on_select_hotel: move |id: i64| {
                nav.push(Route::HotelDetail { id });
            },
        }
    }
}
