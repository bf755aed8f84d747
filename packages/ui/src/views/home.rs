use dioxus::prelude::*;
use store::models::distinct_cities;
use store::HotelFilter;

use crate::icons::FaMagnifyingGlass;
use crate::{
    use_api, use_async_resource, use_config, AsyncState, ErrorMessage, FiltersPanel, HotelsList,
    Icon, Spinner,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared home view: the hotel catalogue with search and filters.
///
/// The fetched list is never modified; the filter derives the visible subset
/// on every render.
#[component]
pub fn HomeView(
    /// Called with a hotel id when the user opens a hotel.
    on_select_hotel: EventHandler<i64>,
) -> Element {
    let client = use_api();
    let config = use_config();
    let mut filter = use_signal(|| HotelFilter::new(config.filter_mode()));

    let hotels = use_async_resource(move || {
        let client = client.clone();
        async move {
            client.list_hotels().await.map_err(|e| {
                tracing::warn!("Error fetching hotels: {e}");
                "Error loading hotels".to_string()
            })
        }
    });

    let body = match hotels() {
        AsyncState::Success(list) => {
            let cities = distinct_cities(&list);
            let current = filter();
            let visible = current.apply(&list);
            let search = current.search().to_string();

            rsx! {
                div {
                    class: "home-layout",
                    aside {
                        class: "home-sidebar",
                        FiltersPanel {
                            cities,
                            city: current.city().to_string(),
                            min_price: current.price().min,
                            max_price: current.price().max,
                            on_city: move |city: String| filter.write().set_city(city),
                            on_price: move |(min, max): (f64, f64)| filter.write().set_price(min, max),
                            on_reset: move |_| filter.write().reset(),
                        }
                    }
                    div {
                        class: "home-main",
                        div {
                            class: "search-box",
                            span { class: "search-icon", Icon { icon: FaMagnifyingGlass, width: 14, height: 14 } }
                            input {
                                r#type: "text",
                                class: "form-input search-input",
                                placeholder: "Search hotels...",
                                value: "{search}",
                                oninput: move |evt| filter.write().set_search(evt.value()),
                            }
                        }
                        if visible.is_empty() {
                            p { class: "empty-state", "No hotels found" }
                        } else {
                            HotelsList { hotels: visible, on_select: on_select_hotel }
                        }
                    }
                }
            }
        }
        AsyncState::Failure(message) => rsx! {
            ErrorMessage { message }
        },
        _ => rsx! {
            Spinner {}
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            {body}
        }
    }
}
