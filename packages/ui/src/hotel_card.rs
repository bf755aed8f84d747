use dioxus::prelude::*;
use store::Hotel;

use crate::{use_config, StarRating};

/// Summary card: cover image, stars, location, price and a "See more" link.
/// A cover that fails to load is swapped for the placeholder.
#[component]
pub fn HotelCard(hotel: Hotel, on_select: EventHandler<i64>) -> Element {
    let config = use_config();
    let mut img_error = use_signal(|| false);

    let placeholder = config.images.placeholder.clone();
    let src = if img_error() {
        placeholder
    } else {
        hotel.cover_url(&config.api.base_url, &config.images.placeholder)
    };
    let id = hotel.id;

    rsx! {
        div {
            class: "hotel-card",
            div {
                class: "hotel-card-image",
                img {
                    src: "{src}",
                    alt: "{hotel.name}",
                    onerror: move |_| {
                        tracing::debug!("Image failed to load for hotel {id}");
                        img_error.set(true);
                    },
                }
            }
            div {
                class: "hotel-card-body",
                h3 { class: "hotel-card-title", "{hotel.name}" }
                StarRating { rating: hotel.rating }
                p { class: "hotel-card-location", "{hotel.city.name}, {hotel.city.country}" }
                div {
                    class: "hotel-card-footer",
                    span { class: "hotel-card-price", "${hotel.price}" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_select.call(id),
                        "See more..."
                    }
                }
            }
        }
    }
}

#[component]
pub fn HotelsList(hotels: Vec<Hotel>, on_select: EventHandler<i64>) -> Element {
    rsx! {
        div {
            class: "hotel-grid",
            for hotel in hotels {
                HotelCard {
                    key: "{hotel.id}",
                    hotel: hotel.clone(),
                    on_select: on_select,
                }
            }
        }
    }
}

/// Up to three hotels sharing the current hotel's country.
#[component]
pub fn OtherHotels(hotels: Vec<Hotel>, country: String, on_select: EventHandler<i64>) -> Element {
    if hotels.is_empty() {
        return rsx! {};
    }

    rsx! {
        section {
            class: "other-hotels",
            h2 {
                class: "section-title",
                "Other Hotels in "
                span { class: "brand-accent", "{country}" }
            }
            HotelsList { hotels, on_select }
        }
    }
}
