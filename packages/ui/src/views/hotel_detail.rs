use dioxus::prelude::*;
use store::models::other_hotels_in_country;
use store::Hotel;

use crate::{
    use_api, use_async_resource, use_config, AsyncState, ErrorMessage, ImageCarousel, LocationMap,
    OtherHotels, ReservationForm, ReviewsSection, Spinner, StarRating,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");
const OTHER_HOTELS_LIMIT: usize = 3;

#[derive(Clone, PartialEq)]
struct HotelPage {
    hotel: Hotel,
    others: Vec<Hotel>,
}

/// Shared hotel detail view.
///
/// Loads the hotel and the full catalogue (for "other hotels in the same
/// country") whenever `hotel_id` changes. Reviews load on their own.
#[component]
pub fn HotelDetailView(
    hotel_id: i64,
    /// Called with a hotel id when the user opens one of the other hotels.
    on_select_hotel: EventHandler<i64>,
) -> Element {
    let client = use_api();
    let config = use_config();

    // Track the id in a signal so the resource re-runs on route param change
    let mut id_signal = use_signal(|| hotel_id);
    if *id_signal.peek() != hotel_id {
        id_signal.set(hotel_id);
    }

    let page = use_async_resource(move || {
        let client = client.clone();
        let id = id_signal();
        async move {
            let load = async {
                let hotel = client.get_hotel(id).await?;
                let all = client.list_hotels().await?;
                let others = other_hotels_in_country(&hotel, &all, OTHER_HOTELS_LIMIT);
                Ok::<_, api::ApiError>(HotelPage { hotel, others })
            };
            load.await.map_err(|e| {
                tracing::warn!("Error fetching hotel {id}: {e}");
                "Failed to load hotel details".to_string()
            })
        }
    });

    let body = match page() {
        AsyncState::Success(HotelPage { hotel, others }) => {
            let images = hotel.gallery(&config.api.base_url, &config.images.placeholder);
            let country = hotel.city.country.clone();

            rsx! {
                div {
                    class: "detail-layout",
                    div {
                        class: "detail-main",
                        h1 { class: "view-title", "{hotel.name}" }
                        StarRating { rating: hotel.rating }
                        ImageCarousel {
                            images,
                            alt: hotel.name.clone(),
                            placeholder: config.images.placeholder.clone(),
                        }
                        p { class: "detail-description", "{hotel.description}" }
                        LocationMap {}
                    }
                    ReservationForm { hotel_id: hotel.id, price: hotel.price }
                }
                ReviewsSection { hotel_id: hotel.id }
                OtherHotels { hotels: others, country, on_select: on_select_hotel }
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
