use dioxus::prelude::*;
use store::images::resolve_image_url;
use store::reservation::display_date;
use store::Booking;

use crate::use_config;

/// One reservation: hotel, dates, stay length and subtotal, with cancel and
/// rate actions.
#[component]
pub fn BookingCard(
    booking: Booking,
    on_cancel: EventHandler<i64>,
    on_rate: EventHandler<Booking>,
) -> Element {
    let config = use_config();
    let mut img_error = use_signal(|| false);

    let image = if img_error() {
        config.images.placeholder.clone()
    } else {
        resolve_image_url(
            booking.hotel.image.as_deref(),
            &config.api.base_url,
            &config.images.placeholder,
        )
    };
    let check_in = display_date(&booking.check_in);
    let check_out = display_date(&booking.check_out);
    let days = booking
        .days()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    let subtotal = booking
        .subtotal(config.reservations.nightly_rate)
        .map(|s| format!("${s}"))
        .unwrap_or_else(|| "-".to_string());
    let id = booking.id;
    let rated = booking.clone();

    rsx! {
        div {
            class: "booking-card",
            div {
                class: "booking-card-image",
                img {
                    src: "{image}",
                    alt: "{booking.hotel.name}",
                    onerror: move |_| img_error.set(true),
                }
            }
            div {
                class: "booking-card-body",
                h3 { class: "booking-card-title", "{booking.hotel.name}" }
                p {
                    class: "booking-card-location",
                    "{booking.hotel.city.name}, {booking.hotel.city.country}"
                }
                div {
                    class: "booking-card-details",
                    p { "Check-in: {check_in}" }
                    p { "Check-out: {check_out}" }
                    p { "Reservation days: {days}" }
                    p { class: "booking-card-subtotal", "Subtotal: {subtotal}" }
                }
                div {
                    class: "booking-card-actions",
                    button {
                        class: "btn btn-primary btn-block",
                        onclick: move |_| on_cancel.call(id),
                        "Cancel Reservation"
                    }
                    button {
                        class: "btn btn-secondary btn-block",
                        onclick: move |_| on_rate.call(rated.clone()),
                        "Rate and comment this visit..."
                    }
                }
            }
        }
    }
}
