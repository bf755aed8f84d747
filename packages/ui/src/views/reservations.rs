use dioxus::prelude::*;
use store::reservation::remove_booking;
use store::Booking;

use super::ConfirmDialog;
use crate::{
    use_api, use_async_resource, AsyncState, BookingCard, ErrorMessage, RatingModal, Spinner,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared reservations view. The platform crate only routes here when the
/// user is signed in.
///
/// Cancelling asks for confirmation, then drops the booking from the loaded
/// list without refetching. A failed cancel leaves the list as it was and
/// shows an inline error above it.
#[component]
pub fn ReservationsView(
    /// Called from the empty state to go back to the catalogue.
    on_navigate_home: EventHandler<()>,
) -> Element {
    let client = use_api();
    let fetch_client = client.clone();

    let mut bookings = use_async_resource(move || {
        let client = fetch_client.clone();
        async move {
            client.list_bookings().await.map_err(|e| {
                tracing::warn!("Error fetching bookings: {e}");
                e.user_message("Failed to load reservations")
            })
        }
    });

    let mut pending_cancel = use_signal(|| Option::<i64>::None);
    let mut cancelling = use_signal(|| false);
    let mut action_error = use_signal(|| Option::<String>::None);
    let mut rating = use_signal(|| Option::<Booking>::None);

    let confirm_cancel = move |_: ()| {
        let Some(id) = pending_cancel() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            cancelling.set(true);
            match client.cancel_booking(id).await {
                Ok(()) => {
                    if let Some(list) = bookings.write().data_mut() {
                        remove_booking(list, id);
                    }
                    action_error.set(None);
                    tracing::info!("Cancelled booking {id}");
                }
                Err(e) => {
                    action_error.set(Some(e.user_message("Failed to delete reservation")));
                }
            }
            cancelling.set(false);
            pending_cancel.set(None);
        });
    };

    let body = match bookings() {
        AsyncState::Success(list) if list.is_empty() => rsx! {
            div {
                class: "empty-card",
                p {
                    "No active reservations. To choose a hotel and book, "
                    button {
                        class: "btn btn-link",
                        onclick: move |_| on_navigate_home.call(()),
                        "go to Home"
                    }
                }
            }
        },
        AsyncState::Success(list) => rsx! {
            div {
                class: "booking-grid",
                for booking in list {
                    BookingCard {
                        key: "{booking.id}",
                        booking: booking.clone(),
                        on_cancel: move |id: i64| pending_cancel.set(Some(id)),
                        on_rate: move |booking: Booking| rating.set(Some(booking)),
                    }
                }
            }
        },
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
            h1 { class: "view-title view-title-center", "My Reservations" }

            if let Some(message) = action_error() {
                ErrorMessage { message }
            }

            {body}
        }

        if pending_cancel().is_some() {
            ConfirmDialog {
                title: "Cancel reservation",
                message: "Are you sure you want to delete this reservation?",
                confirm_label: "Delete",
                busy: cancelling(),
                on_confirm: confirm_cancel,
                on_cancel: move |_| pending_cancel.set(None),
            }
        }

        if let Some(booking) = rating() {
            RatingModal {
                booking,
                on_close: move |_| rating.set(None),
            }
        }
    }
}
