use dioxus::prelude::*;
use store::images::resolve_image_url;
use store::Booking;

use crate::icons::FaStar;
use crate::star_rating::star_class;
use crate::views::ModalOverlay;
use crate::{use_api, use_config, ErrorMessage, Icon};

const DEFAULT_RATING: u8 = 5;

/// "Rate your stay" form for one past booking. Posts a review for the
/// booking's hotel; the modal closes on success and keeps the form with an
/// inline error otherwise.
#[component]
pub fn RatingModal(booking: Booking, on_close: EventHandler<()>) -> Element {
    let client = use_api();
    let config = use_config();

    let mut rating = use_signal(|| DEFAULT_RATING);
    let mut comment = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let image = resolve_image_url(
        booking.hotel.image.as_deref(),
        &config.api.base_url,
        &config.images.placeholder,
    );
    let days = booking.days().unwrap_or(0);
    let subtotal = booking.subtotal(config.reservations.nightly_rate).unwrap_or(0);
    let hotel_id = booking.hotel_id;

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);
            match client.create_review(hotel_id, rating(), &comment()).await {
                Ok(_) => {
                    tracing::info!("Review submitted for hotel {hotel_id}");
                    rating.set(DEFAULT_RATING);
                    comment.set(String::new());
                    on_close.call(());
                }
                Err(e) => {
                    error.set(Some(
                        e.user_message("Error submitting review. Please try again."),
                    ));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "modal-body",
                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "Rate your stay" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                if let Some(message) = error() {
                    ErrorMessage { message }
                }

                img { class: "modal-image", src: "{image}", alt: "{booking.hotel.name}" }
                div {
                    class: "modal-summary",
                    h3 { "{booking.hotel.name}" }
                    p { "Reservation Days: {days}" }
                    p { "Subtotal: ${subtotal}" }
                }

                form {
                    class: "form",
                    onsubmit: handle_submit,
                    div {
                        class: "form-field",
                        label { class: "form-label", "Rating" }
                        div {
                            class: "rating-picker",
                            for value in 1..=5u8 {
                                button {
                                    key: "{value}",
                                    r#type: "button",
                                    class: star_class(value <= rating()),
                                    onclick: move |_| rating.set(value),
                                    Icon { icon: FaStar, width: 24, height: 24 }
                                }
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        label { class: "form-label", "Comments" }
                        textarea {
                            class: "form-input",
                            rows: "4",
                            required: true,
                            value: "{comment}",
                            oninput: move |evt| comment.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: submitting(),
                        if submitting() { "Submitting..." } else { "Submit Review" }
                    }
                }
            }
        }
    }
}
