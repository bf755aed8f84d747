use dioxus::prelude::*;

use crate::views::Notice;
use crate::{use_api, ErrorMessage};

/// Check-in/check-out form on the hotel page. Errors, including "not signed
/// in", are shown above the form; the hotel stays on screen.
#[component]
pub fn ReservationForm(hotel_id: i64, price: f64) -> Element {
    let client = use_api();

    let mut check_in = use_signal(String::new);
    let mut check_out = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut created = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);
            match client
                .create_booking(hotel_id, &check_in(), &check_out())
                .await
            {
                Ok(_) => {
                    tracing::info!("Reservation created for hotel {hotel_id}");
                    check_in.set(String::new());
                    check_out.set(String::new());
                    created.set(true);
                }
                Err(e) => error.set(Some(e.user_message("Failed to create reservation"))),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "reservation-form",
            h2 { class: "section-title brand-accent", "Reservation" }

            if let Some(message) = error() {
                ErrorMessage { message }
            }

            form {
                class: "form",
                onsubmit: handle_submit,
                div {
                    class: "form-field",
                    label { class: "form-label", "Check-in" }
                    input {
                        r#type: "date",
                        class: "form-input",
                        required: true,
                        value: "{check_in}",
                        oninput: move |evt| check_in.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { class: "form-label", "Check-out" }
                    input {
                        r#type: "date",
                        class: "form-input",
                        required: true,
                        value: "{check_out}",
                        oninput: move |evt| check_out.set(evt.value()),
                    }
                }
                div { class: "reservation-price", "${price} per night" }
                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-block",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Submit" }
                }
            }
        }

        if created() {
            Notice {
                message: "Reservation created successfully!",
                on_close: move |_| created.set(false),
            }
        }
    }
}
