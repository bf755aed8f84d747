use dioxus::prelude::*;
use store::forms::GENDERS;
use store::{FieldErrors, RegisterForm};

use super::Notice;
use crate::{register_error_message, use_api, ErrorMessage};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared registration view. A successful sign-up shows a notice; closing
/// it calls `on_success` so the platform can route to the login page.
#[component]
pub fn RegisterView(on_success: EventHandler<()>) -> Element {
    let client = use_api();

    let mut form = use_signal(RegisterForm::default);
    let mut field_errors = use_signal(FieldErrors::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut registered = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form();
        if let Err(errors) = current.validate() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::default());

        let client = client.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);
            match client.register(&current).await {
                Ok(_) => {
                    tracing::info!("Registered {}", current.normalized().email);
                    registered.set(true);
                }
                Err(e) => {
                    tracing::warn!("Registration error: {e}");
                    error.set(Some(register_error_message(&e)));
                }
            }
            loading.set(false);
        });
    };

    let RegisterForm {
        first_name,
        last_name,
        email,
        password,
        gender,
    } = form();
    let errors = field_errors();
    let first_name_error = errors.get("firstName").map(str::to_string);
    let last_name_error = errors.get("lastName").map(str::to_string);
    let email_error = errors.get("email").map(str::to_string);
    let password_error = errors.get("password").map(str::to_string);
    let gender_error = errors.get("gender").map(str::to_string);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-page",
            h2 { class: "auth-title", "Create your account" }

            if let Some(message) = error() {
                ErrorMessage { message }
            }

            form {
                class: "form",
                onsubmit: handle_submit,
                div {
                    class: "form-field",
                    label { class: "form-label", "First Name" }
                    input {
                        r#type: "text",
                        class: "form-input",
                        value: "{first_name}",
                        oninput: move |evt| form.write().first_name = evt.value(),
                    }
                    if let Some(message) = first_name_error {
                        p { class: "field-error", "{message}" }
                    }
                }
                div {
                    class: "form-field",
                    label { class: "form-label", "Last Name" }
                    input {
                        r#type: "text",
                        class: "form-input",
                        value: "{last_name}",
                        oninput: move |evt| form.write().last_name = evt.value(),
                    }
                    if let Some(message) = last_name_error {
                        p { class: "field-error", "{message}" }
                    }
                }
                div {
                    class: "form-field",
                    label { class: "form-label", "Email address" }
                    input {
                        r#type: "email",
                        class: "form-input",
                        value: "{email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                    if let Some(message) = email_error {
                        p { class: "field-error", "{message}" }
                    }
                }
                div {
                    class: "form-field",
                    label { class: "form-label", "Password" }
                    input {
                        r#type: "password",
                        class: "form-input",
                        value: "{password}",
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                    if let Some(message) = password_error {
                        p { class: "field-error", "{message}" }
                    }
                }
                div {
                    class: "form-field",
                    label { class: "form-label", "Gender" }
                    select {
                        class: "form-input",
                        value: "{gender}",
                        onchange: move |evt| form.write().gender = evt.value(),
                        for (option_value, label) in GENDERS.into_iter().map(|v| (v, gender_label(v))) {
                            option {
                                key: "{option_value}",
                                value: option_value,
                                selected: option_value == gender,
                                "{label}"
                            }
                        }
                    }
                    if let Some(message) = gender_error {
                        p { class: "field-error", "{message}" }
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-block",
                    disabled: loading(),
                    if loading() { "Registering..." } else { "Register" }
                }
            }
        }

        if registered() {
            Notice {
                message: "Registration successful! Please login.",
                on_close: move |_| {
                    registered.set(false);
                    on_success.call(());
                },
            }
        }
    }
}

fn gender_label(value: &str) -> &'static str {
    match value {
        "male" => "Male",
        "female" => "Female",
        _ => "Other",
    }
}
