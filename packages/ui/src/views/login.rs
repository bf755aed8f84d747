use dioxus::prelude::*;
use store::LoginForm;

use crate::icons::FaUser;
use crate::{login_error_message, use_api, ErrorMessage, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared login view. Field errors render under their inputs; request errors
/// render above the form.
#[component]
pub fn LoginView(
    /// Called once the session has been stored.
    on_success: EventHandler<()>,
) -> Element {
    let client = use_api();

    let mut form = use_signal(LoginForm::default);
    let mut field_errors = use_signal(store::FieldErrors::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form();
        if let Err(errors) = current.validate() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(store::FieldErrors::default());

        let client = client.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);
            match client.login(&current).await {
                Ok(user) => {
                    tracing::debug!("Logged in as {}", user.email);
                    on_success.call(());
                }
                Err(e) => {
                    tracing::warn!("Login error: {e}");
                    error.set(Some(login_error_message(&e)));
                }
            }
            loading.set(false);
        });
    };

    let LoginForm { email, password } = form();
    let email_error = field_errors().get("email").map(str::to_string);
    let password_error = field_errors().get("password").map(str::to_string);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-page",
            div {
                class: "auth-header",
                div { class: "auth-avatar", Icon { icon: FaUser, width: 40, height: 40 } }
                h2 { class: "auth-title brand-accent", "USER" }
            }

            if let Some(message) = error() {
                ErrorMessage { message }
            }

            form {
                class: "form",
                onsubmit: handle_submit,
                div {
                    class: "form-field",
                    label { class: "form-label", "Email" }
                    input {
                        r#type: "email",
                        class: "form-input",
                        placeholder: "Enter your email",
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
                        placeholder: "Enter your password",
                        value: "{password}",
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                    if let Some(message) = password_error {
                        p { class: "field-error", "{message}" }
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-block",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Submit" }
                }
            }
        }
    }
}
