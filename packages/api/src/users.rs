//! Sign-up and sign-in. Both calls are public: no bearer token is attached
//! and a 401 is reported as a failed login rather than a lost session.

use serde::Deserialize;
use store::{LoginForm, RegisterForm, SessionProvider, User};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;

const USER_EXISTS: &str = "User already exists";

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<User>,
}

impl<T: Transport, S: SessionProvider> ApiClient<T, S> {
    /// `POST /users`
    pub async fn register(&self, form: &RegisterForm) -> Result<serde_json::Value, ApiError> {
        self.post_public("/users", &form.normalized()).await
    }

    /// `POST /users/login`. On success the token and user are stored in the
    /// session and the user is returned.
    pub async fn login(&self, form: &LoginForm) -> Result<User, ApiError> {
        let body = serde_json::json!({
            "email": form.normalized_email(),
            "password": form.password,
        });
        let response: LoginResponse = self.post_public("/users/login", &body).await?;

        match (response.token, response.user) {
            (Some(token), Some(user)) if !token.is_empty() => {
                self.session().set_auth(token, user.clone());
                Ok(user)
            }
            _ => Err(ApiError::Validation(
                "Invalid response from server".to_string(),
            )),
        }
    }
}

/// Inline message for a failed registration.
pub fn register_error_message(error: &ApiError) -> String {
    if error.server_error() == Some(USER_EXISTS) {
        return "Email already registered. Please try with a different email.".to_string();
    }
    error.user_message("Registration failed. Please try again.")
}

/// Inline message for a failed login.
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Network(_) => "Network error - please check your connection".to_string(),
        other => other.user_message("Login failed - please check your credentials"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client, MockTransport};

    fn login_form() -> LoginForm {
        LoginForm {
            email: " Ana@Example.com ".into(),
            password: "secret1".into(),
        }
    }

    #[tokio::test]
    async fn test_login_stores_session() {
        let transport = MockTransport::new();
        let api = client(&transport);
        transport.respond(
            200,
            r#"{"token": "tok-5", "user": {"id": 7, "firstName": "Ana", "email": "ana@example.com"}}"#,
        );

        let user = api.login(&login_form()).await.unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(api.session().token().as_deref(), Some("tok-5"));

        let sent = transport.request(0);
        assert_eq!(sent.url, "https://api.test/users/login");
        assert_eq!(sent.header("Authorization"), None);
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["email"], "ana@example.com");
    }

    #[tokio::test]
    async fn test_login_without_token_is_invalid_response() {
        let transport = MockTransport::new();
        let api = client(&transport);
        transport.respond(200, r#"{"user": {"id": 7}}"#);

        let err = api.login(&login_form()).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid response from server");
        assert!(api.session().token().is_none());
    }

    #[tokio::test]
    async fn test_login_unauthorized_is_not_a_logout() {
        let transport = MockTransport::new();
        let api = client(&transport);
        api.session().set_auth("old".into(), crate::testing::user());
        transport.respond(401, r#"{"message": "Invalid credentials"}"#);

        let err = api.login(&login_form()).await.unwrap_err();
        assert_eq!(login_error_message(&err), "Invalid credentials");
        assert_eq!(api.session().token().as_deref(), Some("old"));
    }

    #[tokio::test]
    async fn test_register_is_public_and_normalized() {
        let transport = MockTransport::new();
        let api = client(&transport);
        api.session().set_auth("old".into(), crate::testing::user());
        transport.respond(201, r#"{"id": 10}"#);

        let form = RegisterForm {
            first_name: " Ana ".into(),
            last_name: "Rojas".into(),
            email: "ANA@example.com".into(),
            password: "secret1".into(),
            gender: "female".into(),
        };
        api.register(&form).await.unwrap();

        let sent = transport.request(0);
        assert_eq!(sent.url, "https://api.test/users");
        assert_eq!(sent.header("Authorization"), None);
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["firstName"], "Ana");
        assert_eq!(body["email"], "ana@example.com");
    }

    #[test]
    fn test_register_error_messages() {
        let exists = ApiError::from_status(400, r#"{"error": "User already exists"}"#);
        assert_eq!(
            register_error_message(&exists),
            "Email already registered. Please try with a different email."
        );
        let other = ApiError::from_status(500, "");
        assert_eq!(
            register_error_message(&other),
            "Registration failed. Please try again."
        );
    }

    #[test]
    fn test_login_error_messages() {
        assert_eq!(
            login_error_message(&ApiError::Network("offline".into())),
            "Network error - please check your connection"
        );
        assert_eq!(
            login_error_message(&ApiError::from_status(400, "{}")),
            "Login failed - please check your credentials"
        );
    }
}
