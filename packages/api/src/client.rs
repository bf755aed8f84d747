//! # Authenticated request pipeline
//!
//! Every call to the hotels API goes through [`ApiClient`]. It resolves paths
//! against the configured base URL, serializes bodies, attaches the session's
//! bearer token and turns the raw [`ApiResponse`] into a typed result.
//!
//! ## Authorization
//!
//! The token is read from the [`SessionProvider`] when the request is sent,
//! never cached on the client, so a login or logout in another part of the UI
//! takes effect on the next request.
//!
//! A 401 on an authenticated request is handled here and only here: the
//! session is cleared, the unauthorized hook runs (the web app uses it to
//! redirect to `/login`) and the caller receives [`ApiError::Unauthorized`].
//! Public requests (login, register) skip both the token and the 401 path.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::SessionProvider;

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

type Hook = Rc<dyn Fn()>;

pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    session: S,
    on_unauthorized: Option<Hook>,
}

impl<T: Clone, S: Clone> Clone for ApiClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: self.transport.clone(),
            session: self.session.clone(),
            on_unauthorized: self.on_unauthorized.clone(),
        }
    }
}

impl<T, S> ApiClient<T, S> {
    pub fn new(base_url: impl Into<String>, transport: T, session: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
            session,
            on_unauthorized: None,
        }
    }

    /// Run `hook` after a 401 has cleared the session.
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl<T: Transport, S: SessionProvider> ApiClient<T, S> {
    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let request = ApiRequest::new(Method::Get, self.url(path));
        let response = self.send(request, true).await?;
        decode(&response)
    }

    pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = json_request(Method::Post, self.url(path), body)?;
        let response = self.send(request, true).await?;
        decode(&response)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = ApiRequest::new(Method::Delete, self.url(path));
        self.send(request, true).await?;
        Ok(())
    }

    /// POST without credentials and without the 401 logout path.
    pub(crate) async fn post_public<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = json_request(Method::Post, self.url(path), body)?;
        let response = self.send(request, false).await?;
        decode(&response)
    }

    async fn send(
        &self,
        mut request: ApiRequest,
        authenticated: bool,
    ) -> Result<ApiResponse, ApiError> {
        if authenticated {
            if let Some(token) = self.session.token() {
                request.set_header("Authorization", format!("Bearer {token}"));
            }
        }

        let method = request.method;
        let url = request.url.clone();
        tracing::debug!("{} {}", method.as_str(), url);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("{} {} failed: {e}", method.as_str(), url);
                return Err(e);
            }
        };

        if response.is_success() {
            return Ok(response);
        }

        tracing::warn!("{} {} returned {}", method.as_str(), url, response.status);
        if authenticated && response.status == 401 {
            self.session.logout();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(ApiError::Unauthorized);
        }
        Err(ApiError::from_status(response.status, &response.body))
    }
}

fn json_request<B: Serialize + ?Sized>(
    method: Method,
    url: String,
    body: &B,
) -> Result<ApiRequest, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let mut request = ApiRequest::new(method, url);
    request.set_header("Content-Type", "application/json".to_string());
    request.body = Some(body);
    Ok(request)
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
