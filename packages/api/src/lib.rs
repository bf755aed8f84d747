//! # API crate: typed client for the remote hotels API
//!
//! The booking front-end keeps no business logic of its own. Hotels, bookings,
//! reviews and accounts all live behind a REST API, and this crate is the only
//! code that talks to it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL, bearer token from the session, 401 → logout + hook |
//! | [`transport`] | [`Transport`] seam and the [`ReqwestTransport`] used in production |
//! | [`error`] | [`ApiError`] taxonomy and user-facing messages |
//! | `hotels`, `bookings`, `reviews`, `users` | One `impl ApiClient` block per resource |
//!
//! ## Endpoints
//!
//! - **Hotels**: `list_hotels`, `get_hotel`
//! - **Bookings**: `list_bookings`, `create_booking`, `cancel_booking`
//! - **Reviews**: `list_reviews`, `create_review`
//! - **Users**: `register`, `login`
//!
//! The client is generic over its [`store::SessionProvider`], so the UI hands
//! it the same `AuthStore` it renders from.

pub mod client;
pub mod error;
pub mod transport;

mod bookings;
mod hotels;
mod reviews;
mod users;

#[cfg(test)]
mod testing;

pub use client::ApiClient;
pub use error::ApiError;
pub use transport::{ApiRequest, ApiResponse, Method, ReqwestTransport, Transport};
pub use users::{login_error_message, register_error_message};
