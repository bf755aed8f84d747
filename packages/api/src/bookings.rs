use store::{Booking, NewBooking, SessionProvider};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;

impl<T: Transport, S: SessionProvider> ApiClient<T, S> {
    /// `GET /bookings` for the signed-in user.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get("/bookings").await
    }

    /// `POST /bookings`. Rejected locally, with no request sent, when nobody
    /// is signed in or either date is blank.
    pub async fn create_booking(
        &self,
        hotel_id: i64,
        check_in: &str,
        check_out: &str,
    ) -> Result<serde_json::Value, ApiError> {
        if self.session().user().is_none() {
            return Err(ApiError::Validation(
                "Please login to make a reservation".to_string(),
            ));
        }
        if check_in.trim().is_empty() || check_out.trim().is_empty() {
            return Err(ApiError::Validation(
                "Please select check-in and check-out dates".to_string(),
            ));
        }

        let booking = NewBooking {
            hotel_id,
            check_in: check_in.trim().to_string(),
            check_out: check_out.trim().to_string(),
        };
        self.post("/bookings", &booking).await
    }

    /// `DELETE /bookings/:id`
    pub async fn cancel_booking(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/bookings/{id}")).await
    }
}
