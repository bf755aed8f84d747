use store::{Hotel, SessionProvider};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;

impl<T: Transport, S: SessionProvider> ApiClient<T, S> {
    /// `GET /hotels`
    pub async fn list_hotels(&self) -> Result<Vec<Hotel>, ApiError> {
        self.get("/hotels").await
    }

    /// `GET /hotels/:id`
    pub async fn get_hotel(&self, id: i64) -> Result<Hotel, ApiError> {
        self.get(&format!("/hotels/{id}")).await
    }
}
