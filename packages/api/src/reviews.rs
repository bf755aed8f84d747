use store::{NewReview, Review, SessionProvider};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;

impl<T: Transport, S: SessionProvider> ApiClient<T, S> {
    /// `GET /hotels/:id/reviews`. A body that is not a JSON array reads as
    /// no reviews; entries that fail to decode are skipped.
    pub async fn list_reviews(&self, hotel_id: i64) -> Result<Vec<Review>, ApiError> {
        let body: serde_json::Value = self.get(&format!("/hotels/{hotel_id}/reviews")).await?;
        let serde_json::Value::Array(items) = body else {
            return Ok(Vec::new());
        };

        Ok(items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<Review>(item) {
                Ok(review) => Some(review),
                Err(e) => {
                    tracing::warn!("Skipping malformed review: {e}");
                    None
                }
            })
            .collect())
    }

    /// `POST /reviews` for a hotel the user stayed at.
    pub async fn create_review(
        &self,
        hotel_id: i64,
        rating: u8,
        comment: &str,
    ) -> Result<serde_json::Value, ApiError> {
        if !(1..=5).contains(&rating) {
            return Err(ApiError::Validation(
                "Rating must be between 1 and 5".to_string(),
            ));
        }
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(ApiError::Validation("Please write a comment".to_string()));
        }

        let review = NewReview::for_hotel(hotel_id, rating, comment.to_string());
        self.post("/reviews", &review).await
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ApiError;
    use crate::testing::{client, signed_in_client, MockTransport};

    #[tokio::test]
    async fn test_reviews_non_array_is_empty() {
        let transport = MockTransport::new();
        let api = client(&transport);
        transport.respond(200, r#"{"message": "no reviews"}"#);
        transport.respond(200, "");

        assert!(api.list_reviews(4).await.unwrap().is_empty());
        assert!(api.list_reviews(4).await.unwrap().is_empty());
        assert_eq!(transport.request(0).url, "https://api.test/hotels/4/reviews");
    }

    #[tokio::test]
    async fn test_reviews_skip_malformed_entries() {
        let transport = MockTransport::new();
        let api = client(&transport);
        transport.respond(
            200,
            r#"[{"id": 1, "hotelId": 4, "rating": "5", "comment": "Lovely"}, "junk"]"#,
        );

        let reviews = api.list_reviews(4).await.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].rating, 5.0);
        assert_eq!(reviews[0].author_name(), "Guest");
    }

    #[tokio::test]
    async fn test_create_review_body() {
        let transport = MockTransport::new();
        let api = signed_in_client(&transport);
        transport.respond(201, r#"{"id": 8}"#);

        api.create_review(4, 5, "  Great stay ").await.unwrap();
        let body: serde_json::Value =
            serde_json::from_str(transport.request(0).body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"hotelId": 4, "rating": 5, "comment": "Great stay", "propertyType": "hotel"})
        );
    }

    #[tokio::test]
    async fn test_create_review_validation() {
        let transport = MockTransport::new();
        let api = signed_in_client(&transport);

        assert!(matches!(
            api.create_review(4, 0, "ok").await,
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            api.create_review(4, 6, "ok").await,
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            api.create_review(4, 3, "   ").await,
            Err(ApiError::Validation(_))
        ));
        assert_eq!(transport.request_count(), 0);
    }
}
