//! # Domain models for hotels, bookings, reviews and users
//!
//! Wire types for the remote hotels API. Field names follow the API's
//! camelCase JSON; everything the API may omit is defaulted so a sparse
//! payload still decodes.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Hotel`] | A listed hotel. `rating` and `price` are coerced from numbers, numeric strings or null. `images` accepts plain URLs or `{url}` objects. |
//! | [`City`] | The city embedded in a hotel. Cities for the filter panel are derived with [`distinct_cities`]. |
//! | [`Booking`] | A reservation with its embedded [`BookingHotel`] summary. |
//! | [`Review`] | A rating/comment pair, optionally carrying its author as [`ReviewUser`]. |
//! | [`User`] | The profile returned on login. |
//! | [`AuthSession`] | The client-held `{token, user}` pair. |

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::images::resolve_image_url;

/// A hotel as returned by `GET /hotels` and `GET /hotels/:id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: f64,
    #[serde(default)]
    pub city: City,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub images: Vec<ImageRef>,
}

/// One entry of a hotel's `images` array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Url(String),
    Object {
        #[serde(default, deserialize_with = "lenient_string")]
        url: Option<String>,
    },
    Other(Value),
}

impl ImageRef {
    fn raw_url(&self) -> Option<&str> {
        match self {
            ImageRef::Url(url) => Some(url.as_str()),
            ImageRef::Object { url } => url.as_deref(),
            ImageRef::Other(_) => None,
        }
    }
}

impl Hotel {
    /// Absolute image URLs for the carousel: the `images` list when it has
    /// usable entries, otherwise the single `image`, otherwise nothing.
    pub fn gallery(&self, base_url: &str, placeholder: &str) -> Vec<String> {
        let from_list: Vec<String> = self
            .images
            .iter()
            .filter_map(ImageRef::raw_url)
            .filter(|url| !url.trim().is_empty())
            .map(|url| resolve_image_url(Some(url), base_url, placeholder))
            .collect();
        if !from_list.is_empty() {
            return from_list;
        }
        match self.image.as_deref() {
            Some(image) if !image.trim().is_empty() => {
                vec![resolve_image_url(Some(image), base_url, placeholder)]
            }
            _ => Vec::new(),
        }
    }

    /// The card image: first gallery entry or the placeholder.
    pub fn cover_url(&self, base_url: &str, placeholder: &str) -> String {
        self.gallery(base_url, placeholder)
            .into_iter()
            .next()
            .unwrap_or_else(|| placeholder.to_string())
    }

    /// Number of filled stars out of five.
    pub fn filled_stars(&self) -> usize {
        filled_stars(self.rating)
    }

    /// Rating with two decimals, e.g. `"4.50"`.
    pub fn rating_label(&self) -> String {
        format!("{:.2}", self.rating)
    }
}

/// `floor(rating)` clamped to `0..=5`.
pub fn filled_stars(rating: f64) -> usize {
    if !rating.is_finite() || rating <= 0.0 {
        return 0;
    }
    (rating.floor() as usize).min(5)
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
}

/// Cities appearing across `hotels`, one per city id, in first-seen order.
/// A later hotel carrying the same city id replaces the stored value.
pub fn distinct_cities(hotels: &[Hotel]) -> Vec<City> {
    let mut cities: Vec<City> = Vec::new();
    for hotel in hotels {
        match cities.iter_mut().find(|c| c.id == hotel.city.id) {
            Some(existing) => *existing = hotel.city.clone(),
            None => cities.push(hotel.city.clone()),
        }
    }
    cities
}

/// Up to `limit` hotels in the same country as `hotel`, excluding it.
pub fn other_hotels_in_country(hotel: &Hotel, all: &[Hotel], limit: usize) -> Vec<Hotel> {
    all.iter()
        .filter(|h| h.city.country == hotel.city.country && h.id != hotel.id)
        .take(limit)
        .cloned()
        .collect()
}

/// A reservation as returned by `GET /bookings`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub hotel_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub hotel: BookingHotel,
}

/// Hotel summary embedded in a booking.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingHotel {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(default)]
    pub city: City,
}

/// Body of `POST /bookings`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub hotel_id: i64,
    pub check_in: String,
    pub check_out: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub hotel_id: i64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user: Option<ReviewUser>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUser {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Review {
    pub fn author_name(&self) -> String {
        match &self.user {
            Some(u) => format!("{} {}", u.first_name, u.last_name).trim().to_string(),
            None => "Guest".to_string(),
        }
    }

    pub fn filled_stars(&self) -> usize {
        filled_stars(self.rating)
    }
}

/// Body of `POST /reviews`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub hotel_id: i64,
    pub rating: u8,
    pub comment: String,
    pub property_type: String,
}

impl NewReview {
    pub fn for_hotel(hotel_id: i64, rating: u8, comment: String) -> Self {
        Self {
            hotel_id,
            rating,
            comment,
            property_type: "hotel".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: String,
}

impl User {
    /// First name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.first_name.is_empty() {
            &self.email
        } else {
            &self.first_name
        }
    }
}

/// The authenticated identity held by the client.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl AuthSession {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// `Number(x) || 0`: numbers pass through, numeric strings parse, the rest is zero.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let number = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };
    Ok(if number.is_finite() { number } else { 0.0 })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<ImageRef>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Ok(items
            .into_iter()
            .map(|item| serde_json::from_value(item.clone()).unwrap_or(ImageRef::Other(item)))
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://hotels-api.academlo.tech";
    const PLACEHOLDER: &str = "https://placehold.co/600x400/gray/white?text=Hotel+Image";

    fn hotel(id: i64, city_id: i64, city: &str, country: &str) -> Hotel {
        Hotel {
            id,
            name: format!("Hotel {id}"),
            city: City {
                id: city_id,
                name: city.to_string(),
                country: country.to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_hotel_coerces_string_numbers() {
        let hotel: Hotel = serde_json::from_str(
            r#"{"id": 3, "name": "Sol", "rating": "4.50", "price": "120",
                "city": {"id": 1, "name": "Lima", "country": "Peru"}}"#,
        )
        .unwrap();
        assert_eq!(hotel.rating, 4.5);
        assert_eq!(hotel.price, 120.0);
        assert_eq!(hotel.rating_label(), "4.50");
        assert_eq!(hotel.filled_stars(), 4);
    }

    #[test]
    fn test_hotel_bad_numbers_become_zero() {
        let hotel: Hotel =
            serde_json::from_str(r#"{"id": 1, "rating": "n/a", "price": null}"#).unwrap();
        assert_eq!(hotel.rating, 0.0);
        assert_eq!(hotel.price, 0.0);
        assert_eq!(hotel.filled_stars(), 0);
    }

    #[test]
    fn test_gallery_accepts_strings_and_objects() {
        let hotel: Hotel = serde_json::from_str(
            r#"{"id": 1, "images": ["/img/a.jpg", {"url": "https://cdn.test/b.jpg"}, {"alt": "x"}, 7]}"#,
        )
        .unwrap();
        assert_eq!(
            hotel.gallery(BASE, PLACEHOLDER),
            vec![
                format!("{BASE}/img/a.jpg"),
                "https://cdn.test/b.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_gallery_falls_back_to_single_image() {
        let hotel: Hotel =
            serde_json::from_str(r#"{"id": 1, "image": "rooms/1.png", "images": []}"#).unwrap();
        assert_eq!(hotel.gallery(BASE, PLACEHOLDER), vec![format!("{BASE}/rooms/1.png")]);
        assert_eq!(hotel.cover_url(BASE, PLACEHOLDER), format!("{BASE}/rooms/1.png"));
    }

    #[test]
    fn test_cover_without_images_is_placeholder() {
        let hotel: Hotel = serde_json::from_str(r#"{"id": 1, "image": ""}"#).unwrap();
        assert!(hotel.gallery(BASE, PLACEHOLDER).is_empty());
        assert_eq!(hotel.cover_url(BASE, PLACEHOLDER), PLACEHOLDER);
    }

    #[test]
    fn test_distinct_cities_by_id() {
        let hotels = vec![
            hotel(1, 10, "Lima", "Peru"),
            hotel(2, 20, "Cusco", "Peru"),
            hotel(3, 10, "Lima", "Peru"),
        ];
        let cities = distinct_cities(&hotels);
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].name, "Lima");
        assert_eq!(cities[1].name, "Cusco");
    }

    #[test]
    fn test_other_hotels_same_country() {
        let all = vec![
            hotel(1, 10, "Lima", "Peru"),
            hotel(2, 20, "Cusco", "Peru"),
            hotel(3, 30, "Quito", "Ecuador"),
            hotel(4, 10, "Lima", "Peru"),
            hotel(5, 10, "Lima", "Peru"),
            hotel(6, 20, "Cusco", "Peru"),
        ];
        let others = other_hotels_in_country(&all[0], &all, 3);
        let ids: Vec<i64> = others.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![2, 4, 5]);
    }

    #[test]
    fn test_review_author_name() {
        let review: Review = serde_json::from_str(
            r#"{"id": 1, "hotelId": 2, "rating": 4, "comment": "ok",
                "user": {"id": 9, "firstName": "Ana", "lastName": "Rojas"}}"#,
        )
        .unwrap();
        assert_eq!(review.author_name(), "Ana Rojas");
        assert_eq!(review.filled_stars(), 4);

        let anonymous: Review = serde_json::from_str(r#"{"id": 2}"#).unwrap();
        assert_eq!(anonymous.author_name(), "Guest");
    }

    #[test]
    fn test_new_review_wire_format() {
        let body = serde_json::to_value(NewReview::for_hotel(7, 5, "Great".into())).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"hotelId": 7, "rating": 5, "comment": "Great", "propertyType": "hotel"})
        );
    }
}
