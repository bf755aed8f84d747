//! This crate contains all shared UI for the workspace.
//!
//! Components talk to the API through the [`Client`] that [`AuthProvider`]
//! places in context; views take navigation callbacks so the platform crate
//! owns routing.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod auth;
pub use auth::{use_api, use_auth, use_config, AuthProvider, Client, LogoutButton, PlatformStorage};

mod resource;
pub use resource::{use_async_resource, AsyncState};

mod status;
pub use status::{ErrorMessage, Spinner};

mod navbar;
pub use navbar::Navbar;

mod star_rating;
pub use star_rating::StarRating;

mod hotel_card;
pub use hotel_card::{HotelCard, HotelsList, OtherHotels};

mod filters;
pub use filters::FiltersPanel;

mod carousel;
pub use carousel::ImageCarousel;

mod location_map;
pub use location_map::LocationMap;

mod reviews;
pub use reviews::{ReviewCard, ReviewsList, ReviewsSection};

mod reservation_form;
pub use reservation_form::ReservationForm;

mod booking_card;
pub use booking_card::BookingCard;

mod rating_modal;
pub use rating_modal::RatingModal;

pub use api::{login_error_message, register_error_message};
