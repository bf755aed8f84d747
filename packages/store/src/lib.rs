pub mod config;
pub mod filter;
pub mod forms;
pub mod gallery;
pub mod images;
pub mod models;
pub mod paging;
pub mod reservation;
pub mod session;

mod file_storage;
pub use file_storage::FileStorage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::BookingConfig;
pub use forms::{FieldErrors, LoginForm, RegisterForm};
pub use filter::{FilterMode, HotelFilter, PriceRange, ALL_CITIES};
pub use gallery::Gallery;
pub use models::{
    AuthSession, Booking, BookingHotel, City, Hotel, NewBooking, NewReview, Review, ReviewUser, User,
};
pub use paging::ReviewWindow;
pub use session::{AuthStore, SessionProvider, SessionStorage};
