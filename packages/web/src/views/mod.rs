mod home;
pub use home::Home;

mod hotel_detail;
pub use hotel_detail::HotelDetail;

mod reservations;
pub use reservations::Reservations;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod not_found;
pub use not_found::NotFound;
