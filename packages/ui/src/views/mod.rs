mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod confirm_dialog;
pub use confirm_dialog::{ConfirmDialog, Notice};

mod home;
pub use home::HomeView;

mod hotel_detail;
pub use hotel_detail::HotelDetailView;

mod reservations;
pub use reservations::ReservationsView;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;
