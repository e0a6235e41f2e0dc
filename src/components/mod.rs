pub mod booking_screen;
pub mod date_input;
pub mod field_error;
pub mod photo_upload;
pub mod status;

pub use booking_screen::BookingScreen;
pub use date_input::DateInput;
pub use field_error::FieldErrorSlot;
pub use photo_upload::PhotoUpload;
pub use status::{LoadingView, SuccessView};
