//! Routed pages. Each platform crate maps its `Route` enum onto these.

mod home;
mod log_in;
mod register;

pub use home::Home;
pub use log_in::LogIn;
pub use register::Register;
