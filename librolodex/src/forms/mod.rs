//! Screen-local form state for registration and the profile editor
//!
//! Plain state holders: the presentation layer owns one per screen and drops
//! it with the screen. Nothing here does I/O.

pub mod profile;
pub mod registration;

pub use profile::{ProfileField, ProfileForm};
pub use registration::{Registration, RegistrationError, RegistrationField, RegistrationForm};
