//! Common reusable UI components
//!
//! Buttons, form fields and message banners shared by the auth pages.

pub mod button;
pub mod form;
pub mod message;

pub use button::{Button, ButtonVariant};
pub use form::{CheckboxField, InputField};
pub use message::{ErrorMessage, SuccessMessage};
