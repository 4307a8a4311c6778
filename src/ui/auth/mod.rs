//! Authentication UI module
//!
//! Shared building blocks of the auth pages: the card layout, the one-time
//! code input, the password strength meter and the CSRF hand-off context.

mod handoff;
mod layout;
mod otp_input;
mod password_strength;

pub use handoff::{VerificationHandoff, provide_verification_handoff, use_verification_handoff};
pub use layout::AuthLayout;
pub use otp_input::OtpInput;
pub use password_strength::PasswordStrengthMeter;
