//! Application pages module
//!
//! - Login (`/`)
//! - Signup
//! - OTP verification
//! - Forgot / reset password
//! - Dashboard
//! - Not found

mod dashboard;
mod forgot_password;
mod login;
mod not_found;
mod otp;
mod reset_password;
mod signup;

pub use dashboard::DashboardPage;
pub use forgot_password::ForgotPasswordPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use otp::OtpPage;
pub use reset_password::ResetPasswordPage;
pub use signup::SignupPage;
