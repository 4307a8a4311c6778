//! One-time-code verification
//!
//! - `cells`: digit-box editing model
//! - `cooldown`: resend cool-down derived from the last dispatch timestamp
//! - `session`: the verification state machine tying both together

mod cells;
mod cooldown;
mod session;

pub use cells::{CellEdit, EditOutcome, OtpCells, PasteError};
pub use cooldown::{RESEND_COOLDOWN_SECS, ResendCooldown, Tick, remaining_after};
pub use session::{
    OTP_LENGTH, OtpError, OtpPhase, OtpSession, ResendCall, VERIFY_FAILURE, VerifyCall,
};
