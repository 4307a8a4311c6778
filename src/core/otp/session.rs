//! OTP verification state machine
//!
//! `Entering -> Submitting -> Verified`, with failures returning to
//! `Entering` carrying an error. Resending is an orthogonal flag that only
//! overlaps `Entering`.
//!
//! Network calls happen outside: `begin_*` validates and hands back the
//! request to send, `finish_*` applies its outcome. This keeps the machine
//! synchronous and lets the view guard every continuation with a liveness
//! check before calling back in.

use derive_more::Display;

use super::cells::{CellEdit, EditOutcome, OtpCells};
use super::cooldown::{RESEND_COOLDOWN_SECS, ResendCooldown, Tick};
use crate::core::api::{ApiError, VerifyOtpRequest};
use crate::core::storage::{
    CSRF_TOKEN_KEY, KeyValueStore, OTP_COUNTDOWN_KEY, OTP_LAST_SENT_KEY, read_epoch_ms,
};

/// Number of digits in a one-time code
pub const OTP_LENGTH: usize = 6;

/// Shown when verification fails without a server message
pub const VERIFY_FAILURE: &str = "Invalid OTP. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum OtpPhase {
    Entering,
    Submitting,
    Verified,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OtpError {
    #[error("Please enter all 6 digits")]
    IncompleteCode,

    #[error("Your verification session has expired. Please sign in again.")]
    MissingCsrfToken,

    #[error("Please wait {remaining_secs} seconds before requesting a new code.")]
    CooldownActive { remaining_secs: u32 },

    #[error("A request is already in progress")]
    RequestInFlight,
}

/// Verification request to send
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyCall {
    pub csrf_token: String,
    pub body: VerifyOtpRequest,
}

/// Resend request to send (empty body)
#[derive(Debug, Clone, PartialEq)]
pub struct ResendCall {
    pub csrf_token: String,
}

#[derive(Debug, Clone)]
pub struct OtpSession<S> {
    store: S,
    cells: OtpCells,
    csrf_token: Option<String>,
    cooldown: ResendCooldown,
    phase: OtpPhase,
    resending: bool,
    error: Option<String>,
}

fn non_empty(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

impl<S: KeyValueStore> OtpSession<S> {
    /// Create the session when the verification view mounts.
    ///
    /// The CSRF token comes from navigation state when present (and is then
    /// persisted for reloads), otherwise from storage. Without a persisted
    /// dispatch timestamp the mount itself counts as the dispatch.
    pub fn mount(store: S, navigation_token: Option<String>, now_ms: i64) -> Self {
        let csrf_token = match non_empty(navigation_token) {
            Some(token) => {
                store.set(CSRF_TOKEN_KEY, &token);
                Some(token)
            }
            None => non_empty(store.get(CSRF_TOKEN_KEY)),
        };

        let cooldown = match read_epoch_ms(&store, OTP_LAST_SENT_KEY) {
            Some(last_sent) => ResendCooldown::resume(last_sent, now_ms),
            None => {
                store.set(OTP_LAST_SENT_KEY, &now_ms.to_string());
                ResendCooldown::started_at(now_ms)
            }
        };
        if cooldown.can_resend() {
            store.remove(OTP_COUNTDOWN_KEY);
        }

        Self {
            store,
            cells: OtpCells::new(OTP_LENGTH),
            csrf_token,
            cooldown,
            phase: OtpPhase::Entering,
            resending: false,
            error: None,
        }
    }

    pub fn cells(&self) -> &OtpCells {
        &self.cells
    }

    pub fn code(&self) -> String {
        self.cells.code()
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    pub fn phase(&self) -> OtpPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn countdown_secs(&self) -> u32 {
        self.cooldown.remaining_secs()
    }

    pub fn can_resend(&self) -> bool {
        self.cooldown.can_resend()
    }

    pub fn is_resending(&self) -> bool {
        self.resending
    }

    /// A verify or resend request is outstanding
    pub fn is_busy(&self) -> bool {
        self.phase == OtpPhase::Submitting || self.resending
    }

    /// Whether the verify button is enabled
    pub fn can_submit(&self) -> bool {
        self.phase == OtpPhase::Entering && !self.resending && self.cells.is_complete()
    }

    /// Whether the resend button is enabled
    pub fn resend_enabled(&self) -> bool {
        self.phase == OtpPhase::Entering && !self.is_busy() && self.can_resend()
    }

    pub fn countdown_label(&self) -> String {
        if self.can_resend() {
            "You can now resend the OTP".to_string()
        } else {
            format!("Resend OTP in {} seconds", self.countdown_secs())
        }
    }

    /// Apply a digit-box edit. Any mutation clears the current error.
    pub fn apply_edit(&mut self, edit: CellEdit) -> EditOutcome {
        if self.phase != OtpPhase::Entering {
            return EditOutcome::Rejected;
        }
        let outcome = self.cells.apply(edit);
        if outcome.is_changed() {
            self.error = None;
        }
        outcome
    }

    /// One-second timer tick; `now_ms` is the current wall-clock time
    pub fn tick(&mut self, now_ms: i64) -> Tick {
        let tick = self.cooldown.tick(now_ms);
        match tick {
            Tick::Running(remaining) => self.store.set(OTP_COUNTDOWN_KEY, &remaining.to_string()),
            Tick::Elapsed => self.store.remove(OTP_COUNTDOWN_KEY),
            Tick::Idle => {}
        }
        tick
    }

    fn fail(&mut self, err: OtpError) -> OtpError {
        self.error = Some(err.to_string());
        err
    }

    fn require_token(&mut self) -> Result<String, OtpError> {
        match self.csrf_token.clone() {
            Some(token) => Ok(token),
            None => Err(self.fail(OtpError::MissingCsrfToken)),
        }
    }

    /// Move to `Submitting` and return the request to send
    pub fn begin_verify(&mut self) -> Result<VerifyCall, OtpError> {
        if self.phase != OtpPhase::Entering || self.resending {
            return Err(OtpError::RequestInFlight);
        }
        if !self.cells.is_complete() {
            return Err(self.fail(OtpError::IncompleteCode));
        }
        let csrf_token = self.require_token()?;

        self.phase = OtpPhase::Submitting;
        self.error = None;
        Ok(VerifyCall {
            csrf_token,
            body: VerifyOtpRequest { otp: self.code() },
        })
    }

    /// Apply the verification outcome. Network and decode failures are
    /// reported the same way as a rejected code.
    pub fn finish_verify(&mut self, result: Result<(), ApiError>) -> OtpPhase {
        if self.phase != OtpPhase::Submitting {
            return self.phase;
        }
        match result {
            Ok(()) => {
                self.phase = OtpPhase::Verified;
                self.error = None;
                self.store.remove(OTP_LAST_SENT_KEY);
                self.store.remove(OTP_COUNTDOWN_KEY);
            }
            Err(err) => {
                self.phase = OtpPhase::Entering;
                self.error = Some(err.user_message(VERIFY_FAILURE));
            }
        }
        self.phase
    }

    /// Restart the cool-down and return the resend request to send.
    ///
    /// Only the wall clock decides; the displayed counter may lag behind it
    /// while the tab was in the background.
    pub fn begin_resend(&mut self, now_ms: i64) -> Result<ResendCall, OtpError> {
        if self.is_busy() || self.phase != OtpPhase::Entering {
            return Err(OtpError::RequestInFlight);
        }
        if let Some(remaining_secs) = self.cooldown.wait_required(now_ms) {
            return Err(self.fail(OtpError::CooldownActive { remaining_secs }));
        }
        let csrf_token = self.require_token()?;

        self.cooldown.restart(now_ms);
        self.store.set(OTP_LAST_SENT_KEY, &now_ms.to_string());
        self.store
            .set(OTP_COUNTDOWN_KEY, &RESEND_COOLDOWN_SECS.to_string());
        self.resending = true;
        Ok(ResendCall { csrf_token })
    }

    /// Apply the resend outcome.
    ///
    /// A failed resend keeps the cool-down running and leaves the UI error
    /// untouched; the error is handed back for logging.
    pub fn finish_resend(&mut self, result: Result<(), ApiError>) -> Result<(), ApiError> {
        self.resending = false;
        result?;
        self.cells.clear();
        self.error = None;
        Ok(())
    }
}
