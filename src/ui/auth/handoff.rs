//! In-memory hand-off of the CSRF token to the next auth step
//!
//! Login, signup and the password-reset link put the token here before
//! navigating; the target view takes it once on mount. Storage remains the
//! fallback for reloads.

use leptos::prelude::*;

use crate::core::KeyValueStore;
use crate::core::storage::{OTP_LAST_SENT_KEY, store_csrf_token};
use crate::ui::browser::{BrowserStorage, now_ms};

#[derive(Clone, Copy)]
pub struct VerificationHandoff {
    csrf_token: RwSignal<Option<String>>,
}

impl VerificationHandoff {
    /// Hand over a token for the next view and persist it as fallback
    pub fn hand_over(&self, csrf_token: Option<String>) {
        store_csrf_token(&BrowserStorage, csrf_token.as_deref());
        self.csrf_token.set(csrf_token);
    }

    /// Hand over a token and record that a code was just dispatched
    pub fn start_verification(&self, csrf_token: Option<String>) {
        self.hand_over(csrf_token);
        BrowserStorage.set(OTP_LAST_SENT_KEY, &now_ms().to_string());
    }

    /// Take the pending token, leaving nothing behind
    pub fn take(&self) -> Option<String> {
        self.csrf_token
            .try_update_untracked(Option::take)
            .flatten()
    }
}

pub fn provide_verification_handoff() -> VerificationHandoff {
    let handoff = VerificationHandoff {
        csrf_token: RwSignal::new(None),
    };
    provide_context(handoff);
    handoff
}

pub fn use_verification_handoff() -> VerificationHandoff {
    expect_context::<VerificationHandoff>()
}
