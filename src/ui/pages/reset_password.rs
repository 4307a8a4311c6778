//! Reset password page
//!
//! Sets a new password using the CSRF token handed over by the previous
//! step (or persisted for reloads), then returns to sign-in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::api::{GENERIC_FAILURE, RESET_PASSWORD_PATH, ResetPasswordRequest};
use crate::core::storage::CSRF_TOKEN_KEY;
use crate::core::validation::validate_reset;
use crate::core::{KeyValueStore, Liveness};
use crate::ui::api;
use crate::ui::auth::{AuthLayout, PasswordStrengthMeter, use_verification_handoff};
use crate::ui::browser::BrowserStorage;
use crate::ui::common::{Button, ErrorMessage, InputField, SuccessMessage};

const RESET_DONE: &str = "Password successfully reset! Redirecting...";
const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let handoff = use_verification_handoff();
    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.invalidate()
    });

    let csrf_token = handoff
        .take()
        .or_else(|| BrowserStorage.get(CSRF_TOKEN_KEY))
        .filter(|t| !t.trim().is_empty());

    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);
    let form_error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() || success.get_untracked().is_some() {
            return;
        }
        form_error.set(None);

        let password_val = password.get_untracked();
        let errors = validate_reset(&password_val, &confirm_password.get_untracked());
        password_error.set(errors.password.map(|e| e.to_string()));
        confirm_error.set(errors.confirm_password.map(|e| e.to_string()));
        if !errors.is_empty() {
            return;
        }

        loading.set(true);
        let csrf_token = csrf_token.clone();
        let liveness = liveness.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let body = ResetPasswordRequest {
                password: password_val,
            };
            let result =
                api::post_ack(RESET_PASSWORD_PATH, csrf_token.as_deref(), Some(&body)).await;

            let reset = liveness.guard(|| {
                loading.set(false);
                match result {
                    Ok(()) => {
                        success.set(Some(RESET_DONE.to_string()));
                        true
                    }
                    Err(err) => {
                        leptos::logging::warn!("Password reset failed: {}", err);
                        form_error.set(Some(err.user_message(GENERIC_FAILURE)));
                        false
                    }
                }
            });

            if reset == Some(true) {
                #[cfg(not(feature = "ssr"))]
                gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                #[cfg(feature = "ssr")]
                let _ = REDIRECT_DELAY_MS;

                liveness.guard(|| navigate("/", Default::default()));
            }
        });
    };

    let locked = Signal::derive(move || success.get().is_some());

    view! {
        <AuthLayout title="Reset Password" subtitle="Choose a new password for your account">
            <form on:submit=on_submit class="space-y-5">
                <ErrorMessage error=form_error />
                <SuccessMessage message=success />

                <div class="space-y-2">
                    <InputField
                        label="New Password"
                        id="password"
                        input_type="password"
                        placeholder="At least 8 characters"
                        autocomplete="new-password"
                        required=true
                        value=password
                        disabled=locked
                        on_input=Callback::new(move |v: String| {
                            password.set(v);
                            password_error.set(None);
                            form_error.set(None);
                        })
                        error=password_error
                    />
                    <PasswordStrengthMeter password=password />
                </div>

                <InputField
                    label="Confirm Password"
                    id="confirm-password"
                    input_type="password"
                    placeholder="Repeat your new password"
                    autocomplete="new-password"
                    required=true
                    value=confirm_password
                    disabled=locked
                    on_input=Callback::new(move |v: String| {
                        confirm_password.set(v);
                        confirm_error.set(None);
                        form_error.set(None);
                    })
                    error=confirm_error
                />

                <Button button_type="submit" full_width=true loading=loading disabled=locked>
                    {move || if loading.get() { "Resetting..." } else { "Reset Password" }}
                </Button>
            </form>
        </AuthLayout>
    }
}
