use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::Liveness;
use crate::core::api::{FORGOT_PASSWORD_PATH, ForgotPasswordRequest, GENERIC_FAILURE};
use crate::core::validation::check_email;
use crate::ui::api;
use crate::ui::auth::AuthLayout;
use crate::ui::common::{Button, ErrorMessage, InputField, SuccessMessage};

const LINK_SENT: &str = "A password reset link has been sent to your email.";

/// Request a password reset link
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.invalidate()
    });

    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let form_error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        form_error.set(None);
        success.set(None);

        let email_val = email.get_untracked().trim().to_string();
        if let Err(err) = check_email(&email_val) {
            email_error.set(Some(err.to_string()));
            return;
        }

        loading.set(true);
        let liveness = liveness.clone();
        spawn_local(async move {
            let body = ForgotPasswordRequest { email: email_val };
            let result = api::post_ack(FORGOT_PASSWORD_PATH, None, Some(&body)).await;

            liveness.guard(|| {
                loading.set(false);
                match result {
                    Ok(()) => success.set(Some(LINK_SENT.to_string())),
                    Err(err) => {
                        leptos::logging::warn!("Password reset request failed: {}", err);
                        form_error.set(Some(err.user_message(GENERIC_FAILURE)));
                    }
                }
            });
        });
    };

    view! {
        <AuthLayout
            title="Forgot Password"
            subtitle="Enter your email and we'll send you a reset link"
        >
            <form on:submit=on_submit class="space-y-5">
                <ErrorMessage error=form_error />
                <SuccessMessage message=success />

                <InputField
                    label="Email"
                    id="email"
                    input_type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    required=true
                    value=email
                    on_input=Callback::new(move |v: String| {
                        email.set(v);
                        email_error.set(None);
                        form_error.set(None);
                    })
                    error=email_error
                />

                <Button button_type="submit" full_width=true loading=loading>
                    {move || if loading.get() { "Sending..." } else { "Send Reset Link" }}
                </Button>
            </form>

            <p class="mt-6 text-center text-sm">
                <A href="/" attr:class="link">
                    "Back to sign in"
                </A>
            </p>
        </AuthLayout>
    }
}
