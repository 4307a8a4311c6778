//! Login page component
//!
//! Email/password sign-in. Accounts with MFA continue to `/otp`, everyone
//! else lands on the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::Liveness;
use crate::core::api::{LOGIN_PATH, LoginRequest, LoginResponse};
use crate::core::validation::{check_email, check_password_present};
use crate::ui::api;
use crate::ui::auth::{AuthLayout, use_verification_handoff};
use crate::ui::common::{Button, CheckboxField, ErrorMessage, InputField};

const LOGIN_FAILURE: &str = "Invalid email or password. Please try again.";

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let handoff = use_verification_handoff();
    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.invalidate()
    });

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let loading = RwSignal::new(false);

    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let form_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        form_error.set(None);

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();

        let email_check = check_email(&email_val).err();
        let password_check = check_password_present(&password_val).err();
        email_error.set(email_check.map(|e| e.to_string()));
        password_error.set(password_check.map(|e| e.to_string()));
        if email_check.is_some() || password_check.is_some() {
            return;
        }

        loading.set(true);
        let liveness = liveness.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let body = LoginRequest {
                email: email_val,
                password: password_val,
            };
            let result = api::post_json::<_, LoginResponse>(LOGIN_PATH, None, &body).await;

            liveness.guard(|| {
                loading.set(false);
                match result {
                    Ok(response) if response.mfa_enabled => {
                        handoff.start_verification(response.csrf_token);
                        navigate("/otp", Default::default());
                    }
                    Ok(_) => navigate("/dashboard", Default::default()),
                    Err(err) => {
                        leptos::logging::warn!("Login failed: {}", err);
                        form_error.set(Some(err.user_message(LOGIN_FAILURE)));
                    }
                }
            });
        });
    };

    view! {
        <AuthLayout title="Welcome Back" subtitle="Sign in to your account to continue">
            <form on:submit=on_submit class="space-y-5">
                <ErrorMessage error=form_error />

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

                <InputField
                    label="Password"
                    id="password"
                    input_type="password"
                    placeholder="Enter your password"
                    autocomplete="current-password"
                    required=true
                    value=password
                    on_input=Callback::new(move |v: String| {
                        password.set(v);
                        password_error.set(None);
                        form_error.set(None);
                    })
                    error=password_error
                />

                <div class="flex items-center justify-between">
                    <CheckboxField
                        id="remember-me"
                        checked=remember_me
                        on_change=Callback::new(move |v: bool| remember_me.set(v))
                    >
                        "Remember me"
                    </CheckboxField>
                    <A href="/forget-password" attr:class="link text-sm">
                        "Forgot password?"
                    </A>
                </div>

                <Button button_type="submit" full_width=true loading=loading>
                    {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                </Button>
            </form>

            <p class="mt-6 text-center text-sm text-gray-600 dark:text-gray-400">
                "Don't have an account? "
                <A href="/signup" attr:class="link">
                    "Sign up"
                </A>
            </p>
        </AuthLayout>
    }
}
