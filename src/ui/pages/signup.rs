//! Signup page component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::Liveness;
use crate::core::api::{SIGNUP_PATH, SignupRequest, SignupResponse};
use crate::core::validation::{FieldError, validate_signup};
use crate::ui::api;
use crate::ui::auth::{AuthLayout, PasswordStrengthMeter, use_verification_handoff};
use crate::ui::common::{Button, CheckboxField, ErrorMessage, InputField};

const SIGNUP_FAILURE: &str = "Registration failed. Please try again.";

fn message(error: Option<FieldError>) -> Option<String> {
    error.map(|e| e.to_string())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();
    let handoff = use_verification_handoff();
    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.invalidate()
    });

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let agreed = RwSignal::new(false);
    let loading = RwSignal::new(false);

    let full_name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);
    let terms_error = RwSignal::new(None::<String>);
    let form_error = RwSignal::new(None::<String>);

    // Editing a field clears its own error and the form-level one
    let edit = move |field: RwSignal<String>, error: RwSignal<Option<String>>| {
        Callback::new(move |v: String| {
            field.set(v);
            error.set(None);
            form_error.set(None);
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        form_error.set(None);

        let errors = validate_signup(
            &full_name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
            agreed.get_untracked(),
        );
        full_name_error.set(message(errors.full_name));
        email_error.set(message(errors.email));
        password_error.set(message(errors.password));
        confirm_error.set(message(errors.confirm_password));
        terms_error.set(message(errors.terms));
        if !errors.is_empty() {
            return;
        }

        loading.set(true);
        let body = SignupRequest {
            full_name: full_name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let liveness = liveness.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::post_json::<_, SignupResponse>(SIGNUP_PATH, None, &body).await;

            liveness.guard(|| {
                loading.set(false);
                match result {
                    Ok(response) => {
                        handoff.start_verification(response.csrf_token);
                        navigate("/otp", Default::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("Signup failed: {}", err);
                        form_error.set(Some(err.user_message(SIGNUP_FAILURE)));
                    }
                }
            });
        });
    };

    view! {
        <AuthLayout title="Create an Account" subtitle="Sign up to get started">
            <form on:submit=on_submit class="space-y-5">
                <ErrorMessage error=form_error />

                <InputField
                    label="Full Name"
                    id="full-name"
                    placeholder="Jane Doe"
                    autocomplete="name"
                    required=true
                    value=full_name
                    on_input=edit(full_name, full_name_error)
                    error=full_name_error
                />

                <InputField
                    label="Email"
                    id="email"
                    input_type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    required=true
                    value=email
                    on_input=edit(email, email_error)
                    error=email_error
                />

                <div class="space-y-2">
                    <InputField
                        label="Password"
                        id="password"
                        input_type="password"
                        placeholder="At least 8 characters"
                        autocomplete="new-password"
                        required=true
                        value=password
                        on_input=edit(password, password_error)
                        error=password_error
                    />
                    <PasswordStrengthMeter password=password />
                </div>

                <InputField
                    label="Confirm Password"
                    id="confirm-password"
                    input_type="password"
                    placeholder="Repeat your password"
                    autocomplete="new-password"
                    required=true
                    value=confirm_password
                    on_input=edit(confirm_password, confirm_error)
                    error=confirm_error
                />

                <CheckboxField
                    id="terms"
                    checked=agreed
                    on_change=Callback::new(move |v: bool| {
                        agreed.set(v);
                        terms_error.set(None);
                    })
                    error=terms_error
                >
                    "I agree to the Terms of Service and Privacy Policy"
                </CheckboxField>

                <Button button_type="submit" full_width=true loading=loading>
                    {move || if loading.get() { "Creating account..." } else { "Create Account" }}
                </Button>
            </form>

            <p class="mt-6 text-center text-sm text-gray-600 dark:text-gray-400">
                "Already have an account? "
                <A href="/" attr:class="link">
                    "Sign in"
                </A>
            </p>
        </AuthLayout>
    }
}
