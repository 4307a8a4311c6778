//! Dashboard page component
//!
//! Landing page after sign-in: welcome card, MFA settings and sign-out.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::storage::clear_auth_session;
use crate::ui::browser::{BrowserStorage, confirm};
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::ThemeToggle;

fn mfa_prompt(enable: bool) -> &'static str {
    if enable {
        "Enable two-factor authentication? You will be asked for a one-time code at every sign-in."
    } else {
        "Disable two-factor authentication? Your account will be protected by your password only."
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigate = use_navigate();
    let mfa_enabled = RwSignal::new(true);

    let toggle_mfa = move |_| {
        let enable = !mfa_enabled.get_untracked();
        if confirm(mfa_prompt(enable)) {
            mfa_enabled.set(enable);
            leptos::logging::log!("MFA {}", if enable { "enabled" } else { "disabled" });
        }
    };

    let sign_out = move |_| {
        clear_auth_session(&BrowserStorage);
        navigate("/", Default::default());
    };

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            // Header
            <header class="border-b border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <div class="flex items-center gap-3">
                            <div class="auth-badge w-9 h-9">
                                <Icon name=icons::SHIELD class="w-5 h-5" />
                            </div>
                            <span class="text-xl font-bold text-gray-900 dark:text-white">"SecureAuth"</span>
                        </div>
                        <div class="flex items-center gap-2">
                            <ThemeToggle />
                            <button type="button" class="btn-base btn-secondary" on:click=sign_out>
                                <Icon name=icons::LOG_OUT class="icon-btn" />
                                "Sign Out"
                            </button>
                        </div>
                    </div>
                </div>
            </header>

            <main class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-10 space-y-6">
                // Welcome
                <section class="card">
                    <div class="flex items-center gap-4">
                        <div class="w-12 h-12 rounded-full bg-blue-100 dark:bg-blue-900/40 flex items-center justify-center text-blue-600 dark:text-blue-300">
                            <Icon name=icons::USER class="w-6 h-6" />
                        </div>
                        <div>
                            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Welcome back!"</h1>
                            <p class="text-gray-600 dark:text-gray-400">"You have successfully signed in."</p>
                        </div>
                    </div>
                </section>

                // Security settings
                <section class="card">
                    <div class="flex items-center justify-between gap-4">
                        <div>
                            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                                "Two-Factor Authentication"
                            </h2>
                            <p class="text-sm text-gray-600 dark:text-gray-400">
                                {move || {
                                    if mfa_enabled.get() {
                                        "A one-time code is required at every sign-in."
                                    } else {
                                        "Add an extra layer of security to your account."
                                    }
                                }}
                            </p>
                        </div>
                        <button
                            type="button"
                            role="switch"
                            aria-label="Two-factor authentication"
                            aria-checked=move || mfa_enabled.get().to_string()
                            class="switch"
                            class:switch-on=move || mfa_enabled.get()
                            on:click=toggle_mfa
                        >
                            <span class="switch-knob"></span>
                        </button>
                    </div>
                </section>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mfa_prompt_matches_direction() {
        assert!(mfa_prompt(true).starts_with("Enable"));
        assert!(mfa_prompt(false).starts_with("Disable"));
    }
}
