//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="auth-screen">
            <div class="text-center">
                <div class="w-20 h-20 mx-auto mb-6 rounded-full bg-gray-100 dark:bg-gray-800 flex items-center justify-center text-gray-400">
                    <Icon name=icons::ALERT_CIRCLE class="w-10 h-10" />
                </div>

                <h1 class="text-6xl font-bold text-gray-900 dark:text-white mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-gray-900 dark:text-white mb-2">
                    "Page Not Found"
                </h2>
                <p class="text-gray-600 dark:text-gray-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="btn-base btn-primary">
                    "Back to sign in"
                </A>
            </div>
        </div>
    }
}
