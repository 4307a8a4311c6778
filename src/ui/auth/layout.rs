use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};
use crate::ui::theme::ThemeToggle;

/// Centered card used by every unauthenticated page
#[component]
pub fn AuthLayout(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-screen">
            <div class="absolute top-4 right-4">
                <ThemeToggle />
            </div>
            <div class="auth-card">
                <div class="flex flex-col items-center mb-6">
                    <div class="auth-badge">
                        <Icon name=icons::SHIELD class="w-7 h-7" />
                    </div>
                    <h1 class="auth-title">{title}</h1>
                    {subtitle.map(|s| view! { <p class="auth-subtitle">{s}</p> })}
                </div>
                {children()}
            </div>
        </div>
    }
}
