//! Theme context
//!
//! Provides:
//! - ThemeContext with the reactive current theme
//! - Startup resolution from localStorage and prefers-color-scheme
//! - ThemeToggle button for headers

use leptos::prelude::*;

use crate::core::{Theme, ThemeStore};
use crate::ui::browser::{BrowserStorage, apply_document_theme, system_prefers_dark};
use crate::ui::icon::{Icon, icons};

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    /// Flip the theme, persist it and update the document class
    pub fn toggle(&self) {
        let next = ThemeStore::new(BrowserStorage).toggle(self.theme.get_untracked());
        self.theme.set(next);
        apply_document_theme(next);
    }
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let initial = ThemeStore::new(BrowserStorage).resolve(system_prefers_dark());
    let ctx = ThemeContext {
        theme: RwSignal::new(initial),
    };

    // Keep <html> in sync, including the first render after hydration
    #[cfg(not(feature = "ssr"))]
    {
        let theme = ctx.theme;
        Effect::new(move |_| apply_document_theme(theme.get()));
    }

    provide_context(ctx);
    ctx
}

/// Use theme context from anywhere in the component tree.
///
/// Panics when called outside [`provide_theme_context`]; that is a wiring
/// bug, not a runtime condition.
pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Sun/moon button that flips the theme
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme_context();

    view! {
        <button
            type="button"
            class="p-2 rounded-lg text-gray-600 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-700 transition-colors"
            aria-label=move || ctx.get_theme().toggle_label()
            title=move || ctx.get_theme().toggle_label()
            on:click=move |_| ctx.toggle()
        >
            {move || {
                if ctx.get_theme().is_dark() {
                    view! { <Icon name=icons::SUN class="w-5 h-5" /> }.into_any()
                } else {
                    view! { <Icon name=icons::MOON class="w-5 h-5" /> }.into_any()
                }
            }}
        </button>
    }
}
