use leptos::prelude::*;

use crate::core::password::PasswordStrength;

/// Bar and label under a new-password field. Hidden while the field is empty.
#[component]
pub fn PasswordStrengthMeter(#[prop(into)] password: Signal<String>) -> impl IntoView {
    let strength = Memo::new(move |_| PasswordStrength::of(&password.get()));

    view! {
        <Show when=move || !password.get().is_empty()>
            <div class="space-y-1" aria-live="polite">
                <div class="strength-track">
                    <div
                        class=move || format!("strength-bar {}", strength.get().bar_class())
                        style:width=move || format!("{}%", strength.get().percent())
                    ></div>
                </div>
                <p class="text-xs text-gray-500 dark:text-gray-400">
                    "Password strength: " {move || strength.get().label()}
                </p>
            </div>
        </Show>
    }
}
