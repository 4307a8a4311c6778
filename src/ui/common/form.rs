use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled input with an inline field error.
///
/// Password fields get a show/hide toggle.
#[component]
pub fn InputField(
    /// Field label text
    label: &'static str,
    /// Element id, also used by the label
    id: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, password, email)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Error message to display under the input
    #[prop(into, default = Signal::stored(None))]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let is_password = input_type == "password";
    let revealed = RwSignal::new(false);
    let effective_type = move || {
        if is_password && revealed.get() {
            "text"
        } else {
            input_type
        }
    };

    view! {
        <div class="space-y-1.5">
            <label class="label" for=id>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <div class="relative">
                <input
                    id=id
                    type=effective_type
                    class="input-base"
                    class:input-invalid=move || error.get().is_some()
                    placeholder=placeholder
                    autocomplete=autocomplete
                    aria-invalid=move || error.get().is_some().to_string()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    disabled=move || disabled.get()
                />
                {is_password.then(|| view! {
                    <button
                        type="button"
                        class="input-reveal"
                        aria-label=move || if revealed.get() { "Hide password" } else { "Show password" }
                        on:click=move |_| revealed.update(|r| *r = !*r)
                    >
                        {move || {
                            if revealed.get() {
                                view! { <Icon name=icons::EYE_OFF class="w-4 h-4" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::EYE class="w-4 h-4" /> }.into_any()
                            }
                        }}
                    </button>
                })}
            </div>
            {move || {
                error.get().map(|err| view! {
                    <div class="field-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text" />
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Checkbox with an inline label
#[component]
pub fn CheckboxField(
    id: &'static str,
    /// Current checked state
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(into, default = Signal::stored(None))]
    error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label class="checkbox-label" for=id>
                <input
                    id=id
                    type="checkbox"
                    class="checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_change.run(event_target_checked(&ev))
                />
                <span>{children()}</span>
            </label>
            {move || error.get().map(|err| view! { <div class="field-error">{err}</div> })}
        </div>
    }
}
