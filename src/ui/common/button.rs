use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Danger,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Danger => "btn-danger",
        }
    }
}

/// Button with variants and a loading state.
///
/// With `button_type = "submit"` and no `on_click` it submits its form.
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// HTML button type
    #[prop(default = "button")]
    button_type: &'static str,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Whether button is in loading state
    #[prop(into, default = Signal::stored(false))]
    loading: Signal<bool>,
    /// Stretch to the container width
    #[prop(default = false)]
    full_width: bool,
    /// Optional icon name to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Button content (text or elements)
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "btn-base {}{}",
        variant.class(),
        if full_width { " w-full" } else { "" }
    );

    view! {
        <button
            type=button_type
            class=classes
            disabled=move || disabled.get() || loading.get()
            aria-busy=move || loading.get().to_string()
            on:click=move |_| {
                if loading.get_untracked() {
                    return;
                }
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {move || {
                if loading.get() {
                    view! { <Icon name=icons::LOADER class="icon-spin" /> }.into_any()
                } else if let Some(icon_name) = icon {
                    view! { <Icon name=icon_name class="icon-btn" /> }.into_any()
                } else {
                    ().into_any()
                }
            }}
            {children()}
        </button>
    }
}
