//! Six-box one-time-code input
//!
//! Renders one `<input>` per cell of an [`OtpCells`] model. Keyboard and
//! clipboard events are turned into [`CellEdit`]s and handed to the owner;
//! after every edit the DOM focus follows the model's focused cell.

use leptos::html;
use leptos::prelude::*;

use crate::core::otp::{CellEdit, EditOutcome, OtpCells};

type CellRefs = Vec<NodeRef<html::Input>>;

#[cfg(not(feature = "ssr"))]
fn focus_cell(refs: &[NodeRef<html::Input>], index: usize) {
    if let Some(input) = refs.get(index).and_then(|r| r.get_untracked()) {
        let _ = input.focus();
    }
}

#[cfg(feature = "ssr")]
fn focus_cell(_refs: &[NodeRef<html::Input>], _index: usize) {}

/// Overwrite what the browser shows with what the model holds
#[cfg(not(feature = "ssr"))]
fn restore_cell(refs: &[NodeRef<html::Input>], index: usize, digit: Option<char>) {
    if let Some(input) = refs.get(index).and_then(|r| r.get_untracked()) {
        input.set_value(&digit.map(String::from).unwrap_or_default());
    }
}

#[cfg(feature = "ssr")]
fn restore_cell(_refs: &[NodeRef<html::Input>], _index: usize, _digit: Option<char>) {}

fn dispatch(
    on_edit: Callback<CellEdit, EditOutcome>,
    cells: Signal<OtpCells>,
    refs: &[NodeRef<html::Input>],
    index: usize,
    edit: CellEdit,
) {
    let outcome = on_edit.run(edit);
    let (digit, focus) = cells.with_untracked(|c| (c.cell(index), c.focus()));
    if outcome == EditOutcome::Rejected {
        restore_cell(refs, index, digit);
    }
    focus_cell(refs, focus);
}

#[component]
pub fn OtpInput(
    /// Current cell contents and focus
    #[prop(into)]
    cells: Signal<OtpCells>,
    /// Applies an edit to the model and reports what happened
    on_edit: Callback<CellEdit, EditOutcome>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let length = cells.with_untracked(OtpCells::len);
    let refs: CellRefs = (0..length).map(|_| NodeRef::new()).collect();

    {
        let refs = refs.clone();
        Effect::new(move |_| focus_cell(&refs, 0));
    }

    let boxes = (0..length)
        .map(|index| {
            let node = refs[index];
            let input_refs = refs.clone();
            let key_refs = refs.clone();
            let paste_refs = refs.clone();
            let autocomplete = if index == 0 { "one-time-code" } else { "off" };

            view! {
                <input
                    node_ref=node
                    type="text"
                    inputmode="numeric"
                    pattern="[0-9]*"
                    maxlength="1"
                    autocomplete=autocomplete
                    class="otp-cell"
                    aria-label=format!("Digit {} of {}", index + 1, length)
                    prop:value=move || {
                        cells.with(|c| c.cell(index).map(String::from).unwrap_or_default())
                    }
                    disabled=move || disabled.get()
                    on:input=move |ev| {
                        let edit = CellEdit::Input {
                            index,
                            value: event_target_value(&ev),
                        };
                        dispatch(on_edit, cells, &input_refs, index, edit);
                    }
                    on:keydown=move |ev| {
                        let edit = match ev.key().as_str() {
                            "Backspace" => CellEdit::Backspace { index },
                            "ArrowLeft" => CellEdit::ArrowLeft { index },
                            "ArrowRight" => CellEdit::ArrowRight { index },
                            _ => return,
                        };
                        ev.prevent_default();
                        dispatch(on_edit, cells, &key_refs, index, edit);
                    }
                    on:paste=move |ev| {
                        ev.prevent_default();
                        #[cfg(not(feature = "ssr"))]
                        if let Some(text) = ev.clipboard_data().and_then(|d| d.get_data("text").ok()) {
                            dispatch(on_edit, cells, &paste_refs, index, CellEdit::Paste(text));
                        }
                        #[cfg(feature = "ssr")]
                        let _ = &paste_refs;
                    }
                    on:focus=move |_| {
                        #[cfg(not(feature = "ssr"))]
                        if let Some(input) = node.get_untracked() {
                            input.select();
                        }
                    }
                />
            }
        })
        .collect_view();

    view! {
        <div class="flex justify-center gap-2 sm:gap-3" role="group" aria-label="One-time code">
            {boxes}
        </div>
    }
}
