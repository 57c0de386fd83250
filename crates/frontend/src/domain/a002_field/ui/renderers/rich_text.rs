//! Contenteditable surface for wysiwyg and block-editor fields.
//! Emits the inner HTML as text.

use super::frame::{FieldChrome, FieldFrame};
use contracts::domain::a002_field::FieldValue;
use leptos::html::Div;
use leptos::prelude::*;

#[component]
pub fn RichTextInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
    /// `wysiwyg` or `block-editor`, used as a class modifier
    variant: &'static str,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let editor = NodeRef::<Div>::new();
    let style = chrome.input_style(focused);
    let aria = chrome.aria_attrs();
    let editable = if chrome.advanced.read_only { "false" } else { "true" };

    // External value -> DOM, only while the user is not typing
    Effect::new(move |_| {
        let html = value.with(FieldValue::as_text);
        if focused.get_untracked() {
            return;
        }
        if let Some(el) = editor.get() {
            if el.inner_html() != html {
                el.set_inner_html(&html);
            }
        }
    });

    let emit = move || {
        if let Some(el) = editor.get_untracked() {
            on_change.run(FieldValue::Text(el.inner_html()));
        }
    };

    view! {
        <FieldFrame chrome=chrome.clone()>
            <div
                node_ref=editor
                id=chrome.id.clone()
                class=format!("cms-field__rich cms-field__rich--{}", variant)
                contenteditable=editable
                role="textbox"
                aria-multiline="true"
                data-placeholder=chrome.placeholder.clone()
                style=move || format!("{} min-height: 200px; overflow-y: auto;", style.get())
                aria-required=aria.required
                aria-describedby=aria.described_by
                aria-label=aria.label.or_else(|| Some(chrome.label.clone()))
                aria-labelledby=aria.labelled_by
                aria-invalid=aria.invalid
                on:input=move |_| emit()
                on:focus=move |_| focused.set(true)
                on:blur=move |_| {
                    focused.set(false);
                    emit();
                }
            ></div>
        </FieldFrame>
    }
}
