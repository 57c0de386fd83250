//! Multi-line inputs: plain textarea and markdown source

use super::frame::{FieldChrome, FieldFrame};
use contracts::domain::a002_field::kind::MARKDOWN_ROWS;
use contracts::domain::a002_field::FieldValue;
use leptos::prelude::*;

#[component]
pub fn TextareaInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
    rows: u32,
    /// Monospace font for markdown sources
    #[prop(optional)]
    monospace: bool,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let style = chrome.input_style(focused);
    let style = move || {
        let base = style.get();
        if monospace {
            format!("{} font-family: ui-monospace, monospace; resize: vertical;", base)
        } else {
            format!("{} resize: vertical;", base)
        }
    };
    let aria = chrome.aria_attrs();
    let counter = chrome.counter(value);

    view! {
        <FieldFrame chrome=chrome.clone() counter=counter>
            <textarea
                id=chrome.id.clone()
                class="cms-field__textarea"
                rows=rows
                placeholder=chrome.placeholder.clone()
                style=style
                readonly=chrome.advanced.read_only
                prop:value=move || value.with(FieldValue::as_text)
                aria-required=aria.required
                aria-describedby=aria.described_by
                aria-label=aria.label
                aria-labelledby=aria.labelled_by
                aria-invalid=aria.invalid
                on:input=move |ev| on_change.run(FieldValue::Text(event_target_value(&ev)))
                on:focus=move |_| focused.set(true)
                on:blur=move |_| focused.set(false)
            ></textarea>
        </FieldFrame>
    }
}

#[component]
pub fn MarkdownInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
) -> impl IntoView {
    view! {
        <TextareaInput chrome=chrome value=value on_change=on_change rows=MARKDOWN_ROWS monospace=true />
    }
}
