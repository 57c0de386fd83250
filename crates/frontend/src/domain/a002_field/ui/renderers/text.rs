//! Single-line text and password inputs

use super::frame::{Adornments, FieldChrome, FieldFrame};
use crate::shared::icons::icon;
use contracts::domain::a002_field::FieldValue;
use contracts::shared::input::apply_key_filter;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Write back the filtered text when the filter removed characters;
/// the bound value may not change and the DOM would keep the typed text.
pub(super) fn write_back<E: AsRef<web_sys::Event>>(ev: &E, filtered: &str) {
    if let Some(input) = ev
        .as_ref()
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
    {
        if input.value() != filtered {
            input.set_value(filtered);
        }
    }
}

#[component]
pub fn TextInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let key_filter = chrome.advanced.key_filter;
    let style = chrome.input_style(focused);
    let aria = chrome.aria_attrs();
    let counter = chrome.counter(value);

    view! {
        <FieldFrame chrome=chrome.clone() counter=counter>
            <Adornments advanced=chrome.advanced.clone()>
                <input
                    type="text"
                    id=chrome.id.clone()
                    class="cms-field__input"
                    placeholder=chrome.placeholder.clone()
                    style=style
                    readonly=chrome.advanced.read_only
                    prop:value=move || value.with(FieldValue::as_text)
                    aria-required=aria.required
                    aria-describedby=aria.described_by
                    aria-label=aria.label
                    aria-labelledby=aria.labelled_by
                    aria-invalid=aria.invalid
                    autocomplete=aria.autocomplete
                    on:input=move |ev| {
                        let filtered = apply_key_filter(key_filter, &event_target_value(&ev));
                        write_back(&ev, &filtered);
                        on_change.run(FieldValue::Text(filtered));
                    }
                    on:focus=move |_| focused.set(true)
                    on:blur=move |_| focused.set(false)
                />
            </Adornments>
        </FieldFrame>
    }
}

/// Masked text with a visibility toggle; the value is never transformed
#[component]
pub fn PasswordInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let visible = RwSignal::new(false);
    let style = chrome.input_style(focused);
    let aria = chrome.aria_attrs();

    view! {
        <FieldFrame chrome=chrome.clone()>
            <div class="cms-field__password">
                <input
                    type=move || if visible.get() { "text" } else { "password" }
                    id=chrome.id.clone()
                    class="cms-field__input"
                    placeholder=chrome.placeholder.clone()
                    style=style
                    readonly=chrome.advanced.read_only
                    prop:value=move || value.with(FieldValue::as_text)
                    aria-required=aria.required
                    aria-describedby=aria.described_by
                    aria-label=aria.label
                    aria-labelledby=aria.labelled_by
                    aria-invalid=aria.invalid
                    autocomplete=aria.autocomplete.unwrap_or_else(|| "current-password".to_string())
                    on:input=move |ev| on_change.run(FieldValue::Text(event_target_value(&ev)))
                    on:focus=move |_| focused.set(true)
                    on:blur=move |_| focused.set(false)
                />
                <button
                    type="button"
                    class="cms-field__icon-btn"
                    title=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { icon("eye-off") } else { icon("eye") }}
                </button>
            </div>
        </FieldFrame>
    }
}
