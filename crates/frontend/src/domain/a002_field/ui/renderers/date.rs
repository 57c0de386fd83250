use super::frame::{FieldChrome, FieldFrame};
use contracts::domain::a002_field::FieldValue;
use contracts::shared::input::date::{display_date, normalize_date};
use leptos::prelude::*;

/// Native date input; the value is ISO `YYYY-MM-DD` or empty
#[component]
pub fn DateInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let iso = move || normalize_date(&value.with(FieldValue::as_text));
    let style = chrome.input_style(focused);
    let aria = chrome.aria_attrs();

    view! {
        <FieldFrame chrome=chrome.clone()>
            <input
                type="date"
                id=chrome.id.clone()
                class="cms-field__input cms-field__input--date"
                style=style
                readonly=chrome.advanced.read_only
                prop:value=iso
                aria-required=aria.required
                aria-describedby=aria.described_by
                aria-label=aria.label
                aria-labelledby=aria.labelled_by
                aria-invalid=aria.invalid
                on:change=move |ev| on_change.run(FieldValue::Text(normalize_date(&event_target_value(&ev))))
                on:focus=move |_| focused.set(true)
                on:blur=move |_| focused.set(false)
            />
            <span class="cms-field__hint">{move || display_date(&iso()).unwrap_or_default()}</span>
        </FieldFrame>
    }
}
