//! URL slug input: the value is normalized on every keystroke,
//! the visible text on blur

use super::frame::{Adornments, FieldChrome, FieldFrame};
use super::text::write_back;
use contracts::domain::a002_field::FieldValue;
use contracts::shared::input::slugify;
use leptos::prelude::*;

#[component]
pub fn SlugInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let style = chrome.input_style(focused);
    let aria = chrome.aria_attrs();

    view! {
        <FieldFrame chrome=chrome.clone()>
            <Adornments advanced=chrome.advanced.clone()>
                <input
                    type="text"
                    id=chrome.id.clone()
                    class="cms-field__input cms-field__input--slug"
                    placeholder=chrome.placeholder.clone()
                    style=move || format!("{} font-family: ui-monospace, monospace;", style.get())
                    readonly=chrome.advanced.read_only
                    prop:value=move || value.with(FieldValue::as_text)
                    aria-required=aria.required
                    aria-describedby=aria.described_by
                    aria-label=aria.label
                    aria-labelledby=aria.labelled_by
                    aria-invalid=aria.invalid
                    autocomplete="off"
                    on:input=move |ev| on_change.run(FieldValue::Text(slugify(&event_target_value(&ev))))
                    on:focus=move |_| focused.set(true)
                    on:blur=move |ev| {
                        // a trailing separator typed mid-word stays visible until blur
                        write_back(&ev, &slugify(&event_target_value(&ev)));
                        focused.set(false);
                    }
                />
            </Adornments>
        </FieldFrame>
    }
}
