//! Template-masked input (`#` digit, `A` letter, `*` any).
//! Shows the masked text and reports the raw slot characters.

use super::frame::{FieldChrome, FieldFrame};
use super::text::write_back;
use contracts::domain::a002_field::FieldValue;
use contracts::shared::input::{apply_mask, edit_masked, mask_placeholder};
use leptos::prelude::*;

#[component]
pub fn MaskInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
    mask: String,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let style = chrome.input_style(focused);
    let aria = chrome.aria_attrs();
    let mask = StoredValue::new(mask);
    let display = move || mask.with_value(|m| apply_mask(m, &value.with(FieldValue::as_text)));
    let placeholder = mask.with_value(|m| mask_placeholder(m));

    view! {
        <FieldFrame chrome=chrome.clone()>
            <input
                type="text"
                id=chrome.id.clone()
                class="cms-field__input cms-field__input--mask"
                placeholder=placeholder
                maxlength=mask.with_value(|m| m.chars().count())
                style=style
                readonly=chrome.advanced.read_only
                prop:value=display
                aria-required=aria.required
                aria-describedby=aria.described_by
                aria-label=aria.label
                aria-labelledby=aria.labelled_by
                aria-invalid=aria.invalid
                autocomplete=aria.autocomplete
                on:input=move |ev| {
                    let edit = mask.with_value(|m| edit_masked(m, &event_target_value(&ev)));
                    write_back(&ev, &edit.display);
                    on_change.run(FieldValue::Text(edit.raw));
                }
                on:focus=move |_| focused.set(true)
                on:blur=move |_| focused.set(false)
            />
        </FieldFrame>
    }
}
