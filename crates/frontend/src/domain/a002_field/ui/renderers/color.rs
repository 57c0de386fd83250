//! Colour picker: preset swatches, free text and the native colour input

use super::frame::{FieldChrome, FieldFrame};
use contracts::domain::a002_field::FieldValue;
use contracts::shared::input::color::{is_hex_color, to_native_color, PRESET_COLORS};
use leptos::prelude::*;

#[component]
pub fn ColorInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let current = move || value.with(FieldValue::as_text);
    let read_only = chrome.advanced.read_only;
    let set = move |color: String| {
        if !read_only {
            on_change.run(FieldValue::Text(color));
        }
    };
    let style = chrome.input_style(focused);
    let aria = chrome.aria_attrs();
    let native_label = format!("{} picker", chrome.label);

    view! {
        <FieldFrame chrome=chrome.clone()>
            <div class="cms-color">
                <div class="cms-color__row">
                    <span
                        class="cms-color__preview"
                        style=move || {
                            let c = current();
                            let fill = if is_hex_color(&c) { c } else { "transparent".to_string() };
                            format!("background: {};", fill)
                        }
                    ></span>
                    <input
                        type="text"
                        id=chrome.id.clone()
                        class="cms-field__input cms-color__text"
                        placeholder="#000000"
                        style=style
                        readonly=read_only
                        prop:value=current
                        aria-required=aria.required
                        aria-describedby=aria.described_by
                        aria-label=aria.label
                        aria-labelledby=aria.labelled_by
                        aria-invalid=aria.invalid
                        on:input=move |ev| set(event_target_value(&ev))
                        on:focus=move |_| focused.set(true)
                        on:blur=move |_| focused.set(false)
                    />
                    <input
                        type="color"
                        class="cms-color__native"
                        aria-label=native_label
                        disabled=read_only
                        prop:value=move || to_native_color(&current())
                        on:input=move |ev| set(event_target_value(&ev))
                    />
                </div>
                <div class="cms-color__swatches" role="listbox" aria-label="Preset colors">
                    {PRESET_COLORS.iter().map(|preset| {
                        let preset: &'static str = preset;
                        view! {
                            <button
                                type="button"
                                class="cms-color__swatch"
                                class:cms-color__swatch--active=move || current().eq_ignore_ascii_case(preset)
                                style=format!("background: {};", preset)
                                title=preset
                                role="option"
                                on:click=move |_| set(preset.to_string())
                            ></button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </FieldFrame>
    }
}
