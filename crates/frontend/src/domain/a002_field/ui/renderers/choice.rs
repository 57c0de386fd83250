//! Choice widgets backed by thaw: checkbox group, radio group and toggle.
//!
//! thaw binds to its own signals, so each widget keeps a local signal
//! and syncs it with the field value in both directions.

use super::frame::{FieldChrome, FieldFrame};
use contracts::domain::a002_field::{FieldOption, FieldValue};
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

#[component]
pub fn CheckboxGroupInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
    options: Vec<FieldOption>,
) -> impl IntoView {
    let checked = RwSignal::new(
        value
            .get_untracked()
            .as_list()
            .into_iter()
            .collect::<HashSet<String>>(),
    );

    // field value -> widget
    Effect::new(move |_| {
        let external: HashSet<String> = value.with(FieldValue::as_list).into_iter().collect();
        if checked.with_untracked(|c| *c != external) {
            checked.set(external);
        }
    });

    // widget -> field value, keeping the option order
    let order: Vec<String> = options.iter().map(|o| o.value.clone()).collect();
    Effect::new(move |prev: Option<()>| {
        let current = checked.get();
        if prev.is_some() {
            let external: HashSet<String> = value.with_untracked(FieldValue::as_list).into_iter().collect();
            if external != current {
                let ordered = order.iter().filter(|v| current.contains(*v)).cloned().collect();
                on_change.run(FieldValue::List(ordered));
            }
        }
    });

    let aria = chrome.aria_attrs();

    view! {
        <FieldFrame chrome=chrome.clone()>
            <div
                id=chrome.id.clone()
                class="cms-choice cms-choice--checkbox"
                role="group"
                aria-describedby=aria.described_by
                aria-label=aria.label.unwrap_or_else(|| chrome.label.clone())
                aria-invalid=aria.invalid
            >
                <CheckboxGroup value=checked>
                    {options.into_iter().map(|opt| view! {
                        <Checkbox value=opt.value label=opt.label />
                    }).collect_view()}
                </CheckboxGroup>
            </div>
        </FieldFrame>
    }
}

#[component]
pub fn RadioGroupInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
    options: Vec<FieldOption>,
) -> impl IntoView {
    let selected = RwSignal::new(value.get_untracked().as_text());

    Effect::new(move |_| {
        let external = value.with(FieldValue::as_text);
        if selected.with_untracked(|s| *s != external) {
            selected.set(external);
        }
    });

    Effect::new(move |prev: Option<String>| {
        let current = selected.get();
        if prev.is_some() && value.with_untracked(FieldValue::as_text) != current {
            on_change.run(FieldValue::Text(current.clone()));
        }
        current
    });

    let aria = chrome.aria_attrs();

    view! {
        <FieldFrame chrome=chrome.clone()>
            <div
                id=chrome.id.clone()
                class="cms-choice cms-choice--radio"
                role="radiogroup"
                aria-describedby=aria.described_by
                aria-label=aria.label.unwrap_or_else(|| chrome.label.clone())
                aria-required=aria.required
                aria-invalid=aria.invalid
            >
                <RadioGroup value=selected>
                    {options.into_iter().map(|opt| view! {
                        <Radio value=opt.value label=opt.label />
                    }).collect_view()}
                </RadioGroup>
            </div>
        </FieldFrame>
    }
}

#[component]
pub fn ToggleInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
) -> impl IntoView {
    let checked = RwSignal::new(value.get_untracked().as_bool());

    Effect::new(move |_| {
        let external = value.with(FieldValue::as_bool);
        if checked.get_untracked() != external {
            checked.set(external);
        }
    });

    Effect::new(move |prev: Option<bool>| {
        let current = checked.get();
        if prev.is_some() && value.with_untracked(FieldValue::as_bool) != current {
            on_change.run(FieldValue::Bool(current));
        }
        current
    });

    let aria = chrome.aria_attrs();

    view! {
        <FieldFrame chrome=chrome.clone()>
            <div
                id=chrome.id.clone()
                class="cms-choice cms-choice--toggle"
                aria-describedby=aria.described_by
                aria-invalid=aria.invalid
            >
                <Switch checked=checked />
                <span class="cms-choice__state">{move || if checked.get() { "On" } else { "Off" }}</span>
            </div>
        </FieldFrame>
    }
}
