//! Searchable single-choice picker

use super::frame::{FieldChrome, FieldFrame};
use crate::shared::icons::icon;
use contracts::domain::a002_field::{FieldOption, FieldValue};
use contracts::shared::input::options::label_for;
use contracts::shared::input::{autocomplete_select, filter_options};
use leptos::prelude::*;

pub const AUTOCOMPLETE_PLACEHOLDER: &str = "Select an option...";
pub const NO_OPTIONS_MESSAGE: &str = "No options found.";

#[component]
pub fn AutocompleteInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
    options: Vec<FieldOption>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let focused = RwSignal::new(false);
    let options = StoredValue::new(options);
    let read_only = chrome.advanced.read_only;

    let current = move || value.with(FieldValue::as_text);
    let current_label = move || {
        let v = current();
        if v.is_empty() {
            AUTOCOMPLETE_PLACEHOLDER.to_string()
        } else {
            options.with_value(|o| label_for(o, &v).to_string())
        }
    };
    let matches = move || {
        let q = query.get();
        options.with_value(|o| {
            filter_options(o, &q)
                .into_iter()
                .cloned()
                .collect::<Vec<FieldOption>>()
        })
    };

    let pick = move |picked: String| {
        let next = autocomplete_select(&current(), &picked);
        on_change.run(FieldValue::Text(next));
        query.set(String::new());
        open.set(false);
    };

    let style = chrome.input_style(focused);
    let aria = chrome.aria_attrs();
    let search_id = format!("{}-search", chrome.id);

    view! {
        <FieldFrame chrome=chrome.clone()>
            <div class="cms-autocomplete">
                <button
                    type="button"
                    id=chrome.id.clone()
                    class="cms-autocomplete__trigger"
                    class:cms-autocomplete__trigger--empty=move || current().is_empty()
                    style=style
                    disabled=read_only
                    role="combobox"
                    aria-expanded=move || open.get().to_string()
                    aria-required=aria.required
                    aria-describedby=aria.described_by
                    aria-label=aria.label
                    aria-labelledby=aria.labelled_by
                    aria-invalid=aria.invalid
                    on:click=move |_| open.update(|o| *o = !*o)
                    on:focus=move |_| focused.set(true)
                    on:blur=move |_| focused.set(false)
                >
                    <span>{current_label}</span>
                    {icon("chevron-down")}
                </button>

                <Show when=move || open.get()>
                    <div class="cms-autocomplete__popover">
                        <div class="cms-autocomplete__search">
                            {icon("search")}
                            <input
                                type="text"
                                id=search_id.clone()
                                placeholder="Search..."
                                autocomplete="off"
                                prop:value=move || query.get()
                                on:input=move |ev| query.set(event_target_value(&ev))
                                on:keydown=move |ev| {
                                    if ev.key() == "Escape" {
                                        open.set(false);
                                    }
                                }
                            />
                        </div>
                        <ul class="cms-autocomplete__list" role="listbox">
                            {move || {
                                let found = matches();
                                if found.is_empty() {
                                    return view! {
                                        <li class="cms-autocomplete__empty">{NO_OPTIONS_MESSAGE}</li>
                                    }
                                    .into_any();
                                }
                                let selected = current();
                                found.into_iter().map(|opt| {
                                    let is_selected = opt.value == selected;
                                    let picked = opt.value.clone();
                                    view! {
                                        <li
                                            class="cms-autocomplete__option"
                                            class:cms-autocomplete__option--selected=is_selected
                                            role="option"
                                            aria-selected=is_selected.to_string()
                                            on:click=move |_| pick(picked.clone())
                                        >
                                            <span class="cms-autocomplete__check">
                                                {is_selected.then(|| icon("check"))}
                                            </span>
                                            <span>{opt.label}</span>
                                        </li>
                                    }
                                }).collect_view().into_any()
                            }}
                        </ul>
                    </div>
                </Show>
            </div>
        </FieldFrame>
    }
}
