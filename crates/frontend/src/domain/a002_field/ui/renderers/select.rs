//! Static option pickers: single select and multi select

use super::frame::{FieldChrome, FieldFrame};
use crate::shared::icons::icon;
use contracts::domain::a002_field::{FieldOption, FieldValue};
use contracts::shared::input::options::label_for;
use contracts::shared::input::toggle_membership;
use leptos::prelude::*;

#[component]
pub fn SelectInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
    options: Vec<FieldOption>,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let style = chrome.input_style(focused);
    let aria = chrome.aria_attrs();
    let placeholder = chrome.placeholder.clone();
    let current = move || value.with(FieldValue::as_text);

    view! {
        <FieldFrame chrome=chrome.clone()>
            <select
                id=chrome.id.clone()
                class="cms-field__select"
                style=style
                disabled=chrome.advanced.read_only
                prop:value=current
                aria-required=aria.required
                aria-describedby=aria.described_by
                aria-label=aria.label
                aria-labelledby=aria.labelled_by
                aria-invalid=aria.invalid
                on:change=move |ev| on_change.run(FieldValue::Text(event_target_value(&ev)))
                on:focus=move |_| focused.set(true)
                on:blur=move |_| focused.set(false)
            >
                <option value="" selected=move || current().is_empty()>{placeholder}</option>
                {options.into_iter().map(|opt| {
                    let option_value = opt.value.clone();
                    view! {
                        <option
                            value=opt.value.clone()
                            selected=move || current() == option_value
                        >
                            {opt.label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </FieldFrame>
    }
}

/// Summary line of the closed multi select
pub fn selection_summary(count: usize, placeholder: &str) -> String {
    if count == 0 {
        placeholder.to_string()
    } else {
        format!("{} selected", count)
    }
}

#[component]
pub fn MultiSelectInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
    options: Vec<FieldOption>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let focused = RwSignal::new(false);
    let selected = move || value.with(FieldValue::as_list);
    let options = StoredValue::new(options);
    let read_only = chrome.advanced.read_only;

    let toggle = move |option_value: String| {
        if read_only {
            return;
        }
        let next = toggle_membership(&selected(), &option_value);
        on_change.run(FieldValue::List(next));
    };

    let placeholder = chrome.placeholder.clone();
    let summary = move || selection_summary(selected().len(), &placeholder);
    let style = chrome.input_style(focused);
    let aria = chrome.aria_attrs();
    let list_id = format!("{}-listbox", chrome.id);
    let controls_id = list_id.clone();

    view! {
        <FieldFrame chrome=chrome.clone()>
            <div class="cms-multiselect">
                <button
                    type="button"
                    id=chrome.id.clone()
                    class="cms-multiselect__trigger"
                    style=style
                    disabled=read_only
                    aria-haspopup="listbox"
                    aria-expanded=move || open.get().to_string()
                    aria-controls=controls_id
                    aria-required=aria.required
                    aria-describedby=aria.described_by
                    aria-label=aria.label
                    aria-labelledby=aria.labelled_by
                    aria-invalid=aria.invalid
                    on:click=move |_| open.update(|o| *o = !*o)
                    on:focus=move |_| focused.set(true)
                    on:blur=move |_| focused.set(false)
                >
                    <span>{summary}</span>
                    {icon("chevron-down")}
                </button>

                <Show when=move || open.get()>
                    <ul class="cms-multiselect__list" role="listbox" aria-multiselectable="true" id=list_id.clone()>
                        {options.get_value().into_iter().map(|opt| {
                            let value_for_check = opt.value.clone();
                            let value_for_click = opt.value.clone();
                            let is_selected = move || selected().contains(&value_for_check);
                            let selected_class = is_selected.clone();
                            let selected_check = is_selected.clone();
                            view! {
                                <li
                                    class="cms-multiselect__option"
                                    class:cms-multiselect__option--selected=selected_class
                                    role="option"
                                    aria-selected=move || is_selected().to_string()
                                    on:click=move |_| toggle(value_for_click.clone())
                                >
                                    <input type="checkbox" tabindex="-1" prop:checked=selected_check />
                                    <span>{opt.label}</span>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </Show>

                <div class="cms-multiselect__badges">
                    {move || {
                        selected().into_iter().map(|v| {
                            let label = options.with_value(|o| label_for(o, &v).to_string());
                            view! {
                                <span class="cms-multiselect__badge">
                                    {label}
                                    {(!read_only).then(|| view! {
                                        <button type="button" class="cms-multiselect__remove" title="Remove"
                                            on:click=move |_| toggle(v.clone())>
                                            {icon("x")}
                                        </button>
                                    })}
                                </span>
                            }
                        }).collect_view()
                    }}
                </div>
            </div>
        </FieldFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_summary() {
        assert_eq!(selection_summary(0, "Select options"), "Select options");
        assert_eq!(selection_summary(3, "Select options"), "3 selected");
    }
}
