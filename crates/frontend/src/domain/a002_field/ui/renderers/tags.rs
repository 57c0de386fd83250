//! Free-form tag list with a maximum count

use super::frame::{FieldChrome, FieldFrame};
use crate::shared::icons::icon;
use contracts::domain::a002_field::FieldValue;
use contracts::shared::input::tags::is_commit_key;
use contracts::shared::input::TagList;
use leptos::prelude::*;

#[component]
pub fn TagsInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
    max_tags: u32,
) -> impl IntoView {
    let pending = RwSignal::new(String::new());
    let focused = RwSignal::new(false);
    let list = Memo::new(move |_| TagList::new(value.with(FieldValue::as_list), max_tags));

    let edit = move |f: &dyn Fn(&mut TagList) -> bool| {
        let mut tags = list.get_untracked();
        if f(&mut tags) {
            on_change.run(FieldValue::List(tags.into_vec()));
        }
    };

    let commit = move || {
        let text = pending.get_untracked();
        if text.trim().is_empty() {
            pending.set(String::new());
            return;
        }
        edit(&|tags: &mut TagList| tags.add(&text));
        pending.set(String::new());
    };

    let base_placeholder = chrome.placeholder.clone();
    let placeholder = move || list.with(|l| l.placeholder(&base_placeholder).into_owned());
    let style = chrome.input_style(focused);
    let aria = chrome.aria_attrs();
    let read_only = chrome.advanced.read_only;

    view! {
        <FieldFrame chrome=chrome.clone()>
            <div class="cms-tags" style=style>
                <For
                    each=move || list.get().into_vec()
                    key=|tag| tag.clone()
                    children=move |tag| {
                        let removed = tag.clone();
                        view! {
                            <span class="cms-tags__tag">
                                {tag}
                                {(!read_only).then(|| view! {
                                    <button
                                        type="button"
                                        class="cms-tags__remove"
                                        title="Remove tag"
                                        on:click=move |_| {
                                            let removed = removed.clone();
                                            edit(&move |tags: &mut TagList| tags.remove(&removed));
                                        }
                                    >
                                        {icon("x")}
                                    </button>
                                })}
                            </span>
                        }
                    }
                />
                <input
                    type="text"
                    id=chrome.id.clone()
                    class="cms-tags__input"
                    placeholder=placeholder
                    disabled=move || read_only || list.with(TagList::is_full)
                    prop:value=move || pending.get()
                    aria-required=aria.required
                    aria-describedby=aria.described_by
                    aria-label=aria.label
                    aria-labelledby=aria.labelled_by
                    aria-invalid=aria.invalid
                    autocomplete="off"
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        // a pasted comma commits the part before it
                        if let Some((head, tail)) = text.rsplit_once(',') {
                            for part in head.split(',') {
                                let part = part.to_string();
                                edit(&move |tags: &mut TagList| tags.add(&part));
                            }
                            pending.set(tail.to_string());
                        } else {
                            pending.set(text);
                        }
                    }
                    on:keydown=move |ev| {
                        let key = ev.key();
                        if is_commit_key(&key) {
                            ev.prevent_default();
                            commit();
                        } else if key == "Backspace" {
                            let text = pending.get_untracked();
                            edit(&move |tags: &mut TagList| tags.backspace(&text));
                        }
                    }
                    on:focus=move |_| focused.set(true)
                    on:blur=move |_| {
                        focused.set(false);
                        commit();
                    }
                />
            </div>
        </FieldFrame>
    }
}
