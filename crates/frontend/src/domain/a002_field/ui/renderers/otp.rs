//! One-time code input: one cell per digit with focus management

use super::frame::{FieldChrome, FieldFrame};
use contracts::domain::a002_field::FieldValue;
use contracts::shared::input::OtpCells;
use leptos::html::Input;
use leptos::prelude::*;

#[component]
pub fn OtpInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
    length: usize,
) -> impl IntoView {
    let length = length.max(1);
    let cells = RwSignal::new(OtpCells::from_value(
        length,
        &value.get_untracked().as_text(),
    ));

    Effect::new(move |_| {
        let external = value.with(FieldValue::as_text);
        if cells.with_untracked(OtpCells::join) != external {
            cells.set(OtpCells::from_value(length, &external));
        }
    });

    let refs = StoredValue::new((0..length).map(|_| NodeRef::<Input>::new()).collect::<Vec<_>>());

    let focus = move |index: Option<usize>| {
        let Some(index) = index else { return };
        if let Some(el) = refs.with_value(|r| r.get(index).and_then(|n| n.get_untracked())) {
            let _ = el.focus();
            el.select();
        }
    };

    let apply = move |edit: &dyn Fn(&mut OtpCells) -> Option<usize>| {
        let mut next = None;
        cells.update(|c| next = edit(c));
        on_change.run(FieldValue::Text(cells.with_untracked(OtpCells::join)));
        focus(next);
    };

    let aria = chrome.aria_attrs();
    let read_only = chrome.advanced.read_only;
    let label = chrome.label.clone();
    let first_id = chrome.id.clone();
    let invalid = chrome.invalid();

    view! {
        <FieldFrame chrome=chrome.clone()>
            <div class="cms-otp" role="group" aria-label=aria.label.clone().unwrap_or(label.clone()) aria-describedby=aria.described_by.clone()>
                {(0..length).map(|i| {
                    let node = refs.with_value(|r| r[i]);
                    let cell_label = format!("{} digit {}", label, i + 1);
                    view! {
                        <input
                            node_ref=node
                            type="text"
                            inputmode="numeric"
                            id=(i == 0).then(|| first_id.clone())
                            class="cms-otp__cell"
                            class:cms-otp__cell--invalid=move || invalid.get()
                            readonly=read_only
                            autocomplete={if i == 0 { "one-time-code" } else { "off" }}
                            aria-label=cell_label
                            aria-invalid=aria.invalid
                            prop:value=move || cells.with(|c| c.cell(i).to_string())
                            on:input=move |ev| {
                                let raw = event_target_value(&ev);
                                apply(&move |c: &mut OtpCells| c.input(i, &raw));
                                // the DOM keeps extra typed characters otherwise
                                let shown = cells.with_untracked(|c| c.cell(i).to_string());
                                super::text::write_back(&ev, &shown);
                            }
                            on:keydown=move |ev| {
                                match ev.key().as_str() {
                                    "Backspace" => {
                                        let prev = cells.with_untracked(|c| c.backspace(i));
                                        if prev.is_some() {
                                            ev.prevent_default();
                                            focus(prev);
                                        }
                                    }
                                    "ArrowLeft" => {
                                        ev.prevent_default();
                                        focus(cells.with_untracked(|c| c.left(i)));
                                    }
                                    "ArrowRight" => {
                                        ev.prevent_default();
                                        focus(cells.with_untracked(|c| c.right(i)));
                                    }
                                    _ => {}
                                }
                            }
                            on:paste=move |ev| {
                                let text = ev
                                    .clipboard_data()
                                    .and_then(|data| data.get_data("text").ok())
                                    .unwrap_or_default();
                                if !text.is_empty() {
                                    ev.prevent_default();
                                    apply(&move |c: &mut OtpCells| c.input(i, &text));
                                }
                            }
                            on:focus=move |_| {
                                if let Some(el) = refs.with_value(|r| r[i].get_untracked()) {
                                    el.select();
                                }
                            }
                        />
                    }
                }).collect_view()}
            </div>
        </FieldFrame>
    }
}
