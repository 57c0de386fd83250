//! Numeric input with a string edit buffer, clamping, stepper buttons
//! and formatting while not focused

use super::frame::{Adornments, FieldChrome, FieldFrame};
use super::text::write_back;
use crate::shared::icons::icon;
use contracts::domain::a002_field::{FieldValue, NumberFormat};
use contracts::shared::advanced::ButtonLayout;
use contracts::shared::input::{NumberBounds, NumberEditBuffer};
use leptos::prelude::*;

#[component]
pub fn NumberInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
    bounds: NumberBounds,
    format: NumberFormat,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let current = move || value.with(|v| v.as_number().unwrap_or(0.0));
    let buffer = RwSignal::new(NumberEditBuffer::new(value.get_untracked().as_number()));

    // Keep the buffer in step with external changes while not editing
    Effect::new(move |_| {
        let n = current();
        buffer.update(|b| b.sync(n));
    });

    let emit = move |next: Option<f64>| {
        if let Some(n) = next {
            on_change.run(FieldValue::Number(n));
        }
    };

    let step = move |up: bool| {
        let now = current();
        let mut next = None;
        buffer.update(|b| {
            next = if up {
                b.increment(now, &bounds)
            } else {
                b.decrement(now, &bounds)
            };
        });
        emit(next);
    };

    let text = move || buffer.with(|b| b.display(current(), &format));
    let can_inc = move || bounds.can_increment(current());
    let can_dec = move || bounds.can_decrement(current());

    let style = chrome.input_style(focused);
    let aria = chrome.aria_attrs();
    let read_only = chrome.advanced.read_only;
    let show_buttons = chrome.advanced.show_buttons && !read_only;
    let vertical = chrome.advanced.button_layout == ButtonLayout::Vertical;

    let input = view! {
        <input
            type="text"
            inputmode="decimal"
            id=chrome.id.clone()
            class="cms-field__input cms-field__input--number"
            placeholder=chrome.placeholder.clone()
            style=style
            readonly=read_only
            prop:value=text
            aria-required=aria.required
            aria-describedby=aria.described_by
            aria-label=aria.label
            aria-labelledby=aria.labelled_by
            aria-invalid=aria.invalid
            aria-valuemin=bounds.min.map(|n| n.to_string())
            aria-valuemax=bounds.max.map(|n| n.to_string())
            autocomplete=aria.autocomplete
            role="spinbutton"
            on:input=move |ev| {
                let raw = event_target_value(&ev);
                let mut next = None;
                buffer.update(|b| next = b.input(&raw, &bounds));
                write_back(&ev, &buffer.with_untracked(|b| b.text().to_string()));
                emit(next);
            }
            on:focus=move |_| {
                buffer.update(NumberEditBuffer::focus);
                focused.set(true);
            }
            on:blur=move |_| {
                let mut next = None;
                buffer.update(|b| next = b.blur(&bounds));
                focused.set(false);
                emit(next);
            }
            on:keydown=move |ev| {
                if read_only {
                    return;
                }
                match ev.key().as_str() {
                    "ArrowUp" => {
                        ev.prevent_default();
                        step(true);
                    }
                    "ArrowDown" => {
                        ev.prevent_default();
                        step(false);
                    }
                    _ => {}
                }
            }
        />
    };

    let body = if !show_buttons {
        input.into_any()
    } else if vertical {
        view! {
            <div class="cms-number cms-number--vertical">
                {input}
                <div class="cms-number__stack">
                    <button type="button" class="cms-number__btn" title="Increment"
                        disabled=move || !can_inc() on:click=move |_| step(true)>
                        {icon("chevron-up")}
                    </button>
                    <button type="button" class="cms-number__btn" title="Decrement"
                        disabled=move || !can_dec() on:click=move |_| step(false)>
                        {icon("chevron-down")}
                    </button>
                </div>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="cms-number cms-number--horizontal">
                <button type="button" class="cms-number__btn" title="Decrement"
                    disabled=move || !can_dec() on:click=move |_| step(false)>
                    {icon("minus")}
                </button>
                {input}
                <button type="button" class="cms-number__btn" title="Increment"
                    disabled=move || !can_inc() on:click=move |_| step(true)>
                    {icon("plus")}
                </button>
            </div>
        }
        .into_any()
    };

    view! {
        <FieldFrame chrome=chrome.clone()>
            <Adornments advanced=chrome.advanced.clone()>
                {body}
            </Adornments>
        </FieldFrame>
    }
}
