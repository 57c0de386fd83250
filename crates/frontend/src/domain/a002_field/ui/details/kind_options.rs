//! Editor for the options carried by the field type itself
//! (choices, mask template, rows, step, upload limits).

use crate::domain::a002_field::ui::controls::{NumberRow, TextRow};
use contracts::domain::a002_field::{FieldKind, FieldOption, NumberFormat};
use contracts::shared::input::mask_placeholder;
use leptos::prelude::*;

/// One option per line, `label` or `label:value`
pub fn options_to_text(options: &[FieldOption]) -> String {
    options
        .iter()
        .map(|o| {
            if o.label == o.value {
                o.label.clone()
            } else {
                format!("{}:{}", o.label, o.value)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn parse_options_text(text: &str) -> Vec<FieldOption> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(':') {
            Some((label, value)) if !value.trim().is_empty() => {
                FieldOption::new(label.trim(), value.trim())
            }
            Some((label, _)) => FieldOption::new(label.trim(), label.trim()),
            None => FieldOption::new(line, line),
        })
        .collect()
}

#[component]
pub fn KindOptionsEditor(
    #[prop(into)] kind: Signal<FieldKind>,
    on_change: Callback<FieldKind>,
) -> impl IntoView {
    let tag = Memo::new(move |_| kind.with(|k| k.tag().to_string()));
    let patch = move |f: Box<dyn FnOnce(&mut FieldKind)>| {
        let mut next = kind.get_untracked();
        f(&mut next);
        on_change.run(next);
    };

    move || match tag.get().as_str() {
        "number" => view! {
            <NumberRow
                label="Step"
                value=Signal::derive(move || kind.with(|k| match k {
                    FieldKind::Number { step, .. } => Some(*step),
                    _ => None,
                }))
                on_input=Callback::new(move |v: Option<f64>| patch(Box::new(move |k| {
                    if let FieldKind::Number { step, .. } = k {
                        *step = v.filter(|s| *s > 0.0).unwrap_or(1.0);
                    }
                })))
            />
            <TextRow
                label="Currency"
                placeholder="USD (empty for plain numbers)"
                value=Signal::derive(move || kind.with(|k| match k {
                    FieldKind::Number { format: NumberFormat::Currency { currency, .. }, .. } => currency.clone(),
                    _ => String::new(),
                }))
                on_input=Callback::new(move |v: String| patch(Box::new(move |k| {
                    if let FieldKind::Number { format, .. } = k {
                        let currency = v.trim().to_uppercase();
                        *format = if currency.is_empty() {
                            NumberFormat::Plain { locale: None }
                        } else {
                            NumberFormat::Currency { currency, locale: None }
                        };
                    }
                })))
            />
        }
        .into_any(),
        "textarea" => view! {
            <NumberRow
                label="Rows"
                value=Signal::derive(move || kind.with(|k| match k {
                    FieldKind::Textarea { rows } => Some(*rows as f64),
                    _ => None,
                }))
                on_input=Callback::new(move |v: Option<f64>| patch(Box::new(move |k| {
                    if let FieldKind::Textarea { rows } = k {
                        *rows = v.map(|r| r.clamp(1.0, 40.0) as u32).unwrap_or(4);
                    }
                })))
            />
        }
        .into_any(),
        "file" => view! {
            <TextRow
                label="Accepted Types"
                placeholder=".pdf,.docx or application/pdf"
                value=Signal::derive(move || kind.with(|k| match k {
                    FieldKind::File { accept, .. } => accept.clone().unwrap_or_default(),
                    _ => String::new(),
                }))
                on_input=Callback::new(move |v: String| patch(Box::new(move |k| {
                    if let FieldKind::File { accept, .. } = k {
                        *accept = Some(v.trim().to_string()).filter(|s| !s.is_empty());
                    }
                })))
            />
            <NumberRow
                label="Max Size (MB)"
                value=Signal::derive(move || kind.with(|k| match k {
                    FieldKind::File { max_size_mb, .. } => *max_size_mb,
                    _ => None,
                }))
                on_input=Callback::new(move |v: Option<f64>| patch(Box::new(move |k| {
                    if let FieldKind::File { max_size_mb, .. } = k {
                        *max_size_mb = v.filter(|m| *m > 0.0);
                    }
                })))
            />
        }
        .into_any(),
        "image" => view! {
            <NumberRow
                label="Max Size (MB)"
                value=Signal::derive(move || kind.with(|k| match k {
                    FieldKind::Image { max_size_mb } => Some(*max_size_mb),
                    _ => None,
                }))
                on_input=Callback::new(move |v: Option<f64>| patch(Box::new(move |k| {
                    if let (FieldKind::Image { max_size_mb }, Some(v)) = (k, v.filter(|m| *m > 0.0)) {
                        *max_size_mb = v;
                    }
                })))
            />
        }
        .into_any(),
        "mask" => view! {
            <TextRow
                label="Mask Template"
                placeholder="(###) ###-####"
                value=Signal::derive(move || kind.with(|k| match k {
                    FieldKind::Mask { mask } => mask.clone(),
                    _ => String::new(),
                }))
                on_input=Callback::new(move |v: String| patch(Box::new(move |k| {
                    if let FieldKind::Mask { mask } = k {
                        *mask = v;
                    }
                })))
            />
            <p class="settings-row__hint">
                "# digit, A letter, * any character. Placeholder: "
                {move || kind.with(|k| match k {
                    FieldKind::Mask { mask } => mask_placeholder(mask),
                    _ => String::new(),
                })}
            </p>
        }
        .into_any(),
        "otp" => view! {
            <NumberRow
                label="Code Length"
                value=Signal::derive(move || kind.with(|k| match k {
                    FieldKind::Otp { length } => Some(*length as f64),
                    _ => None,
                }))
                on_input=Callback::new(move |v: Option<f64>| patch(Box::new(move |k| {
                    if let (FieldKind::Otp { length }, Some(v)) = (k, v) {
                        *length = v.clamp(1.0, 12.0) as usize;
                    }
                })))
            />
        }
        .into_any(),
        "select" | "multiselect" | "checkbox" | "radio" | "autocomplete" => view! {
            <label class="settings-row">
                <span class="settings-row__label">"Options (one per line, label:value)"</span>
                <textarea
                    class="settings-row__textarea"
                    rows=6
                    prop:value=move || kind.with(|k| k.options().map(options_to_text).unwrap_or_default())
                    on:change=move |ev| {
                        let parsed = parse_options_text(&event_target_value(&ev));
                        patch(Box::new(move |k| {
                            if let Some(options) = k.options_mut() {
                                *options = parsed;
                            }
                        }))
                    }
                ></textarea>
            </label>
        }
        .into_any(),
        _ => view! {
            <p class="settings-row__hint">"This field type has no type-specific options."</p>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_text() {
        let options = parse_options_text("Red\n\n  Green:green \nBlue:\n");
        assert_eq!(
            options,
            vec![
                FieldOption::new("Red", "Red"),
                FieldOption::new("Green", "green"),
                FieldOption::new("Blue", "Blue"),
            ]
        );
    }

    #[test]
    fn test_options_text_lists_values_only_when_different() {
        let options = vec![FieldOption::new("Red", "Red"), FieldOption::new("Green", "green")];
        assert_eq!(options_to_text(&options), "Red\nGreen:green");
        assert_eq!(parse_options_text(&options_to_text(&options)), options);
    }
}
