//! Small labelled controls used by the settings panels.
//!
//! The panels keep one settings object in a signal and patch a single
//! member per control, so every control here is value-in / callback-out.

use leptos::prelude::*;

/// Native select over `(value, label)` pairs
#[component]
pub fn ChoiceRow(
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] current: Signal<String>,
    on_pick: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="settings-row">
            <span class="settings-row__label">{label}</span>
            <select
                class="settings-row__select"
                disabled=disabled
                on:change=move |ev| on_pick.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(value, text)| {
                        view! {
                            <option value=value selected=move || current.get() == value>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Checkbox switch with a caption and an optional hint
#[component]
pub fn SwitchRow(
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="settings-row settings-row--switch">
            <input
                type="checkbox"
                class="settings-row__switch"
                prop:checked=checked
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span class="settings-row__label">{label}</span>
            {hint.map(|h| view! { <span class="settings-row__hint">{h}</span> })}
        </label>
    }
}

/// Range slider with the current percentage shown next to it
#[component]
pub fn PercentRow(
    label: &'static str,
    min: u8,
    max: u8,
    #[prop(into)] value: Signal<u8>,
    on_input: Callback<u8>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="settings-row">
            <span class="settings-row__label">
                {label} " (" {move || value.get()} "%)"
            </span>
            <input
                type="range"
                class="settings-row__range"
                min=min
                max=max
                disabled=disabled
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Some(v) = parse_percent(&event_target_value(&ev), min, max) {
                        on_input.run(v);
                    }
                }
            />
        </label>
    }
}

/// Single-line text setting
#[component]
pub fn TextRow(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="settings-row">
            <span class="settings-row__label">{label}</span>
            <input
                type="text"
                class="settings-row__input"
                placeholder=placeholder
                disabled=disabled
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Numeric setting; an empty box reports `None`
#[component]
pub fn NumberRow(
    label: &'static str,
    #[prop(into)] value: Signal<Option<f64>>,
    on_input: Callback<Option<f64>>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="settings-row">
            <span class="settings-row__label">{label}</span>
            <input
                type="number"
                class="settings-row__input settings-row__input--number"
                disabled=disabled
                prop:value=move || value.get().map(|v| v.to_string()).unwrap_or_default()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    let trimmed = raw.trim();
                    if trimmed.is_empty() {
                        on_input.run(None);
                    } else if let Ok(v) = trimmed.parse::<f64>() {
                        on_input.run(Some(v));
                    }
                }
            />
        </label>
    }
}

/// Slider value clamped to `[min, max]`; garbage is ignored
pub fn parse_percent(raw: &str, min: u8, max: u8) -> Option<u8> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .map(|v| v.clamp(min as i64, max as i64) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent_clamps() {
        assert_eq!(parse_percent("40", 10, 90), Some(40));
        assert_eq!(parse_percent("5", 10, 90), Some(10));
        assert_eq!(parse_percent("120", 10, 90), Some(90));
        assert_eq!(parse_percent("abc", 10, 90), None);
    }
}
