//! Field chrome shared by every renderer: label, help or error line,
//! appearance styles, adornments and accessibility attributes.

use contracts::domain::a002_field::{FieldDescriptor, FieldValue};
use contracts::shared::advanced::AdvancedSettings;
use contracts::shared::appearance::{AppearanceSettings, LabelPosition};
use leptos::prelude::*;

/// Frame properties unpacked from a descriptor
#[derive(Clone)]
pub struct FieldChrome {
    pub id: String,
    pub label: String,
    pub placeholder: String,
    pub required: bool,
    pub help: Option<String>,
    /// Joined validation errors; replaces the help line while present
    pub error: Signal<Option<String>>,
    pub appearance: AppearanceSettings,
    pub advanced: AdvancedSettings,
    pub aria: Vec<(&'static str, String)>,
    /// Maximum length when the rule is enabled, for the counter
    pub max_length: Option<u32>,
}

/// Accessibility attributes of the primary input element
#[derive(Clone)]
pub struct AriaAttrs {
    pub required: Option<String>,
    pub described_by: String,
    pub label: Option<String>,
    pub labelled_by: Option<String>,
    pub autocomplete: Option<String>,
    pub invalid: Signal<Option<&'static str>>,
}

impl FieldChrome {
    pub fn from_descriptor(field: &FieldDescriptor, error: Signal<Option<String>>) -> Self {
        let required = field.is_required();
        Self {
            id: field.dom_id(),
            label: field.label(),
            placeholder: field.placeholder(),
            required,
            help: field.help(),
            error,
            appearance: field.settings.appearance.clone(),
            advanced: field.settings.advanced.clone(),
            aria: field.settings.validation.aria_attributes(required, true),
            max_length: field
                .settings
                .validation
                .max_length_enabled
                .then_some(field.settings.validation.max_length),
        }
    }

    pub fn invalid(&self) -> Signal<bool> {
        let error = self.error;
        Signal::derive(move || error.with(Option::is_some))
    }

    pub fn help_id(&self) -> String {
        format!("{}-help", self.id)
    }

    /// Value of a configured aria attribute; `aria-invalid` follows the error state
    pub fn aria(&self, name: &'static str) -> Option<String> {
        self.aria
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.clone())
    }

    pub fn aria_invalid(&self) -> Signal<Option<&'static str>> {
        let configured = self.aria("aria-invalid").is_some();
        let invalid = self.invalid();
        Signal::derive(move || (configured && invalid.get()).then_some("true"))
    }

    pub fn described_by(&self) -> String {
        self.aria("aria-describedby")
            .unwrap_or_else(|| self.help_id())
    }

    pub fn aria_attrs(&self) -> AriaAttrs {
        AriaAttrs {
            required: self.aria("aria-required"),
            described_by: self.described_by(),
            label: self.aria("aria-label"),
            labelled_by: self.aria("aria-labelledby"),
            autocomplete: self.aria("autocomplete"),
            invalid: self.aria_invalid(),
        }
    }

    /// Character counter, when the appearance enables it
    pub fn counter(&self, value: Signal<FieldValue>) -> Option<Signal<String>> {
        if !self.appearance.show_char_count {
            return None;
        }
        let max = self.max_length;
        Some(Signal::derive(move || {
            char_count_label(value.with(|v| v.as_text().chars().count()), max)
        }))
    }

    /// Reactive inline style of the input element
    pub fn input_style(&self, focused: RwSignal<bool>) -> Signal<String> {
        let appearance = self.appearance.clone();
        let invalid = self.invalid();
        Signal::derive(move || appearance.input_style(focused.get(), invalid.get()))
    }
}

/// Label, input slot and help line laid out per the appearance settings
#[component]
pub fn FieldFrame(
    chrome: FieldChrome,
    /// Character counter shown under the input (`{len}/{max}`)
    #[prop(default = None)]
    counter: Option<Signal<String>>,
    children: Children,
) -> impl IntoView {
    let invalid = chrome.invalid();
    let appearance = chrome.appearance.clone();
    let container_class = {
        let appearance = appearance.clone();
        move || appearance.container_class(invalid.get())
    };
    let container_style = if appearance.custom_css.trim().is_empty() {
        appearance.container_style()
    } else {
        format!("{} {}", appearance.container_style(), appearance.custom_css.trim())
    };
    let help_style = {
        let appearance = appearance.clone();
        move || appearance.help_style(invalid.get())
    };
    let error = chrome.error;
    let help = chrome.help.clone();
    let help_line = move || error.get().or_else(|| help.clone());
    let label_after = appearance.label_position == LabelPosition::Right;

    view! {
        <div class=container_class style=container_style data-field-id=chrome.id.clone()>
            <label for=chrome.id.clone() style=appearance.label_style() class="cms-field__label">
                {chrome.label.clone()}
                {chrome.required.then(|| view! { <span class="cms-field__required">" *"</span> })}
            </label>
            <div style=appearance.input_wrapper_style() class="cms-field__control" class:cms-field__control--label-after=label_after>
                {children()}
                <div class="cms-field__footer">
                    <p id=chrome.help_id() class="cms-field__help" style=help_style>
                        {help_line}
                    </p>
                    {counter.map(|c| view! { <span class="cms-field__counter">{c}</span> })}
                </div>
            </div>
        </div>
    }
}

/// Prefix / suffix around an input, when configured
#[component]
pub fn Adornments(advanced: AdvancedSettings, children: Children) -> impl IntoView {
    if !advanced.has_adornments() {
        return children().into_any();
    }
    let prefix = (!advanced.prefix.is_empty()).then(|| advanced.prefix.clone());
    let suffix = (!advanced.suffix.is_empty()).then(|| advanced.suffix.clone());
    view! {
        <div class="cms-field__adorned">
            {prefix.map(|p| view! { <span class="cms-field__prefix">{p}</span> })}
            {children()}
            {suffix.map(|s| view! { <span class="cms-field__suffix">{s}</span> })}
        </div>
    }
    .into_any()
}

/// Counter text for fields with a configured maximum length
pub fn char_count_label(len: usize, max_length: Option<u32>) -> String {
    match max_length {
        Some(max) => format!("{}/{}", len, max),
        None => len.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_label() {
        assert_eq!(char_count_label(3, Some(10)), "3/10");
        assert_eq!(char_count_label(7, None), "7");
    }
}
