//! Field renderer: picks the input renderer for a descriptor's type and
//! wires the shared chrome, value and change callback into it.

use super::renderers::*;
use contracts::domain::a002_field::{FieldDescriptor, FieldKind, FieldValue};
use leptos::prelude::*;
use std::collections::HashMap;

/// Errors recorded for a field id, joined for display
pub fn field_error(errors: &HashMap<String, Vec<String>>, id: &str) -> Option<String> {
    errors
        .get(id)
        .filter(|list| !list.is_empty())
        .map(|list| list.join(", "))
}

#[component]
pub fn FieldRenderer(
    field: FieldDescriptor,
    #[prop(into)] value: Signal<FieldValue>,
    /// Receives `(field id, new value)`
    on_change: Callback<(String, FieldValue)>,
    #[prop(optional, into)] errors: Signal<HashMap<String, Vec<String>>>,
) -> impl IntoView {
    let id = field.dom_id();
    let error = {
        let id = id.clone();
        Signal::derive(move || errors.with(|e| field_error(e, &id)))
    };
    let chrome = FieldChrome::from_descriptor(&field, error);
    let on_change = Callback::new(move |v: FieldValue| on_change.run((id.clone(), v)));

    match field.kind.clone() {
        FieldKind::Text => view! { <TextInput chrome value on_change /> }.into_any(),
        FieldKind::Password => view! { <PasswordInput chrome value on_change /> }.into_any(),
        FieldKind::Number { format, .. } => {
            let bounds = field.number_bounds();
            view! { <NumberInput chrome value on_change bounds format /> }.into_any()
        }
        FieldKind::Textarea { rows } => view! { <TextareaInput chrome value on_change rows /> }.into_any(),
        FieldKind::Markdown => view! { <MarkdownInput chrome value on_change /> }.into_any(),
        FieldKind::Wysiwyg => {
            view! { <RichTextInput chrome value on_change variant="wysiwyg" /> }.into_any()
        }
        FieldKind::BlockEditor => {
            view! { <RichTextInput chrome value on_change variant="block-editor" /> }.into_any()
        }
        FieldKind::File { accept, max_size_mb } => match (accept, max_size_mb) {
            (Some(accept), Some(max)) => view! {
                <UploadInput chrome value on_change accept=accept max_size_mb=max />
            }
            .into_any(),
            (Some(accept), None) => view! {
                <UploadInput chrome value on_change accept=accept />
            }
            .into_any(),
            (None, Some(max)) => view! {
                <UploadInput chrome value on_change max_size_mb=max />
            }
            .into_any(),
            (None, None) => view! { <UploadInput chrome value on_change /> }.into_any(),
        },
        FieldKind::Image { max_size_mb } => view! {
            <UploadInput chrome value on_change image_only=true max_size_mb=max_size_mb />
        }
        .into_any(),
        FieldKind::Date => view! { <DateInput chrome value on_change /> }.into_any(),
        FieldKind::Select { options } => view! { <SelectInput chrome value on_change options /> }.into_any(),
        FieldKind::MultiSelect { options } => {
            view! { <MultiSelectInput chrome value on_change options /> }.into_any()
        }
        FieldKind::Toggle => view! { <ToggleInput chrome value on_change /> }.into_any(),
        FieldKind::CheckboxGroup { options } => {
            view! { <CheckboxGroupInput chrome value on_change options /> }.into_any()
        }
        FieldKind::RadioGroup { options } => {
            view! { <RadioGroupInput chrome value on_change options /> }.into_any()
        }
        FieldKind::Color => view! { <ColorInput chrome value on_change /> }.into_any(),
        FieldKind::Slug => view! { <SlugInput chrome value on_change /> }.into_any(),
        FieldKind::Tags => {
            let max_tags = field.max_tags();
            view! { <TagsInput chrome value on_change max_tags /> }.into_any()
        }
        FieldKind::Mask { mask } => view! { <MaskInput chrome value on_change mask /> }.into_any(),
        FieldKind::Otp { length } => view! { <OtpInput chrome value on_change length /> }.into_any(),
        FieldKind::Autocomplete { options } => {
            view! { <AutocompleteInput chrome value on_change options /> }.into_any()
        }
        FieldKind::Unsupported(tag) => {
            view! { <UnsupportedField field_type=tag label=field.label() /> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_joins_messages() {
        let mut errors = HashMap::new();
        errors.insert(
            "title".to_string(),
            vec!["This field is required".to_string(), "Too short".to_string()],
        );
        errors.insert("slug".to_string(), Vec::new());
        assert_eq!(
            field_error(&errors, "title").as_deref(),
            Some("This field is required, Too short")
        );
        assert_eq!(field_error(&errors, "slug"), None);
        assert_eq!(field_error(&errors, "missing"), None);
    }
}
