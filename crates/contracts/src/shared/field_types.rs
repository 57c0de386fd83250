//! Реестр типов полей: тег → подпись, настройки по умолчанию,
//! вид правил проверки и пустое значение.

use crate::domain::a002_field::{FieldDescriptor, FieldKind, FieldOption, FieldValue};
use crate::shared::advanced::AdvancedSettings;
use crate::shared::appearance::AppearanceSettings;

/// Какие правила проверки имеют смысл для типа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// Длина, шаблон, выражение, email/url
    Text,
    /// Числовые границы
    Numeric,
    /// Только обязательность
    Selection,
    /// Обязательность и максимум тегов
    Tags,
    /// Обязательность; размер и тип проверяются при выборе файла
    File,
    None,
}

impl ValidationKind {
    pub fn supports_length(&self) -> bool {
        matches!(self, ValidationKind::Text)
    }

    pub fn supports_numeric_bounds(&self) -> bool {
        matches!(self, ValidationKind::Numeric)
    }

    pub fn supports_text_rules(&self) -> bool {
        matches!(self, ValidationKind::Text | ValidationKind::Numeric)
    }
}

/// Запись реестра
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldTypeSpec {
    pub tag: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub validation_kind: ValidationKind,
    pub supports_char_count: bool,
    /// Кнопки +/- у числового поля по умолчанию
    show_buttons: bool,
}

const fn spec(
    tag: &'static str,
    label: &'static str,
    description: &'static str,
    validation_kind: ValidationKind,
) -> FieldTypeSpec {
    FieldTypeSpec {
        tag,
        label,
        description,
        validation_kind,
        supports_char_count: false,
        show_buttons: false,
    }
}

/// Поддерживаемые типы в порядке палитры
static REGISTRY: [FieldTypeSpec; 21] = [
    FieldTypeSpec {
        supports_char_count: true,
        ..spec("text", "Text", "Single line text field", ValidationKind::Text)
    },
    FieldTypeSpec {
        show_buttons: true,
        ..spec("number", "Number", "Numeric field with validation", ValidationKind::Numeric)
    },
    spec("password", "Password", "Masked text with visibility toggle", ValidationKind::Text),
    FieldTypeSpec {
        supports_char_count: true,
        ..spec("textarea", "Text Area", "Multi-line text field", ValidationKind::Text)
    },
    spec("markdown", "Markdown", "Markdown source editor", ValidationKind::Text),
    spec("wysiwyg", "Rich Text", "WYSIWYG rich text editor", ValidationKind::Text),
    spec("blockeditor", "Block Editor", "Block based content editor", ValidationKind::Text),
    spec("file", "File", "Document upload", ValidationKind::File),
    spec("image", "Image", "Image upload with preview", ValidationKind::File),
    spec("date", "Date", "Date picker field", ValidationKind::Selection),
    spec("select", "Select", "Dropdown selection field", ValidationKind::Selection),
    spec("multiselect", "Multi Select", "Pick several options", ValidationKind::Selection),
    spec("toggle", "Toggle", "True/False toggle field", ValidationKind::Selection),
    spec("checkbox", "Checkbox Group", "Several checkboxes", ValidationKind::Selection),
    spec("radio", "Radio Group", "One option out of several", ValidationKind::Selection),
    spec("color", "Color", "Color picker field", ValidationKind::Text),
    spec("slug", "Slug", "URL friendly identifier", ValidationKind::Text),
    spec("tags", "Tags", "List of free-form tags", ValidationKind::Tags),
    spec("mask", "Input Mask", "Text with a fixed pattern", ValidationKind::Text),
    spec("otp", "OTP", "One-time code cells", ValidationKind::Text),
    spec("autocomplete", "Autocomplete", "Searchable option list", ValidationKind::Selection),
];

impl FieldTypeSpec {
    pub fn is_supported(&self) -> bool {
        REGISTRY.iter().any(|s| s.tag == self.tag)
    }

    pub fn default_kind(&self) -> FieldKind {
        FieldKind::from_tag(self.tag)
    }

    pub fn default_appearance(&self) -> AppearanceSettings {
        AppearanceSettings::default()
    }

    pub fn default_advanced(&self) -> AdvancedSettings {
        AdvancedSettings {
            show_buttons: self.show_buttons,
            ..Default::default()
        }
    }

    pub fn empty_value(&self) -> FieldValue {
        FieldValue::empty_for(&self.default_kind())
    }
}

/// Найти тип; `None` для неизвестного тега
pub fn find(tag: &str) -> Option<&'static FieldTypeSpec> {
    let tag = crate::domain::a002_field::canonical_tag(tag);
    REGISTRY.iter().find(|s| s.tag == tag)
}

/// Запись реестра для тега. Неизвестный тег даёт запись-заглушку
/// с проверкой `ValidationKind::None`.
pub fn lookup(tag: &str) -> FieldTypeSpec {
    find(tag).copied().unwrap_or(FieldTypeSpec {
        tag: "unsupported",
        label: "Unsupported",
        description: "Field type is not supported",
        validation_kind: ValidationKind::None,
        supports_char_count: false,
        show_buttons: false,
    })
}

pub fn all() -> &'static [FieldTypeSpec] {
    &REGISTRY
}

/// Текст заглушки для неподдерживаемого типа
pub fn unsupported_message(tag: &str) -> String {
    format!("Field type '{}' not supported in preview", tag)
}

pub const SAMPLE_MASK: &str = "(###) ###-####";

/// Демонстрационное поле типа для галереи и предпросмотра
pub fn sample_field(tag: &str) -> FieldDescriptor {
    let spec = lookup(tag);
    let mut field = FieldDescriptor::of_type(tag);
    let label = if spec.is_supported() { spec.label } else { tag };
    field.id = Some(format!("sample-{}", field.kind.tag()));
    field.name = Some(format!("Sample {}", label));
    field.help_text = Some(spec.description.to_string());

    if let Some(options) = field.kind.options_mut() {
        *options = (1..=3)
            .map(|i| FieldOption::new(format!("Option {}", i), format!("option{}", i)))
            .collect();
    }
    if let FieldKind::Mask { mask } = &mut field.kind {
        *mask = SAMPLE_MASK.to_string();
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_twenty_one_types() {
        assert_eq!(all().len(), 21);
        for spec in all() {
            assert!(spec.default_kind().is_supported(), "{}", spec.tag);
            assert_eq!(spec.default_kind().tag(), spec.tag);
        }
    }

    #[test]
    fn test_lookup_aliases() {
        assert_eq!(lookup("boolean").tag, "toggle");
        assert_eq!(lookup("media").tag, "file");
        assert_eq!(lookup("rich_text").tag, "wysiwyg");
    }

    #[test]
    fn test_unknown_type() {
        let spec = lookup("holographic");
        assert!(!spec.is_supported());
        assert_eq!(spec.validation_kind, ValidationKind::None);
        assert_eq!(
            unsupported_message("holographic"),
            "Field type 'holographic' not supported in preview"
        );
        let field = sample_field("holographic");
        assert_eq!(field.kind, FieldKind::Unsupported("holographic".into()));
    }

    #[test]
    fn test_defaults() {
        assert!(lookup("number").default_advanced().show_buttons);
        assert!(!lookup("text").default_advanced().show_buttons);
        assert!(lookup("textarea").supports_char_count);
        assert!(!lookup("select").supports_char_count);
    }

    #[test]
    fn test_sample_fields() {
        let select = sample_field("select");
        assert_eq!(select.kind.options().map(|o| o.len()), Some(3));
        assert_eq!(select.label(), "Sample Select");
        let mask = sample_field("mask");
        assert_eq!(mask.kind, FieldKind::Mask { mask: SAMPLE_MASK.into() });
        assert_eq!(sample_field("tags").max_tags(), 10);
    }
}
