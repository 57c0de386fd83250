use super::kind::FieldKind;
use super::settings::{FieldSettings, TYPE_OPTIONS_KEY, UI_OPTIONS_KEY};
use super::value::FieldValue;
use crate::shared::input::NumberBounds;
use crate::shared::validation::{validate_list, validate_value, ValidationOutcome};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const FALLBACK_DOM_ID: &str = "field";
pub const FALLBACK_LABEL: &str = "Field";

/// Отображаемые строки поля (`settings.ui_options`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

impl UiOptions {
    fn is_empty(&self) -> bool {
        self.placeholder.is_none() && self.help_text.is_none()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Описание одного настраиваемого поля коллекции
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldDescriptor {
    pub id: Option<String>,
    pub api_id: Option<String>,
    pub name: Option<String>,
    pub kind: FieldKind,
    pub required: bool,
    pub description: Option<String>,
    pub help_text: Option<String>,
    pub ui_options: UiOptions,
    pub settings: FieldSettings,
    pub sort_order: i32,
    pub collection_id: Option<String>,
}

impl FieldDescriptor {
    /// Новое поле заданного типа с настройками по умолчанию из реестра
    pub fn of_type(tag: &str) -> Self {
        let spec = crate::shared::field_types::lookup(tag);
        let kind = FieldKind::from_tag(tag);
        let mut settings = FieldSettings {
            appearance: spec.default_appearance(),
            advanced: spec.default_advanced(),
            ..Default::default()
        };
        if kind == FieldKind::Tags {
            settings.validation.max_tags = Some(crate::shared::validation::DEFAULT_MAX_TAGS);
        }
        Self {
            kind,
            settings,
            ..Default::default()
        }
    }

    /// Идентификатор для DOM: `id`, затем `api_id`, затем `name`
    pub fn dom_id(&self) -> String {
        present(&self.id)
            .or_else(|| present(&self.api_id))
            .or_else(|| present(&self.name))
            .unwrap_or(FALLBACK_DOM_ID)
            .to_string()
    }

    pub fn label(&self) -> String {
        present(&self.name).unwrap_or(FALLBACK_LABEL).to_string()
    }

    pub fn placeholder(&self) -> String {
        match present(&self.ui_options.placeholder) {
            Some(p) => p.to_string(),
            None => format!("Enter {}...", self.label()),
        }
    }

    /// Подсказка: `help_text` важнее `ui_options.help_text`
    pub fn help(&self) -> Option<String> {
        present(&self.help_text)
            .or_else(|| present(&self.ui_options.help_text))
            .map(str::to_string)
    }

    pub fn is_required(&self) -> bool {
        self.required || self.settings.validation.required
    }

    pub fn empty_value(&self) -> FieldValue {
        FieldValue::empty_for(&self.kind)
    }

    /// Границы числового поля из правил проверки
    pub fn number_bounds(&self) -> NumberBounds {
        let step = match &self.kind {
            FieldKind::Number { step, .. } => *step,
            _ => 1.0,
        };
        NumberBounds::new(self.settings.validation.min, self.settings.validation.max, step)
    }

    pub fn max_tags(&self) -> u32 {
        self.settings.validation.effective_max_tags()
    }

    /// Блоб `settings` для сохранения: опции типа и отображения
    /// записываются рядом с тремя основными подобъектами
    pub fn settings_json(&self) -> Value {
        let mut settings = self.settings.clone();
        let type_options = self.kind.type_options();
        if type_options.is_empty() {
            settings.extras.remove(TYPE_OPTIONS_KEY);
        } else {
            settings
                .extras
                .insert(TYPE_OPTIONS_KEY.into(), Value::Object(type_options));
        }
        if self.ui_options.is_empty() {
            settings.extras.remove(UI_OPTIONS_KEY);
        } else {
            settings.extras.insert(
                UI_OPTIONS_KEY.into(),
                serde_json::to_value(&self.ui_options).unwrap_or_default(),
            );
        }
        settings.to_json()
    }

    /// Разобрать тип и строки отображения из блоба настроек.
    /// Служебные ключи убираются из `extras`.
    pub fn apply_settings_json(&mut self, tag: &str, settings: &Value, legacy: Option<&Value>) {
        let mut parsed = FieldSettings::from_json(settings, legacy);

        let mut type_options: Map<String, Value> = parsed
            .extras
            .remove(TYPE_OPTIONS_KEY)
            .and_then(|v| v.as_object().cloned())
            .unwrap_or_default();
        // Варианты старых записей лежат в корне блоба
        if !type_options.contains_key("options") {
            if let Some(options) = parsed.extras.remove("options") {
                type_options.insert("options".into(), options);
            }
        }

        self.ui_options = parsed
            .extras
            .remove(UI_OPTIONS_KEY)
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();
        self.kind = FieldKind::from_parts(tag, &type_options);
        self.settings = parsed;
    }
}

/// Проверить значение поля по его правилам
pub fn validate_field(field: &FieldDescriptor, value: &FieldValue) -> ValidationOutcome {
    let mut rules = field.settings.validation.clone();
    rules.required = field.is_required();

    match value {
        FieldValue::List(items) => {
            if field.kind == FieldKind::Tags {
                rules.max_tags = Some(field.max_tags());
            }
            validate_list(&rules, items)
        }
        FieldValue::Bool(checked) => {
            if rules.required && !checked {
                validate_value(&rules, "")
            } else {
                ValidationOutcome::default()
            }
        }
        other => {
            if !field.kind.is_numeric() {
                rules.min = None;
                rules.max = None;
            }
            validate_value(&rules, &other.as_text())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_field::FieldOption;
    use crate::shared::validation::REQUIRED_MESSAGE;
    use serde_json::json;

    #[test]
    fn test_dom_id_precedence() {
        let mut f = FieldDescriptor::default();
        assert_eq!(f.dom_id(), "field");
        f.name = Some("Title".into());
        assert_eq!(f.dom_id(), "Title");
        f.api_id = Some("title".into());
        assert_eq!(f.dom_id(), "title");
        f.id = Some("".into());
        assert_eq!(f.dom_id(), "title");
        f.id = Some("f-1".into());
        assert_eq!(f.dom_id(), "f-1");
    }

    #[test]
    fn test_label_placeholder_help() {
        let mut f = FieldDescriptor::default();
        assert_eq!(f.label(), "Field");
        assert_eq!(f.placeholder(), "Enter Field...");
        f.name = Some("Email".into());
        assert_eq!(f.placeholder(), "Enter Email...");
        f.ui_options.placeholder = Some("you@example.com".into());
        assert_eq!(f.placeholder(), "you@example.com");

        assert_eq!(f.help(), None);
        f.ui_options.help_text = Some("from ui".into());
        assert_eq!(f.help().as_deref(), Some("from ui"));
        f.help_text = Some("direct".into());
        assert_eq!(f.help().as_deref(), Some("direct"));
    }

    #[test]
    fn test_text_field_min_length_two() {
        let mut field = FieldDescriptor::of_type("text");
        field.name = Some("Title".into());
        field.settings.validation.min_length_enabled = true;
        field.settings.validation.min_length = 2;

        let outcome = validate_field(&field, &FieldValue::Text("a".into()));
        assert_eq!(outcome.errors, vec!["Value must be at least 2 characters"]);
        assert!(validate_field(&field, &FieldValue::Text("ab".into())).is_valid());
    }

    #[test]
    fn test_required_flags() {
        let mut field = FieldDescriptor::of_type("toggle");
        field.required = true;
        assert_eq!(
            validate_field(&field, &FieldValue::Bool(false)).errors,
            vec![REQUIRED_MESSAGE]
        );
        assert!(validate_field(&field, &FieldValue::Bool(true)).is_valid());
    }

    #[test]
    fn test_tags_cap_defaults_to_ten() {
        let field = FieldDescriptor::of_type("tags");
        assert_eq!(field.max_tags(), 10);
        let eleven: Vec<String> = (0..11).map(|i| i.to_string()).collect();
        assert!(!validate_field(&field, &FieldValue::List(eleven)).is_valid());
    }

    #[test]
    fn test_numeric_bounds_only_for_numbers() {
        let mut text = FieldDescriptor::of_type("text");
        text.settings.validation.max = Some(1.0);
        assert!(validate_field(&text, &FieldValue::Text("abc".into())).is_valid());

        let mut number = FieldDescriptor::of_type("number");
        number.settings.validation.max = Some(10.0);
        assert!(!validate_field(&number, &FieldValue::Number(11.0)).is_valid());
        assert_eq!(number.number_bounds().max, Some(10.0));
    }

    #[test]
    fn test_settings_json_roundtrip() {
        let mut field = FieldDescriptor::of_type("select");
        if let Some(options) = field.kind.options_mut() {
            options.push(FieldOption::new("Yes", "y"));
        }
        field.ui_options.placeholder = Some("Pick".into());
        field.settings.validation.required = true;

        let json = field.settings_json();
        assert_eq!(json["type_options"]["options"][0]["value"], json!("y"));
        assert_eq!(json["ui_options"]["placeholder"], json!("Pick"));

        let mut restored = FieldDescriptor::default();
        restored.apply_settings_json("select", &json, None);
        assert_eq!(restored.kind, field.kind);
        assert_eq!(restored.ui_options, field.ui_options);
        assert_eq!(restored.settings, field.settings);
    }

    #[test]
    fn test_legacy_root_options() {
        let mut field = FieldDescriptor::default();
        field.apply_settings_json("radio", &json!({"options": ["a", "b"]}), None);
        assert_eq!(field.kind.options().map(|o| o.len()), Some(2));
        assert!(field.settings.extras.get("options").is_none());
    }
}
