use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Настройки проверки значения поля (`settings.validation`).
///
/// Флаги `*_enabled` независимы от порогов: выключенное правило
/// сохраняет настроенное значение.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationSettings {
    pub required: bool,

    pub min_length_enabled: bool,
    pub min_length: u32,
    pub max_length_enabled: bool,
    pub max_length: u32,
    pub pattern_enabled: bool,
    pub pattern: String,
    pub custom_validation_enabled: bool,
    /// Выражение на декларативном языке проверок (см. `shared::predicate`)
    pub custom_validation: String,
    #[serde(alias = "message")]
    pub custom_message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub email: bool,
    pub url: bool,
    pub unique: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tags: Option<u32>,

    // Accessibility
    pub aria_required: bool,
    pub aria_described_by: String,
    pub aria_label: String,
    pub aria_labelled_by: String,
    pub aria_invalid: bool,
    pub autocomplete: String,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            required: false,
            min_length_enabled: false,
            min_length: 0,
            max_length_enabled: false,
            max_length: 100,
            pattern_enabled: false,
            pattern: String::new(),
            custom_validation_enabled: false,
            custom_validation: String::new(),
            custom_message: String::new(),
            min: None,
            max: None,
            email: false,
            url: false,
            unique: false,
            max_tags: None,
            aria_required: false,
            aria_described_by: String::new(),
            aria_label: String::new(),
            aria_labelled_by: String::new(),
            aria_invalid: false,
            autocomplete: String::new(),
        }
    }
}

pub const NO_RULES_MESSAGE: &str = "No validation rules configured";
pub const DEFAULT_MAX_TAGS: u32 = 10;

fn has_key(obj: &serde_json::Map<String, Value>, key: &str) -> bool {
    obj.get(key).map(|v| !v.is_null()).unwrap_or(false)
}

fn has_text(obj: &serde_json::Map<String, Value>, key: &str) -> bool {
    obj.get(key)
        .and_then(Value::as_str)
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false)
}

impl ValidationSettings {
    /// Разбор из JSON без ошибок.
    ///
    /// Старые записи хранят пороги без флагов включения
    /// (`{"minLength": 3}`); такие правила считаются включёнными.
    pub fn from_json_lossy(value: &Value) -> Self {
        let mut settings: ValidationSettings = crate::shared::lenient::from_object_lossy(value);

        if let Some(obj) = value.as_object() {
            if !has_key(obj, "minLengthEnabled") && has_key(obj, "minLength") {
                settings.min_length_enabled = true;
            }
            if !has_key(obj, "maxLengthEnabled") && has_key(obj, "maxLength") {
                settings.max_length_enabled = true;
            }
            if !has_key(obj, "patternEnabled") && has_text(obj, "pattern") {
                settings.pattern_enabled = true;
            }
            if !has_key(obj, "customValidationEnabled") && has_text(obj, "customValidation") {
                settings.custom_validation_enabled = true;
            }
        }

        settings
    }

    pub fn effective_max_tags(&self) -> u32 {
        self.max_tags.unwrap_or(DEFAULT_MAX_TAGS).max(1)
    }

    pub fn has_length_rules(&self) -> bool {
        self.min_length_enabled || self.max_length_enabled
    }

    pub fn has_any_rule(&self) -> bool {
        self.required
            || self.min_length_enabled
            || self.max_length_enabled
            || (self.pattern_enabled && !self.pattern.is_empty())
            || (self.custom_validation_enabled && !self.custom_validation.trim().is_empty())
            || self.min.is_some()
            || self.max.is_some()
            || self.email
            || self.url
            || self.max_tags.is_some()
    }

    /// Человекочитаемый список включённых правил
    pub fn rules_summary(&self) -> Vec<String> {
        let mut rules = Vec::new();
        if self.required {
            rules.push("Required".to_string());
        }
        if self.min_length_enabled {
            rules.push(format!("Minimum length: {} characters", self.min_length));
        }
        if self.max_length_enabled {
            rules.push(format!("Maximum length: {} characters", self.max_length));
        }
        if self.pattern_enabled && !self.pattern.is_empty() {
            rules.push(format!("Pattern: {}", self.pattern));
        }
        if self.custom_validation_enabled && !self.custom_validation.trim().is_empty() {
            rules.push(format!("Custom validation: {}", self.custom_validation.trim()));
        }
        if let Some(min) = self.min {
            rules.push(format!("Minimum value: {}", super::format_number(min)));
        }
        if let Some(max) = self.max {
            rules.push(format!("Maximum value: {}", super::format_number(max)));
        }
        if self.email {
            rules.push("Email address".to_string());
        }
        if self.url {
            rules.push("URL".to_string());
        }
        if let Some(max_tags) = self.max_tags {
            rules.push(format!("Maximum tags: {}", max_tags));
        }
        if rules.is_empty() {
            rules.push(NO_RULES_MESSAGE.to_string());
        }
        rules
    }

    /// Атрибуты доступности для элемента ввода (имя, значение)
    pub fn aria_attributes(&self, required: bool, invalid: bool) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        if self.aria_required && (required || self.required) {
            attrs.push(("aria-required", "true".to_string()));
        }
        if !self.aria_described_by.is_empty() {
            attrs.push(("aria-describedby", self.aria_described_by.clone()));
        }
        if !self.aria_label.is_empty() {
            attrs.push(("aria-label", self.aria_label.clone()));
        }
        if !self.aria_labelled_by.is_empty() {
            attrs.push(("aria-labelledby", self.aria_labelled_by.clone()));
        }
        if self.aria_invalid && invalid {
            attrs.push(("aria-invalid", "true".to_string()));
        }
        if !self.autocomplete.is_empty() {
            attrs.push(("autocomplete", self.autocomplete.clone()));
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let v = ValidationSettings::default();
        assert_eq!(v.min_length, 0);
        assert_eq!(v.max_length, 100);
        assert!(!v.has_any_rule());
        assert_eq!(v.rules_summary(), vec![NO_RULES_MESSAGE.to_string()]);
        assert_eq!(v.effective_max_tags(), 10);
    }

    #[test]
    fn test_disabled_rule_keeps_threshold() {
        let v = ValidationSettings::from_json_lossy(&json!({
            "minLengthEnabled": false,
            "minLength": 7
        }));
        assert!(!v.min_length_enabled);
        assert_eq!(v.min_length, 7);
        assert!(!v.has_any_rule());
    }

    #[test]
    fn test_legacy_thresholds_are_enabled() {
        let v = ValidationSettings::from_json_lossy(&json!({
            "minLength": 3,
            "pattern": "^a",
            "message": "Bad value"
        }));
        assert!(v.min_length_enabled);
        assert!(v.pattern_enabled);
        assert!(!v.max_length_enabled);
        assert_eq!(v.custom_message, "Bad value");
    }

    #[test]
    fn test_null_key_keeps_other_rules() {
        let v = ValidationSettings::from_json_lossy(&json!({
            "minLength": 3,
            "required": true,
            "pattern": null,
            "max": "ten"
        }));
        assert!(v.required);
        assert!(v.min_length_enabled);
        assert_eq!(v.min_length, 3);
        assert!(!v.pattern_enabled);
        assert_eq!(v.pattern, "");
        assert_eq!(v.max, None);

        let saved = serde_json::to_value(&v).unwrap();
        assert_eq!(saved["required"], json!(true));
        assert_eq!(saved["minLength"], json!(3));
    }

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let v = ValidationSettings {
            min_length_enabled: true,
            min_length: 2,
            ..Default::default()
        };
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["minLengthEnabled"], json!(true));
        assert_eq!(json["minLength"], json!(2));
        assert!(json.get("min").is_none());
    }

    #[test]
    fn test_rules_summary_lists_enabled_rules() {
        let v = ValidationSettings {
            min_length_enabled: true,
            min_length: 3,
            pattern_enabled: true,
            pattern: "^[a-z]+$".into(),
            ..Default::default()
        };
        assert_eq!(
            v.rules_summary(),
            vec![
                "Minimum length: 3 characters".to_string(),
                "Pattern: ^[a-z]+$".to_string()
            ]
        );
    }

    #[test]
    fn test_aria_attributes() {
        let v = ValidationSettings {
            aria_required: true,
            aria_label: "Title".into(),
            aria_invalid: true,
            ..Default::default()
        };
        let attrs = v.aria_attributes(true, false);
        assert!(attrs.contains(&("aria-required", "true".to_string())));
        assert!(attrs.contains(&("aria-label", "Title".to_string())));
        assert!(!attrs.iter().any(|(k, _)| *k == "aria-invalid"));
        assert!(v
            .aria_attributes(true, true)
            .contains(&("aria-invalid", "true".to_string())));
    }
}
