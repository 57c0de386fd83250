use crate::shared::advanced::AdvancedSettings;
use crate::shared::appearance::AppearanceSettings;
use crate::shared::validation::ValidationSettings;
use serde_json::{Map, Value};

pub const VALIDATION_KEY: &str = "validation";
pub const APPEARANCE_KEY: &str = "appearance";
pub const ADVANCED_KEY: &str = "advanced";
pub const UI_OPTIONS_KEY: &str = "ui_options";
pub const TYPE_OPTIONS_KEY: &str = "type_options";
const LEGACY_VALIDATION_KEY: &str = "validation_settings";

/// Правила проверки, которые старые записи хранили в корне `settings`
const INLINE_VALIDATION_KEYS: [&str; 16] = [
    "minLength",
    "minLengthEnabled",
    "maxLength",
    "maxLengthEnabled",
    "pattern",
    "patternEnabled",
    "customValidation",
    "customValidationEnabled",
    "customMessage",
    "message",
    "min",
    "max",
    "email",
    "url",
    "unique",
    "maxTags",
];

/// Единственная сохраняемая форма настроек поля:
///
/// ```json
/// { "validation": {...}, "appearance": {...}, "advanced": {...}, ...extras }
/// ```
///
/// Ключи `validation`, `appearance` и `advanced` взаимоисключающие;
/// остальные ключи сохраняются как есть.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldSettings {
    pub validation: ValidationSettings,
    pub appearance: AppearanceSettings,
    pub advanced: AdvancedSettings,
    pub extras: Map<String, Value>,
}

fn object_of(value: Option<&Value>) -> Map<String, Value> {
    value.and_then(Value::as_object).cloned().unwrap_or_default()
}

impl FieldSettings {
    /// Разбор сохранённого блоба с нормализацией устаревших форм.
    ///
    /// `legacy_validation`: содержимое отдельной колонки
    /// `validation_settings`, если она есть у строки.
    pub fn from_json(settings: &Value, legacy_validation: Option<&Value>) -> Self {
        let mut root = object_of(Some(settings));

        // Порядок приоритета: колонка < вложенный ключ < правила в корне < `validation`
        let mut validation = object_of(legacy_validation);
        for (k, v) in object_of(root.remove(LEGACY_VALIDATION_KEY).as_ref()) {
            validation.insert(k, v);
        }
        for key in INLINE_VALIDATION_KEYS {
            if let Some(v) = root.remove(key) {
                validation.insert(key.to_string(), v);
            }
        }
        for (k, v) in object_of(root.remove(VALIDATION_KEY).as_ref()) {
            validation.insert(k, v);
        }

        let appearance = root
            .remove(APPEARANCE_KEY)
            .map(|v| AppearanceSettings::from_json_lossy(&v))
            .unwrap_or_default();
        let advanced = root
            .remove(ADVANCED_KEY)
            .map(|v| AdvancedSettings::from_json_lossy(&v))
            .unwrap_or_default();

        Self {
            validation: ValidationSettings::from_json_lossy(&Value::Object(validation)),
            appearance,
            advanced,
            extras: root,
        }
    }

    pub fn to_json(&self) -> Value {
        let mut root = self.extras.clone();
        root.remove(LEGACY_VALIDATION_KEY);
        for key in INLINE_VALIDATION_KEYS {
            root.remove(key);
        }
        root.insert(
            VALIDATION_KEY.into(),
            serde_json::to_value(&self.validation).unwrap_or_default(),
        );
        root.insert(
            APPEARANCE_KEY.into(),
            serde_json::to_value(&self.appearance).unwrap_or_default(),
        );
        root.insert(
            ADVANCED_KEY.into(),
            serde_json::to_value(&self.advanced).unwrap_or_default(),
        );
        Value::Object(root)
    }

    /// Применить частичное обновление поверх текущих настроек
    pub fn merge(&mut self, patch: &Value) {
        let merged = merge_settings_json(&self.to_json(), patch);
        *self = Self::from_json(&merged, None);
    }

    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extras.get(key)
    }
}

/// Слияние блобов настроек: подобъекты `validation`, `appearance`,
/// `advanced` сливаются по ключам, прочие ключи заменяются целиком.
pub fn merge_settings_json(current: &Value, patch: &Value) -> Value {
    let mut out = object_of(Some(current));
    for (key, value) in object_of(Some(patch)) {
        let nested = matches!(key.as_str(), VALIDATION_KEY | APPEARANCE_KEY | ADVANCED_KEY);
        match (nested, out.get_mut(&key), &value) {
            (true, Some(Value::Object(existing)), Value::Object(incoming)) => {
                for (k, v) in incoming {
                    existing.insert(k.clone(), v.clone());
                }
            }
            _ => {
                out.insert(key, value);
            }
        }
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::appearance::LabelPosition;
    use serde_json::json;

    #[test]
    fn test_legacy_column_is_normalized() {
        let s = FieldSettings::from_json(&json!({}), Some(&json!({"minLength": 2})));
        assert!(s.validation.min_length_enabled);
        assert_eq!(s.validation.min_length, 2);
        let out = s.to_json();
        assert!(out.get(LEGACY_VALIDATION_KEY).is_none());
        assert_eq!(out["validation"]["minLength"], json!(2));
    }

    #[test]
    fn test_inline_rules_are_moved_under_validation() {
        let s = FieldSettings::from_json(
            &json!({"maxLength": 20, "pattern": "^a", "color": "red"}),
            None,
        );
        assert!(s.validation.max_length_enabled);
        assert!(s.validation.pattern_enabled);
        let out = s.to_json();
        assert!(out.get("maxLength").is_none());
        assert!(out.get("pattern").is_none());
        assert_eq!(out["color"], json!("red"));
    }

    #[test]
    fn test_nested_validation_wins() {
        let s = FieldSettings::from_json(
            &json!({"minLength": 1, "validation": {"minLength": 5}}),
            Some(&json!({"minLength": 9})),
        );
        assert_eq!(s.validation.min_length, 5);
    }

    #[test]
    fn test_keys_are_mutually_exclusive() {
        let s = FieldSettings::from_json(
            &json!({
                "validation": {"required": true},
                "appearance": {"labelPosition": "left"},
                "advanced": {"prefix": "$"},
                "validation_settings": {"email": true}
            }),
            None,
        );
        let out = s.to_json();
        let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(out["appearance"]["labelPosition"], json!("left"));
        assert_eq!(out["advanced"]["prefix"], json!("$"));
        assert_eq!(out["validation"]["email"], json!(true));
    }

    #[test]
    fn test_merge_per_sub_object() {
        let current = json!({
            "validation": {"required": true, "minLength": 2},
            "appearance": {"labelPosition": "left"},
            "note": "keep"
        });
        let patch = json!({"validation": {"minLength": 4}, "note": "replaced"});
        let merged = merge_settings_json(&current, &patch);
        assert_eq!(merged["validation"]["required"], json!(true));
        assert_eq!(merged["validation"]["minLength"], json!(4));
        assert_eq!(merged["appearance"]["labelPosition"], json!("left"));
        assert_eq!(merged["note"], json!("replaced"));
    }

    #[test]
    fn test_merge_into_typed_settings() {
        let mut s = FieldSettings::default();
        s.merge(&json!({"appearance": {"labelPosition": "right"}}));
        assert_eq!(s.appearance.label_position, LabelPosition::Right);
        s.merge(&json!({"validation": {"email": true}}));
        assert_eq!(s.appearance.label_position, LabelPosition::Right);
        assert!(s.validation.email);
    }

    #[test]
    fn test_garbage_is_tolerated() {
        let s = FieldSettings::from_json(&json!("not an object"), Some(&json!(42)));
        assert_eq!(s, FieldSettings::default());
    }
}
