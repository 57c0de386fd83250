use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

// ============================================================================
// Options
// ============================================================================

/// Вариант выбора для select / multiselect / radio / checkbox / autocomplete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Разбор одного варианта: объект `{label, value}` или просто строка
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::new(s.clone(), s.clone())),
            Value::Object(obj) => {
                let value = obj.get("value").and_then(json_to_text)?;
                let label = obj
                    .get("label")
                    .and_then(json_to_text)
                    .unwrap_or_else(|| value.clone());
                Some(Self { label, value })
            }
            _ => None,
        }
    }
}

fn json_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn options_from(extras: &Map<String, Value>) -> Vec<FieldOption> {
    extras
        .get("options")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(FieldOption::from_json).collect())
        .unwrap_or_default()
}

// ============================================================================
// Number format
// ============================================================================

/// Формат отображения числа вне фокуса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum NumberFormat {
    Plain {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        locale: Option<String>,
    },
    Currency {
        currency: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        locale: Option<String>,
    },
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::Plain { locale: None }
    }
}

impl NumberFormat {
    fn from_extras(extras: &Map<String, Value>) -> Self {
        let locale = extras
            .get("locale")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let currency = extras
            .get("currency")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty());
        let style = extras.get("format").and_then(Value::as_str).unwrap_or("");

        match currency {
            Some(currency) if style != "plain" => NumberFormat::Currency {
                currency: currency.to_uppercase(),
                locale,
            },
            _ => NumberFormat::Plain { locale },
        }
    }
}

// ============================================================================
// Field kind
// ============================================================================

pub const DEFAULT_TEXTAREA_ROWS: u32 = 4;
pub const MARKDOWN_ROWS: u32 = 6;
pub const DEFAULT_OTP_LENGTH: usize = 6;
pub const DEFAULT_IMAGE_MAX_SIZE_MB: f64 = 5.0;

/// Тип поля с опциями, специфичными для типа.
///
/// Набор тегов открыт: неизвестный тег сохраняется в `Unsupported`
/// и отображается заглушкой, а не ошибкой.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Number { step: f64, format: NumberFormat },
    Password,
    Textarea { rows: u32 },
    Markdown,
    Wysiwyg,
    BlockEditor,
    File { accept: Option<String>, max_size_mb: Option<f64> },
    Image { max_size_mb: f64 },
    Date,
    Select { options: Vec<FieldOption> },
    MultiSelect { options: Vec<FieldOption> },
    Toggle,
    CheckboxGroup { options: Vec<FieldOption> },
    RadioGroup { options: Vec<FieldOption> },
    Color,
    Slug,
    Tags,
    Mask { mask: String },
    Otp { length: usize },
    Autocomplete { options: Vec<FieldOption> },
    Unsupported(String),
}

/// Каноническое имя типа с учётом устаревших синонимов
pub fn canonical_tag(tag: &str) -> String {
    let tag = tag.trim().to_lowercase();
    match tag.as_str() {
        "boolean" => "toggle".to_string(),
        "media" => "file".to_string(),
        "rich_text" | "richtext" => "wysiwyg".to_string(),
        _ => tag,
    }
}

impl FieldKind {
    /// Тип с опциями по умолчанию
    pub fn from_tag(tag: &str) -> Self {
        Self::from_parts(tag, &Map::new())
    }

    /// Собрать тип из тега и сохранённых опций (`settings.type_options`).
    /// Отсутствующие или некорректные опции заменяются значениями по умолчанию.
    pub fn from_parts(tag: &str, extras: &Map<String, Value>) -> Self {
        let f64_of = |key: &str| extras.get(key).and_then(Value::as_f64);
        let u64_of = |key: &str| extras.get(key).and_then(Value::as_u64);
        let str_of = |key: &str| {
            extras
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        };

        match canonical_tag(tag).as_str() {
            "text" => FieldKind::Text,
            "number" => FieldKind::Number {
                step: f64_of("step")
                    .filter(|s| s.is_finite() && *s > 0.0)
                    .unwrap_or(1.0),
                format: NumberFormat::from_extras(extras),
            },
            "password" => FieldKind::Password,
            "textarea" => FieldKind::Textarea {
                rows: u64_of("rows")
                    .filter(|r| *r > 0)
                    .map(|r| r as u32)
                    .unwrap_or(DEFAULT_TEXTAREA_ROWS),
            },
            "markdown" => FieldKind::Markdown,
            "wysiwyg" => FieldKind::Wysiwyg,
            "blockeditor" => FieldKind::BlockEditor,
            "file" => FieldKind::File {
                accept: str_of("accept"),
                max_size_mb: f64_of("maxSize").filter(|m| *m > 0.0),
            },
            "image" => FieldKind::Image {
                max_size_mb: f64_of("maxSize")
                    .filter(|m| *m > 0.0)
                    .unwrap_or(DEFAULT_IMAGE_MAX_SIZE_MB),
            },
            "date" => FieldKind::Date,
            "select" => FieldKind::Select {
                options: options_from(extras),
            },
            "multiselect" => FieldKind::MultiSelect {
                options: options_from(extras),
            },
            "toggle" => FieldKind::Toggle,
            "checkbox" => FieldKind::CheckboxGroup {
                options: options_from(extras),
            },
            "radio" => FieldKind::RadioGroup {
                options: options_from(extras),
            },
            "color" => FieldKind::Color,
            "slug" => FieldKind::Slug,
            "tags" => FieldKind::Tags,
            "mask" => FieldKind::Mask {
                mask: str_of("mask").unwrap_or_default(),
            },
            "otp" => FieldKind::Otp {
                length: u64_of("length")
                    .filter(|l| (1..=12).contains(l))
                    .map(|l| l as usize)
                    .unwrap_or(DEFAULT_OTP_LENGTH),
            },
            "autocomplete" => FieldKind::Autocomplete {
                options: options_from(extras),
            },
            other => FieldKind::Unsupported(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number { .. } => "number",
            FieldKind::Password => "password",
            FieldKind::Textarea { .. } => "textarea",
            FieldKind::Markdown => "markdown",
            FieldKind::Wysiwyg => "wysiwyg",
            FieldKind::BlockEditor => "blockeditor",
            FieldKind::File { .. } => "file",
            FieldKind::Image { .. } => "image",
            FieldKind::Date => "date",
            FieldKind::Select { .. } => "select",
            FieldKind::MultiSelect { .. } => "multiselect",
            FieldKind::Toggle => "toggle",
            FieldKind::CheckboxGroup { .. } => "checkbox",
            FieldKind::RadioGroup { .. } => "radio",
            FieldKind::Color => "color",
            FieldKind::Slug => "slug",
            FieldKind::Tags => "tags",
            FieldKind::Mask { .. } => "mask",
            FieldKind::Otp { .. } => "otp",
            FieldKind::Autocomplete { .. } => "autocomplete",
            FieldKind::Unsupported(tag) => tag,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, FieldKind::Unsupported(_))
    }

    pub fn options(&self) -> Option<&[FieldOption]> {
        match self {
            FieldKind::Select { options }
            | FieldKind::MultiSelect { options }
            | FieldKind::CheckboxGroup { options }
            | FieldKind::RadioGroup { options }
            | FieldKind::Autocomplete { options } => Some(options),
            _ => None,
        }
    }

    pub fn options_mut(&mut self) -> Option<&mut Vec<FieldOption>> {
        match self {
            FieldKind::Select { options }
            | FieldKind::MultiSelect { options }
            | FieldKind::CheckboxGroup { options }
            | FieldKind::RadioGroup { options }
            | FieldKind::Autocomplete { options } => Some(options),
            _ => None,
        }
    }

    /// Опции типа для сохранения в `settings.type_options`
    pub fn type_options(&self) -> Map<String, Value> {
        let mut out = Map::new();
        match self {
            FieldKind::Number { step, format } => {
                out.insert("step".into(), json!(step));
                match format {
                    NumberFormat::Plain { locale } => {
                        out.insert("format".into(), json!("plain"));
                        if let Some(locale) = locale {
                            out.insert("locale".into(), json!(locale));
                        }
                    }
                    NumberFormat::Currency { currency, locale } => {
                        out.insert("format".into(), json!("currency"));
                        out.insert("currency".into(), json!(currency));
                        if let Some(locale) = locale {
                            out.insert("locale".into(), json!(locale));
                        }
                    }
                }
            }
            FieldKind::Textarea { rows } => {
                out.insert("rows".into(), json!(rows));
            }
            FieldKind::File {
                accept,
                max_size_mb,
            } => {
                if let Some(accept) = accept {
                    out.insert("accept".into(), json!(accept));
                }
                if let Some(max) = max_size_mb {
                    out.insert("maxSize".into(), json!(max));
                }
            }
            FieldKind::Image { max_size_mb } => {
                out.insert("maxSize".into(), json!(max_size_mb));
            }
            FieldKind::Mask { mask } => {
                out.insert("mask".into(), json!(mask));
            }
            FieldKind::Otp { length } => {
                out.insert("length".into(), json!(length));
            }
            _ => {}
        }
        if let Some(options) = self.options() {
            out.insert("options".into(), json!(options));
        }
        out
    }

    /// Проверяется ли значение как число (границы `min`/`max`)
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Number { .. })
    }

    /// Значение: список строк
    pub fn is_multi_valued(&self) -> bool {
        matches!(
            self,
            FieldKind::MultiSelect { .. } | FieldKind::CheckboxGroup { .. } | FieldKind::Tags
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(FieldKind::from_tag("boolean"), FieldKind::Toggle);
        assert_eq!(FieldKind::from_tag("rich_text"), FieldKind::Wysiwyg);
        assert_eq!(FieldKind::from_tag("RichText"), FieldKind::Wysiwyg);
        assert!(matches!(FieldKind::from_tag("media"), FieldKind::File { .. }));
    }

    #[test]
    fn test_unknown_tag_is_kept() {
        let kind = FieldKind::from_tag("holographic");
        assert_eq!(kind, FieldKind::Unsupported("holographic".into()));
        assert_eq!(kind.tag(), "holographic");
        assert!(!kind.is_supported());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(FieldKind::from_tag("textarea"), FieldKind::Textarea { rows: 4 });
        assert_eq!(FieldKind::from_tag("otp"), FieldKind::Otp { length: 6 });
        assert_eq!(
            FieldKind::from_tag("image"),
            FieldKind::Image { max_size_mb: 5.0 }
        );
        assert_eq!(
            FieldKind::from_tag("number"),
            FieldKind::Number {
                step: 1.0,
                format: NumberFormat::default()
            }
        );
    }

    #[test]
    fn test_options_are_parsed_leniently() {
        let extras = json!({
            "options": [
                {"label": "One", "value": "1"},
                "two",
                {"value": 3},
                {"label": "no value"},
                42
            ]
        });
        let kind = FieldKind::from_parts("select", extras.as_object().unwrap());
        let options = kind.options().unwrap();
        assert_eq!(
            options,
            &[
                FieldOption::new("One", "1"),
                FieldOption::new("two", "two"),
                FieldOption::new("3", "3"),
            ]
        );
    }

    #[test]
    fn test_type_options_roundtrip() {
        let kind = FieldKind::Number {
            step: 0.5,
            format: NumberFormat::Currency {
                currency: "EUR".into(),
                locale: Some("de-DE".into()),
            },
        };
        let extras = kind.type_options();
        assert_eq!(FieldKind::from_parts("number", &extras), kind);

        let kind = FieldKind::RadioGroup {
            options: vec![FieldOption::new("A", "a")],
        };
        assert_eq!(FieldKind::from_parts("radio", &kind.type_options()), kind);
    }

    #[test]
    fn test_invalid_extras_fall_back() {
        let extras = json!({"step": -2, "rows": 0, "length": 40});
        let extras = extras.as_object().unwrap();
        assert!(matches!(
            FieldKind::from_parts("number", extras),
            FieldKind::Number { step, .. } if step == 1.0
        ));
        assert_eq!(FieldKind::from_parts("textarea", extras), FieldKind::Textarea { rows: 4 });
        assert_eq!(FieldKind::from_parts("otp", extras), FieldKind::Otp { length: 6 });
    }
}
