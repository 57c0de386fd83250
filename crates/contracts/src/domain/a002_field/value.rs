use super::kind::FieldKind;
use crate::shared::validation::format_number;
use serde_json::{json, Value};

/// Значение поля. Форма определяется типом поля.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Bool(bool),
    Number(f64),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Пустое значение для типа: `""`, `[]`, `false` или `0`
    pub fn empty_for(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Toggle => FieldValue::Bool(false),
            FieldKind::Number { .. } => FieldValue::Number(0.0),
            k if k.is_multi_valued() => FieldValue::List(Vec::new()),
            _ => FieldValue::Text(String::new()),
        }
    }

    /// Значение из данных записи; несовместимый JSON даёт пустое значение
    pub fn from_json(kind: &FieldKind, value: &Value) -> Self {
        match Self::empty_for(kind) {
            FieldValue::Bool(_) => match value {
                Value::Bool(b) => FieldValue::Bool(*b),
                Value::String(s) => FieldValue::Bool(s == "true"),
                Value::Number(n) => FieldValue::Bool(n.as_f64().unwrap_or(0.0) != 0.0),
                _ => FieldValue::Bool(false),
            },
            FieldValue::Number(_) => FieldValue::Number(match value {
                Value::Number(n) => n.as_f64().unwrap_or(0.0),
                Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
                _ => 0.0,
            }),
            FieldValue::List(_) => FieldValue::List(match value {
                Value::Array(items) => items
                    .iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
                Value::String(s) if !s.is_empty() => vec![s.clone()],
                _ => Vec::new(),
            }),
            FieldValue::Text(_) => FieldValue::Text(match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => String::new(),
            }),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) => json!(s),
            FieldValue::List(items) => json!(items),
            FieldValue::Bool(b) => json!(b),
            FieldValue::Number(n) => json!(n),
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join(", "),
            FieldValue::Bool(true) => "true".to_string(),
            FieldValue::Bool(false) => String::new(),
            FieldValue::Number(n) => format_number(*n),
        }
    }

    pub fn as_list(&self) -> Vec<String> {
        match self {
            FieldValue::List(items) => items.clone(),
            FieldValue::Text(s) if !s.is_empty() => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Text(s) => s == "true",
            FieldValue::List(items) => !items.is_empty(),
            FieldValue::Number(n) => *n != 0.0,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Bool(b) => !b,
            FieldValue::Number(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::field_types;

    #[test]
    fn test_every_supported_type_has_empty_value() {
        for spec in field_types::all() {
            let kind = FieldKind::from_tag(spec.tag);
            let empty = FieldValue::empty_for(&kind);
            assert_eq!(empty, spec.empty_value(), "type {}", spec.tag);
            assert_eq!(FieldValue::from_json(&kind, &Value::Null), empty);
        }
    }

    #[test]
    fn test_empty_values_per_shape() {
        assert_eq!(FieldValue::empty_for(&FieldKind::Text), FieldValue::Text(String::new()));
        assert_eq!(FieldValue::empty_for(&FieldKind::Tags), FieldValue::List(vec![]));
        assert_eq!(FieldValue::empty_for(&FieldKind::Toggle), FieldValue::Bool(false));
        assert_eq!(
            FieldValue::empty_for(&FieldKind::from_tag("number")),
            FieldValue::Number(0.0)
        );
    }

    #[test]
    fn test_mismatched_json_is_coerced() {
        let number = FieldKind::from_tag("number");
        assert_eq!(FieldValue::from_json(&number, &json!("12.5")), FieldValue::Number(12.5));
        assert_eq!(FieldValue::from_json(&number, &json!({"x": 1})), FieldValue::Number(0.0));
        assert_eq!(
            FieldValue::from_json(&FieldKind::Tags, &json!(["a", 1, null])),
            FieldValue::List(vec!["a".into(), "1".into()])
        );
        assert_eq!(
            FieldValue::from_json(&FieldKind::Text, &json!([1, 2])),
            FieldValue::Text(String::new())
        );
    }

    #[test]
    fn test_text_projection() {
        assert_eq!(FieldValue::Number(3.0).as_text(), "3");
        assert_eq!(FieldValue::List(vec!["a".into(), "b".into()]).as_text(), "a, b");
        assert_eq!(FieldValue::Bool(false).as_text(), "");
    }
}
