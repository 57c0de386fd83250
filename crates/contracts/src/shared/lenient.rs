//! Разбор объектов настроек по отдельным ключам.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Разбор JSON-объекта без ошибок.
///
/// Ключ с неподходящим значением (`null`, неверный тип, неизвестный
/// вариант) пропускается и получает значение по умолчанию; остальные
/// ключи объекта сохраняются. Не объект даёт `T::default()`.
pub fn from_object_lossy<T: DeserializeOwned + Default>(value: &Value) -> T {
    let Some(obj) = value.as_object() else {
        return T::default();
    };

    if let Ok(parsed) = serde_json::from_value(value.clone()) {
        return parsed;
    }

    let mut accepted = Map::new();
    for (key, item) in obj {
        accepted.insert(key.clone(), item.clone());
        if serde_json::from_value::<T>(Value::Object(accepted.clone())).is_err() {
            accepted.remove(key);
        }
    }

    serde_json::from_value(Value::Object(accepted)).unwrap_or_default()
}

/// Привести числовой ключ к целому в диапазоне `[min, max]`
pub fn clamp_number(obj: &mut Map<String, Value>, key: &str, min: u64, max: u64) {
    if let Some(n) = obj.get(key).and_then(Value::as_f64) {
        let clamped = if n.is_nan() {
            min
        } else {
            n.round().clamp(min as f64, max as f64) as u64
        };
        obj.insert(key.to_string(), Value::from(clamped));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    struct Sample {
        name: String,
        count: u32,
        enabled: bool,
    }

    #[test]
    fn test_bad_key_keeps_the_rest() {
        let s: Sample = from_object_lossy(&json!({
            "name": null,
            "count": 4,
            "enabled": "yes"
        }));
        assert_eq!(
            s,
            Sample {
                name: String::new(),
                count: 4,
                enabled: false
            }
        );
    }

    #[test]
    fn test_non_object_gives_default() {
        let s: Sample = from_object_lossy(&json!([1, 2]));
        assert_eq!(s, Sample::default());
    }

    #[test]
    fn test_clamp_number() {
        let mut obj = json!({ "w": 300, "h": -4, "d": 40.6, "s": "x" })
            .as_object()
            .cloned()
            .unwrap();
        clamp_number(&mut obj, "w", 10, 90);
        clamp_number(&mut obj, "h", 10, 90);
        clamp_number(&mut obj, "d", 10, 90);
        clamp_number(&mut obj, "s", 10, 90);
        assert_eq!(obj["w"], json!(90));
        assert_eq!(obj["h"], json!(10));
        assert_eq!(obj["d"], json!(41));
        assert_eq!(obj["s"], json!("x"));
    }
}
