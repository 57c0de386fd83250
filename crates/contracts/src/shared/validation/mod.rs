pub mod settings;

pub use settings::{ValidationSettings, DEFAULT_MAX_TAGS, NO_RULES_MESSAGE};

use crate::shared::predicate::Predicate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("valid url regex"));

pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Результат проверки значения
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub errors: Vec<String>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Сообщения через запятую, как они выводятся вместо подсказки
    pub fn joined(&self) -> String {
        self.errors.join(", ")
    }
}

pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn message_or(settings: &ValidationSettings, fallback: String) -> String {
    if settings.custom_message.trim().is_empty() {
        fallback
    } else {
        settings.custom_message.clone()
    }
}

/// Проверка строкового значения по включённым правилам.
///
/// Порядок: обязательность, минимальная длина, максимальная длина,
/// шаблон, пользовательское выражение, числовые границы, email, URL.
/// Собираются все нарушения, а не только первое.
pub fn validate_value(settings: &ValidationSettings, value: &str) -> ValidationOutcome {
    let mut errors = Vec::new();
    let length = value.chars().count() as u32;

    if settings.required && value.trim().is_empty() {
        errors.push(REQUIRED_MESSAGE.to_string());
    }

    if settings.min_length_enabled && length < settings.min_length {
        errors.push(format!(
            "Value must be at least {} characters",
            settings.min_length
        ));
    }

    if settings.max_length_enabled && length > settings.max_length {
        errors.push(format!(
            "Value cannot exceed {} characters",
            settings.max_length
        ));
    }

    if settings.pattern_enabled && !settings.pattern.is_empty() {
        match Regex::new(&settings.pattern) {
            Ok(re) if !re.is_match(value) => errors.push(message_or(
                settings,
                format!("Value must match pattern: {}", settings.pattern),
            )),
            Ok(_) => {}
            Err(_) => errors.push(format!("Invalid pattern: {}", settings.pattern)),
        }
    }

    if settings.custom_validation_enabled && !settings.custom_validation.trim().is_empty() {
        match Predicate::parse(&settings.custom_validation) {
            Ok(predicate) if !predicate.eval(value) => {
                errors.push(message_or(settings, "Failed custom validation".to_string()))
            }
            Ok(_) => {}
            Err(e) => errors.push(format!("Invalid custom validation: {}", e)),
        }
    }

    if (settings.min.is_some() || settings.max.is_some()) && !value.trim().is_empty() {
        match value.trim().parse::<f64>() {
            Ok(n) => {
                if let Some(min) = settings.min.filter(|min| n < *min) {
                    errors.push(format!("Value must be at least {}", format_number(min)));
                }
                if let Some(max) = settings.max.filter(|max| n > *max) {
                    errors.push(format!("Value cannot exceed {}", format_number(max)));
                }
            }
            Err(_) => errors.push("Value must be a number".to_string()),
        }
    }

    if settings.email && !value.is_empty() && !EMAIL_RE.is_match(value) {
        errors.push("Please enter a valid email address".to_string());
    }

    if settings.url && !value.is_empty() && !URL_RE.is_match(value) {
        errors.push("Please enter a valid URL".to_string());
    }

    ValidationOutcome { errors }
}

/// Проверка списка значений (теги, множественный выбор)
pub fn validate_list(settings: &ValidationSettings, values: &[String]) -> ValidationOutcome {
    let mut errors = Vec::new();

    if settings.required && values.is_empty() {
        errors.push(REQUIRED_MESSAGE.to_string());
    }

    if let Some(max_tags) = settings.max_tags {
        if values.len() as u32 > max_tags {
            errors.push(format!("No more than {} items allowed", max_tags));
        }
    }

    ValidationOutcome { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn min_length(n: u32) -> ValidationSettings {
        ValidationSettings {
            min_length_enabled: true,
            min_length: n,
            ..Default::default()
        }
    }

    #[test]
    fn test_min_length_three() {
        let rules = min_length(3);
        let outcome = validate_value(&rules, "ab");
        assert!(!outcome.is_valid());
        assert!(outcome.errors[0].contains("3 characters"));
        assert!(validate_value(&rules, "abc").is_valid());
    }

    #[test]
    fn test_rules_are_evaluated_in_order() {
        let rules = ValidationSettings {
            min_length_enabled: true,
            min_length: 5,
            pattern_enabled: true,
            pattern: "^[0-9]+$".into(),
            custom_validation_enabled: true,
            custom_validation: "value starts_with '9'".into(),
            ..Default::default()
        };
        let outcome = validate_value(&rules, "ab");
        assert_eq!(
            outcome.errors,
            vec![
                "Value must be at least 5 characters".to_string(),
                "Value must match pattern: ^[0-9]+$".to_string(),
                "Failed custom validation".to_string(),
            ]
        );
    }

    #[test]
    fn test_custom_message_overrides_pattern_and_predicate() {
        let rules = ValidationSettings {
            pattern_enabled: true,
            pattern: "^x".into(),
            custom_validation_enabled: true,
            custom_validation: "length > 10".into(),
            custom_message: "Nope".into(),
            ..Default::default()
        };
        assert_eq!(validate_value(&rules, "abc").errors, vec!["Nope", "Nope"]);
    }

    #[test]
    fn test_max_length() {
        let rules = ValidationSettings {
            max_length_enabled: true,
            max_length: 2,
            ..Default::default()
        };
        assert_eq!(
            validate_value(&rules, "abc").errors,
            vec!["Value cannot exceed 2 characters".to_string()]
        );
    }

    #[test]
    fn test_disabled_rules_are_ignored() {
        let rules = ValidationSettings {
            min_length: 10,
            pattern: "^z".into(),
            ..Default::default()
        };
        assert!(validate_value(&rules, "a").is_valid());
    }

    #[test]
    fn test_invalid_pattern_and_predicate_are_reported() {
        let rules = ValidationSettings {
            pattern_enabled: true,
            pattern: "(".into(),
            custom_validation_enabled: true,
            custom_validation: "length >".into(),
            ..Default::default()
        };
        let outcome = validate_value(&rules, "a");
        assert_eq!(outcome.errors[0], "Invalid pattern: (");
        assert!(outcome.errors[1].starts_with("Invalid custom validation:"));
    }

    #[test]
    fn test_required_and_numeric_bounds() {
        let rules = ValidationSettings {
            required: true,
            min: Some(0.0),
            max: Some(10.0),
            ..Default::default()
        };
        assert_eq!(validate_value(&rules, "").errors, vec![REQUIRED_MESSAGE]);
        assert_eq!(
            validate_value(&rules, "11").errors,
            vec!["Value cannot exceed 10".to_string()]
        );
        assert_eq!(
            validate_value(&rules, "x").errors,
            vec!["Value must be a number".to_string()]
        );
        assert!(validate_value(&rules, "5").is_valid());
    }

    #[test]
    fn test_email_and_url() {
        let rules = ValidationSettings {
            email: true,
            ..Default::default()
        };
        assert!(validate_value(&rules, "a@b.co").is_valid());
        assert!(!validate_value(&rules, "a@b").is_valid());
        assert!(validate_value(&rules, "").is_valid());

        let rules = ValidationSettings {
            url: true,
            ..Default::default()
        };
        assert!(validate_value(&rules, "https://example.com/x").is_valid());
        assert!(!validate_value(&rules, "example.com").is_valid());
    }

    #[test]
    fn test_list_rules() {
        let rules = ValidationSettings {
            required: true,
            max_tags: Some(2),
            ..Default::default()
        };
        assert_eq!(validate_list(&rules, &[]).errors, vec![REQUIRED_MESSAGE]);
        let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(!validate_list(&rules, &three).is_valid());
    }

    #[test]
    fn test_joined_errors() {
        let outcome = ValidationOutcome {
            errors: vec!["a".into(), "b".into()],
        };
        assert_eq!(outcome.joined(), "a, b");
    }
}
