use crate::shared::advanced::KeyFilter;
use once_cell::sync::Lazy;
use regex::Regex;

static NOT_LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").expect("valid letters filter"));
static NOT_NUMBERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("valid numbers filter"));
static NOT_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("valid alphanumeric filter"));

/// Удалить символы, не разрешённые фильтром. Применяется на каждое нажатие.
pub fn apply_key_filter(filter: KeyFilter, input: &str) -> String {
    let re = match filter {
        KeyFilter::None => return input.to_string(),
        KeyFilter::Letters => &NOT_LETTERS,
        KeyFilter::Numbers => &NOT_NUMBERS,
        KeyFilter::Alphanumeric => &NOT_ALPHANUMERIC,
    };
    re.replace_all(input, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        assert_eq!(apply_key_filter(KeyFilter::Letters, "John Doe 3rd!"), "John Doe rd");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(apply_key_filter(KeyFilter::Numbers, "+1 (555) 12-3"), "1555123");
    }

    #[test]
    fn test_alphanumeric() {
        assert_eq!(apply_key_filter(KeyFilter::Alphanumeric, "ab_c 1-2"), "abc 12");
    }

    #[test]
    fn test_none_passes_everything() {
        assert_eq!(apply_key_filter(KeyFilter::None, "a_b!"), "a_b!");
    }

    #[test]
    fn test_filter_is_idempotent() {
        for filter in KeyFilter::all() {
            let once = apply_key_filter(filter, "Ünï 42 ok?");
            assert_eq!(apply_key_filter(filter, &once), once);
        }
    }
}
