use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

/// Нормализация в slug: нижний регистр, серии прочих символов → `-`,
/// крайние дефисы отбрасываются.
pub fn slugify(input: &str) -> String {
    let lower = input.to_lowercase();
    NON_SLUG_RUN
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_slug_shape(s: &str) -> bool {
        let re = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$|^$").unwrap();
        re.is_match(s)
    }

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  --Rust & Leptos!!  "), "rust-leptos");
        assert_eq!(slugify("Crème brûlée"), "cr-me-br-l-e");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_idempotent_and_shaped() {
        for input in [
            "",
            "Hello World",
            "a--b",
            "-x-",
            "ÀÉÎ 123 ___ z",
            "MiXeD_case.Path/Segment",
            "   ",
        ] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "input: {:?}", input);
            assert!(is_slug_shape(&once), "bad shape: {:?}", once);
        }
    }
}
