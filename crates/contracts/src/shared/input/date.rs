use chrono::NaiveDate;

/// Привести значение поля даты к ISO `YYYY-MM-DD` или пустой строке.
///
/// Принимает также полную метку времени RFC 3339, от которой берётся дата.
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    String::new()
}

/// Дата для отображения вне поля ввода: `October 18, 2026`
pub fn display_date(iso: &str) -> Option<String> {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%B %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_date("2024-02-29"), "2024-02-29");
        assert_eq!(normalize_date(" 2024-03-01T10:00:00Z "), "2024-03-01");
        assert_eq!(normalize_date("2023-02-29"), "");
        assert_eq!(normalize_date("tomorrow"), "");
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(display_date("2026-10-08").as_deref(), Some("October 8, 2026"));
        assert_eq!(display_date("bad"), None);
    }
}
