use crate::domain::a002_field::FieldOption;

/// Фильтр вариантов: подстрока в подписи или значении без учёта регистра
pub fn filter_options<'a>(options: &'a [FieldOption], query: &str) -> Vec<&'a FieldOption> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return options.iter().collect();
    }
    options
        .iter()
        .filter(|o| {
            o.label.to_lowercase().contains(&query) || o.value.to_lowercase().contains(&query)
        })
        .collect()
}

/// Переключить принадлежность значения множеству, сохраняя порядок выбора
pub fn toggle_membership(selected: &[String], value: &str) -> Vec<String> {
    if selected.iter().any(|s| s == value) {
        selected.iter().filter(|s| *s != value).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(value.to_string());
        next
    }
}

/// Выбор в автодополнении: повторный выбор текущего значения очищает его
pub fn autocomplete_select(current: &str, picked: &str) -> String {
    if current == picked {
        String::new()
    } else {
        picked.to_string()
    }
}

/// Подпись для значения, либо само значение, если варианта нет
pub fn label_for<'a>(options: &'a [FieldOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.as_str())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Vec<FieldOption> {
        vec![
            FieldOption::new("Red", "red"),
            FieldOption::new("Green", "grn"),
            FieldOption::new("Blue", "blue"),
        ]
    }

    #[test]
    fn test_filter_matches_label_or_value() {
        let options = opts();
        let hits: Vec<_> = filter_options(&options, "GR").iter().map(|o| o.value.clone()).collect();
        assert_eq!(hits, vec!["grn"]);
        let hits: Vec<_> = filter_options(&options, "e").iter().map(|o| o.value.clone()).collect();
        assert_eq!(hits, vec!["red", "grn", "blue"]);
        assert_eq!(filter_options(&options, "").len(), 3);
        assert!(filter_options(&options, "purple").is_empty());
    }

    #[test]
    fn test_toggle_membership() {
        let selected = toggle_membership(&[], "a");
        assert_eq!(selected, vec!["a"]);
        let selected = toggle_membership(&selected, "b");
        assert_eq!(selected, vec!["a", "b"]);
        assert_eq!(toggle_membership(&selected, "a"), vec!["b"]);
    }

    #[test]
    fn test_autocomplete_reselect_clears() {
        assert_eq!(autocomplete_select("", "red"), "red");
        assert_eq!(autocomplete_select("red", "red"), "");
        assert_eq!(autocomplete_select("red", "blue"), "blue");
    }

    #[test]
    fn test_label_for() {
        let options = opts();
        assert_eq!(label_for(&options, "grn"), "Green");
        assert_eq!(label_for(&options, "other"), "other");
    }
}
