/// Список тегов с ограничением по количеству
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagList {
    tags: Vec<String>,
    max: u32,
}

impl TagList {
    pub fn new(tags: Vec<String>, max: u32) -> Self {
        let mut list = Self {
            tags: Vec::new(),
            max: max.max(1),
        };
        for tag in tags {
            list.add(&tag);
        }
        list
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tags.len() as u32 >= self.max
    }

    /// Добавить тег. Пустые, повторные и сверх лимита игнорируются.
    pub fn add(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.is_full() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Удалить тег; отсутствующий тег ничего не меняет
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Backspace в пустом поле ввода удаляет последний тег
    pub fn backspace(&mut self, pending_input: &str) -> bool {
        if pending_input.is_empty() {
            self.tags.pop().is_some()
        } else {
            false
        }
    }

    pub fn placeholder<'a>(&self, placeholder: &'a str) -> std::borrow::Cow<'a, str> {
        if self.is_full() {
            format!("Maximum {} tags", self.max).into()
        } else {
            placeholder.into()
        }
    }
}

/// Клавиши, по которым текущий ввод превращается в тег
pub fn is_commit_key(key: &str) -> bool {
    key == "Enter" || key == ","
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_dedupes() {
        let mut tags = TagList::new(vec![], 10);
        assert!(tags.add("  rust "));
        assert!(!tags.add("rust"));
        assert!(!tags.add("   "));
        assert_eq!(tags.tags(), ["rust".to_string()]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut tags = TagList::new(vec!["a".into(), "b".into()], 10);
        let before = tags.clone();
        assert!(!tags.remove("zzz"));
        assert_eq!(tags, before);
        assert!(tags.remove("a"));
        assert_eq!(tags.tags(), ["b".to_string()]);
    }

    #[test]
    fn test_cap_and_placeholder() {
        let mut tags = TagList::new(vec!["a".into()], 2);
        assert_eq!(tags.placeholder("Add tags..."), "Add tags...");
        assert!(tags.add("b"));
        assert!(!tags.add("c"));
        assert!(tags.is_full());
        assert_eq!(tags.placeholder("Add tags..."), "Maximum 2 tags");
    }

    #[test]
    fn test_initial_values_are_normalized() {
        let tags = TagList::new(vec!["x".into(), "x".into(), " y ".into(), "z".into()], 2);
        assert_eq!(tags.tags(), ["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_backspace_only_on_empty_input() {
        let mut tags = TagList::new(vec!["a".into(), "b".into()], 10);
        assert!(!tags.backspace("typing"));
        assert!(tags.backspace(""));
        assert_eq!(tags.tags(), ["a".to_string()]);
        tags.backspace("");
        assert!(!tags.backspace(""));
    }

    #[test]
    fn test_commit_keys() {
        assert!(is_commit_key("Enter"));
        assert!(is_commit_key(","));
        assert!(!is_commit_key("Tab"));
    }
}
