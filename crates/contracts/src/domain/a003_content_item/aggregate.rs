use crate::domain::a001_collection::aggregate::parse_timestamp;
use crate::domain::a002_field::{FieldDescriptor, FieldValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Published => "published",
            ContentStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "Draft",
            ContentStatus::Published => "Published",
            ContentStatus::Archived => "Archived",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "published" => ContentStatus::Published,
            "archived" => ContentStatus::Archived,
            _ => ContentStatus::Draft,
        }
    }
}

/// Запись коллекции: произвольные данные по `api_id` полей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub collection_id: String,
    pub data: Map<String, Value>,
    pub status: ContentStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContentItem {
    pub fn from_row(row: ContentItemRow) -> Self {
        Self {
            id: row.id,
            collection_id: row.collection_id,
            data: row.data.as_object().cloned().unwrap_or_default(),
            status: ContentStatus::from_str_lossy(row.status.as_deref().unwrap_or("")),
            created_at: row.created_at.as_deref().and_then(parse_timestamp),
            updated_at: row.updated_at.as_deref().and_then(parse_timestamp),
        }
    }

    /// Заголовок записи: `data.title`, затем `data.name`, затем id
    pub fn title(&self) -> String {
        ["title", "name"]
            .iter()
            .filter_map(|k| self.data.get(*k).and_then(Value::as_str))
            .find(|s| !s.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.id.clone())
    }

    /// Значение поля записи в форме, которую ожидает рендерер
    pub fn value_for(&self, field: &FieldDescriptor) -> FieldValue {
        let key = field.api_id.clone().unwrap_or_else(|| field.dom_id());
        match self.data.get(&key) {
            Some(v) => FieldValue::from_json(&field.kind, v),
            None => field.empty_value(),
        }
    }

    pub fn updated_label(&self) -> String {
        self.updated_at
            .or(self.created_at)
            .map(|d| d.format("%b %-d, %Y %H:%M").to_string())
            .unwrap_or_default()
    }
}

/// Строка таблицы `content_items`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItemRow {
    pub id: String,
    pub collection_id: String,
    pub data: Value,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(data: Value) -> ContentItem {
        ContentItem::from_row(ContentItemRow {
            id: "item-1".into(),
            collection_id: "c1".into(),
            data,
            status: Some("published".into()),
            ..Default::default()
        })
    }

    #[test]
    fn test_title_fallbacks() {
        assert_eq!(item(json!({"title": "Hello", "name": "n"})).title(), "Hello");
        assert_eq!(item(json!({"title": " ", "name": "Named"})).title(), "Named");
        assert_eq!(item(json!({"title": 5})).title(), "item-1");
        assert_eq!(item(json!(null)).title(), "item-1");
    }

    #[test]
    fn test_value_for_field() {
        let it = item(json!({"tags": ["a", "b"], "price": "9.5"}));

        let mut tags = FieldDescriptor::of_type("tags");
        tags.api_id = Some("tags".into());
        assert_eq!(
            it.value_for(&tags),
            FieldValue::List(vec!["a".into(), "b".into()])
        );

        let mut price = FieldDescriptor::of_type("number");
        price.api_id = Some("price".into());
        assert_eq!(it.value_for(&price), FieldValue::Number(9.5));

        let mut missing = FieldDescriptor::of_type("toggle");
        missing.api_id = Some("featured".into());
        assert_eq!(it.value_for(&missing), FieldValue::Bool(false));
    }

    #[test]
    fn test_status() {
        assert_eq!(item(json!({})).status, ContentStatus::Published);
    }
}
