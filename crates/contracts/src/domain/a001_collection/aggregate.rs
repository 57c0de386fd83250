use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ICON: &str = "file";
pub const DEFAULT_ICON_COLOR: &str = "gray";

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl CollectionStatus {
    pub fn all() -> [CollectionStatus; 3] {
        [
            CollectionStatus::Draft,
            CollectionStatus::Published,
            CollectionStatus::Archived,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionStatus::Draft => "draft",
            CollectionStatus::Published => "published",
            CollectionStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CollectionStatus::Draft => "Draft",
            CollectionStatus::Published => "Published",
            CollectionStatus::Archived => "Archived",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "published" => CollectionStatus::Published,
            "archived" => CollectionStatus::Archived,
            _ => CollectionStatus::Draft,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Коллекция: именованная группа полей.
///
/// Счётчики полей и записей заполняет слой доступа к данным,
/// в таблице они не хранятся.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub api_id: String,
    pub description: Option<String>,
    pub status: CollectionStatus,
    pub icon: String,
    pub icon_color: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub field_count: u64,
    pub item_count: u64,
}

impl Collection {
    pub fn from_row(row: CollectionRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            api_id: row.api_id,
            description: row.description.filter(|d| !d.is_empty()),
            status: CollectionStatus::from_str_lossy(row.status.as_deref().unwrap_or("")),
            icon: row
                .icon
                .filter(|i| !i.is_empty())
                .unwrap_or_else(|| DEFAULT_ICON.to_string()),
            icon_color: row
                .icon_color
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_ICON_COLOR.to_string()),
            created_at: row.created_at.as_deref().and_then(parse_timestamp),
            updated_at: row.updated_at.as_deref().and_then(parse_timestamp),
            field_count: 0,
            item_count: 0,
        }
    }

    pub fn with_counts(mut self, field_count: u64, item_count: u64) -> Self {
        self.field_count = field_count;
        self.item_count = item_count;
        self
    }

    /// Цвет значка коллекции в CSS
    pub fn icon_css_color(&self) -> &'static str {
        match self.icon_color.as_str() {
            "blue" => "#0067ff",
            "green" => "#22c55e",
            "orange" => "#f97316",
            "purple" => "#8b5cf6",
            "teal" => "#14b8a6",
            "red" => "#ef4444",
            _ => "#64748b",
        }
    }

    /// Строка "N items • M fields" для карточки
    pub fn counts_label(&self) -> String {
        if self.item_count > 0 {
            format!("{} items • {} fields", self.item_count, self.field_count)
        } else {
            format!("{} fields", self.field_count)
        }
    }

    pub fn last_updated_label(&self) -> String {
        self.updated_at
            .or(self.created_at)
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| "never".to_string())
    }
}

pub(crate) fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            // колонка timestamp без зоны
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|n| n.and_utc())
        })
}

/// Строка таблицы `collections`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionRow {
    pub id: String,
    pub title: String,
    pub api_id: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

// ============================================================================
// List view helpers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionSort {
    #[default]
    Latest,
    Oldest,
    Title,
}

impl CollectionSort {
    pub fn all() -> [CollectionSort; 3] {
        [CollectionSort::Latest, CollectionSort::Oldest, CollectionSort::Title]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionSort::Latest => "latest",
            CollectionSort::Oldest => "oldest",
            CollectionSort::Title => "title",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CollectionSort::Latest => "Sort: Latest",
            CollectionSort::Oldest => "Sort: Oldest",
            CollectionSort::Title => "Sort: Title",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "oldest" => CollectionSort::Oldest,
            "title" => CollectionSort::Title,
            _ => CollectionSort::Latest,
        }
    }
}

/// Поиск (по названию, API id и описанию), фильтр по статусу и сортировка
pub fn filter_collections(
    collections: &[Collection],
    search: &str,
    status: Option<CollectionStatus>,
    sort: CollectionSort,
) -> Vec<Collection> {
    let needle = search.trim().to_lowercase();
    let mut out: Vec<Collection> = collections
        .iter()
        .filter(|c| status.map(|s| c.status == s).unwrap_or(true))
        .filter(|c| {
            needle.is_empty()
                || c.title.to_lowercase().contains(&needle)
                || c.api_id.to_lowercase().contains(&needle)
                || c.description
                    .as_deref()
                    .map(|d| d.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .cloned()
        .collect();

    match sort {
        CollectionSort::Latest => out.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        CollectionSort::Oldest => out.sort_by(|a, b| a.updated_at.cmp(&b.updated_at)),
        CollectionSort::Title => out.sort_by_key(|c| c.title.to_lowercase()),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, title: &str, status: &str, updated: &str) -> CollectionRow {
        CollectionRow {
            id: id.into(),
            title: title.into(),
            api_id: title.to_lowercase().replace(' ', "-"),
            status: Some(status.into()),
            updated_at: Some(updated.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_row_defaults() {
        let c = Collection::from_row(CollectionRow {
            id: "1".into(),
            title: "Posts".into(),
            api_id: "posts".into(),
            icon: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(c.icon, "file");
        assert_eq!(c.icon_color, "gray");
        assert_eq!(c.status, CollectionStatus::Draft);
        assert_eq!(c.counts_label(), "0 fields");
        assert_eq!(c.last_updated_label(), "never");
    }

    #[test]
    fn test_timestamps() {
        assert!(parse_timestamp("2024-05-01T10:00:00.123+00:00").is_some());
        assert!(parse_timestamp("2024-05-01T10:00:00.123456").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_counts_label() {
        let c = Collection::from_row(row("1", "Posts", "published", "2024-01-01T00:00:00Z"))
            .with_counts(4, 12);
        assert_eq!(c.counts_label(), "12 items • 4 fields");
        assert_eq!(c.last_updated_label(), "Jan 1, 2024");
    }

    #[test]
    fn test_filter_and_sort() {
        let all: Vec<Collection> = vec![
            row("1", "Blog Posts", "published", "2024-01-01T00:00:00Z"),
            row("2", "Authors", "draft", "2024-03-01T00:00:00Z"),
            row("3", "Products", "published", "2024-02-01T00:00:00Z"),
        ]
        .into_iter()
        .map(Collection::from_row)
        .collect();

        let latest = filter_collections(&all, "", None, CollectionSort::Latest);
        let ids: Vec<&str> = latest.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);

        let published = filter_collections(
            &all,
            "",
            Some(CollectionStatus::Published),
            CollectionSort::Title,
        );
        let ids: Vec<&str> = published.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let found = filter_collections(&all, "PROD", None, CollectionSort::Latest);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Products");
    }
}
