use super::aggregate::{Collection, CollectionStatus, DEFAULT_ICON, DEFAULT_ICON_COLOR};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static API_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid api id regex"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static NOT_API_ID_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9-]").expect("valid api id char regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionFormError {
    #[error("Name is required")]
    NameRequired,
    #[error("API ID is required")]
    ApiIdRequired,
    #[error("API ID must contain only lowercase letters, numbers, and hyphens")]
    ApiIdInvalid,
}

impl CollectionFormError {
    /// Поле формы, к которому относится ошибка
    pub fn field(&self) -> &'static str {
        match self {
            CollectionFormError::NameRequired => "name",
            CollectionFormError::ApiIdRequired | CollectionFormError::ApiIdInvalid => "api_id",
        }
    }
}

/// Данные формы создания коллекции
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectionFormData {
    pub name: String,
    pub api_id: String,
    pub description: String,
    pub status: CollectionStatus,
}

impl CollectionFormData {
    /// Все ошибки формы; пустой список означает, что форму можно отправлять
    pub fn validate(&self) -> Vec<CollectionFormError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(CollectionFormError::NameRequired);
        }
        if self.api_id.trim().is_empty() {
            errors.push(CollectionFormError::ApiIdRequired);
        } else if !API_ID_RE.is_match(&self.api_id) {
            errors.push(CollectionFormError::ApiIdInvalid);
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn to_row(&self) -> NewCollectionRow {
        NewCollectionRow {
            title: self.name.trim().to_string(),
            api_id: self.api_id.clone(),
            description: Some(self.description.trim().to_string()).filter(|d| !d.is_empty()),
            status: self.status.as_str().to_string(),
            icon: DEFAULT_ICON.to_string(),
            icon_color: DEFAULT_ICON_COLOR.to_string(),
        }
    }
}

impl From<&Collection> for CollectionFormData {
    /// Форма редактирования, заполненная из существующей коллекции
    fn from(c: &Collection) -> Self {
        Self {
            name: c.title.clone(),
            api_id: c.api_id.clone(),
            description: c.description.clone().unwrap_or_default(),
            status: c.status,
        }
    }
}

/// API id коллекции из названия: нижний регистр, пробелы → `-`,
/// прочие символы вне `[a-z0-9-]` удаляются
pub fn generate_api_id(name: &str) -> String {
    let lower = name.to_lowercase();
    let dashed = WHITESPACE_RUN.replace_all(&lower, "-");
    NOT_API_ID_CHAR.replace_all(&dashed, "").into_owned()
}

/// Тело запроса вставки в `collections`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCollectionRow {
    pub title: String,
    pub api_id: String,
    pub description: Option<String>,
    pub status: String,
    pub icon: String,
    pub icon_color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_api_id() {
        assert_eq!(generate_api_id("Blog Posts"), "blog-posts");
        assert_eq!(generate_api_id("  Team   Members! "), "-team-members-");
        assert_eq!(generate_api_id("Café Menu_2"), "caf-menu2");
    }

    #[test]
    fn test_validate() {
        let form = CollectionFormData::default();
        assert_eq!(
            form.validate(),
            vec![
                CollectionFormError::NameRequired,
                CollectionFormError::ApiIdRequired
            ]
        );

        let form = CollectionFormData {
            name: "Posts".into(),
            api_id: "Blog_Posts".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), vec![CollectionFormError::ApiIdInvalid]);
        assert_eq!(
            CollectionFormError::ApiIdInvalid.to_string(),
            "API ID must contain only lowercase letters, numbers, and hyphens"
        );

        let form = CollectionFormData {
            name: "Posts".into(),
            api_id: "blog-posts".into(),
            ..Default::default()
        };
        assert!(form.is_valid());
    }

    #[test]
    fn test_to_row_defaults() {
        let row = CollectionFormData {
            name: " Posts ".into(),
            api_id: "posts".into(),
            description: "  ".into(),
            status: CollectionStatus::Published,
        }
        .to_row();
        assert_eq!(row.title, "Posts");
        assert_eq!(row.description, None);
        assert_eq!(row.status, "published");
        assert_eq!(row.icon, "file");
        assert_eq!(row.icon_color, "gray");
    }
}
