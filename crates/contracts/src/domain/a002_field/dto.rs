use super::aggregate::FieldDescriptor;
use super::kind::FieldKind;
use super::settings::merge_settings_json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_FIELD_NAME: &str = "New Field";
pub const DEFAULT_FIELD_API_ID: &str = "new_field";
pub const DEFAULT_FIELD_TYPE: &str = "text";

// ============================================================================
// Rows
// ============================================================================

/// Строка таблицы `fields` в том виде, в каком её отдаёт бэкенд
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRow {
    pub id: String,
    pub collection_id: Option<String>,
    pub name: String,
    pub api_id: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: Option<bool>,
    pub description: Option<String>,
    pub help_text: Option<String>,
    pub settings: Option<Value>,
    /// Устаревшая колонка; читается, но никогда не пишется
    #[serde(skip_serializing)]
    pub validation_settings: Option<Value>,
    pub sort_order: Option<i32>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

fn non_empty(s: &str) -> Option<String> {
    (!s.trim().is_empty()).then(|| s.to_string())
}

impl FieldDescriptor {
    pub fn from_row(row: FieldRow) -> Self {
        let mut field = FieldDescriptor {
            id: non_empty(&row.id),
            api_id: non_empty(&row.api_id),
            name: non_empty(&row.name),
            required: row.required.unwrap_or(false),
            description: row.description.filter(|d| !d.is_empty()),
            help_text: row.help_text.filter(|h| !h.is_empty()),
            sort_order: row.sort_order.unwrap_or(0),
            collection_id: row.collection_id,
            ..Default::default()
        };
        let settings = row.settings.unwrap_or(Value::Null);
        field.apply_settings_json(&row.field_type, &settings, row.validation_settings.as_ref());
        field
    }
}

/// API id поля из имени: нижний регистр, пробелы → `_`
pub fn field_api_id_from_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

// ============================================================================
// Create / update
// ============================================================================

/// Данные для создания поля; отсутствующее заполняется значениями по умолчанию
#[derive(Debug, Clone, Default)]
pub struct NewField {
    pub name: Option<String>,
    pub api_id: Option<String>,
    pub kind: Option<FieldKind>,
    pub required: bool,
    pub description: Option<String>,
    pub help_text: Option<String>,
    pub settings: Option<Value>,
    pub sort_order: i32,
}

impl NewField {
    /// Черновик поля из дескриптора (например, созданного по типу из реестра)
    pub fn from_descriptor(field: &FieldDescriptor) -> Self {
        Self {
            name: field.name.clone(),
            api_id: field.api_id.clone(),
            kind: Some(field.kind.clone()),
            required: field.required,
            description: field.description.clone(),
            help_text: field.help_text.clone(),
            settings: Some(field.settings_json()),
            sort_order: field.sort_order,
        }
    }
}

/// Тело запроса вставки в `fields`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFieldRow {
    pub collection_id: String,
    pub name: String,
    pub api_id: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: bool,
    pub description: Option<String>,
    pub help_text: Option<String>,
    pub settings: Value,
    pub sort_order: i32,
}

impl NewFieldRow {
    pub fn build(collection_id: &str, field: NewField) -> Self {
        let name = field
            .name
            .as_deref()
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_FIELD_NAME.to_string());

        let api_id = field
            .api_id
            .as_deref()
            .and_then(non_empty)
            .or_else(|| {
                field
                    .name
                    .as_deref()
                    .map(field_api_id_from_name)
                    .filter(|s| !s.is_empty())
            })
            .unwrap_or_else(|| DEFAULT_FIELD_API_ID.to_string());

        let kind = field
            .kind
            .unwrap_or_else(|| FieldKind::from_tag(DEFAULT_FIELD_TYPE));

        // Приводим блоб к единственной форме, сохраняя опции типа
        let mut draft = FieldDescriptor {
            kind: kind.clone(),
            ..Default::default()
        };
        draft.apply_settings_json(kind.tag(), &field.settings.unwrap_or(Value::Null), None);
        draft.kind = kind.clone();

        Self {
            collection_id: collection_id.to_string(),
            name,
            api_id,
            field_type: kind.tag().to_string(),
            required: field.required,
            description: field.description.filter(|d| !d.is_empty()),
            help_text: field.help_text.filter(|h| !h.is_empty()),
            settings: draft.settings_json(),
            sort_order: field.sort_order,
        }
    }
}

/// Частичное обновление поля; `None` означает «не менять»
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FieldPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// Частичный блоб настроек; сливается с текущим перед записью
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

impl FieldPatch {
    /// Полный патч из отредактированного дескриптора
    pub fn from_descriptor(field: &FieldDescriptor) -> Self {
        Self {
            name: field.name.clone(),
            api_id: field.api_id.clone(),
            field_type: Some(field.kind.tag().to_string()),
            required: Some(field.required),
            description: Some(field.description.clone().unwrap_or_default()),
            help_text: Some(field.help_text.clone().unwrap_or_default()),
            settings: Some(field.settings_json()),
            sort_order: Some(field.sort_order),
        }
    }

    pub fn settings_only(settings: Value) -> Self {
        Self {
            settings: Some(settings),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Слить частичные настройки с текущими настройками строки
    /// и привести результат к единственной сохраняемой форме
    pub fn merged_with(mut self, current_settings: &Value, field_type: &str) -> Self {
        if let Some(patch) = self.settings.take() {
            let merged = merge_settings_json(current_settings, &patch);
            let tag = self.field_type.clone().unwrap_or_else(|| field_type.to_string());
            let mut draft = FieldDescriptor::default();
            draft.apply_settings_json(&tag, &merged, None);
            self.settings = Some(draft.settings_json());
        }
        self
    }
}

/// Ответ на удаление поля
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_defaults() {
        let row = NewFieldRow::build("c1", NewField::default());
        assert_eq!(row.name, "New Field");
        assert_eq!(row.api_id, "new_field");
        assert_eq!(row.field_type, "text");
        assert_eq!(row.collection_id, "c1");
        assert!(row.settings.get("validation").is_some());
    }

    #[test]
    fn test_api_id_from_name() {
        let row = NewFieldRow::build(
            "c1",
            NewField {
                name: Some("Hero  Image Alt".into()),
                ..Default::default()
            },
        );
        assert_eq!(row.api_id, "hero_image_alt");

        let row = NewFieldRow::build(
            "c1",
            NewField {
                name: Some("Hero".into()),
                api_id: Some("hero_custom".into()),
                ..Default::default()
            },
        );
        assert_eq!(row.api_id, "hero_custom");
    }

    #[test]
    fn test_row_mapping_with_legacy_shape() {
        let row: FieldRow = serde_json::from_value(json!({
            "id": "f1",
            "collection_id": "c1",
            "name": "Price",
            "api_id": "price",
            "type": "number",
            "required": null,
            "settings": {
                "minLength": 1,
                "type_options": {"step": 0.5, "format": "currency", "currency": "usd"}
            },
            "validation_settings": {"max": 100},
            "sort_order": 3
        }))
        .unwrap();
        let field = FieldDescriptor::from_row(row);
        assert_eq!(field.dom_id(), "f1");
        assert!(!field.required);
        assert_eq!(field.sort_order, 3);
        assert_eq!(field.settings.validation.max, Some(100.0));
        assert!(field.settings.validation.min_length_enabled);
        assert_eq!(field.number_bounds().step, 0.5);
        assert!(matches!(
            &field.kind,
            FieldKind::Number { format: crate::domain::a002_field::NumberFormat::Currency { currency, .. }, .. }
                if currency == "USD"
        ));
    }

    #[test]
    fn test_unknown_type_row_is_kept() {
        let row = FieldRow {
            id: "x".into(),
            field_type: "holographic".into(),
            ..Default::default()
        };
        let field = FieldDescriptor::from_row(row);
        assert_eq!(field.kind, FieldKind::Unsupported("holographic".into()));
    }

    #[test]
    fn test_patch_merges_with_current_settings() {
        let current = json!({
            "validation": {"required": true, "minLength": 2, "minLengthEnabled": true},
            "appearance": {"labelPosition": "left"}
        });
        let patch = FieldPatch::settings_only(json!({"validation": {"minLength": 5}}))
            .merged_with(&current, "text");
        let settings = patch.settings.unwrap();
        assert_eq!(settings["validation"]["required"], json!(true));
        assert_eq!(settings["validation"]["minLength"], json!(5));
        assert_eq!(settings["appearance"]["labelPosition"], json!("left"));

        let body = serde_json::to_value(FieldPatch::settings_only(json!({}))).unwrap();
        assert_eq!(body.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_legacy_column_is_not_written() {
        let row = FieldRow {
            validation_settings: Some(json!({"email": true})),
            ..Default::default()
        };
        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("validation_settings").is_none());
    }
}
