//! Fields table access.
//!
//! Settings are always written in the single persisted shape: partial
//! settings in a patch are merged with the row's current settings first.

use crate::shared::api_utils::{delete_row, fetch_rows, insert_row, update_row, TableQuery};
use crate::shared::config::backend;
use contracts::domain::a002_field::{
    DeleteResult, FieldDescriptor, FieldPatch, FieldRow, NewField, NewFieldRow,
};
use contracts::domain::common::AggregateRoot;

fn table() -> &'static str {
    FieldDescriptor::collection_name()
}

/// Fields of a collection ordered by `sort_order`
pub async fn get_fields_for_collection(collection_id: &str) -> Result<Vec<FieldDescriptor>, String> {
    let rows: Vec<FieldRow> = fetch_rows(
        &backend(),
        table(),
        &TableQuery::select("*")
            .collection_eq(collection_id)
            .order("sort_order.asc"),
    )
    .await
    .map_err(|e| {
        log::error!("get_fields_for_collection {}: {}", collection_id, e);
        e
    })?;
    Ok(rows.into_iter().map(FieldDescriptor::from_row).collect())
}

pub async fn create_field(collection_id: &str, field: NewField) -> Result<FieldDescriptor, String> {
    let body = NewFieldRow::build(collection_id, field);
    let row: FieldRow = insert_row(&backend(), table(), &body).await.map_err(|e| {
        log::error!("create_field in {}: {}", collection_id, e);
        e
    })?;
    log::debug!("Created field {} ({})", row.api_id, row.id);
    Ok(FieldDescriptor::from_row(row))
}

/// The row a settings patch is merged into
fn current_row(rows: Vec<FieldRow>, field_id: &str) -> Result<FieldRow, String> {
    rows.into_iter()
        .next()
        .ok_or_else(|| format!("Failed to update field: {} not found", field_id))
}

/// Apply a patch; the stored row is returned so the caller can reconcile
pub async fn update_field(
    collection_id: &str,
    field_id: &str,
    patch: FieldPatch,
) -> Result<FieldDescriptor, String> {
    if patch.is_empty() {
        return Err("Failed to update field: nothing to update".to_string());
    }
    let backend = backend();

    let patch = if patch.settings.is_some() {
        let rows: Vec<FieldRow> = fetch_rows(
            &backend,
            table(),
            &TableQuery::select("*").id_eq(field_id).limit(1),
        )
        .await
        .map_err(|e| {
            log::error!("update_field {} in {}: {}", field_id, collection_id, e);
            e
        })?;
        let current = current_row(rows, field_id).map_err(|e| {
            log::error!("update_field {} in {}: {}", field_id, collection_id, e);
            e
        })?;
        let settings = current.settings.unwrap_or(serde_json::Value::Null);
        patch.merged_with(&settings, &current.field_type)
    } else {
        patch
    };

    let row: FieldRow = update_row(&backend, table(), field_id, &patch)
        .await
        .map_err(|e| {
            log::error!("update_field {} in {}: {}", field_id, collection_id, e);
            e
        })?;
    log::debug!("Updated field {}", field_id);
    Ok(FieldDescriptor::from_row(row))
}

pub async fn delete_field(collection_id: &str, field_id: &str) -> Result<DeleteResult, String> {
    delete_row(&backend(), table(), field_id).await.map_err(|e| {
        log::error!("delete_field {} in {}: {}", field_id, collection_id, e);
        e
    })?;
    log::debug!("Deleted field {}", field_id);
    Ok(DeleteResult { success: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_current_row_missing_is_an_error() {
        assert_eq!(
            current_row(Vec::new(), "f-1").unwrap_err(),
            "Failed to update field: f-1 not found"
        );
    }

    #[test]
    fn test_current_row_takes_first() {
        let row: FieldRow = serde_json::from_value(json!({
            "id": "f-1",
            "collection_id": "c-1",
            "name": "Title",
            "api_id": "title",
            "type": "text",
            "required": null,
            "description": null,
            "help_text": null,
            "settings": { "validation": { "minLength": 2 } },
            "validation_settings": null,
            "sort_order": 0,
            "created_at": null,
            "updated_at": null
        }))
        .unwrap();
        let current = current_row(vec![row], "f-1").unwrap();
        assert_eq!(current.api_id, "title");
        assert_eq!(current.field_type, "text");
    }
}
