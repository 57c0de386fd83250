//! Collections table access

use crate::shared::api_utils::{count_rows, fetch_rows, insert_row, update_row, TableQuery};
use crate::shared::config::backend;
use contracts::domain::a001_collection::{Collection, CollectionFormData, CollectionRow};
use contracts::domain::a002_field::FieldDescriptor;
use contracts::domain::a003_content_item::ContentItem;
use contracts::domain::common::AggregateRoot;

/// All collections, newest first, with field and item counts
pub async fn fetch_collections() -> Result<Vec<Collection>, String> {
    let backend = backend();
    let rows: Vec<CollectionRow> = fetch_rows(
        &backend,
        Collection::collection_name(),
        &TableQuery::select("*").order("updated_at.desc"),
    )
    .await
    .map_err(|e| {
        log::error!("fetch_collections: {}", e);
        e
    })?;

    let mut collections = Vec::with_capacity(rows.len());
    for row in rows {
        let by_collection = TableQuery::select("id").collection_eq(&row.id);
        let field_count = count_rows(&backend, FieldDescriptor::collection_name(), &by_collection)
            .await
            .unwrap_or_else(|e| {
                log::error!("fetch_collections: field count for {}: {}", row.id, e);
                0
            });
        let item_count = count_rows(&backend, ContentItem::collection_name(), &by_collection)
            .await
            .unwrap_or_else(|e| {
                log::error!("fetch_collections: item count for {}: {}", row.id, e);
                0
            });
        collections.push(Collection::from_row(row).with_counts(field_count, item_count));
    }
    Ok(collections)
}

/// One collection by id (without counts)
pub async fn fetch_collection(id: &str) -> Result<Collection, String> {
    let rows: Vec<CollectionRow> = fetch_rows(
        &backend(),
        Collection::collection_name(),
        &TableQuery::select("*").id_eq(id).limit(1),
    )
    .await
    .map_err(|e| {
        log::error!("fetch_collection {}: {}", id, e);
        e
    })?;
    rows.into_iter()
        .next()
        .map(Collection::from_row)
        .ok_or_else(|| format!("Collection {} not found", id))
}

/// Insert a collection from the New Collection form
pub async fn create_collection(form: &CollectionFormData) -> Result<Collection, String> {
    let row: CollectionRow = insert_row(&backend(), Collection::collection_name(), &form.to_row())
        .await
        .map_err(|e| {
            log::error!("create_collection: {}", e);
            e
        })?;
    log::debug!("Created collection {} ({})", row.title, row.id);
    Ok(Collection::from_row(row))
}

/// Save edits from the collection form; counts are carried over by the caller
pub async fn update_collection(id: &str, form: &CollectionFormData) -> Result<Collection, String> {
    let row: CollectionRow = update_row(&backend(), Collection::collection_name(), id, &form.to_row())
        .await
        .map_err(|e| {
            log::error!("update_collection {}: {}", id, e);
            e
        })?;
    log::debug!("Updated collection {}", id);
    Ok(Collection::from_row(row))
}

/// Totals shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentTotals {
    pub collections: u64,
    pub fields: u64,
    pub items: u64,
}

pub async fn fetch_totals() -> Result<ContentTotals, String> {
    let backend = backend();
    let all = TableQuery::select("id");
    let collections = count_rows(&backend, Collection::collection_name(), &all).await?;
    let fields = count_rows(&backend, FieldDescriptor::collection_name(), &all).await?;
    let items = count_rows(&backend, ContentItem::collection_name(), &all).await?;
    Ok(ContentTotals {
        collections,
        fields,
        items,
    })
}
