use crate::shared::api_utils::{fetch_rows, TableQuery};
use crate::shared::config::backend;
use contracts::domain::a003_content_item::{ContentItem, ContentItemRow};
use contracts::domain::common::AggregateRoot;

/// Items of a collection, most recently updated first
pub async fn get_content_items(collection_id: &str) -> Result<Vec<ContentItem>, String> {
    let rows: Vec<ContentItemRow> = fetch_rows(
        &backend(),
        ContentItem::collection_name(),
        &TableQuery::select("*")
            .collection_eq(collection_id)
            .order("updated_at.desc"),
    )
    .await
    .map_err(|e| {
        log::error!("get_content_items {}: {}", collection_id, e);
        e
    })?;
    Ok(rows.into_iter().map(ContentItem::from_row).collect())
}
