//! REST helpers for the PostgREST-compatible backend.
//!
//! Every table lives under `{backend.url}/rest/v1/{table}`; filters and
//! ordering are passed as query parameters (`collection_id=eq.{id}`,
//! `order=updated_at.desc`). Requests carry the anon key both as `apikey`
//! and as a bearer token.

use contracts::shared::config::BackendConfig;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Query string of a table request
///
/// # Example
/// ```ignore
/// let query = TableQuery::select("*").collection_eq(&collection_id).order("sort_order.asc");
/// let url = table_url(&backend, "fields", &query)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableQuery {
    pub select: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TableQuery {
    pub fn select(columns: &str) -> Self {
        Self {
            select: columns.to_string(),
            ..Default::default()
        }
    }

    pub fn id_eq(mut self, id: &str) -> Self {
        self.id = Some(eq(id));
        self
    }

    pub fn collection_eq(mut self, collection_id: &str) -> Self {
        self.collection_id = Some(eq(collection_id));
        self
    }

    pub fn order(mut self, order: &str) -> Self {
        self.order = Some(order.to_string());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// PostgREST equality filter value
pub fn eq(value: &str) -> String {
    format!("eq.{}", value)
}

/// Base URL of a table without a query string
pub fn table_base(backend: &BackendConfig, table: &str) -> String {
    format!("{}/{}", backend.rest_base(), urlencoding::encode(table))
}

/// Full URL of a table request
pub fn table_url(backend: &BackendConfig, table: &str, query: &TableQuery) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to build query: {}", e))?;
    Ok(format!("{}?{}", table_base(backend, table), qs))
}

/// Add the auth and schema headers every backend request needs
pub fn authorize(builder: RequestBuilder, backend: &BackendConfig) -> RequestBuilder {
    let builder = builder
        .header("apikey", &backend.anon_key)
        .header("Accept-Profile", &backend.schema)
        .header("Content-Profile", &backend.schema)
        .header("Accept", "application/json");
    if backend.anon_key.is_empty() {
        builder
    } else {
        builder.header("Authorization", &format!("Bearer {}", backend.anon_key))
    }
}

/// Row total from a `Content-Range` header (`0-24/312`, `*/0`).
/// An unknown total (`*/*`) yields `None`.
pub fn parse_content_range(header: &str) -> Option<u64> {
    header.rsplit_once('/')?.1.trim().parse().ok()
}

/// Fail with the body text when the response status is not 2xx
pub async fn ensure_ok(response: Response, action: &str) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.is_empty() {
        Err(format!("Failed to {}: HTTP {}", action, status))
    } else {
        Err(format!("Failed to {}: HTTP {} {}", action, status, body))
    }
}

// ── Typed table requests ──

/// GET rows of a table
pub async fn fetch_rows<T: DeserializeOwned>(
    backend: &BackendConfig,
    table: &str,
    query: &TableQuery,
) -> Result<Vec<T>, String> {
    let url = table_url(backend, table, query)?;
    let response = authorize(Request::get(&url), backend)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {}: {}", table, e))?;
    let response = ensure_ok(response, &format!("fetch {}", table)).await?;
    response
        .json::<Vec<T>>()
        .await
        .map_err(|e| format!("Failed to parse {}: {}", table, e))
}

/// Exact row count of a filtered table (`Prefer: count=exact`)
pub async fn count_rows(
    backend: &BackendConfig,
    table: &str,
    query: &TableQuery,
) -> Result<u64, String> {
    let url = table_url(backend, table, &query.clone().limit(1))?;
    let response = authorize(Request::get(&url), backend)
        .header("Prefer", "count=exact")
        .send()
        .await
        .map_err(|e| format!("Failed to count {}: {}", table, e))?;
    let response = ensure_ok(response, &format!("count {}", table)).await?;
    Ok(response
        .headers()
        .get("content-range")
        .as_deref()
        .and_then(parse_content_range)
        .unwrap_or(0))
}

/// POST one row and return the stored representation
pub async fn insert_row<B: Serialize, T: DeserializeOwned>(
    backend: &BackendConfig,
    table: &str,
    body: &B,
) -> Result<T, String> {
    let url = table_url(backend, table, &TableQuery::select("*"))?;
    let request = authorize(Request::post(&url), backend)
        .header("Prefer", "return=representation")
        .json(body)
        .map_err(|e| format!("Failed to encode {} row: {}", table, e))?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to insert into {}: {}", table, e))?;
    let response = ensure_ok(response, &format!("insert into {}", table)).await?;
    first_row(response, table).await
}

/// PATCH the row with the given id and return its new representation
pub async fn update_row<B: Serialize, T: DeserializeOwned>(
    backend: &BackendConfig,
    table: &str,
    id: &str,
    body: &B,
) -> Result<T, String> {
    let url = table_url(backend, table, &TableQuery::select("*").id_eq(id))?;
    let request = authorize(Request::patch(&url), backend)
        .header("Prefer", "return=representation")
        .json(body)
        .map_err(|e| format!("Failed to encode {} patch: {}", table, e))?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to update {}: {}", table, e))?;
    let response = ensure_ok(response, &format!("update {}", table)).await?;
    first_row(response, table).await
}

/// DELETE the row with the given id
pub async fn delete_row(backend: &BackendConfig, table: &str, id: &str) -> Result<(), String> {
    let url = table_url(backend, table, &TableQuery::select("id").id_eq(id))?;
    let response = authorize(Request::delete(&url), backend)
        .send()
        .await
        .map_err(|e| format!("Failed to delete from {}: {}", table, e))?;
    ensure_ok(response, &format!("delete from {}", table)).await?;
    Ok(())
}

async fn first_row<T: DeserializeOwned>(response: Response, table: &str) -> Result<T, String> {
    let rows = response
        .json::<Vec<T>>()
        .await
        .map_err(|e| format!("Failed to parse {}: {}", table, e))?;
    rows.into_iter()
        .next()
        .ok_or_else(|| format!("Failed to read {}: empty response", table))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> BackendConfig {
        BackendConfig::new("https://demo.example.co/", "key")
    }

    #[test]
    fn test_table_url_with_filters() {
        let query = TableQuery::select("*")
            .collection_eq("c1")
            .order("sort_order.asc");
        let url = table_url(&backend(), "fields", &query).unwrap();
        assert!(url.starts_with("https://demo.example.co/rest/v1/fields?"));
        assert!(url.contains("collection_id=eq.c1"));
        assert!(url.contains("order=sort_order.asc"));
        assert!(!url.contains("limit"));
    }

    #[test]
    fn test_id_filter_and_limit() {
        let query = TableQuery::select("settings").id_eq("f-9").limit(1);
        let url = table_url(&backend(), "fields", &query).unwrap();
        assert!(url.contains("id=eq.f-9"));
        assert!(url.contains("limit=1"));
    }

    #[test]
    fn test_parse_content_range() {
        assert_eq!(parse_content_range("0-24/312"), Some(312));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range("*/*"), None);
        assert_eq!(parse_content_range("garbage"), None);
    }
}
