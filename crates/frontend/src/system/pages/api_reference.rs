//! API reference: REST endpoints serving each collection's content.

use crate::domain::a001_collection::model::fetch_collections;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::backend;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use contracts::domain::a001_collection::Collection;
use contracts::domain::a002_field::FieldDescriptor;
use contracts::domain::a003_content_item::ContentItem;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: &'static str,
    pub url: String,
    pub description: &'static str,
}

/// Endpoints for one collection, relative to the REST base of the backend
pub fn endpoints_for(rest_base: &str, collection_id: &str) -> Vec<Endpoint> {
    let items = format!("{}/{}", rest_base, ContentItem::collection_name());
    let fields = format!("{}/{}", rest_base, FieldDescriptor::collection_name());
    let by_collection = format!("collection_id=eq.{}", collection_id);
    vec![
        Endpoint {
            method: "GET",
            url: format!("{}?{}&order=updated_at.desc", items, by_collection),
            description: "List content items",
        },
        Endpoint {
            method: "GET",
            url: format!("{}?id=eq.{{item_id}}", items),
            description: "Fetch one content item",
        },
        Endpoint {
            method: "POST",
            url: items.clone(),
            description: "Create a content item",
        },
        Endpoint {
            method: "PATCH",
            url: format!("{}?id=eq.{{item_id}}", items),
            description: "Update a content item",
        },
        Endpoint {
            method: "DELETE",
            url: format!("{}?id=eq.{{item_id}}", items),
            description: "Delete a content item",
        },
        Endpoint {
            method: "GET",
            url: format!("{}?{}&order=sort_order.asc", fields, by_collection),
            description: "Field schema of the collection",
        },
    ]
}

fn method_color(method: &str) -> BadgeColor {
    match method {
        "GET" => BadgeColor::Success,
        "POST" => BadgeColor::Brand,
        "PATCH" => BadgeColor::Warning,
        "DELETE" => BadgeColor::Danger,
        _ => BadgeColor::Informative,
    }
}

#[component]
fn EndpointRow(endpoint: Endpoint) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let url = endpoint.url.clone();
    let on_copy = move |_| {
        copy_to_clipboard_with_callback(&url, move || {
            set_copied.try_set(true);
        });
    };

    view! {
        <tr>
            <td>
                <Badge appearance=BadgeAppearance::Tint color=method_color(endpoint.method)>
                    {endpoint.method}
                </Badge>
            </td>
            <td><code class="api-ref__url">{endpoint.url}</code></td>
            <td>{endpoint.description}</td>
            <td class="table__actions">
                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=on_copy>
                    {move || if copied.get() { icon("check") } else { icon("copy") }}
                </Button>
            </td>
        </tr>
    }
}

#[component]
pub fn ApiReferencePage() -> impl IntoView {
    let rest_base = backend().rest_base();
    let (collections, set_collections) = signal(Vec::<Collection>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_collections().await {
                Ok(list) => {
                    set_collections.try_set(list);
                }
                Err(e) => {
                    set_error.try_set(Some(format!("Failed to load collections: {}", e)));
                }
            }
            set_loading.try_set(false);
        });
    });

    let base_for_sections = StoredValue::new(rest_base.clone());
    let sections = move || {
        collections
            .get()
            .into_iter()
            .map(|c| {
                let rows = base_for_sections
                    .with_value(|base| endpoints_for(base, &c.id))
                    .into_iter()
                    .map(|endpoint| view! { <EndpointRow endpoint=endpoint /> })
                    .collect_view();
                view! {
                    <section class="api-ref__collection">
                        <h2>{c.title.clone()} " " <code>{c.api_id.clone()}</code></h2>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Method"</th>
                                    <th>"URL"</th>
                                    <th>"Description"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </section>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="api_reference--custom" category=PAGE_CAT_CUSTOM>
            <PageHeader title="API".to_string() subtitle=rest_base.clone()/>

            <p class="api-ref__hint">
                "Send the anon key in both the " <code>"apikey"</code> " and "
                <code>"Authorization: Bearer"</code> " headers."
            </p>

            {move || error.get().map(|e| view! { <div class="page__error">{e}</div> })}

            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <Show
                    when=move || !collections.with(Vec::is_empty)
                    fallback=|| view! { <p>"No collections to document yet."</p> }
                >
                    {sections.clone()}
                </Show>
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_filter_by_collection() {
        let endpoints = endpoints_for("https://db.example.com/rest/v1", "c-1");
        assert_eq!(endpoints.len(), 6);
        assert_eq!(endpoints[0].method, "GET");
        assert!(endpoints[0].url.contains("collection_id=eq.c-1"));
        assert!(endpoints
            .iter()
            .all(|e| e.url.starts_with("https://db.example.com/rest/v1/")));
        assert!(endpoints[5].url.contains("order=sort_order.asc"));
    }
}
