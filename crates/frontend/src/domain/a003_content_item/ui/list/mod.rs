//! Content browser: pick a collection, list its items and open one
//! rendered through the collection's field configuration.

use crate::domain::a001_collection::model::fetch_collections;
use crate::domain::a002_field::model::get_fields_for_collection;
use crate::domain::a002_field::ui::FieldRenderer;
use crate::domain::a003_content_item::model::get_content_items;
use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_collection::Collection;
use contracts::domain::a002_field::{validate_field, FieldDescriptor, FieldValue};
use contracts::domain::a003_content_item::{ContentItem, ContentStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use std::collections::HashMap;
use thaw::*;

/// Values of one item keyed by field dom id
pub fn item_values(item: &ContentItem, fields: &[FieldDescriptor]) -> HashMap<String, FieldValue> {
    fields
        .iter()
        .map(|f| (f.dom_id(), item.value_for(f)))
        .collect()
}

/// Validation errors of the current values, for fields that fail
pub fn value_errors(
    fields: &[FieldDescriptor],
    values: &HashMap<String, FieldValue>,
) -> HashMap<String, Vec<String>> {
    fields
        .iter()
        .filter_map(|f| {
            let id = f.dom_id();
            let empty = f.empty_value();
            let outcome = validate_field(f, values.get(&id).unwrap_or(&empty));
            (!outcome.is_valid()).then_some((id, outcome.errors))
        })
        .collect()
}

fn status_color(status: ContentStatus) -> BadgeColor {
    match status {
        ContentStatus::Published => BadgeColor::Success,
        ContentStatus::Draft => BadgeColor::Warning,
        ContentStatus::Archived => BadgeColor::Subtle,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ContentList() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

    let collections = RwSignal::new(Vec::<Collection>::new());
    let fields = RwSignal::new(Vec::<FieldDescriptor>::new());
    let items = RwSignal::new(Vec::<ContentItem>::new());
    let open_item = RwSignal::new(None::<String>);
    let values = RwSignal::new(HashMap::<String, FieldValue>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let selected = Memo::new(move |_| query.with(|q| q.get("collection")).filter(|s| !s.is_empty()));

    spawn_local(async move {
        match fetch_collections().await {
            Ok(list) => {
                collections.try_set(list);
            }
            Err(e) => {
                error.try_set(Some(format!("Failed to load collections: {}", e)));
            }
        }
    });

    // reload fields and items whenever the picked collection changes
    Effect::new(move |_| {
        let Some(cid) = selected.get() else {
            fields.set(Vec::new());
            items.set(Vec::new());
            return;
        };
        open_item.set(None);
        loading.set(true);
        spawn_local(async move {
            let loaded_fields = get_fields_for_collection(&cid).await;
            let loaded_items = get_content_items(&cid).await;
            match (loaded_fields, loaded_items) {
                (Ok(f), Ok(i)) => {
                    fields.try_set(f);
                    items.try_set(i);
                    error.try_set(None);
                }
                (Err(e), _) | (_, Err(e)) => {
                    error.try_set(Some(format!("Failed to load content: {}", e)));
                }
            }
            loading.try_set(false);
        });
    });

    let open = move |item: &ContentItem| {
        let v = fields.with_untracked(|f| item_values(item, f));
        values.set(v);
        open_item.set(Some(item.id.clone()));
    };

    let errors = Signal::derive(move || fields.with(|f| values.with(|v| value_errors(f, v))));
    let on_change = Callback::new(move |(id, value): (String, FieldValue)| {
        values.update(|v| {
            v.insert(id, value);
        });
    });

    let item_editor = move || {
        open_item.get().map(|id| {
            let title = items.with_untracked(|list| {
                list.iter().find(|i| i.id == id).map(ContentItem::title).unwrap_or_default()
            });
            view! {
                <div class="content-item-editor">
                    <div class="content-item-editor__header">
                        <h3>{title}</h3>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| open_item.set(None)>
                            "Close"
                        </Button>
                    </div>
                    {fields
                        .get_untracked()
                        .into_iter()
                        .map(|field| {
                            let id = field.dom_id();
                            let empty = field.empty_value();
                            let value = Signal::derive(move || {
                                values.with(|v| v.get(&id).cloned().unwrap_or_else(|| empty.clone()))
                            });
                            view! { <FieldRenderer field=field value=value on_change=on_change errors=errors /> }
                        })
                        .collect_view()}
                </div>
            }
        })
    };

    view! {
        <PageFrame page_id="a003_content_item--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Content".to_string()
                subtitle="Entries stored in each collection".to_string()
            >
                <select
                    class="page__filter"
                    on:change=move |ev| {
                        let id = event_target_value(&ev);
                        let target = if id.is_empty() {
                            "/content".to_string()
                        } else {
                            format!("/content?collection={}", urlencoding::encode(&id))
                        };
                        navigate(&target, Default::default());
                    }
                >
                    <option value="" selected=move || selected.get().is_none()>"Select a collection..."</option>
                    {move || {
                        collections
                            .get()
                            .into_iter()
                            .map(|c| {
                                let id = c.id.clone();
                                view! {
                                    <option value=c.id.clone() selected=move || selected.get().as_deref() == Some(id.as_str())>
                                        {c.title.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="page__error">{e}</div> })}

            {move || {
                if selected.get().is_none() {
                    return view! {
                        <div class="page__empty">"Pick a collection to browse its content."</div>
                    }
                    .into_any();
                }
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                let list = items.get();
                if list.is_empty() {
                    return view! { <div class="page__empty">"This collection has no content yet."</div> }
                        .into_any();
                }
                view! {
                    <table class="data-table content-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Status"</th>
                                <th>"Updated"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|item| {
                                    let row_id = item.id.clone();
                                    let status = item.status;
                                    let title = item.title();
                                    let updated = item.updated_label();
                                    view! {
                                        <tr
                                            class="content-table__row"
                                            class:content-table__row--open=move || open_item.get().as_deref() == Some(row_id.as_str())
                                            on:click=move |_| open(&item)
                                        >
                                            <td>{title}</td>
                                            <td>
                                                <Badge appearance=BadgeAppearance::Tint color=status_color(status)>
                                                    {status.label()}
                                                </Badge>
                                            </td>
                                            <td>{updated}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}

            {item_editor}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_content_item::ContentItemRow;
    use serde_json::json;

    fn field(api_id: &str, tag: &str) -> FieldDescriptor {
        let mut f = FieldDescriptor::of_type(tag);
        f.id = Some(format!("id-{}", api_id));
        f.api_id = Some(api_id.to_string());
        f
    }

    #[test]
    fn test_item_values_fill_missing_with_empty() {
        let fields = vec![field("title", "text"), field("tags", "tags")];
        let item = ContentItem::from_row(ContentItemRow {
            id: "1".into(),
            collection_id: "c".into(),
            data: json!({ "title": "Hello" }),
            ..Default::default()
        });
        let values = item_values(&item, &fields);
        assert_eq!(values["id-title"], FieldValue::Text("Hello".into()));
        assert_eq!(values["id-tags"], FieldValue::List(Vec::new()));
    }

    #[test]
    fn test_value_errors_reports_required() {
        let mut title = field("title", "text");
        title.required = true;
        let fields = vec![title];
        let errors = value_errors(&fields, &HashMap::new());
        assert_eq!(errors["id-title"], vec!["This field is required".to_string()]);

        let mut values = HashMap::new();
        values.insert("id-title".to_string(), FieldValue::Text("Hi".into()));
        assert!(value_errors(&fields, &values).is_empty());
    }
}
