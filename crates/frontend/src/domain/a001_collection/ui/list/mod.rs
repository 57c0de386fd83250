pub mod state;

use self::state::{create_state, parse_status_filter, status_filter_value, ALL_STATUSES};
use crate::domain::a001_collection::model::fetch_collections;
use crate::domain::a001_collection::ui::details::CollectionForm;
use crate::layout::global_context::use_app_context;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_collection::{
    filter_collections, Collection, CollectionSort, CollectionStatus,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

/// What the form panel above the grid is showing
#[derive(Clone, Debug, PartialEq)]
enum FormMode {
    Closed,
    Create,
    Edit(Collection),
}

/// Put a saved collection into the list: replace by id or prepend
fn upsert(list: &mut Vec<Collection>, saved: Collection) {
    match list.iter_mut().find(|c| c.id == saved.id) {
        Some(slot) => *slot = saved,
        None => list.insert(0, saved),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CollectionList() -> impl IntoView {
    let ctx = use_app_context();
    let state = create_state();
    let (items, set_items) = signal::<Vec<Collection>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let form_mode = RwSignal::new(FormMode::Closed);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_collections().await {
                Ok(v) => {
                    set_items.try_set(v);
                    set_error.try_set(None);
                }
                Err(e) => {
                    set_error.try_set(Some(e));
                }
            }
            set_loading.try_set(false);
        });
    };
    fetch();

    let visible = move || {
        let s = state.get();
        items.with(|list| filter_collections(list, &s.search, s.status, s.sort))
    };

    let on_saved = Callback::new(move |saved: Collection| {
        let message = match form_mode.get_untracked() {
            FormMode::Edit(_) => format!("Collection \"{}\" updated", saved.title),
            _ => format!("Collection \"{}\" created", saved.title),
        };
        set_items.update(|list| upsert(list, saved));
        form_mode.set(FormMode::Closed);
        ctx.success(message);
    });
    let on_cancel = Callback::new(move |_: ()| form_mode.set(FormMode::Closed));

    let card = move |(index, collection): (usize, Collection)| {
        let fields_href = format!("/collections/{}/fields", collection.id);
        let content_href = format!("/content?collection={}", collection.id);
        let icon_style = format!("color: {};", collection.icon_css_color());
        let for_edit = collection.clone();
        view! {
            <CardAnimated delay_ms=(index as u32 * 40).min(400)>
                <div class="collection-card">
                    <div class="collection-card__header">
                        <span class="collection-card__icon" style=icon_style>
                            {icon(&collection.icon)}
                        </span>
                        <div class="collection-card__titles">
                            <h3 class="collection-card__title">{collection.title.clone()}</h3>
                            <code class="collection-card__api-id">{collection.api_id.clone()}</code>
                        </div>
                        <StatusBadge status=collection.status />
                    </div>
                    {collection.description.clone().map(|d| view! {
                        <p class="collection-card__description">{d}</p>
                    })}
                    <div class="collection-card__meta">
                        <span>{collection.counts_label()}</span>
                        <span>{format!("Updated {}", collection.last_updated_label())}</span>
                    </div>
                    <div class="collection-card__actions">
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| form_mode.set(FormMode::Edit(for_edit.clone()))
                        >
                            {icon("edit")}
                            " Edit"
                        </Button>
                        <A href=fields_href attr:class="collection-card__link">
                            {icon("settings")}
                            " Configure Fields"
                        </A>
                        <A href=content_href attr:class="collection-card__link">
                            {icon("eye")}
                            " View Content"
                        </A>
                    </div>
                </div>
            </CardAnimated>
        }
    };

    view! {
        <PageFrame page_id="a001_collection--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Collections".to_string()
                subtitle="Content types and their field configuration".to_string()
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| form_mode.set(FormMode::Create)
                >
                    {icon("plus")}
                    " New Collection"
                </Button>
            </PageHeader>

            {move || match form_mode.get() {
                FormMode::Closed => ().into_any(),
                FormMode::Create => view! {
                    <CollectionForm on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any(),
                FormMode::Edit(existing) => view! {
                    <CollectionForm existing=Some(existing) on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any(),
            }}

            <div class="page__toolbar">
                <div class="page__search">
                    {icon("search")}
                    <input
                        type="search"
                        placeholder="Search collections..."
                        prop:value=move || state.with(|s| s.search.clone())
                        on:input=move |ev| state.update(|s| s.search = event_target_value(&ev))
                    />
                </div>
                <select
                    class="page__filter"
                    on:change=move |ev| state.update(|s| s.status = parse_status_filter(&event_target_value(&ev)))
                >
                    <option
                        value=ALL_STATUSES
                        selected=move || state.with(|s| status_filter_value(s.status) == ALL_STATUSES)
                    >
                        "All Statuses"
                    </option>
                    {CollectionStatus::all()
                        .into_iter()
                        .map(|status| view! {
                            <option
                                value=status.as_str()
                                selected=move || state.with(|s| s.status == Some(status))
                            >
                                {status.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
                <select
                    class="page__filter"
                    on:change=move |ev| state.update(|s| s.sort = CollectionSort::from_str_lossy(&event_target_value(&ev)))
                >
                    {CollectionSort::all()
                        .into_iter()
                        .map(|sort| view! {
                            <option value=sort.as_str() selected=move || state.with(|s| s.sort == sort)>
                                {sort.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| fetch()>
                    "Refresh"
                </Button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="page__error">{format!("Failed to load collections: {}", e)}</div>
            })}

            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                {move || {
                    let list = visible();
                    if list.is_empty() {
                        view! {
                            <div class="page__empty">
                                {if items.with(Vec::is_empty) {
                                    "No collections yet. Create the first one to start modelling content."
                                } else {
                                    "No collections match the current filters."
                                }}
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="collection-grid">
                                {list.into_iter().enumerate().map(card).collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_collection::CollectionRow;

    fn collection(id: &str, title: &str) -> Collection {
        Collection::from_row(CollectionRow {
            id: id.to_string(),
            title: title.to_string(),
            api_id: title.to_lowercase(),
            ..Default::default()
        })
    }

    #[test]
    fn test_upsert_replaces_or_prepends() {
        let mut list = vec![collection("1", "Posts"), collection("2", "Pages")];
        upsert(&mut list, collection("2", "Landing Pages"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].title, "Landing Pages");

        upsert(&mut list, collection("3", "Authors"));
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].id, "3");
    }
}
