use crate::domain::a001_collection::model::{fetch_collections, fetch_totals};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_session;
use contracts::domain::a001_collection::Collection;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::Spinner;

const RECENT_LIMIT: usize = 5;

/// Most recently touched collections first
fn recent_collections(mut list: Vec<Collection>, limit: usize) -> Vec<Collection> {
    list.sort_by(|a, b| {
        let key = |c: &Collection| c.updated_at.or(c.created_at);
        key(b).cmp(&key(a))
    });
    list.truncate(limit);
    list
}

/// Overview dashboard: totals and the latest collections
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let session = use_session();
    let (collections, set_collections) = signal(None::<u64>);
    let (fields, set_fields) = signal(None::<u64>);
    let (items, set_items) = signal(None::<u64>);
    let (recent, set_recent) = signal(Vec::<Collection>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_totals().await {
                Ok(totals) => {
                    set_collections.try_set(Some(totals.collections));
                    set_fields.try_set(Some(totals.fields));
                    set_items.try_set(Some(totals.items));
                }
                Err(e) => {
                    log::error!("Failed to load dashboard totals: {}", e);
                    set_error.try_set(Some(e));
                }
            }
            match fetch_collections().await {
                Ok(list) => {
                    set_recent.try_set(recent_collections(list, RECENT_LIMIT));
                }
                Err(e) => {
                    set_error.try_set(Some(e));
                }
            }
            set_loading.try_set(false);
        });
    });

    let greeting = Signal::derive(move || format!("Welcome, {}", session.with(|s| s.display_name())));

    view! {
        <PageFrame page_id="d001_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=greeting subtitle="Your content at a glance".to_string()/>

            {move || error.get().map(|e| view! { <div class="page__error">{e}</div> })}

            <div class="stat-grid">
                <StatCard label="Collections" icon_name="database" value=collections />
                <StatCard label="Fields" icon_name="components" value=fields />
                <StatCard label="Content Items" icon_name="file-text" value=items />
            </div>

            <section class="dashboard__recent">
                <h2>"Recent Collections"</h2>
                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <Show
                        when=move || !recent.with(Vec::is_empty)
                        fallback=|| view! {
                            <p>"No collections yet. " <A href="/collections">"Create one"</A></p>
                        }
                    >
                        <div class="card-grid">
                            <For
                                each=move || recent.get()
                                key=|c| c.id.clone()
                                children=move |c| {
                                    let fields_href = format!("/collections/{}/fields", c.id);
                                    view! {
                                        <CardAnimated>
                                            <div class="collection-card__header">
                                                <span class="collection-card__title">{c.title.clone()}</span>
                                                <StatusBadge status=c.status />
                                            </div>
                                            <div class="collection-card__meta">{c.counts_label()}</div>
                                            <div class="collection-card__meta">
                                                "Updated " {c.last_updated_label()}
                                            </div>
                                            <A href=fields_href>"Configure fields"</A>
                                        </CardAnimated>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </section>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a001_collection::CollectionRow;

    fn collection(id: &str, day: u32) -> Collection {
        let mut c = Collection::from_row(CollectionRow {
            id: id.to_string(),
            title: id.to_string(),
            api_id: id.to_string(),
            ..Default::default()
        });
        c.updated_at = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).single();
        c
    }

    #[test]
    fn test_recent_collections_newest_first() {
        let list = vec![collection("a", 3), collection("b", 9), collection("c", 5)];
        let recent = recent_collections(list, 2);
        let ids: Vec<_> = recent.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }
}
