//! Sidebar with collapsible menu groups linking to the routed pages

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (href, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "content",
            label: "Content",
            icon: "database",
            items: vec![
                ("/", "Dashboard", "dashboard"),
                ("/collections", "Collections", "database"),
                ("/components", "Components", "components"),
                ("/content", "Content", "file-text"),
            ],
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            icon: "settings",
            items: vec![
                ("/api", "API", "code"),
                ("/users", "Users", "users"),
            ],
        },
    ]
}

/// `/` matches only itself; any other entry also matches its sub-routes
fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        return pathname == "/" || pathname.is_empty();
    }
    pathname == href
        || pathname
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(
        groups
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<String>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let gid_click = group_id.clone();
                let gid_exp = group_id.clone();
                let gid_show = group_id;
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(href, label, icon_name)| {
                                    view! {
                                        <A href=href>
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || pathname.with(|p| is_active(href, p))
                                                style:padding-left="10px"
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(icon_name)}
                                                    <span>{label}</span>
                                                </div>
                                            </div>
                                        </A>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_matching() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/collections"));
        assert!(is_active("/collections", "/collections"));
        assert!(is_active("/collections", "/collections/42/fields"));
        assert!(!is_active("/collections", "/collectionsx"));
        assert!(!is_active("/content", "/components"));
    }
}
