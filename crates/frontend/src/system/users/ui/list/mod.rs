mod state;

use contracts::system::users::{filter_users, UserRole};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use state::create_state;

fn role_color(role: UserRole) -> BadgeColor {
    match role {
        UserRole::Admin => BadgeColor::Danger,
        UserRole::Editor => BadgeColor::Brand,
        UserRole::Viewer => BadgeColor::Informative,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn UsersList() -> impl IntoView {
    let state = create_state();
    let ctx = use_app_context();

    let field_error = move |name: &'static str| {
        move || state.with(|s| s.errors.get(name).cloned())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut created = None;
        state.update(|s| created = s.submit());
        if let Some(name) = created {
            ctx.success(format!("User \"{}\" created", name));
        }
    };

    let rows = move || {
        state.with(|s| {
            filter_users(&s.users, &s.search_query)
                .into_iter()
                .map(|user| {
                    let id = user.id;
                    let role = user.role;
                    view! {
                        <tr>
                            <td>{user.username.clone()}</td>
                            <td>{user.email.clone()}</td>
                            <td>
                                <Badge appearance=BadgeAppearance::Tint color=role_color(role)>
                                    {role.label()}
                                </Badge>
                            </td>
                            <td class="table__actions">
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    size=ButtonSize::Small
                                    on_click=move |_| state.update(|s| s.remove(id))
                                >
                                    {icon("trash")}
                                </Button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <PageFrame page_id="sys_users--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Users".to_string() subtitle="Accounts with access to this admin".to_string()/>

            <form class="user-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="user-username">"Username"</label>
                    <input
                        id="user-username"
                        type="text"
                        placeholder="Letters and spaces only"
                        prop:value=move || state.with(|s| s.form.username.clone())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            state.update(|s| s.form.set_username(&raw));
                        }
                    />
                    {move || field_error("username")().map(|e| view! { <span class="form-error">{e}</span> })}
                </div>
                <div class="form-group">
                    <label for="user-email">"Email"</label>
                    <input
                        id="user-email"
                        type="email"
                        placeholder="name@example.com"
                        prop:value=move || state.with(|s| s.form.email.clone())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            state.update(|s| s.form.email = raw);
                        }
                    />
                    {move || field_error("email")().map(|e| view! { <span class="form-error">{e}</span> })}
                </div>
                <div class="form-group">
                    <label for="user-role">"Role"</label>
                    <select
                        id="user-role"
                        prop:value=move || state.with(|s| s.form.role.value())
                        on:change=move |ev| {
                            let role = UserRole::from_value(&event_target_value(&ev));
                            state.update(|s| s.form.role = role);
                        }
                    >
                        {UserRole::all()
                            .into_iter()
                            .map(|r| view! { <option value=r.value()>{r.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                    {icon("plus")}
                    " Create User"
                </Button>
            </form>

            <div class="list-toolbar">
                <input
                    class="list-toolbar__search"
                    type="search"
                    placeholder="Search users..."
                    prop:value=move || state.with(|s| s.search_query.clone())
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        state.update(|s| s.search_query = query);
                    }
                />
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </PageFrame>
    }
}
