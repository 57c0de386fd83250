use crate::dashboards::d001_overview::ui::OverviewDashboard;
use crate::domain::a001_collection::ui::list::CollectionList;
use crate::domain::a002_field::ui::details::FieldDetailsPage;
use crate::domain::a003_content_item::ui::list::ContentList;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::api_reference::ApiReferencePage;
use crate::system::pages::components_gallery::ComponentsGalleryPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::users::ui::list::UsersList;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

/// Signed-in layout; every page except the login page renders inside it
#[component]
fn MainLayout() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.with(|s| s.is_signed_in())
            fallback=|| view! { <Redirect path="/login" /> }
        >
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <Outlet /> }.into_any()
            />
        </Show>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("") view=OverviewDashboard />
                    <Route path=path!("collections") view=CollectionList />
                    <Route path=path!("collections/:id/fields") view=FieldDetailsPage />
                    <Route path=path!("components") view=ComponentsGalleryPage />
                    <Route path=path!("content") view=ContentList />
                    <Route path=path!("api") view=ApiReferencePage />
                    <Route path=path!("users") view=UsersList />
                    <Route path=path!("*any") view=NotFoundPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
