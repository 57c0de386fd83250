use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--custom" category=PAGE_CAT_CUSTOM class="page--centered">
            <h1 class="page__title">"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href="/">"Back to the dashboard"</A>
        </PageFrame>
    }
}
