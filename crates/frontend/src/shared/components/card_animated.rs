//! CardAnimated: thaw `Card` with an appear animation.
//!
//! `delay_ms` staggers cards in a grid, `title` adds a section heading.
//!
//! ```ignore
//! <CardAnimated delay_ms=0 title="Layout">...</CardAnimated>
//! <CardAnimated delay_ms=80>...</CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles
    #[prop(optional, into)]
    style: String,
    /// Section heading inside the card
    #[prop(optional, into)]
    title: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_style = format!(
        "animation: card-appear 0.28s ease-out {}ms both; {}",
        delay_ms, style
    );

    view! {
        <Card attr:style=full_style>
            {title.map(|t| view! { <h4 class="details-section__title">{t}</h4> })}
            {children()}
        </Card>
    }
}
