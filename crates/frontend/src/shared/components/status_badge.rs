use contracts::domain::a001_collection::CollectionStatus;
use leptos::prelude::*;
use thaw::*;

/// Collection status as a tinted badge
#[component]
pub fn StatusBadge(status: CollectionStatus) -> impl IntoView {
    let color = match status {
        CollectionStatus::Published => BadgeColor::Success,
        CollectionStatus::Draft => BadgeColor::Warning,
        CollectionStatus::Archived => BadgeColor::Subtle,
    };

    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {status.label()}
        </Badge>
    }
}
