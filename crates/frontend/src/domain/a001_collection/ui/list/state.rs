use contracts::domain::a001_collection::{CollectionSort, CollectionStatus};
use leptos::prelude::*;

pub const ALL_STATUSES: &str = "all";

#[derive(Clone, Debug, Default)]
pub struct CollectionListState {
    pub search: String,
    pub status: Option<CollectionStatus>,
    pub sort: CollectionSort,
}

pub fn create_state() -> RwSignal<CollectionListState> {
    RwSignal::new(CollectionListState::default())
}

/// Value of the status filter select; `all` clears the filter
pub fn parse_status_filter(value: &str) -> Option<CollectionStatus> {
    CollectionStatus::all()
        .into_iter()
        .find(|s| s.as_str() == value)
}

pub fn status_filter_value(status: Option<CollectionStatus>) -> &'static str {
    status.map(|s| s.as_str()).unwrap_or(ALL_STATUSES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_round_trip() {
        assert_eq!(parse_status_filter(ALL_STATUSES), None);
        assert_eq!(parse_status_filter("bogus"), None);
        for status in CollectionStatus::all() {
            assert_eq!(parse_status_filter(status_filter_value(Some(status))), Some(status));
        }
    }
}
