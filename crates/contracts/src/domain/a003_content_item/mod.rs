pub mod aggregate;

pub use aggregate::{ContentItem, ContentItemRow, ContentStatus};

use crate::domain::common::AggregateRoot;

impl AggregateRoot for ContentItem {
    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "content_items"
    }

    fn element_name() -> &'static str {
        "Content Item"
    }

    fn list_name() -> &'static str {
        "Content Items"
    }
}
