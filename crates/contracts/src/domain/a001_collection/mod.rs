pub mod aggregate;
pub mod form;

pub use aggregate::{
    filter_collections, Collection, CollectionRow, CollectionSort, CollectionStatus,
};
pub use form::{generate_api_id, CollectionFormData, CollectionFormError, NewCollectionRow};

use crate::domain::common::AggregateRoot;

impl AggregateRoot for Collection {
    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "collections"
    }

    fn element_name() -> &'static str {
        "Collection"
    }

    fn list_name() -> &'static str {
        "Collections"
    }
}
