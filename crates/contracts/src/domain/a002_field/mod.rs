pub mod aggregate;
pub mod dto;
pub mod kind;
pub mod settings;
pub mod value;

pub use aggregate::{validate_field, FieldDescriptor, UiOptions};
pub use dto::{DeleteResult, FieldPatch, FieldRow, NewField, NewFieldRow};
pub use kind::{canonical_tag, FieldKind, FieldOption, NumberFormat};
pub use settings::{merge_settings_json, FieldSettings};
pub use value::FieldValue;

use crate::domain::common::AggregateRoot;

impl AggregateRoot for FieldDescriptor {
    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "fields"
    }

    fn element_name() -> &'static str {
        "Field"
    }

    fn list_name() -> &'static str {
        "Fields"
    }
}
