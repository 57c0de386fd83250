//! Field configuration page for one collection
//!
//! - view_model.rs: loaded fields, the selected draft and save commands
//! - view.rs: page component
//! - kind_options.rs: editor for type-specific options

mod kind_options;
mod view;
mod view_model;

pub use view::FieldDetailsPage;
pub use view_model::FieldsViewModel;
