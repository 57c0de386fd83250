//! Collection form (create and edit)
//!
//! - view_model.rs: form state, validation and the save command
//! - view.rs: form component

mod view;
mod view_model;

pub use view::CollectionForm;
pub use view_model::CollectionFormViewModel;
