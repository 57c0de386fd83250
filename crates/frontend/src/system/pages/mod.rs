pub mod api_reference;
pub mod components_gallery;
pub mod login;
pub mod not_found;
