pub mod advanced_panel;
pub mod appearance_panel;
pub mod controls;
pub mod details;
pub mod field_renderer;
pub mod renderers;
pub mod type_selector;
pub mod validation_panel;

pub use field_renderer::FieldRenderer;
