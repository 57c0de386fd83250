pub mod advanced;
pub mod appearance;
pub mod config;
pub mod field_types;
pub mod input;
pub mod lenient;
pub mod predicate;
pub mod validation;
