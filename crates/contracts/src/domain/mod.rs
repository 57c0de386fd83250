pub mod a001_collection;
pub mod a002_field;
pub mod a003_content_item;
pub mod common;
