pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
pub mod timers;
