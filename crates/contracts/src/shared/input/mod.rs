//! Чистые преобразования ввода для рендереров полей.

pub mod color;
pub mod date;
pub mod key_filter;
pub mod mask;
pub mod number;
pub mod options;
pub mod otp;
pub mod slug;
pub mod tags;
pub mod upload;

pub use key_filter::apply_key_filter;
pub use mask::{apply_mask, edit_masked, mask_placeholder, raw_from_masked, MaskedEdit};
pub use number::{format_number, NumberBounds, NumberEditBuffer};
pub use options::{autocomplete_select, filter_options, toggle_membership};
pub use otp::OtpCells;
pub use slug::slugify;
pub use tags::TagList;
pub use upload::{check_upload, UploadError, UploadProgress};
