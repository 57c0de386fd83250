//! One renderer per field type. Every renderer takes the shared
//! [`frame::FieldChrome`], the current value and an `on_change` callback.

pub mod autocomplete;
pub mod choice;
pub mod color;
pub mod date;
pub mod frame;
pub mod mask;
pub mod number;
pub mod otp;
pub mod rich_text;
pub mod select;
pub mod slug;
pub mod tags;
pub mod text;
pub mod textarea;
pub mod unsupported;
pub mod upload;

pub use autocomplete::AutocompleteInput;
pub use choice::{CheckboxGroupInput, RadioGroupInput, ToggleInput};
pub use color::ColorInput;
pub use date::DateInput;
pub use frame::{FieldChrome, FieldFrame};
pub use mask::MaskInput;
pub use number::NumberInput;
pub use otp::OtpInput;
pub use rich_text::RichTextInput;
pub use select::{MultiSelectInput, SelectInput};
pub use slug::SlugInput;
pub use tags::TagsInput;
pub use text::{PasswordInput, TextInput};
pub use textarea::{MarkdownInput, TextareaInput};
pub use unsupported::UnsupportedField;
pub use upload::UploadInput;
