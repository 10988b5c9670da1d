//! Form domain layer

mod field;
mod support;

pub use field::FormField;
pub use support::{SupportDraft, SupportForm, SupportRequest};
