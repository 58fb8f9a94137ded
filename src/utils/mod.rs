//! Utility modules for DOM access and display formatting.
//!
//! Provides:
//! - [`dom`] - Browser lookups and `FileList` conversion
//! - [`format`] - Size and summary formatting

pub mod dom;
pub mod format;
