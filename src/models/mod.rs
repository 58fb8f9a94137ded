//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileSelection`] - Ordered list of selected files and its mutations
//! - [`SelectedFile`], [`FileHandle`] - Browser file handles and their metadata

mod file;
mod selection;

pub use file::{FileHandle, SelectedFile};
pub use selection::FileSelection;
