//! UI components built with Leptos.
//!
//! - [`selection`] - File picker, selected file list and the page section holding them
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod selection;

pub use selection::FileTray;
