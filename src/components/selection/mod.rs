//! File selection UI components.
//!
//! All components read the [`FileContext`](crate::core::FileContext) provided
//! by an ancestor, so none of them take the store as a prop.
//!
//! Components:
//! - [`FileTray`] - Page section holding the picker and the list
//! - [`FilePicker`] - File input and drop zone
//! - [`SelectedFiles`] - Selected file list with remove/clear actions

mod file_list;
mod picker;
mod tray;

pub use file_list::SelectedFiles;
pub use picker::FilePicker;
pub use tray::FileTray;
