//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "filetray";

/// Id of the element the application is mounted on.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// File Picker Configuration
// =============================================================================

/// Allow choosing several files in one picker dialog.
pub const PICKER_MULTIPLE: bool = true;

/// Value of the input's `accept` attribute.
///
/// `None` accepts every file type. Files are not validated after selection
/// either, so this only filters what the browser dialog offers.
pub const PICKER_ACCEPT: Option<&str> = None;

// =============================================================================
// UI Text
// =============================================================================

/// Label on the picker / drop zone.
pub const PICKER_LABEL: &str = "Choose files or drop them here";

/// Shown in the file list when nothing is selected.
pub const EMPTY_MESSAGE: &str = "No files selected";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
