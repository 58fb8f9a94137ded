//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuFile as File, LuFileText as FileText, LuImage as FileImage, LuTrash as Trash,
        LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsFileEarmark as File, BsFileEarmarkImage as FileImage, BsFileEarmarkText as FileText,
        BsTrash as Trash, BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(UPLOAD, Upload);
themed_icon!(CLOSE, Close);
themed_icon!(TRASH, Trash);

/// Pick an icon from a MIME type.
pub fn for_mime(mime: Option<&str>) -> Icon {
    match mime {
        Some(m) if m.starts_with("image/") => FILE_IMAGE,
        Some(m) if m.starts_with("text/") => FILE_TEXT,
        _ => FILE,
    }
}
