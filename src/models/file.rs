//! Selected file handles.

/// Read access to the metadata the UI shows for a selected file.
///
/// The selection store never looks inside its handles; this trait exists so
/// summaries such as total size can be computed for any handle type.
pub trait FileHandle {
    fn name(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> u64;
}

/// A file chosen by the user through the browser's file picker or a drop.
///
/// Thin wrapper around [`web_sys::File`]. Cloning is cheap (it clones the JS
/// reference, not the contents).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    handle: web_sys::File,
}

impl SelectedFile {
    pub fn new(handle: web_sys::File) -> Self {
        Self { handle }
    }

    /// MIME type reported by the browser, if it guessed one.
    pub fn mime_type(&self) -> Option<String> {
        let mime = self.handle.type_();
        (!mime.is_empty()).then_some(mime)
    }

    /// Last modification time in milliseconds since the Unix epoch.
    pub fn last_modified(&self) -> f64 {
        self.handle.last_modified()
    }

    /// The underlying browser handle, for reading contents.
    pub fn handle(&self) -> &web_sys::File {
        &self.handle
    }

    pub fn into_inner(self) -> web_sys::File {
        self.handle
    }
}

impl FileHandle for SelectedFile {
    fn name(&self) -> String {
        self.handle.name()
    }

    fn size(&self) -> u64 {
        // Blob sizes are exposed as f64 but are always whole, non-negative byte counts.
        self.handle.size() as u64
    }
}

impl From<web_sys::File> for SelectedFile {
    fn from(handle: web_sys::File) -> Self {
        Self::new(handle)
    }
}
