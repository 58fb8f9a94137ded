//! Reactive file selection store shared through the Leptos context tree.
//!
//! The component that owns a form calls [`create_file_context`] once; any
//! descendant retrieves the same store with [`get_file_context`] (or
//! [`expect_file_context`]) without the store being passed down as a prop.
//!
//! The context key is the store type itself, so a nested
//! [`create_file_context`] shadows the outer store for its own descendants
//! only.

use leptos::prelude::*;

use crate::models::{FileHandle, FileSelection, SelectedFile};

// ============================================================================
// FileContext
// ============================================================================

/// Reactive handle to a [`FileSelection`].
///
/// Every read is tracked, so views and derived signals that read the files
/// re-run after each mutation. Mutations apply synchronously; the next read
/// sees the new state.
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal. The
/// value lives in [`LocalStorage`] since browser `File` handles are not
/// `Send`.
pub struct FileContext<F: 'static = SelectedFile> {
    selection: RwSignal<FileSelection<F>, LocalStorage>,
}

impl<F: 'static> FileContext<F> {
    /// Creates a store holding no files. Does not register it; see
    /// [`create_file_context`].
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new_local(FileSelection::new()),
        }
    }

    /// Returns a copy of the current files, in order.
    pub fn files(&self) -> Vec<F>
    where
        F: Clone,
    {
        self.selection.with(|s| s.files().to_vec())
    }

    /// Runs `fun` with a borrow of the current files.
    pub fn with_files<U>(&self, fun: impl FnOnce(&[F]) -> U) -> U {
        self.selection.with(|s| fun(s.files()))
    }

    pub fn len(&self) -> usize {
        self.selection.with(FileSelection::len)
    }

    pub fn is_empty(&self) -> bool {
        self.selection.with(FileSelection::is_empty)
    }

    /// Appends a batch of newly selected files.
    ///
    /// `None` (no selection made) leaves the store untouched and does not
    /// notify subscribers. Returns the number of files appended.
    pub fn add_files<I>(&self, batch: Option<I>) -> usize
    where
        I: IntoIterator<Item = F>,
    {
        let Some(batch) = batch else {
            return 0;
        };
        self.selection
            .try_update(|s| s.add_files(Some(batch)))
            .unwrap_or(0)
    }

    /// Removes the file at `index`.
    ///
    /// Out-of-range indices are ignored. Returns whether a file was removed.
    pub fn remove_file(&self, index: usize) -> bool {
        if index >= self.selection.with_untracked(FileSelection::len) {
            return false;
        }
        self.selection
            .try_update(|s| s.remove_file(index).is_some())
            .unwrap_or(false)
    }

    /// Removes every file.
    pub fn clear_files(&self) {
        self.selection.update(FileSelection::clear_files);
    }
}

impl<F: FileHandle + 'static> FileContext<F> {
    /// Total size of the selected files in bytes.
    pub fn total_size(&self) -> u64 {
        self.selection.with(FileSelection::total_size)
    }
}

impl<F: 'static> Clone for FileContext<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: 'static> Copy for FileContext<F> {}

impl<F: 'static> Default for FileContext<F> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Context Accessors
// ============================================================================

/// Creates an empty store and provides it to the current component subtree.
///
/// Returns the store so the calling component can use it directly.
pub fn create_file_context<F: 'static>() -> FileContext<F> {
    let ctx = FileContext::new();
    provide_context(ctx);
    ctx
}

/// Looks up the store provided by the nearest ancestor.
///
/// Returns `None` when no ancestor called [`create_file_context`] for this
/// file type.
pub fn get_file_context<F: 'static>() -> Option<FileContext<F>> {
    use_context::<FileContext<F>>()
}

/// Like [`get_file_context`], for components that can only be mounted below
/// the store's owner.
///
/// # Panics
///
/// Panics if no ancestor provided a [`FileContext`].
#[track_caller]
pub fn expect_file_context<F: 'static>() -> FileContext<F> {
    get_file_context().expect("FileContext must be provided by an ancestor component")
}

// ============================================================================
// Tests
// ============================================================================
