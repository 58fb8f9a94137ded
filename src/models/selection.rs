//! Ordered collection of user-selected files.

use super::file::FileHandle;

// ============================================================================
// FileSelection
// ============================================================================

/// An ordered list of selected file handles.
///
/// Files keep the order in which they were added, batch by batch. Positions
/// are not stable identities: after a removal, every later file shifts down
/// by one.
///
/// This type holds no reactive state. [`crate::core::FileContext`] wraps it in
/// a signal for use inside the component tree.
#[derive(Clone, Debug, PartialEq)]
pub struct FileSelection<F> {
    files: Vec<F>,
}

impl<F> FileSelection<F> {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Returns the selected files in order.
    #[inline]
    pub fn files(&self) -> &[F] {
        &self.files
    }

    /// Returns the file at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&F> {
        self.files.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.files.iter()
    }

    /// Appends a batch of newly selected files after the existing ones.
    ///
    /// `None` means no selection was made (e.g. the picker dialog was
    /// cancelled) and leaves the list untouched. Returns the number of files
    /// appended.
    pub fn add_files<I>(&mut self, batch: Option<I>) -> usize
    where
        I: IntoIterator<Item = F>,
    {
        let Some(batch) = batch else {
            return 0;
        };

        let before = self.files.len();
        self.files.extend(batch);
        self.files.len() - before
    }

    /// Removes the file at `index`, shifting later files down by one.
    ///
    /// An out-of-range index is a silent no-op and returns `None`.
    pub fn remove_file(&mut self, index: usize) -> Option<F> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    /// Removes every file.
    pub fn clear_files(&mut self) {
        self.files.clear();
    }
}

impl<F: FileHandle> FileSelection<F> {
    /// Sum of the sizes of all selected files, in bytes.
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(FileHandle::size).sum()
    }
}

impl<F> Default for FileSelection<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, F> IntoIterator for &'a FileSelection<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
