//! Custom error types for the application.
//!
//! - [`DomError`] - Browser object lookups that can fail

use thiserror::Error;

/// Errors raised while looking up browser objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Window has no document
    #[error("Document not available")]
    NoDocument,
    /// No element with the requested id
    #[error("Element #{0} not found")]
    ElementNotFound(String),
    /// Element exists but is not an HTML element
    #[error("Element #{0} is not an HTML element")]
    NotHtmlElement(String),
}
