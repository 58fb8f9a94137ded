//! Core application state.
//!
//! This module provides:
//! - [`FileContext`] reactive file selection store
//! - [`create_file_context`] and [`get_file_context`] for sharing it through the component tree
//! - [`error`] types for browser lookups

mod context;
pub mod error;

pub use context::{create_file_context, expect_file_context, get_file_context, FileContext};
