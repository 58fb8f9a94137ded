//! Browser file selection tray built with Leptos.
//!
//! The page root creates a [`core::FileContext`] and provides it to the
//! component tree; the picker appends to it and the list renders it.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
