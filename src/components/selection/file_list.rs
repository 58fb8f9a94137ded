//! List of selected files with remove and clear actions.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::EMPTY_MESSAGE;
use crate::core::{FileContext, expect_file_context};
use crate::models::{FileHandle, SelectedFile};
use crate::utils::format::{format_selection_summary, format_size};

stylance::import_crate_style!(css, "src/components/selection/file_list.module.css");

/// Display data for one row, copied out of the store so the view never holds
/// a browser handle.
#[derive(Clone, Debug, PartialEq)]
struct FileRowData {
    index: usize,
    name: String,
    size: u64,
    mime: Option<String>,
}

impl FileRowData {
    fn new(index: usize, file: &SelectedFile) -> Self {
        Self {
            index,
            name: file.name(),
            size: file.size(),
            mime: file.mime_type(),
        }
    }
}

/// Renders the current selection.
///
/// Rows are addressed by position: removing a row shifts every later row up.
#[component]
pub fn SelectedFiles() -> impl IntoView {
    let files: FileContext = expect_file_context();

    let rows = Signal::derive(move || {
        files.with_files(|list| {
            list.iter()
                .enumerate()
                .map(|(index, file)| FileRowData::new(index, file))
                .collect::<Vec<_>>()
        })
    });
    let summary = Signal::derive(move || format_selection_summary(files.len(), files.total_size()));

    let clear = move |_: leptos::ev::MouseEvent| {
        files.clear_files();
        web_sys::console::log_1(&"Cleared selection".into());
    };

    view! {
        <section class=css::panel aria-label="Selected files">
            <Show
                when=move || !files.is_empty()
                fallback=|| view! { <p class=css::empty>{EMPTY_MESSAGE}</p> }
            >
                <ul class=css::list>
                    <For
                        each=move || rows.get()
                        key=|row| (row.index, row.name.clone())
                        children=move |row| view! { <FileRow row=row files=files /> }
                    />
                </ul>
            </Show>
            <footer class=css::footer>
                <span class=css::summary>{summary}</span>
                <button
                    class=css::clearButton
                    on:click=clear
                    disabled=move || files.is_empty()
                    title="Remove all files"
                >
                    <Icon icon=ic::TRASH />
                    "Clear"
                </button>
            </footer>
        </section>
    }
}

#[component]
fn FileRow(row: FileRowData, files: FileContext) -> impl IntoView {
    let index = row.index;
    let icon = ic::for_mime(row.mime.as_deref());
    let size = format_size(Some(row.size), false);
    let mime = row.mime.unwrap_or_default();
    let name = row.name;
    let title = name.clone();

    let remove = move |_: leptos::ev::MouseEvent| {
        if files.remove_file(index) {
            web_sys::console::log_1(&format!("Removed file at {}", index).into());
        }
    };

    view! {
        <li class=css::row>
            <span class=css::rowIcon><Icon icon=icon /></span>
            <span class=css::rowName title=title>{name}</span>
            <span class=css::rowMime>{mime}</span>
            <span class=css::rowSize>{size}</span>
            <button class=css::removeButton on:click=remove title="Remove file">
                <Icon icon=ic::CLOSE />
            </button>
        </li>
    }
}
