//! Browser tests for file handle conversion and the selection store.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use filetray::core::{create_file_context, get_file_context};
use filetray::models::{FileHandle, SelectedFile};
use filetray::utils::dom::file_list_to_vec;
use leptos::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{DataTransfer, File, FileList};

wasm_bindgen_test_configure!(run_in_browser);

fn make_file(name: &str, contents: &str) -> File {
    let bits = js_sys::Array::of1(&contents.into());
    File::new_with_str_sequence(&bits, name).expect("file should be constructible")
}

fn make_file_list(files: &[File]) -> FileList {
    let transfer = DataTransfer::new().expect("DataTransfer should be constructible");
    for file in files {
        transfer
            .items()
            .add_with_file(file)
            .expect("file should be added");
    }
    transfer.files().expect("DataTransfer should expose files")
}

fn names(files: &[SelectedFile]) -> Vec<String> {
    files.iter().map(FileHandle::name).collect()
}

#[wasm_bindgen_test]
fn test_file_list_to_vec_keeps_order() {
    let list = make_file_list(&[
        make_file("a.txt", "a"),
        make_file("b.txt", "bb"),
        make_file("c.txt", "ccc"),
    ]);

    let files = file_list_to_vec(Some(list)).expect("list should convert");
    assert_eq!(names(&files), vec!["a.txt", "b.txt", "c.txt"]);
}

#[wasm_bindgen_test]
fn test_file_list_to_vec_none() {
    assert!(file_list_to_vec(None).is_none());
}

#[wasm_bindgen_test]
fn test_file_list_to_vec_empty_list() {
    let files = file_list_to_vec(Some(make_file_list(&[]))).expect("list should convert");
    assert!(files.is_empty());
}

#[wasm_bindgen_test]
fn test_selected_file_metadata() {
    let file = SelectedFile::from(make_file("notes.txt", "hello"));
    assert_eq!(file.name(), "notes.txt");
    assert_eq!(file.size(), 5);
    assert_eq!(file.handle().name(), "notes.txt");

    // Files built without options are stamped with the current time
    assert!(file.last_modified() > 0.0);

    let untyped = SelectedFile::from(make_file("blob", ""));
    assert_eq!(untyped.mime_type(), None);
    assert_eq!(untyped.size(), 0);

    let raw = untyped.into_inner();
    assert_eq!(raw.name(), "blob");
}

#[wasm_bindgen_test]
fn test_context_with_browser_files() {
    Owner::new().with(|| {
        let ctx = create_file_context::<SelectedFile>();

        let list = make_file_list(&[make_file("a.txt", "a"), make_file("b.txt", "bb")]);
        assert_eq!(ctx.add_files(file_list_to_vec(Some(list))), 2);
        assert_eq!(ctx.add_files(file_list_to_vec(None)), 0);
        assert_eq!(ctx.total_size(), 3);

        let found = get_file_context::<SelectedFile>().expect("store should be provided");
        assert!(found.remove_file(0));
        assert!(!found.remove_file(3));
        assert_eq!(names(&ctx.files()), vec!["b.txt"]);

        found.clear_files();
        assert!(ctx.is_empty());
    });
}
