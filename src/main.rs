use filetray::app::App;
use filetray::config::MOUNT_ELEMENT_ID;
use filetray::utils::dom::element_by_id;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    match element_by_id(MOUNT_ELEMENT_ID) {
        Ok(root) => mount_to(root, App).forget(),
        Err(e) => web_sys::console::error_1(&format!("Failed to mount app: {}", e).into()),
    }
}
