//! Page section combining the picker and the file list.

use leptos::prelude::*;

use super::{FilePicker, SelectedFiles};
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/selection/tray.module.css");

#[component]
pub fn FileTray() -> impl IntoView {
    view! {
        <main class=css::tray>
            <h1 class=css::title>{APP_NAME}</h1>
            <FilePicker />
            <SelectedFiles />
        </main>
    }
}
