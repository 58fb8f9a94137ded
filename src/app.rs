//! Root application module.
//!
//! Creates the file selection store at the top of the component tree and
//! renders the page inside an error boundary.

use leptos::prelude::*;

use crate::components::FileTray;
use crate::core::create_file_context;
use crate::models::SelectedFile;

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the page's [`FileContext`](crate::core::FileContext)
/// - Wraps the app in an ErrorBoundary that lists any view errors
/// - Renders the [`FileTray`]
#[component]
pub fn App() -> impl IntoView {
    // Descendants reach the store through the context, not props
    create_file_context::<SelectedFile>();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <ul style="color: #ff6b6b; font-family: 'Courier New', monospace;">
                    {move || errors.get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect::<Vec<_>>()
                    }
                </ul>
            }
        >
            <FileTray />
        </ErrorBoundary>
    }
}
