//! File picker with drag-and-drop support.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{PICKER_ACCEPT, PICKER_LABEL, PICKER_MULTIPLE};
use crate::core::{FileContext, expect_file_context};
use crate::utils::dom::{files_from_drop, files_from_input, reset_file_input};

stylance::import_crate_style!(css, "src/components/selection/picker.module.css");

/// Tracks whether a drag is over the drop zone.
///
/// `dragenter`/`dragleave` also fire when the pointer crosses the zone's
/// children, so a single leave does not mean the drag left the zone. The
/// zone is active while enters outnumber leaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct DragDepth(u32);

impl DragDepth {
    fn enter(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    fn leave(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    fn is_active(self) -> bool {
        self.0 > 0
    }
}

fn log_added(count: usize, source: &str) {
    web_sys::console::log_1(&format!("Added {} file(s) from {}", count, source).into());
}

/// Drop zone wrapping a native file input.
///
/// Both a picker selection and a drop are appended to the [`FileContext`]
/// provided by an ancestor. A cancelled dialog adds nothing.
#[component]
pub fn FilePicker() -> impl IntoView {
    let files: FileContext = expect_file_context();
    let depth = RwSignal::new(DragDepth::default());

    let on_change = move |ev: ev::Event| {
        let added = files.add_files(files_from_input(&ev));
        if added > 0 {
            log_added(added, "picker");
        }
        // Otherwise picking the same file again would not fire `change`
        reset_file_input(&ev);
    };

    let on_dragenter = move |ev: ev::DragEvent| {
        ev.prevent_default();
        depth.update(|d| *d = d.enter());
    };

    // Required for the element to accept drops
    let on_dragover = move |ev: ev::DragEvent| ev.prevent_default();

    let on_dragleave = move |_: ev::DragEvent| depth.update(|d| *d = d.leave());

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        depth.set(DragDepth::default());
        let added = files.add_files(files_from_drop(&ev));
        if added > 0 {
            log_added(added, "drop");
        }
    };

    let zone_class = move || {
        if depth.get().is_active() {
            css::dropZoneActive
        } else {
            css::dropZone
        }
    };

    view! {
        <label
            class=zone_class
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <span class=css::icon><Icon icon=ic::UPLOAD /></span>
            <span class=css::label>{PICKER_LABEL}</span>
            <input
                type="file"
                class=css::input
                multiple=PICKER_MULTIPLE
                accept=PICKER_ACCEPT
                on:change=on_change
            />
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_depth_starts_inactive() {
        assert!(!DragDepth::default().is_active());
    }

    #[test]
    fn test_drag_depth_stays_active_over_children() {
        // Enter the zone, then move onto a child: the child's enter
        // arrives before the zone's leave.
        let depth = DragDepth::default().enter();
        assert!(depth.is_active());

        let depth = depth.enter().leave();
        assert!(depth.is_active());

        // Back from the child onto the zone, then out of the zone
        let depth = depth.enter().leave();
        assert!(depth.is_active());
        assert!(!depth.leave().is_active());
    }

    #[test]
    fn test_drag_depth_unbalanced_leave() {
        let depth = DragDepth::default().leave().leave();
        assert_eq!(depth, DragDepth::default());
        assert!(depth.enter().is_active());
    }
}
