//! Main viewer component.
//!
//! ## Layout
//!
//! - Action bar across the top
//! - File list on the left, preview panel on the right once a file is selected
//! - Toasts overlaid bottom-right

use leptos::prelude::*;

use super::{ActionBar, FileList, PreviewPanel};
use crate::app::AppContext;
use crate::components::Toasts;

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

/// Outputs viewer component.
#[component]
pub fn OutputsViewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let has_selection = Signal::derive(move || ctx.preview.with(|s| s.selected().is_some()));

    view! {
        <div class=css::viewer>
            <ActionBar />

            <div class=css::body>
                <div class=move || {
                    if has_selection.get() {
                        format!("{} {}", css::listPane, css::listPaneWithPreview)
                    } else {
                        css::listPane.to_string()
                    }
                }>
                    <FileList />
                </div>

                <Show when=move || has_selection.get()>
                    <PreviewPanel />
                </Show>
            </div>

            <Toasts />
        </div>
    }
}
