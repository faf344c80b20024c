//! Preview signal derivations.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::policy::FileKind;
use crate::models::{PreviewState, ReleasedFile};

/// All derived data needed for preview rendering.
#[derive(Clone, Copy)]
pub struct PreviewData {
    /// The selected file
    pub file: Signal<Option<ReleasedFile>>,
    /// Kind of the selected file
    pub kind: Signal<FileKind>,
    /// Current preview state
    pub state: Signal<PreviewState>,
    ctx: AppContext,
}

impl PreviewData {
    /// Clear the current selection (close preview).
    pub fn close(&self) {
        self.ctx.clear_selection();
    }
}

/// Hook that provides all preview-related derived signals.
pub fn use_preview() -> PreviewData {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let file = Signal::derive(move || ctx.preview.with(|s| s.selected().cloned()));
    let kind = Signal::derive(move || {
        file.with(|f| {
            f.as_ref()
                .map(|f| FileKind::classify(&f.name))
                .unwrap_or(FileKind::Unsupported)
        })
    });
    let state = Signal::derive(move || ctx.preview.with(|s| s.state().clone()));

    PreviewData {
        file,
        kind,
        state,
        ctx,
    }
}
