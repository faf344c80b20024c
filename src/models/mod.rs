//! Data models and state containers for the viewer.
//!
//! - [`ReleasedFile`], [`FileListResult`], [`SortOrder`] - Released file list
//! - [`PreviewState`], [`PreviewStore`] - Selection and preview lifecycle
//! - [`ToastStack`] - Notifications keyed by id
//! - [`ActionState`], [`ActionKind`] - Prepare/publish buttons

mod action;
mod file;
mod preview;
mod toast;

pub use action::{ActionKind, ActionState};
pub use file::{FileListResponse, FileListResult, ReleasedFile, SortOrder};
pub use preview::{
    PreviewContent, PreviewFailure, PreviewState, PreviewStore, PreviewTicket, RenderKind,
    Resolution,
};
pub use toast::{Toast, ToastStack};
