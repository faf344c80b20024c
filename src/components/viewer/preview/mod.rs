//! Preview panel for the selected released file.
//!
//! [`use_preview`] derives the signals the panel renders from; the body
//! dispatches on [`crate::models::RenderKind`].

mod content;
mod hook;
mod panel;
mod table;

pub use content::PreviewBody;
pub use hook::{PreviewData, use_preview};
pub use panel::PreviewPanel;
pub use table::CsvTableView;
