//! Outputs viewer UI components.
//!
//! Components:
//! - [`OutputsViewer`] - Main view, owns the layout
//! - [`FileList`] - Released files with sort toggle
//! - [`PreviewPanel`] - Metadata and content preview of the selected file
//! - [`ActionBar`] - Prepare / Publish buttons

mod actions;
mod file_list;
mod preview;
#[allow(clippy::module_inception)]
mod viewer;

pub use actions::ActionBar;
pub use file_list::FileList;
pub use preview::PreviewPanel;
pub use viewer::OutputsViewer;
