//! UI components built with Leptos.
//!
//! - [`viewer`] - File list, preview panel and action buttons
//! - [`toasts`] - Dismissible notifications
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod toasts;
pub mod viewer;

pub use toasts::Toasts;
pub use viewer::OutputsViewer;
