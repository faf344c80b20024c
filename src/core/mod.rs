//! Framework-free viewer logic.
//!
//! This module provides:
//! - [`load_file_list`] and file naming/ordering helpers
//! - [`load_preview`] the preview pipeline, gated by [`policy`]
//! - [`CsvTable`] for the table renderer
//! - [`actions`] prepare/publish requests
//! - [`Transport`] the HTTP seam all of the above run over

pub mod actions;
pub mod error;
mod file_list;
pub mod policy;
mod preview;
mod table;
pub mod transport;

pub use file_list::{assign_short_names, load_file_list, shared_prefix_len, sort_files};
pub use preview::{FetchedPreview, content_url, load_preview};
pub use table::CsvTable;
pub use transport::{HttpResponse, Transport, TransportFuture};
