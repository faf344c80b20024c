//! Utility modules for browser and display operations.
//!
//! Provides:
//! - [`WebTransport`] - Fetch API transport with timeout
//! - [`ObjectUrl`] - Self-revoking blob URLs for image previews
//! - [`dom`] - Window, navigation and page configuration access
//! - [`format`] - Display formatting for sizes, dates and digests

mod blob;
pub mod dom;
mod fetch;
pub mod format;

pub use blob::ObjectUrl;
pub use fetch::{RaceResult, WebTransport, race_with_timeout};
