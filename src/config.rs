//! Application configuration.
//!
//! Centralizes the compile-time constants used throughout the viewer and
//! the [`PageConfig`] read from the server-rendered mount element.

use crate::core::error::ConfigError;

// =============================================================================
// Mount Configuration
// =============================================================================

/// Id of the element the server renders for the viewer to mount into.
pub const MOUNT_ELEMENT_ID: &str = "outputs-viewer";

// =============================================================================
// Preview Limits
// =============================================================================

/// Largest file, in bytes, the viewer will attempt to preview.
pub const MAX_PREVIEW_BYTES: u64 = 20_000_000;

/// Largest CSV file, in bytes, the viewer will parse into a table.
pub const MAX_CSV_PREVIEW_BYTES: u64 = 5_000_000;

/// Maximum number of CSV rows rendered in the table preview.
pub const MAX_TABLE_ROWS: usize = 1000;

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 30_000;

/// Message used when a failed action returns no `detail`.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

// =============================================================================
// Notifications
// =============================================================================

/// Toast ids. A toast with an id already on screen replaces it.
pub mod toast_ids {
    pub const FILE_LIST: &str = "file-list-error";
    pub const PREPARE: &str = "prepare-error";
    pub const PUBLISH: &str = "publish-error";

    /// Per-file id for preview failures.
    pub fn preview(file_id: &str) -> String {
        format!("preview-error-{}", file_id)
    }
}

/// Auto-dismiss delay for toasts in milliseconds.
pub const TOAST_TIMEOUT_MS: u32 = 8_000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Page Configuration
// =============================================================================

/// Endpoints and tokens handed to the viewer by the server-rendered page.
///
/// Read from `data-*` attributes on the mount element:
///
/// | Attribute | Required |
/// |-----------|----------|
/// | `data-files-url` | yes |
/// | `data-auth-token` | yes |
/// | `data-prepare-url` | no |
/// | `data-publish-url` | no |
/// | `data-csrf-token` | no (needed by the action buttons) |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub files_url: String,
    pub auth_token: String,
    pub prepare_url: Option<String>,
    pub publish_url: Option<String>,
    pub csrf_token: Option<String>,
}

impl PageConfig {
    /// Build from an attribute lookup (attribute name without `data-`).
    ///
    /// Blank values count as missing.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::MissingAttribute(name));

        Ok(Self {
            files_url: required("files-url")?,
            auth_token: required("auth-token")?,
            prepare_url: get("prepare-url"),
            publish_url: get("publish-url"),
            csrf_token: get("csrf-token"),
        })
    }

    /// Prepare endpoint and CSRF token, if the page allows preparing.
    pub fn prepare_target(&self) -> Option<(String, String)> {
        Some((self.prepare_url.clone()?, self.csrf_token.clone()?))
    }

    /// Publish endpoint and CSRF token, if the page allows publishing.
    pub fn publish_target(&self) -> Option<(String, String)> {
        Some((self.publish_url.clone()?, self.csrf_token.clone()?))
    }
}
