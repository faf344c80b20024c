//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Element, Window};

use crate::config::{MOUNT_ELEMENT_ID, PageConfig};
use crate::core::error::ConfigError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The element the viewer mounts into.
pub fn mount_element() -> Result<Element, ConfigError> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ELEMENT_ID))
        .ok_or(ConfigError::MissingMountElement(MOUNT_ELEMENT_ID))
}

/// Read [`PageConfig`] from the mount element's `data-*` attributes.
pub fn page_config(element: &Element) -> Result<PageConfig, ConfigError> {
    PageConfig::from_attributes(|name| element.get_attribute(&format!("data-{}", name)))
}

/// Milliseconds since the epoch, used as the session cache-busting token.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Navigate the browser to a URL.
pub fn navigate(url: &str) {
    if let Some(window) = window()
        && window.location().set_href(url).is_err()
    {
        web_sys::console::warn_1(&format!("Failed to navigate to {}", url).into());
    }
}

/// Reload the current page.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}
