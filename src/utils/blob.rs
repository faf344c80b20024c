//! Blob object URLs for image previews.

use js_sys::{Array, Uint8Array};
use web_sys::{Blob, BlobPropertyBag, Url};

use crate::core::error::FetchError;

/// A `blob:` URL owned by the viewer.
///
/// The URL is revoked when the last owner drops it, so replacing a preview
/// releases the previous image from the browser's URL registry.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Wrap bytes in a `Blob` of the given MIME type and register a URL.
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Result<Self, FetchError> {
        let array = Uint8Array::from(bytes);
        let parts = Array::new();
        parts.push(&array.buffer());

        let options = BlobPropertyBag::new();
        options.set_type(mime);

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|_| FetchError::ResponseReadFailed)?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| FetchError::ResponseReadFailed)?;

        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl PartialEq for ObjectUrl {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for ObjectUrl {}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}
