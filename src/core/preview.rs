//! File preview pipeline.
//!
//! Gates a selected file through [`policy`](super::policy), fetches it
//! (following at most one indirection hop for files not yet present in the
//! primary store) and sorts the body into a renderable [`FetchedPreview`].
//!
//! ## Indirection
//!
//! A successful primary response carrying both `Location` and
//! `Authorization` headers is not content: it points at the release hatch
//! that serves un-uploaded files. The pipeline issues exactly one follow-up
//! GET to that `Location` with that `Authorization`. The follow-up
//! response is final even if it carries the same headers.

use super::error::FetchError;
use super::policy::{self, FileKind};
use super::transport::{HttpResponse, Transport};
use crate::models::ReleasedFile;

/// Preview body ready for a renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchedPreview {
    /// CSV text, rendered as a table.
    Table(String),
    /// HTML document, rendered in a sandboxed iframe.
    Html(String),
    /// Plain text or JSON.
    Text(String),
    /// Image bytes and MIME type, turned into an object URL by the view.
    Image { bytes: Vec<u8>, mime: String },
    /// Nothing to show: unsupported type, too large, or empty body.
    Unsupported,
}

/// Result of the primary request.
#[derive(Debug)]
enum PrimaryResult {
    Content(HttpResponse),
    Indirection { location: String, authorization: String },
}

/// Build the content URL with the per-session cache-busting token.
pub fn content_url(file_url: &str, cache_buster: &str) -> String {
    format!("{}?{}", file_url, cache_buster)
}

/// Run the preview pipeline for one file.
///
/// Files rejected by the policy never reach the network.
pub async fn load_preview<T: Transport + ?Sized>(
    transport: &T,
    file: &ReleasedFile,
    auth_token: &str,
    cache_buster: &str,
) -> Result<FetchedPreview, FetchError> {
    let kind = match policy::check(&file.name, file.size) {
        Ok(kind) => kind,
        Err(_) => return Ok(FetchedPreview::Unsupported),
    };

    let url = content_url(&file.url, cache_buster);
    let response = match fetch_primary(transport, &url, auth_token).await? {
        PrimaryResult::Content(response) => response,
        PrimaryResult::Indirection {
            location,
            authorization,
        } => fetch_follow_up(transport, &location, &authorization).await?,
    };

    Ok(into_preview(kind, &file.name, response))
}

async fn fetch_primary<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
    auth_token: &str,
) -> Result<PrimaryResult, FetchError> {
    let response = transport.get(url, auth_token).await?;
    if !response.ok() {
        return Err(FetchError::HttpError(response.status));
    }

    match (response.header("location"), response.header("authorization")) {
        (Some(location), Some(authorization)) => Ok(PrimaryResult::Indirection {
            location: location.to_string(),
            authorization: authorization.to_string(),
        }),
        _ => Ok(PrimaryResult::Content(response)),
    }
}

async fn fetch_follow_up<T: Transport + ?Sized>(
    transport: &T,
    location: &str,
    authorization: &str,
) -> Result<HttpResponse, FetchError> {
    let response = transport.get(location, authorization).await?;
    if !response.ok() {
        return Err(FetchError::HttpError(response.status));
    }
    Ok(response)
}

fn into_preview(kind: FileKind, file_name: &str, response: HttpResponse) -> FetchedPreview {
    if response.body.is_empty() {
        return FetchedPreview::Unsupported;
    }

    if kind.is_binary() {
        let mime = response
            .header("content-type")
            .filter(|ct| ct.starts_with("image/"))
            .map(String::from)
            .unwrap_or_else(|| policy::image_mime(file_name).to_string());
        return FetchedPreview::Image {
            bytes: response.body,
            mime,
        };
    }

    let text = response.text();
    match kind {
        FileKind::Csv => FetchedPreview::Table(text),
        FileKind::Html => FetchedPreview::Html(text),
        _ => FetchedPreview::Text(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::mock::MockTransport;

    fn file(name: &str, size: u64) -> ReleasedFile {
        ReleasedFile {
            name: name.to_string(),
            short_name: String::new(),
            id: format!("id-{}", name),
            url: format!("https://files/{}", name),
            date: "2024-01-01T00:00:00Z".to_string(),
            sha256: String::new(),
            size,
            is_deleted: false,
        }
    }

    #[tokio::test]
    async fn test_unsupported_type_never_fetches() {
        let transport = MockTransport::new();
        let result = load_preview(&transport, &file("report.xyz", 10), "t", "1").await;
        assert_eq!(result, Ok(FetchedPreview::Unsupported));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_csv_size_ceiling() {
        let transport = MockTransport::new();
        let result = load_preview(&transport, &file("big.csv", 5_000_001), "t", "1").await;
        assert_eq!(result, Ok(FetchedPreview::Unsupported));
        assert!(transport.requests().is_empty());

        let transport = MockTransport::new().reply(Ok(HttpResponse::new(200, "a,b\n1,2\n")));
        let result = load_preview(&transport, &file("edge.csv", 5_000_000), "t", "1").await;
        assert_eq!(result, Ok(FetchedPreview::Table("a,b\n1,2\n".to_string())));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_global_size_ceiling() {
        let transport = MockTransport::new();
        let result = load_preview(&transport, &file("huge.txt", 20_000_001), "t", "1").await;
        assert_eq!(result, Ok(FetchedPreview::Unsupported));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_request_carries_cache_buster_and_token() {
        let transport = MockTransport::new().reply(Ok(HttpResponse::new(200, "hello")));
        let result = load_preview(&transport, &file("notes.txt", 5), "tok", "1700000000").await;

        assert_eq!(result, Ok(FetchedPreview::Text("hello".to_string())));
        let requests = transport.requests();
        assert_eq!(requests[0].url, "https://files/notes.txt?1700000000");
        assert_eq!(requests[0].token, "tok");
    }

    #[tokio::test]
    async fn test_empty_body_is_unsupported() {
        let transport = MockTransport::new().reply(Ok(HttpResponse::new(200, "")));
        let result = load_preview(&transport, &file("empty.json", 0), "t", "1").await;
        assert_eq!(result, Ok(FetchedPreview::Unsupported));
    }

    #[tokio::test]
    async fn test_http_error_fails() {
        let transport = MockTransport::new().reply(Ok(HttpResponse::new(500, "oops")));
        let result = load_preview(&transport, &file("page.html", 5), "t", "1").await;
        assert_eq!(result, Err(FetchError::HttpError(500)));
    }

    #[tokio::test]
    async fn test_indirection_followed_once() {
        let primary = HttpResponse::new(200, "")
            .with_header("Location", "https://hatch/file/1")
            .with_header("Authorization", "hatch-token");
        let follow_up = HttpResponse::new(200, "<p>hi</p>")
            .with_header("Location", "https://hatch/elsewhere")
            .with_header("Authorization", "other");
        let transport = MockTransport::new()
            .reply(Ok(primary))
            .reply(Ok(follow_up));

        let result = load_preview(&transport, &file("page.html", 5), "session", "1").await;

        assert_eq!(result, Ok(FetchedPreview::Html("<p>hi</p>".to_string())));
        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].url, "https://hatch/file/1");
        assert_eq!(requests[1].token, "hatch-token");
    }

    #[tokio::test]
    async fn test_location_alone_is_content() {
        let primary = HttpResponse::new(200, "body").with_header("Location", "https://x");
        let transport = MockTransport::new().reply(Ok(primary));
        let result = load_preview(&transport, &file("a.txt", 4), "t", "1").await;
        assert_eq!(result, Ok(FetchedPreview::Text("body".to_string())));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_indirection_follow_up_failure() {
        let primary = HttpResponse::new(200, "")
            .with_header("Location", "https://hatch/file/1")
            .with_header("Authorization", "hatch-token");
        let transport = MockTransport::new()
            .reply(Ok(primary))
            .reply(Ok(HttpResponse::new(404, "")));
        let result = load_preview(&transport, &file("a.txt", 4), "t", "1").await;
        assert_eq!(result, Err(FetchError::HttpError(404)));
    }

    #[tokio::test]
    async fn test_image_uses_content_type_or_extension() {
        let transport = MockTransport::new()
            .reply(Ok(HttpResponse::new(200, vec![1u8, 2, 3]).with_header("Content-Type", "image/webp")))
            .reply(Ok(HttpResponse::new(200, vec![4u8]).with_header("Content-Type", "text/plain")));

        let first = load_preview(&transport, &file("plot.png", 3), "t", "1").await;
        assert_eq!(
            first,
            Ok(FetchedPreview::Image {
                bytes: vec![1, 2, 3],
                mime: "image/webp".to_string()
            })
        );

        let second = load_preview(&transport, &file("logo.svg", 1), "t", "1").await;
        assert_eq!(
            second,
            Ok(FetchedPreview::Image {
                bytes: vec![4],
                mime: "image/svg+xml".to_string()
            })
        );
    }
}
