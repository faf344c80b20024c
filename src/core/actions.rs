//! Prepare and publish requests.
//!
//! Both are single POSTs carrying the page's CSRF token. Failures are
//! reduced to the message the user sees.

use serde::{Deserialize, Serialize};

use super::error::{ActionError, FetchError};
use super::transport::{HttpResponse, Transport};
use crate::config::GENERIC_ERROR_MESSAGE;

#[derive(Serialize)]
struct PrepareRequest<'a> {
    file_ids: &'a [String],
}

#[derive(Deserialize)]
struct PrepareResponse {
    url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Bundle the given files into a release request.
///
/// Returns the URL the browser should navigate to.
pub async fn prepare<T: Transport + ?Sized>(
    transport: &T,
    prepare_url: &str,
    csrf_token: &str,
    file_ids: &[String],
) -> Result<String, ActionError> {
    let body = serde_json::to_string(&PrepareRequest { file_ids })
        .map_err(|_| ActionError::new(GENERIC_ERROR_MESSAGE))?;

    let response = send(transport, prepare_url, csrf_token, Some(body)).await?;
    response
        .json::<PrepareResponse>()
        .map(|r| r.url)
        .map_err(|_| ActionError::new(GENERIC_ERROR_MESSAGE))
}

/// Publish the prepared release.
pub async fn publish<T: Transport + ?Sized>(
    transport: &T,
    publish_url: &str,
    csrf_token: &str,
) -> Result<(), ActionError> {
    send(transport, publish_url, csrf_token, None).await?;
    Ok(())
}

async fn send<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
    csrf_token: &str,
    body: Option<String>,
) -> Result<HttpResponse, ActionError> {
    let response = transport
        .post(url, csrf_token, body)
        .await
        .map_err(|e| ActionError::new(transport_message(&e)))?;

    if !response.ok() {
        return Err(ActionError::new(error_detail(&response)));
    }
    Ok(response)
}

/// `detail` from an error body, or the generic message.
fn error_detail(response: &HttpResponse) -> String {
    response
        .json::<ErrorBody>()
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}

fn transport_message(error: &FetchError) -> String {
    match error {
        FetchError::NetworkError(msg) if !msg.is_empty() => msg.clone(),
        FetchError::Timeout => error.to_string(),
        _ => GENERIC_ERROR_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::mock::MockTransport;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_prepare_posts_ids_and_returns_url() {
        let transport =
            MockTransport::new().reply(Ok(HttpResponse::new(200, r#"{"url": "/requests/42"}"#)));

        let result = prepare(&transport, "/prepare", "csrf-1", &ids(&["a", "b"])).await;

        assert_eq!(result, Ok("/requests/42".to_string()));
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].token, "csrf-1");
        assert_eq!(requests[0].body.as_deref(), Some(r#"{"file_ids":["a","b"]}"#));
    }

    #[tokio::test]
    async fn test_prepare_error_detail() {
        let transport = MockTransport::new().reply(Ok(HttpResponse::new(
            400,
            r#"{"detail": "Files already released"}"#,
        )));
        let result = prepare(&transport, "/prepare", "c", &ids(&["a"])).await;
        assert_eq!(result, Err(ActionError::new("Files already released")));
    }

    #[tokio::test]
    async fn test_prepare_error_without_detail() {
        let transport = MockTransport::new().reply(Ok(HttpResponse::new(500, "<html>")));
        let result = prepare(&transport, "/prepare", "c", &ids(&["a"])).await;
        assert_eq!(result, Err(ActionError::new(GENERIC_ERROR_MESSAGE)));
    }

    #[tokio::test]
    async fn test_prepare_success_without_url() {
        let transport = MockTransport::new().reply(Ok(HttpResponse::new(200, "{}")));
        let result = prepare(&transport, "/prepare", "c", &ids(&["a"])).await;
        assert_eq!(result, Err(ActionError::new(GENERIC_ERROR_MESSAGE)));
    }

    #[tokio::test]
    async fn test_publish_posts_empty_body() {
        let transport = MockTransport::new().reply(Ok(HttpResponse::new(200, "{}")));
        let result = publish(&transport, "/publish", "csrf-2").await;

        assert_eq!(result, Ok(()));
        let requests = transport.requests();
        assert_eq!(requests[0].url, "/publish");
        assert_eq!(requests[0].token, "csrf-2");
        assert_eq!(requests[0].body, None);
    }

    #[tokio::test]
    async fn test_publish_error_detail() {
        let transport = MockTransport::new()
            .reply(Ok(HttpResponse::new(403, r#"{"detail": "Not allowed"}"#)));
        let result = publish(&transport, "/publish", "c").await;
        assert_eq!(result.unwrap_err().message, "Not allowed");
    }

    #[tokio::test]
    async fn test_publish_network_failure() {
        let transport =
            MockTransport::new().reply(Err(FetchError::NetworkError("offline".to_string())));
        let result = publish(&transport, "/publish", "c").await;
        assert_eq!(result, Err(ActionError::new("offline")));
    }
}
