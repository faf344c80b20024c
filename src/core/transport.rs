//! HTTP seam between the viewer logic and the browser.
//!
//! The loaders and actions only talk to a [`Transport`]. In the browser
//! this is [`crate::utils::WebTransport`]; tests use an in-memory mock.

use std::{future::Future, pin::Pin};

use serde::de::DeserializeOwned;

use super::error::FetchError;

/// Boxed future returned by [`Transport`] methods.
///
/// Not `Send`: browser futures live on the single UI thread.
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A fully read HTTP response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Response headers, names lowercased.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Response with the given status and body and no headers.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Add a header (name is lowercased).
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_ascii_lowercase(), value.into()));
        self
    }

    /// 2xx status.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body parsed as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::JsonParseError(e.to_string()))
    }
}

/// Minimal HTTP client used by the viewer.
///
/// Implementations return `Ok` for any response that arrived, whatever
/// its status; only transport-level failures are `Err`.
pub trait Transport {
    /// `GET url` with an `Authorization` header.
    fn get<'a>(
        &'a self,
        url: &'a str,
        authorization: &'a str,
    ) -> TransportFuture<'a, Result<HttpResponse, FetchError>>;

    /// `POST url` with an `X-CSRFToken` header and an optional JSON body.
    fn post<'a>(
        &'a self,
        url: &'a str,
        csrf_token: &'a str,
        json_body: Option<String>,
    ) -> TransportFuture<'a, Result<HttpResponse, FetchError>>;
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    //! Scripted [`Transport`] for tests.

    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// A request seen by [`MockTransport`].
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Recorded {
        pub method: &'static str,
        pub url: String,
        /// `Authorization` for GET, `X-CSRFToken` for POST.
        pub token: String,
        pub body: Option<String>,
    }

    /// Replies with queued responses in order and records every request.
    #[derive(Default)]
    pub struct MockTransport {
        replies: RefCell<VecDeque<Result<HttpResponse, FetchError>>>,
        requests: RefCell<Vec<Recorded>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(self, response: Result<HttpResponse, FetchError>) -> Self {
            self.replies.borrow_mut().push_back(response);
            self
        }

        pub fn requests(&self) -> Vec<Recorded> {
            self.requests.borrow().clone()
        }

        fn next(&self, recorded: Recorded) -> Result<HttpResponse, FetchError> {
            self.requests.borrow_mut().push(recorded);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(FetchError::NetworkError("no scripted reply".into())))
        }
    }

    impl Transport for MockTransport {
        fn get<'a>(
            &'a self,
            url: &'a str,
            authorization: &'a str,
        ) -> TransportFuture<'a, Result<HttpResponse, FetchError>> {
            let result = self.next(Recorded {
                method: "GET",
                url: url.to_string(),
                token: authorization.to_string(),
                body: None,
            });
            Box::pin(async move { result })
        }

        fn post<'a>(
            &'a self,
            url: &'a str,
            csrf_token: &'a str,
            json_body: Option<String>,
        ) -> TransportFuture<'a, Result<HttpResponse, FetchError>> {
            let result = self.next(Recorded {
                method: "POST",
                url: url.to_string(),
                token: csrf_token.to_string(),
                body: json_body,
            });
            Box::pin(async move { result })
        }
    }
}
