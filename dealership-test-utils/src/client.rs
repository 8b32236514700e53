//! In-process HTTP client for router tests.
//!
//! `TestClient` wraps an `axum::Router` in a session layer backed by a `MemoryStore` and sends
//! requests through it with `tower::ServiceExt::oneshot`. The session cookie set by a response
//! is carried to the next request, the same way a browser would.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, Session, SessionManagerLayer};

use crate::{
    constant::{SESSION_COOKIE_NAME, SESSION_USERNAME_KEY},
    error::TestError,
};

/// Upper bound on the size of a response body read by the client.
const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// Redirects followed by [`TestClient::follow_redirects`] before giving up.
const MAX_REDIRECTS: usize = 5;

pub struct TestClient {
    router: Router,
    store: MemoryStore,
    cookie: Option<String>,
}

impl TestClient {
    /// Wrap a router that already has its state applied.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let state: AppState = test.to_app_state();
    /// let mut client = TestClient::new(routes().with_state(state));
    ///
    /// let response = client.get("/purchase").await?;
    /// assert_eq!(response.location(), Some("/sign-in"));
    /// ```
    pub fn new(router: Router) -> Self {
        let store = MemoryStore::default();

        let session_layer = SessionManagerLayer::new(store.clone())
            .with_name(SESSION_COOKIE_NAME)
            .with_secure(false);

        Self {
            router: router.layer(session_layer),
            store,
            cookie: None,
        }
    }

    /// Value of the session cookie currently held by the client
    pub fn session_cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    /// Store `username` in a fresh session and use that session for the next requests.
    ///
    /// Equivalent to signing in without going through the sign-in form.
    pub async fn set_session_username(&mut self, username: &str) -> Result<(), TestError> {
        let session = Session::new(None, Arc::new(self.store.clone()), None);
        session
            .insert(SESSION_USERNAME_KEY, username.to_string())
            .await?;
        session.save().await?;

        let id = session.id().ok_or(TestError::MissingSessionId)?;
        self.cookie = Some(id.to_string());

        Ok(())
    }

    /// Replace the session cookie held by the client, e.g. with one captured earlier
    pub fn restore_cookie(&mut self, cookie: Option<String>) {
        self.cookie = cookie;
    }

    pub async fn get(&mut self, path: &str) -> Result<TestResponse, TestError> {
        let request = self
            .request_builder(Method::GET, path)
            .body(Body::empty())?;

        self.send(request).await
    }

    /// POST an `application/x-www-form-urlencoded` body built from `fields`
    pub async fn post_form(
        &mut self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<TestResponse, TestError> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();

        let request = self
            .request_builder(Method::POST, path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))?;

        self.send(request).await
    }

    /// POST `body` serialized as JSON
    pub async fn post_json<T: Serialize>(
        &mut self,
        path: &str,
        body: &T,
    ) -> Result<TestResponse, TestError> {
        let request = self
            .request_builder(Method::POST, path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body)?))?;

        self.send(request).await
    }

    /// GET the `Location` of `response` for as long as the responses are redirects.
    ///
    /// Returns `response` itself when it is not a redirect.
    pub async fn follow_redirects(
        &mut self,
        mut response: TestResponse,
    ) -> Result<TestResponse, TestError> {
        for _ in 0..MAX_REDIRECTS {
            let Some(location) = response
                .is_redirect()
                .then(|| response.location().map(str::to_string))
                .flatten()
            else {
                break;
            };

            response = self.get(&location).await?;
        }

        Ok(response)
    }

    fn request_builder(&self, method: Method, path: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(path);

        match &self.cookie {
            Some(cookie) => builder.header(
                header::COOKIE,
                format!("{}={}", SESSION_COOKIE_NAME, cookie),
            ),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> Result<TestResponse, TestError> {
        let response = match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let (parts, body) = response.into_parts();
        self.update_cookie(&parts.headers);

        Ok(TestResponse {
            status: parts.status,
            headers: parts.headers,
            body: to_bytes(body, MAX_BODY_BYTES).await?,
        })
    }

    fn update_cookie(&mut self, headers: &HeaderMap) {
        let prefix = format!("{}=", SESSION_COOKIE_NAME);

        for set_cookie in headers.get_all(header::SET_COOKIE) {
            let Ok(set_cookie) = set_cookie.to_str() else {
                continue;
            };
            let Some(cookie) = set_cookie.strip_prefix(&prefix) else {
                continue;
            };

            let removed = set_cookie
                .split(';')
                .any(|attribute| attribute.trim().eq_ignore_ascii_case("max-age=0"));

            self.cookie = match cookie.split(';').next() {
                Some(value) if !removed && !value.is_empty() => Some(value.to_string()),
                _ => None,
            };
        }
    }
}

/// Status, headers and fully read body of a response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TestError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    /// Whether the status is one of 301, 302, 303, 307 or 308
    pub fn is_redirect(&self) -> bool {
        self.status.is_redirection() && self.status != StatusCode::NOT_MODIFIED
    }
}
