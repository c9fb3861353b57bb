//! In-process HTTP client.

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::error::FixtureError;

/// Sends requests straight to a router, without a socket.
#[derive(Clone)]
pub struct TestClient {
    router: Router,
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FixtureError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl TestClient {
    pub const fn new(router: Router) -> Self {
        Self { router }
    }

    pub async fn get(&self, uri: &str) -> Result<TestResponse, FixtureError> {
        self.send(Method::GET, uri, Body::empty(), None).await
    }

    pub async fn delete(&self, uri: &str) -> Result<TestResponse, FixtureError> {
        self.send(Method::DELETE, uri, Body::empty(), None).await
    }

    /// POST `body` serialized as JSON.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        uri: &str,
        body: &T,
    ) -> Result<TestResponse, FixtureError> {
        let body = serde_json::to_vec(body)?;
        self.send(Method::POST, uri, Body::from(body), Some("application/json"))
            .await
    }

    /// Send an arbitrary request.
    pub async fn request(&self, request: Request<Body>) -> Result<TestResponse, FixtureError> {
        // Routers are infallible services.
        let response = match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| FixtureError::Http(e.to_string()))?
            .to_bytes();

        tracing::debug!(target: "standup.testing", %status, len = body.len(), "Simulated response");
        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Body,
        content_type: Option<&str>,
    ) -> Result<TestResponse, FixtureError> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder
            .body(body)
            .map_err(|e| FixtureError::Http(e.to_string()))?;
        self.request(request).await
    }
}
