//! Generic JSON request primitives shared by resource clients.
//!
//! # Design
//! `ApiClient` holds one `ClientConfig` and one transport and carries no
//! mutable state between calls. Each verb is split the same way:
//! `build_request` produces an `HttpRequest`, the transport executes it, and
//! `parse_response` turns the `HttpResponse` into a typed value. Any failure
//! along the way is logged once here and returned unchanged.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::RequestFailure;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};

/// Base client: a transport bound to a base URL and default headers.
#[derive(Debug, Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    /// Client using a fresh reqwest connection pool.
    pub fn from_config(config: ClientConfig) -> Self {
        Self::new(config, ReqwestTransport::new())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue a GET and decode the body as `R`.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, RequestFailure> {
        self.send::<(), R>(HttpMethod::Get, path, None).await
    }

    /// Issue a POST with `body` serialized as JSON and decode the reply as `R`.
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, RequestFailure>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.send(HttpMethod::Post, path, Some(body)).await
    }

    /// Issue a PUT with `body` serialized as JSON and decode the reply as `R`.
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, RequestFailure>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.send(HttpMethod::Put, path, Some(body)).await
    }

    /// Issue a DELETE and decode the body as `R`.
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, RequestFailure> {
        self.send::<(), R>(HttpMethod::Delete, path, None).await
    }

    /// Build the request for `method` on `path`, attaching every default
    /// header and the JSON-encoded body when one is given.
    pub fn build_request<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest, RequestFailure>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| RequestFailure::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{path}", self.config.base_url()),
            headers: self.config.headers().to_vec(),
            body,
        })
    }

    /// Reject non-2xx responses, otherwise decode the body as `R`.
    pub fn parse_response<R: DeserializeOwned>(
        &self,
        response: HttpResponse,
    ) -> Result<R, RequestFailure> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| RequestFailure::Deserialization(e.to_string()))
    }

    async fn send<B, R>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, RequestFailure>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.round_trip(method, path, body)
            .await
            .inspect_err(|error| tracing::error!(%method, path, %error, "request failed"))
    }

    async fn round_trip<B, R>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, RequestFailure>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.build_request(method, path, body)?;
        tracing::debug!(%method, url = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        tracing::debug!(%method, path, status = response.status, "received response");
        self.parse_response(response)
    }
}

fn check_status(response: &HttpResponse) -> Result<(), RequestFailure> {
    if response.is_success() {
        return Ok(());
    }
    Err(RequestFailure::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
