//! Async typed client for the posts REST API.
//!
//! # Overview
//! `PostsClient` exposes list/get/create/update/delete on `/posts` and
//! forwards each call to `ApiClient`, whose generic JSON verbs build an
//! `HttpRequest`, hand it to a `Transport`, and parse the `HttpResponse`.
//!
//! # Design
//! - Clients are constructed explicitly and hold one transport for all calls.
//!   There is no global instance.
//! - The transport is a trait so tests can substitute recording stubs;
//!   `ReqwestTransport` is the default.
//! - Failures are logged once via `tracing` and returned as `RequestFailure`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod posts;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::RequestFailure;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use posts::PostsClient;
pub use transport::{ReqwestTransport, Transport};
pub use types::{CreatePost, Post};
