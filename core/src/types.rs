//! Domain DTOs for the posts API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Field names are snake_case in Rust and camelCase on the wire, matching the
//! upstream JSON. Integration tests catch any schema drift between the two
//! crates.

use serde::{Deserialize, Serialize};

/// A single post returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Request payload for creating a post. The server assigns the id, so this
/// is a `Post` without one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

impl From<&Post> for CreatePost {
    fn from(post: &Post) -> Self {
        Self {
            user_id: post.user_id,
            title: post.title.clone(),
            body: post.body.clone(),
        }
    }
}
