//! Typed operations on the `/posts` resource.
//!
//! Each method is a direct pass-through to one [`ApiClient`] verb. The remote
//! API owns every rule about ids and payloads; nothing is validated here.

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::RequestFailure;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{CreatePost, Post};

const POSTS_PATH: &str = "/posts";

/// Resource client for posts.
#[derive(Debug, Clone)]
pub struct PostsClient<T = ReqwestTransport> {
    api: ApiClient<T>,
}

impl PostsClient<ReqwestTransport> {
    pub fn from_config(config: ClientConfig) -> Self {
        Self::new(ApiClient::from_config(config))
    }
}

impl Default for PostsClient<ReqwestTransport> {
    fn default() -> Self {
        Self::from_config(ClientConfig::default())
    }
}

impl<T: Transport> PostsClient<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    /// The underlying base client, for requests outside `/posts`.
    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// `GET /posts`
    pub async fn get_post_list(&self) -> Result<Vec<Post>, RequestFailure> {
        self.api.get(POSTS_PATH).await
    }

    /// `GET /posts/{id}`
    pub async fn get_post(&self, id: u64) -> Result<Post, RequestFailure> {
        self.api.get(&format!("{POSTS_PATH}/{id}")).await
    }

    /// `POST /posts`. The id of `post` is not sent; the server assigns one.
    pub async fn create_post(&self, post: &Post) -> Result<Post, RequestFailure> {
        self.api.post(POSTS_PATH, &CreatePost::from(post)).await
    }

    /// `PUT /posts` with the whole post, id included.
    pub async fn update_post(&self, post: &Post) -> Result<Post, RequestFailure> {
        self.api.put(POSTS_PATH, post).await
    }

    /// `DELETE /posts/{id}`. The upstream echoes a post back on delete.
    pub async fn delete_post(&self, id: u64) -> Result<Post, RequestFailure> {
        self.api.delete(&format!("{POSTS_PATH}/{id}")).await
    }
}
