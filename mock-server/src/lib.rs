use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

pub type Db = Arc<RwLock<BTreeMap<u64, Post>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router whose store starts out holding `posts`.
pub fn app_with(posts: Vec<Post>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        posts.into_iter().map(|post| (post.id, post)).collect(),
    ));
    Router::new()
        .route("/posts", get(list_posts).post(create_post).put(update_post))
        .route("/posts/{id}", get(get_post).delete(delete_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let posts = db.read().await;
    Json(posts.values().cloned().collect())
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<CreatePost>,
) -> (StatusCode, Json<Post>) {
    let mut posts = db.write().await;
    let id = posts.keys().next_back().map_or(1, |last| last + 1);
    let post = Post {
        user_id: input.user_id,
        id,
        title: input.title,
        body: input.body,
    };
    posts.insert(id, post.clone());
    tracing::debug!(id, "created post");
    (StatusCode::CREATED, Json(post))
}

async fn get_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Post>, StatusCode> {
    let posts = db.read().await;
    posts.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_post(
    State(db): State<Db>,
    Json(input): Json<Post>,
) -> Result<Json<Post>, StatusCode> {
    let mut posts = db.write().await;
    let post = posts.get_mut(&input.id).ok_or(StatusCode::NOT_FOUND)?;
    *post = input;
    Ok(Json(post.clone()))
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Post>, StatusCode> {
    let mut posts = db.write().await;
    let removed = posts.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    tracing::debug!(id, "deleted post");
    Ok(Json(removed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_to_camel_case_json() {
        let post = Post {
            user_id: 1,
            id: 2,
            title: "Test".to_string(),
            body: "Body".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["id"], 2);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["body"], "Body");
    }

    #[test]
    fn create_post_ignores_id() {
        let input: CreatePost =
            serde_json::from_str(r#"{"userId":1,"id":99,"title":"t","body":"b"}"#).unwrap();
        assert_eq!(input.user_id, 1);
        assert_eq!(input.title, "t");
    }

    #[test]
    fn create_post_rejects_missing_title() {
        let result: Result<CreatePost, _> = serde_json::from_str(r#"{"userId":1,"body":"b"}"#);
        assert!(result.is_err());
    }
}
