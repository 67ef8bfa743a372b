//! HTTP surface for the todo record set.
//!
//! Two read-only routes over a shared `RecordStore`:
//! `GET /api/todos` runs the query pipeline and `GET /api/todos/{id}`
//! fetches one record.

pub mod config;
pub mod error;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use todo_core::{QueryParams, RecordStore, Todo};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::ApiError;

pub type Store = Arc<RecordStore>;

pub fn app(store: Store) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos))
        .route("/api/todos/{id}", get(get_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

// Pairs rather than a map so a repeated parameter keeps its first value.
async fn list_todos(
    State(store): State<Store>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let params = QueryParams::from_pairs(pairs);
    let todos = store.list(&params)?;
    Ok(Json(todos).into_response())
}

async fn get_todo(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let todo = store.get(&id)?;
    Ok(Json(todo.clone()))
}
