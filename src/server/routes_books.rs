//! Book API routes.
//!
//! Every handler locks the shared store for the duration of a single
//! statement; SQLite calls are short enough to run inline.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use bookhunt_common::{BookId, Error};
use bookhunt_db::models::{Book, NewBook};

use super::error::AppError;
use super::AppContext;

/// Create book routes.
pub fn book_routes() -> Router<AppContext> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/:book_id", get(get_book).delete(delete_book))
}

/// List all books ordered by title.
pub async fn list_books(State(ctx): State<AppContext>) -> Result<Json<Vec<Book>>, AppError> {
    let books = ctx.store.lock().list_books()?;
    Ok(Json(books))
}

/// Get a single book.
pub async fn get_book(
    State(ctx): State<AppContext>,
    Path(book_id): Path<String>,
) -> Result<Json<Book>, AppError> {
    let id: BookId = book_id.parse()?;
    let book = ctx
        .store
        .lock()
        .get_book(id)?
        .ok_or_else(|| Error::not_found(format!("book {}", id)))?;
    Ok(Json(book))
}

/// Create a book.
pub async fn create_book(
    State(ctx): State<AppContext>,
    Json(request): Json<NewBook>,
) -> Result<impl IntoResponse, AppError> {
    let book = ctx.store.lock().create_book(&request)?;
    tracing::info!("Created book {} ({:?})", book.id, book.title);
    Ok((StatusCode::CREATED, Json(book)))
}

/// Delete a book. Deleting an id with no row is a no-op.
pub async fn delete_book(
    State(ctx): State<AppContext>,
    Path(book_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id: BookId = book_id.parse()?;
    let deleted = ctx.store.lock().delete_book(id)?;
    tracing::debug!(%id, deleted, "Delete book");
    Ok(StatusCode::NO_CONTENT)
}
