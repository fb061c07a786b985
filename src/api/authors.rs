//! Author endpoints

use axum::{
    extract::{Form, Path, Query, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Author, Book},
};

/// Parameters for author creation
#[derive(Debug, Deserialize)]
pub struct CreateAuthorParams {
    pub name: String,
}

/// Parameters for attaching a book
#[derive(Debug, Deserialize)]
pub struct AddBookParams {
    pub title: String,
}

/// List all authors with their books
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "List of authors with embedded books", body = [Author])
    )
)]
pub async fn list_authors(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.library.list_authors().await?;
    Ok(Json(authors))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    params(
        ("name" = String, Query, description = "Display name of the author")
    ),
    responses(
        (status = 201, description = "Author created", body = Author,
         headers(("Location" = String, description = "URL of the created author"))),
        (status = 400, description = "Blank name", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    query: Option<Query<CreateAuthorParams>>,
    form: Option<Form<CreateAuthorParams>>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Author>)> {
    // Accept the name from the query string or a form-encoded body,
    // query string taking precedence
    let params = match (query, form) {
        (Some(Query(params)), _) => params,
        (None, Some(Form(params))) => params,
        (None, None) => {
            return Err(AppError::Validation("name parameter is required".to_string()))
        }
    };

    if params.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be blank".to_string()));
    }

    let author = state.services.library.create_author(&params.name).await?;
    let location = format!("/api/authors/{}", author.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(author),
    ))
}

/// Attach a new book to an author
#[utoipa::path(
    post,
    path = "/authors/{id}/books",
    tag = "authors",
    params(
        ("id" = i32, Path, description = "Author ID"),
        ("title" = String, Query, description = "Title of the new book")
    ),
    responses(
        (status = 201, description = "Book created", body = Book,
         headers(("Location" = String, description = "URL of the created book"))),
        (status = 400, description = "Blank title", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    query: Option<Query<AddBookParams>>,
    form: Option<Form<AddBookParams>>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Book>)> {
    let params = match (query, form) {
        (Some(Query(params)), _) => params,
        (None, Some(Form(params))) => params,
        (None, None) => {
            return Err(AppError::Validation("title parameter is required".to_string()))
        }
    };

    if params.title.trim().is_empty() {
        return Err(AppError::Validation("title must not be blank".to_string()));
    }

    let book = state.services.library.add_book(id, &params.title).await?;
    let location = format!("/api/books/{}", book.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(book),
    ))
}
