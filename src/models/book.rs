//! Book models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A book as returned standalone (`GET /books/{id}`).
///
/// The owning author is exposed as a plain identifier, never as an embedded
/// object, so the ownership cycle cannot recurse through serialization.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
}

/// A book as embedded in its author's collection.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookShort {
    pub id: i32,
    pub title: String,
}
