//! Author model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::book::BookShort;

/// An author with its owned books embedded, in insertion order.
///
/// This is both the persisted aggregate and the wire representation for
/// `GET /authors`. Books are embedded in their short form so the
/// Author -> Book -> Author cycle never appears in a response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub books: Vec<BookShort>,
}
