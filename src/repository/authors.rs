//! Authors repository for database operations.
//!
//! The authors repository owns the Author aggregate: an author row plus the
//! books that reference it. Attaching a book runs inside one transaction so
//! the author lookup and the book insert are never visible independently.

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        author::Author,
        book::{Book, BookShort},
    },
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// List all authors, each with its full book collection.
    /// Ordered by id so the listing is stable for a given catalog state.
    pub async fn find_all(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query("SELECT id, name FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let mut authors = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i32 = row.get("id");
            authors.push(Author {
                id,
                name: row.get("name"),
                books: self.get_author_books(id).await?,
            });
        }

        Ok(authors)
    }

    /// Count authors (used by the startup seeding check)
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Load all books owned by an author, in insertion order
    async fn get_author_books(&self, author_id: i32) -> AppResult<Vec<BookShort>> {
        let books = sqlx::query_as::<_, BookShort>(
            "SELECT id, title FROM books WHERE author_id = $1 ORDER BY id",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    // =========================================================================
    // CREATE
    // =========================================================================

    /// Create a new author with an empty book collection
    pub async fn create(&self, name: &str) -> AppResult<Author> {
        let id =
            sqlx::query_scalar::<_, i32>("INSERT INTO authors (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        Ok(Author {
            id,
            name: name.to_string(),
            books: Vec::new(),
        })
    }

    /// Attach a new book to an existing author.
    ///
    /// Runs as a single transaction: the author lookup and the book insert
    /// succeed together or not at all. An unknown author leaves no book row
    /// behind (the transaction rolls back on drop).
    pub async fn add_book(&self, author_id: i32, title: &str) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i32> = sqlx::query_scalar("SELECT id FROM authors WHERE id = $1")
            .bind(author_id)
            .fetch_optional(&mut *tx)
            .await?;

        if exists.is_none() {
            return Err(AppError::NotFound(format!(
                "Author with id {} not found",
                author_id
            )));
        }

        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO books (title, author_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(title)
        .bind(author_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Book {
            id,
            title: title.to_string(),
            author_id,
        })
    }
}
