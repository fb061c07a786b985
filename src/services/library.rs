//! Library catalog service
//!
//! The domain core: create authors, attach books, read the catalog back.
//! Blank-text validation happens at the HTTP boundary; these operations
//! persist whatever text they are given, verbatim. No failure is recovered
//! locally, every error is terminal for the current request.

use crate::{
    error::AppResult,
    models::{Author, Book},
    repository::Repository,
};

#[derive(Clone)]
pub struct LibraryService {
    repository: Repository,
}

impl LibraryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new author with an empty book collection
    pub async fn create_author(&self, name: &str) -> AppResult<Author> {
        self.repository.authors.create(name).await
    }

    /// Attach a new book to an existing author.
    ///
    /// Runs atomically against storage; an unknown author id fails with
    /// NotFound and writes nothing. Deliberately not idempotent: each call
    /// creates a distinct book, even for identical author/title pairs.
    pub async fn add_book(&self, author_id: i32, title: &str) -> AppResult<Book> {
        let book = self.repository.authors.add_book(author_id, title).await?;
        tracing::info!("Added book id={} to author id={}", book.id, author_id);
        Ok(book)
    }

    /// Get a book by id
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.find_by_id(id).await
    }

    /// List all authors with their books embedded
    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.find_all().await
    }

    /// Check that the backing store is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }

    /// Seed a demo author and book when the catalog is empty.
    ///
    /// Called once at startup by the process entry point; a non-empty
    /// catalog makes this a no-op so restarts never duplicate the demo data.
    pub async fn seed_demo_data(&self) -> AppResult<()> {
        if self.repository.authors.count().await? > 0 {
            return Ok(());
        }

        tracing::info!("Catalog is empty, seeding demo data");
        let author = self.create_author("Gabriel García Márquez").await?;
        self.add_book(author.id, "Cien años de soledad").await?;
        Ok(())
    }
}
