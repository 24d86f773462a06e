//! Books service

use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
    repository::{Filter, Page, Repository},
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search by title and author, then paginate (page 1, 5 per page by default)
    pub async fn list(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        query.validate()?;

        let mut filters = Vec::new();
        if let Some(title) = query.title.as_deref().filter(|t| !t.is_empty()) {
            filters.push(Filter::new("title", title));
        }
        if let Some(author) = query.author.as_deref().filter(|a| !a.is_empty()) {
            filters.push(Filter::new("author", author));
        }

        let page = Page::new(query.page, query.per_page);
        Ok(self.repository.books.list(&filters, Some(page)).await)
    }

    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }

    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let book = self.repository.books.create(data).await?;
        let total = self.count().await;
        tracing::info!(book_id = book.id, total, "Book created");
        Ok(book)
    }

    pub async fn update(&self, id: u64, data: UpdateBook) -> AppResult<Book> {
        let book = self.repository.books.update(id, data).await?;
        tracing::info!(book_id = id, "Book updated");
        Ok(book)
    }

    pub async fn delete(&self, id: u64) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }
}
