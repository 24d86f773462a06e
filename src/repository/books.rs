//! Book collection

use crate::models::book::{Book, CreateBook, UpdateBook, DEFAULT_YEAR};

use super::store::Resource;

impl Resource for Book {
    type Draft = CreateBook;
    type Patch = UpdateBook;

    const NAME: &'static str = "Book";

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: CreateBook) -> Self {
        Self {
            id,
            title: draft.title.unwrap_or_default(),
            author: draft.author.unwrap_or_default(),
            year: draft.year.unwrap_or(DEFAULT_YEAR),
        }
    }

    fn apply(&mut self, patch: UpdateBook) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
    }

    fn text_field(&self, field: &str) -> Option<&str> {
        match field {
            "title" => Some(&self.title),
            "author" => Some(&self.author),
            _ => None,
        }
    }
}

/// Books present at startup when sample data is enabled
pub fn sample_books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "Mastery".to_string(),
            author: "Robert Greene".to_string(),
            year: 2012,
        },
        Book {
            id: 2,
            title: "Rich Dad Poor Dad".to_string(),
            author: "Robert T. Kiyosaki".to_string(),
            year: 1997,
        },
    ]
}
