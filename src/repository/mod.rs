//! Repository layer for in-memory collections

pub mod books;
pub mod members;
pub mod store;

use crate::{
    config::StoreConfig,
    models::{Book, Member},
};

pub use store::{Filter, Page, Resource, ResourceStore};

/// Main repository struct holding one store per resource kind
#[derive(Clone)]
pub struct Repository {
    pub books: ResourceStore<Book>,
    pub members: ResourceStore<Member>,
}

impl Repository {
    /// Create the stores, seeded with sample records if configured
    pub fn new(config: &StoreConfig) -> Self {
        let (books, members) = if config.seed_samples {
            (books::sample_books(), members::sample_members())
        } else {
            (Vec::new(), Vec::new())
        };

        Self {
            books: ResourceStore::with_records(config.id_allocation, books),
            members: ResourceStore::with_records(config.id_allocation, members),
        }
    }
}
