//! Generic in-memory collection shared by books and members

use std::sync::Arc;

use tokio::sync::RwLock;
use validator::Validate;

use crate::{
    config::IdAllocation,
    error::{AppError, AppResult},
};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 5;

/// A record type that can live in a [`ResourceStore`]
pub trait Resource: Clone + Send + Sync + 'static {
    /// Create payload; validated before an id is assigned
    type Draft: Validate + Send;
    /// Partial update payload
    type Patch: Send;

    /// Display name used in error messages ("Book not found")
    const NAME: &'static str;

    fn id(&self) -> u64;

    /// Build a record from an already validated draft, applying defaults
    fn from_draft(id: u64, draft: Self::Draft) -> Self;

    /// Overwrite every field set in `patch`. Never touches the id.
    fn apply(&mut self, patch: Self::Patch);

    /// Text value of a filterable field
    fn text_field(&self, field: &str) -> Option<&str>;
}

/// Case-insensitive substring match on one named text field
#[derive(Debug, Clone)]
pub struct Filter {
    field: &'static str,
    needle: String,
}

impl Filter {
    pub fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            needle: value.to_lowercase(),
        }
    }

    fn matches<T: Resource>(&self, record: &T) -> bool {
        record
            .text_field(self.field)
            .is_some_and(|text| text.to_lowercase().contains(&self.needle))
    }
}

/// One-based page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u64,
    pub per_page: u64,
}

impl Page {
    pub fn new(page: Option<u64>, per_page: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE),
        }
    }

    fn offset(&self) -> usize {
        let offset = self.page.saturating_sub(1).saturating_mul(self.per_page);
        usize::try_from(offset).unwrap_or(usize::MAX)
    }

    fn limit(&self) -> usize {
        usize::try_from(self.per_page).unwrap_or(usize::MAX)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

struct Collection<T> {
    records: Vec<T>,
    /// Highest id ever handed out
    high_water: u64,
}

impl<T: Resource> Collection<T> {
    fn next_id(&self, allocation: IdAllocation) -> u64 {
        match allocation {
            IdAllocation::CollectionSize => self.records.len() as u64 + 1,
            IdAllocation::Monotonic => self.high_water + 1,
        }
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

/// Insertion-ordered, lock-protected collection of `T`.
///
/// Cloning yields another handle to the same collection. Mutations hold the
/// write guard for their whole read-modify-write, so a failed create, update
/// or delete leaves the collection untouched.
pub struct ResourceStore<T> {
    inner: Arc<RwLock<Collection<T>>>,
    allocation: IdAllocation,
}

impl<T> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            allocation: self.allocation,
        }
    }
}

impl<T: Resource> ResourceStore<T> {
    pub fn new(allocation: IdAllocation) -> Self {
        Self::with_records(allocation, Vec::new())
    }

    /// Start from existing records, kept in the given order
    pub fn with_records(allocation: IdAllocation, records: Vec<T>) -> Self {
        let high_water = records.iter().map(|record| record.id()).max().unwrap_or(0);
        Self {
            inner: Arc::new(RwLock::new(Collection {
                records,
                high_water,
            })),
            allocation,
        }
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.records.len()
    }

    /// Validate the draft, assign an id and append the new record
    pub async fn create(&self, draft: T::Draft) -> AppResult<T> {
        draft.validate()?;

        let mut collection = self.inner.write().await;
        let id = collection.next_id(self.allocation);
        if self.allocation == IdAllocation::Monotonic && collection.position(id).is_some() {
            return Err(AppError::Internal(format!(
                "{} id {} allocated twice",
                T::NAME,
                id
            )));
        }

        let record = T::from_draft(id, draft);
        collection.records.push(record.clone());
        collection.high_water = collection.high_water.max(id);
        Ok(record)
    }

    /// Records matching every filter, in insertion order, optionally windowed.
    /// A window past the end is empty, not an error.
    pub async fn list(&self, filters: &[Filter], page: Option<Page>) -> Vec<T> {
        let collection = self.inner.read().await;
        let matching = collection
            .records
            .iter()
            .filter(|record| filters.iter().all(|filter| filter.matches(*record)));

        match page {
            Some(page) => matching
                .skip(page.offset())
                .take(page.limit())
                .cloned()
                .collect(),
            None => matching.cloned().collect(),
        }
    }

    pub async fn update(&self, id: u64, patch: T::Patch) -> AppResult<T> {
        let mut collection = self.inner.write().await;
        let record = collection
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(not_found::<T>)?;

        record.apply(patch);
        Ok(record.clone())
    }

    /// Remove the first record carrying `id`
    pub async fn delete(&self, id: u64) -> AppResult<()> {
        let mut collection = self.inner.write().await;
        let index = collection.position(id).ok_or_else(not_found::<T>)?;
        collection.records.remove(index);
        Ok(())
    }
}

fn not_found<T: Resource>() -> AppError {
    AppError::NotFound(format!("{} not found", T::NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, CreateBook, UpdateBook};

    fn draft(title: &str, author: &str) -> CreateBook {
        CreateBook {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            year: None,
        }
    }

    async fn store_with(titles: &[(&str, &str)]) -> ResourceStore<Book> {
        let store = ResourceStore::new(IdAllocation::CollectionSize);
        for (title, author) in titles {
            store.create(draft(title, author)).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids_and_default_year() {
        let store = ResourceStore::<Book>::new(IdAllocation::CollectionSize);
        let book = store.create(draft("Foo", "Bar")).await.unwrap();
        assert_eq!(
            book,
            Book {
                id: 1,
                title: "Foo".into(),
                author: "Bar".into(),
                year: 2023,
            }
        );

        let second = store.create(draft("Baz", "Qux")).await.unwrap();
        assert_eq!(second.id, 2);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields_without_mutation() {
        let store = store_with(&[("Foo", "Bar")]).await;
        let result = store
            .create(CreateBook {
                title: Some(String::new()),
                author: None,
                year: Some(1999),
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_list_pagination_window() {
        let store = store_with(&[("One", "A"), ("Two", "B")]).await;

        let first = store.list(&[], Some(Page::new(Some(1), Some(1)))).await;
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].title, "One");

        let second = store.list(&[], Some(Page::new(Some(2), Some(1)))).await;
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].title, "Two");

        assert!(store.list(&[], Some(Page::new(Some(3), Some(1)))).await.is_empty());
        assert!(store
            .list(&[], Some(Page::new(Some(u64::MAX), Some(u64::MAX))))
            .await
            .is_empty());
        assert_eq!(store.list(&[], Some(Page::default())).await.len(), 2);
    }

    #[tokio::test]
    async fn test_list_default_page_size() {
        let titles: Vec<(String, String)> =
            (0..7).map(|i| (format!("Book {i}"), "Anon".to_string())).collect();
        let store = ResourceStore::<Book>::new(IdAllocation::CollectionSize);
        for (title, author) in &titles {
            store.create(draft(title, author)).await.unwrap();
        }

        let page = store.list(&[], Some(Page::default())).await;
        assert_eq!(page.len(), 5);
        assert_eq!(page[4].title, "Book 4");
        assert_eq!(store.list(&[], None).await.len(), 7);
    }

    #[tokio::test]
    async fn test_list_filters_are_case_insensitive_and_combined() {
        let store = store_with(&[
            ("Mastery", "Robert Greene"),
            ("Rich Dad Poor Dad", "Robert T. Kiyosaki"),
            ("The 48 Laws of Power", "Robert Greene"),
        ])
        .await;

        let by_author = store.list(&[Filter::new("author", "GREENE")], None).await;
        assert_eq!(by_author.len(), 2);

        let both = store
            .list(
                &[Filter::new("title", "laws"), Filter::new("author", "greene")],
                None,
            )
            .await;
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].id, 3);

        let none = store.list(&[Filter::new("title", "missing")], None).await;
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_created_record_found_by_its_fields() {
        let store = store_with(&[("Dune", "Frank Herbert")]).await;
        let created = store.create(draft("Emma", "Jane Austen")).await.unwrap();
        let found = store
            .list(
                &[Filter::new("title", "Emma"), Filter::new("author", "Jane Austen")],
                Some(Page::default()),
            )
            .await;
        assert_eq!(found, vec![created]);
    }

    #[tokio::test]
    async fn test_update_overwrites_present_fields_only() {
        let store = store_with(&[("Foo", "Bar")]).await;

        let unchanged = store.update(1, UpdateBook::default()).await.unwrap();
        assert_eq!(unchanged.title, "Foo");
        assert_eq!(unchanged.year, 2023);

        let updated = store
            .update(
                1,
                UpdateBook {
                    year: Some(1965),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.title, "Foo");
        assert_eq!(updated.author, "Bar");
        assert_eq!(updated.year, 1965);
        assert_eq!(store.list(&[], None).await, vec![updated]);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_id() {
        let store = store_with(&[("Foo", "Bar")]).await;

        let update = store.update(9, UpdateBook::default()).await;
        assert!(matches!(update, Err(AppError::NotFound(msg)) if msg == "Book not found"));

        let delete = store.delete(9).await;
        assert!(matches!(delete, Err(AppError::NotFound(_))));
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_delete_then_create_reuses_collection_size_id() {
        let store = store_with(&[("One", "A"), ("Two", "B")]).await;
        store.delete(1).await.unwrap();

        let remaining = store.list(&[], None).await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);

        // size is 1 again, so the new record collides with id 2
        let created = store.create(draft("Three", "C")).await.unwrap();
        assert_eq!(created.id, 2);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn test_monotonic_allocation_never_reuses_ids() {
        let store = ResourceStore::<Book>::new(IdAllocation::Monotonic);
        store.create(draft("One", "A")).await.unwrap();
        store.create(draft("Two", "B")).await.unwrap();
        store.delete(2).await.unwrap();

        let created = store.create(draft("Three", "C")).await.unwrap();
        assert_eq!(created.id, 3);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = ResourceStore::<Book>::new(IdAllocation::CollectionSize);
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(draft(&format!("B{i}"), "X")).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=16).collect::<Vec<u64>>());
    }
}
