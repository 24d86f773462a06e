//! Data models for Shelf

pub mod book;
pub mod member;

// Re-export commonly used types
pub use book::{Book, BookQuery, CreateBook, UpdateBook};
pub use member::{CreateMember, Member, UpdateMember};
