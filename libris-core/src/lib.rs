//! Core library for Libris.
//!
//! This crate provides the domain model and the in-memory catalog store for
//! Libris, independent of any transport layer.
//!
//! # Usage
//!
//! ```
//! use libris_core::models::Book;
//! use libris_core::store::{IdAllocator, Library};
//!
//! let ids = IdAllocator::new();
//! let mut library = Library::new();
//!
//! library.add_book(Book::new(&ids, "1965", "Dune", "Frank Herbert"));
//!
//! assert_eq!(library.search_by_author("frank herbert").len(), 1);
//! ```

pub mod models;
pub mod store;

// Re-export commonly used types at crate root
pub use models::Book;
pub use store::{IdAllocator, Library};
