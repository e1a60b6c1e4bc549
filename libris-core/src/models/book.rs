use serde::{Deserialize, Serialize};

use crate::store::IdAllocator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub year: String,
    pub name: String,
    pub author: String,
}

impl Book {
    /// Construct a book with a fresh id drawn from the shared allocator.
    ///
    /// Field contents are stored as-is; empty strings are accepted. The
    /// allocator advances exactly once per constructed book, whether or not
    /// the book is ever added to a library.
    pub fn new(ids: &IdAllocator, year: &str, name: &str, author: &str) -> Self {
        Self {
            id: ids.next_id(),
            year: year.to_string(),
            name: name.to_string(),
            author: author.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookInput {
    pub name: String,
    pub author: String,
    pub year: String,
}
