//! In-memory catalog storage.
//!
//! `Library` owns the ordered sequence of books. `IdAllocator` is the
//! process-wide id sequence shared by everything that constructs a [`Book`];
//! one allocator per process keeps ids unique and strictly increasing no
//! matter how many libraries exist.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::Book;

/// Shared book id sequence.
///
/// Hands out strictly increasing ids starting at 1. Callable through a
/// shared reference, so concurrent construction stays safe.
#[derive(Debug, Default)]
pub struct IdAllocator {
    sequence: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            sequence: AtomicU64::new(0),
        }
    }

    /// Next unused id: previous maximum + 1.
    pub fn next_id(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The last id handed out, 0 if none yet.
    pub fn current(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }
}

/// The in-memory book catalog.
///
/// Insertion order is preserved and duplicates are permitted. Every query
/// returns an owned snapshot, never a view into the live sequence, so a
/// result list is unaffected by later mutations.
#[derive(Debug, Default)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Append a book to the end of the catalog. No duplicate check.
    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Remove every book whose name equals `name` exactly (case-sensitive).
    ///
    /// Returns `true` only if exactly one book was removed. When several
    /// books share the name, all of them are removed but the call still
    /// reports `false`; callers that surface the result as "not found"
    /// should be aware of this.
    pub fn remove_book(&mut self, name: &str) -> bool {
        let before = self.books.len();
        self.books.retain(|book| book.name != name);
        before - self.books.len() == 1
    }

    /// All books whose name equals `name`, ignoring case.
    pub fn search_by_name(&self, name: &str) -> Vec<Book> {
        let needle = name.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.name.to_lowercase() == needle)
            .cloned()
            .collect()
    }

    /// All books whose author equals `author`, ignoring case.
    pub fn search_by_author(&self, author: &str) -> Vec<Book> {
        let needle = author.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.author.to_lowercase() == needle)
            .cloned()
            .collect()
    }

    /// Snapshot of the full catalog in insertion order.
    pub fn list_all_books(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Number of books currently held.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_starts_at_one() {
        let ids = IdAllocator::new();
        assert_eq!(ids.current(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.current(), 2);
    }

    #[test]
    fn allocator_is_shared_through_a_reference() {
        let ids = IdAllocator::new();
        let first = Book::new(&ids, "1965", "Dune", "Frank Herbert");
        let second = Book::new(&ids, "1969", "Dune Messiah", "Frank Herbert");
        assert!(second.id > first.id);
    }

    #[test]
    fn new_library_is_empty() {
        let library = Library::new();
        assert!(library.is_empty());
        assert_eq!(library.len(), 0);
        assert!(library.list_all_books().is_empty());
    }
}
