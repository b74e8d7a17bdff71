//! The library store.
//!
//! A `Library` owns its storage backend and a single in-memory copy of the
//! collection. Every mutation is persisted immediately; if persisting fails
//! the in-memory change is rolled back, so the copy never runs ahead of what
//! is stored. `search` and `refresh` reload from the backend first.

use tracing::{debug, info, warn};

use crate::error::{Result, ShelfError};
use crate::storage::{normalize_title, Book, BookStore, LibraryStats, NewBook};

/// An ordered, title-unique book collection bound to a storage backend.
#[derive(Debug)]
pub struct Library<S: BookStore> {
    store: S,
    books: Vec<Book>,
}

impl<S: BookStore> Library<S> {
    /// Open a library by loading the store's current collection.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Storage` if the store cannot be read or holds
    /// malformed data.
    pub fn open(store: S) -> Result<Self> {
        let books = store.load()?;
        debug!(location = %store.location(), count = books.len(), "opened library");
        Ok(Self { store, books })
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the library, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Replace the in-memory copy with the store's current collection.
    pub fn refresh(&mut self) -> Result<()> {
        self.books = self.store.load()?;
        Ok(())
    }

    /// Add a book and persist the collection.
    ///
    /// # Errors
    ///
    /// - `ShelfError::InvalidInput` if the title is empty after trimming
    /// - `ShelfError::DuplicateTitle` if a book with the same normalized title exists
    /// - `ShelfError::Storage` if persisting fails (the library is left unchanged)
    pub fn add(&mut self, new_book: NewBook) -> Result<&Book> {
        let book = new_book.into_book();
        if book.title.is_empty() {
            return Err(ShelfError::InvalidInput("title cannot be empty".to_string()));
        }
        if self.position(&book.title).is_some() {
            warn!(title = %book.title, "rejected duplicate title");
            return Err(ShelfError::DuplicateTitle(book.title));
        }

        self.books.push(book);
        if let Err(err) = self.store.save(&self.books) {
            self.books.pop();
            return Err(err);
        }

        let added = &self.books[self.books.len() - 1];
        info!(title = %added.title, "added book");
        Ok(added)
    }

    /// Remove every book whose normalized title matches and persist.
    ///
    /// Returns the removed book.
    ///
    /// # Errors
    ///
    /// - `ShelfError::NotFound` if no book has that title
    /// - `ShelfError::Storage` if persisting fails (the library is left unchanged)
    pub fn remove(&mut self, title: &str) -> Result<Book> {
        let key = normalize_title(title);
        let (removed, kept): (Vec<Book>, Vec<Book>) = self
            .books
            .iter()
            .cloned()
            .partition(|book| normalize_title(&book.title) == key);

        let Some(first) = removed.into_iter().next() else {
            warn!(title = %key, "remove of unknown title");
            return Err(ShelfError::NotFound(key));
        };

        self.store.save(&kept)?;
        self.books = kept;
        info!(title = %first.title, "removed book");
        Ok(first)
    }

    /// Reload from storage, then return every book whose title or author
    /// contains `term` case-insensitively.
    ///
    /// An empty result is not an error.
    pub fn search(&mut self, term: &str) -> Result<Vec<Book>> {
        self.refresh()?;
        let needle = term.to_lowercase();
        let results: Vec<Book> = self
            .books
            .iter()
            .filter(|book| book.matches(&needle))
            .cloned()
            .collect();
        debug!(term = %needle, matches = results.len(), "searched library");
        Ok(results)
    }

    /// All books in insertion order.
    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    /// Look up a single book by title (any case).
    pub fn get(&self, title: &str) -> Option<&Book> {
        let key = normalize_title(title);
        self.position(&key).map(|idx| &self.books[idx])
    }

    /// Total count and read percentage.
    pub fn statistics(&self) -> LibraryStats {
        LibraryStats::from_books(&self.books)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.books
            .iter()
            .position(|book| normalize_title(&book.title) == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn library() -> Library<MemoryStore> {
        Library::open(MemoryStore::new()).unwrap()
    }

    fn tolkien_shelf() -> Library<MemoryStore> {
        let mut lib = library();
        lib.add(NewBook::new("The Hobbit", "J.R.R. Tolkien").with_read(true))
            .unwrap();
        lib.add(NewBook::new("Dune", "Frank Herbert")).unwrap();
        lib.add(NewBook::new("Tolkien: A Biography", "Humphrey Carpenter"))
            .unwrap();
        lib.add(NewBook::new("Emma", "Jane Austen").with_read(true))
            .unwrap();
        lib
    }

    #[test]
    fn test_add_normalizes_and_persists() {
        let mut lib = library();
        let added = lib
            .add(
                NewBook::new("Dune", "Frank Herbert")
                    .with_year("1965")
                    .with_genre("Sci-Fi")
                    .with_read(true),
            )
            .unwrap();
        assert_eq!(added.title, "dune");

        let stored = lib.store().load().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "dune");
        assert!(stored[0].read);
    }

    #[test]
    fn test_duplicate_add_any_case_is_rejected() {
        let mut lib = library();
        lib.add(NewBook::new("Dune", "Frank Herbert")).unwrap();
        let before = lib.list_all().to_vec();

        let err = lib.add(NewBook::new("DUNE", "Someone Else")).unwrap_err();

        assert!(matches!(err, ShelfError::DuplicateTitle(ref t) if t == "dune"));
        assert_eq!(lib.list_all(), before.as_slice());
        assert_eq!(lib.store().save_count(), 1);
    }

    #[test]
    fn test_titles_stay_unique() {
        let mut lib = library();
        for title in ["Dune", "dune", " DUNE ", "Emma", "emma", "Dune Messiah"] {
            let _ = lib.add(NewBook::new(title, "x"));
        }
        let mut titles: Vec<String> = lib.list_all().iter().map(|b| b.title.clone()).collect();
        assert_eq!(titles, vec!["dune", "emma", "dune messiah"]);
        titles.dedup();
        assert_eq!(titles.len(), lib.len());
    }

    #[test]
    fn test_empty_title_is_invalid() {
        let mut lib = library();
        let err = lib.add(NewBook::new("   ", "x")).unwrap_err();
        assert!(matches!(err, ShelfError::InvalidInput(_)));
        assert!(lib.is_empty());
    }

    #[test]
    fn test_free_text_fields_may_be_empty() {
        let mut lib = library();
        lib.add(NewBook::new("Untitled Notes", "")).unwrap();
        assert_eq!(lib.get("untitled notes").unwrap().author, "");
    }

    #[test]
    fn test_remove_existing() {
        let mut lib = tolkien_shelf();
        let removed = lib.remove("  dUNe ").unwrap();

        assert_eq!(removed.title, "dune");
        assert_eq!(lib.len(), 3);
        assert!(lib.get("dune").is_none());
        assert_eq!(lib.store().load().unwrap().len(), 3);
    }

    #[test]
    fn test_remove_missing_reports_not_found() {
        let mut lib = tolkien_shelf();
        let saves = lib.store().save_count();

        let err = lib.remove("Neuromancer").unwrap_err();

        assert!(matches!(err, ShelfError::NotFound(ref t) if t == "neuromancer"));
        assert_eq!(lib.len(), 4);
        assert_eq!(lib.store().save_count(), saves);
    }

    #[test]
    fn test_search_title_or_author() {
        let mut lib = tolkien_shelf();
        let titles: Vec<String> = lib
            .search("TOLKIEN")
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["the hobbit", "tolkien: a biography"]);
    }

    #[test]
    fn test_search_no_matches_is_empty() {
        let mut lib = tolkien_shelf();
        assert!(lib.search("pratchett").unwrap().is_empty());
    }

    #[test]
    fn test_search_sees_latest_persisted_state() {
        let mut lib = library();
        lib.add(NewBook::new("Dune", "Frank Herbert")).unwrap();

        let mut store = lib.into_store();
        store.replace(vec![NewBook::new("Neuromancer", "William Gibson").into_book()]);
        let mut lib = Library {
            store,
            books: vec![NewBook::new("Dune", "Frank Herbert").into_book()],
        };

        assert!(lib.search("herbert").unwrap().is_empty());
        assert_eq!(lib.search("gibson").unwrap().len(), 1);
        assert_eq!(lib.list_all()[0].title, "neuromancer");
    }

    #[test]
    fn test_failed_save_rolls_back_add() {
        let mut store = MemoryStore::new();
        store.fail_saves(true);
        let mut lib = Library::open(store).unwrap();

        let err = lib.add(NewBook::new("Dune", "Frank Herbert")).unwrap_err();

        assert!(matches!(err, ShelfError::Storage(_)));
        assert!(lib.is_empty());
    }

    #[test]
    fn test_failed_save_rolls_back_remove() {
        let mut store = MemoryStore::with_books(vec![NewBook::new("Dune", "x").into_book()]);
        store.fail_saves(true);
        let mut lib = Library::open(store).unwrap();

        assert!(lib.remove("dune").is_err());
        assert_eq!(lib.len(), 1);
    }

    #[test]
    fn test_statistics() {
        let lib = tolkien_shelf();
        let stats = lib.statistics();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.read, 2);
        assert_eq!(stats.percent_display(), "50.00");

        let empty = library().statistics();
        assert_eq!(empty.total, 0);
        assert_eq!(empty.percent_display(), "0.00");
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let lib = tolkien_shelf();
        let titles: Vec<&str> = lib.list_all().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["the hobbit", "dune", "tolkien: a biography", "emma"]
        );
    }
}
