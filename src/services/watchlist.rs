//! Watchlist record management.
//!
//! Owns the in-memory movie collection, keeps it synchronized with the store
//! under [`MOVIES_KEY`], and derives filtered views on demand.
//!
//! Every mutation is a full read-modify-write of the whole collection: the
//! in-memory list changes first, then the entire list is persisted as one
//! value. A failed write rolls the in-memory change back, so memory and
//! storage never diverge.

use crate::models::{Movie, WatchFilter, validation};
use crate::storage::Store;
use crate::{Error, Result};

/// Store key holding the serialized collection.
pub const MOVIES_KEY: &str = "movies";

/// Record manager for the movie collection.
pub struct WatchlistService {
    store: Store,
    movies: Vec<Movie>,
    filter: WatchFilter,
}

impl WatchlistService {
    /// Creates a service over the given store with an empty collection.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self {
            store,
            movies: Vec::new(),
            filter: WatchFilter::All,
        }
    }

    /// Creates a service and hydrates it from the store.
    ///
    /// # Errors
    ///
    /// Propagates the `StorageRead` failure; no service is returned.
    pub fn open(store: Store) -> Result<Self> {
        let mut service = Self::new(store);
        service.load()?;
        Ok(service)
    }

    /// Reloads the collection from the store.
    ///
    /// An absent key leaves the collection as it is; a present value replaces
    /// the in-memory collection wholesale (no merge). On a read failure the
    /// in-memory collection is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StorageRead` when the store cannot be read or decoded.
    pub fn load(&mut self) -> Result<usize> {
        if let Some(movies) = self.store.get::<Vec<Movie>>(MOVIES_KEY)? {
            self.movies = movies;
        }
        tracing::debug!(count = self.movies.len(), "loaded watchlist");
        Ok(self.movies.len())
    }

    /// Validates and appends a movie, then persists the collection.
    ///
    /// Validation order is fixed: presence of both fields, then the name
    /// pattern, then the year pattern. No mutation happens on a validation
    /// failure. Returns the index of the appended record.
    ///
    /// # Errors
    ///
    /// Returns `MissingFields`, `InvalidName`, or `InvalidYear` on bad input,
    /// or `StorageWrite` when persisting fails (the append is rolled back).
    pub fn add(&mut self, name: &str, year: &str) -> Result<usize> {
        validation::validate_entry(name, year)?;

        self.movies
            .push(Movie::new(name.to_string(), year.to_string()));

        if let Err(e) = self.persist() {
            self.movies.pop();
            return Err(e);
        }

        metrics::counter!("watchlist_added_total").increment(1);
        tracing::info!(name, year, "added movie");
        Ok(self.movies.len() - 1)
    }

    /// Removes the movie at `index`, preserving the relative order of the
    /// rest, then persists the collection.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` when `index` does not address the
    /// collection, or `StorageWrite` when persisting fails (the removal is
    /// rolled back).
    pub fn delete(&mut self, index: usize) -> Result<Movie> {
        self.check_index(index)?;
        let removed = self.movies.remove(index);

        match self.persist() {
            Ok(()) => {
                metrics::counter!("watchlist_deleted_total").increment(1);
                tracing::info!(index, name = %removed.name, "deleted movie");
                Ok(removed)
            },
            Err(e) => {
                self.movies.insert(index, removed);
                Err(e)
            },
        }
    }

    /// Replaces the name and year of the movie at `index`, then persists.
    ///
    /// The pair is re-validated with the same rules as [`Self::add`]. The
    /// record's watched flag is preserved.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange`, a validation error, or `StorageWrite` when
    /// persisting fails (the replacement is rolled back).
    pub fn update(&mut self, index: usize, name: &str, year: &str) -> Result<()> {
        self.check_index(index)?;
        validation::validate_entry(name, year)?;

        let previous = self.movies[index].clone();
        self.movies[index].name = name.to_string();
        self.movies[index].year = year.to_string();

        if let Err(e) = self.persist() {
            self.movies[index] = previous;
            return Err(e);
        }

        metrics::counter!("watchlist_updated_total").increment(1);
        tracing::info!(index, name, year, "updated movie");
        Ok(())
    }

    /// Sets the watched flag of the movie at `index`, then persists.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange`, or `StorageWrite` when persisting fails
    /// (the flag is rolled back).
    pub fn set_watched(&mut self, index: usize, watched: bool) -> Result<()> {
        self.check_index(index)?;

        let previous = self.movies[index].is_watched;
        self.movies[index].is_watched = watched;

        if let Err(e) = self.persist() {
            self.movies[index].is_watched = previous;
            return Err(e);
        }

        tracing::info!(index, watched, "marked movie");
        Ok(())
    }

    /// Selects the filter used by [`Self::visible`].
    pub fn set_filter(&mut self, filter: WatchFilter) {
        self.filter = filter;
    }

    /// Returns the current filter.
    #[must_use]
    pub const fn filter(&self) -> WatchFilter {
        self.filter
    }

    /// Returns the derived view: `(index, movie)` pairs matching the current
    /// filter, in collection order. Indexes refer to the full collection, so
    /// they stay valid for [`Self::delete`] and friends.
    ///
    /// An empty view is an informational condition, not an error.
    #[must_use]
    pub fn visible(&self) -> Vec<(usize, &Movie)> {
        self.movies
            .iter()
            .enumerate()
            .filter(|(_, movie)| self.filter.matches(movie))
            .collect()
    }

    /// Read access to the full collection.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Returns true when the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.movies.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.movies.len(),
            })
        }
    }

    fn persist(&self) -> Result<()> {
        self.store.set(MOVIES_KEY, &self.movies)
    }
}
