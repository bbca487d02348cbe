//! Property-based tests for validation and collection invariants.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Valid pairs always append at the end
//! - Invalid names and years never mutate the collection
//! - Deletion preserves the relative order of survivors
//! - Filters partition the collection
//! - Persist/load round-trips reproduce an equal collection

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use cinelog::models::{Movie, WatchFilter};
use cinelog::services::WatchlistService;
use cinelog::storage::{MemoryBackend, Store};
use proptest::prelude::*;
use std::sync::Arc;

fn memory_service() -> WatchlistService {
    WatchlistService::new(Store::new(Arc::new(MemoryBackend::new())))
}

/// Strategy for names that pass validation.
fn valid_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,30}"
}

/// Strategy for years that pass validation.
fn valid_year() -> impl Strategy<Value = String> {
    "[0-9]{4}"
}

proptest! {
    /// Property: a valid pair always appends at the end, unwatched.
    #[test]
    fn prop_valid_pairs_append_at_end(
        seed in prop::collection::vec((valid_name(), valid_year()), 0..5),
        name in valid_name(),
        year in valid_year(),
    ) {
        let mut service = memory_service();
        for (n, y) in &seed {
            service.add(n, y).unwrap();
        }

        let index = service.add(&name, &year).unwrap();
        prop_assert_eq!(index, seed.len());
        let last = &service.movies()[index];
        prop_assert_eq!(&last.name, &name);
        prop_assert_eq!(&last.year, &year);
        prop_assert!(!last.is_watched);
    }

    /// Property: a name containing a digit or symbol is rejected and the
    /// collection length is unchanged.
    #[test]
    fn prop_name_with_digit_or_symbol_rejected(
        prefix in "[A-Za-z ]{0,10}",
        bad in "[0-9!@#$%^&*()_+=:;,.?/-]",
        suffix in "[A-Za-z ]{0,10}",
        year in valid_year(),
    ) {
        let mut service = memory_service();
        service.add("Alien", "1979").unwrap();

        let name = format!("{prefix}{bad}{suffix}");
        prop_assert!(service.add(&name, &year).is_err());
        prop_assert_eq!(service.len(), 1);
    }

    /// Property: a year that is not exactly four digits is rejected.
    #[test]
    fn prop_wrong_length_year_rejected(
        name in valid_name(),
        year in "[0-9]{1,3}|[0-9]{5,8}",
    ) {
        let mut service = memory_service();
        prop_assert!(service.add(&name, &year).is_err());
        prop_assert_eq!(service.len(), 0);
    }

    /// Property: a year containing a non-digit is rejected.
    #[test]
    fn prop_non_digit_year_rejected(
        name in valid_name(),
        year in "[0-9]{0,2}[a-zA-Z ][0-9]{0,2}",
    ) {
        let mut service = memory_service();
        prop_assert!(service.add(&name, &year).is_err());
        prop_assert_eq!(service.len(), 0);
    }

    /// Property: deleting index i keeps every other record in its original
    /// relative order.
    #[test]
    fn prop_delete_preserves_relative_order(
        (movies, index) in prop::collection::vec((valid_name(), valid_year()), 1..8)
            .prop_flat_map(|movies| {
                let len = movies.len();
                (Just(movies), 0..len)
            }),
    ) {
        let mut service = memory_service();
        for (n, y) in &movies {
            service.add(n, y).unwrap();
        }

        service.delete(index).unwrap();

        let mut expected = movies.clone();
        expected.remove(index);
        let survivors: Vec<_> = service
            .movies()
            .iter()
            .map(|m| (m.name.clone(), m.year.clone()))
            .collect();
        prop_assert_eq!(survivors, expected);
    }

    /// Property: the watched and unwatched views partition the full
    /// collection, preserving order.
    #[test]
    fn prop_filters_partition_collection(
        flags in prop::collection::vec(any::<bool>(), 0..10),
    ) {
        let mut service = memory_service();
        for (i, flag) in flags.iter().enumerate() {
            service.add("Placeholder", "2000").unwrap();
            service.set_watched(i, *flag).unwrap();
        }

        service.set_filter(WatchFilter::Watched);
        let watched: Vec<usize> = service.visible().iter().map(|(i, _)| *i).collect();
        service.set_filter(WatchFilter::Unwatched);
        let unwatched: Vec<usize> = service.visible().iter().map(|(i, _)| *i).collect();
        service.set_filter(WatchFilter::All);
        let all: Vec<usize> = service.visible().iter().map(|(i, _)| *i).collect();

        // The two views are disjoint and together cover every record.
        let mut merged: Vec<usize> = watched.iter().chain(unwatched.iter()).copied().collect();
        merged.sort_unstable();
        prop_assert_eq!(merged, all);
        for i in &watched {
            prop_assert!(service.movies()[*i].is_watched);
        }
        for i in &unwatched {
            prop_assert!(!service.movies()[*i].is_watched);
        }
    }

    /// Property: persisting then loading reproduces an equal collection.
    #[test]
    fn prop_persist_load_roundtrip(
        entries in prop::collection::vec((valid_name(), valid_year(), any::<bool>()), 0..8),
    ) {
        let store = Store::new(Arc::new(MemoryBackend::new()));
        let mut service = WatchlistService::new(store.clone());
        for (i, (n, y, watched)) in entries.iter().enumerate() {
            service.add(n, y).unwrap();
            service.set_watched(i, *watched).unwrap();
        }

        let reloaded = WatchlistService::open(store).unwrap();
        let expected: Vec<Movie> = entries
            .into_iter()
            .map(|(name, year, is_watched)| Movie { name, year, is_watched })
            .collect();
        prop_assert_eq!(reloaded.movies(), expected.as_slice());
    }
}
