//! Movie records and watch filters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single watchlist entry.
///
/// Identity is positional: a record is addressed by its index in the
/// collection, and deleting an entry shifts every entry after it. The
/// persisted form uses camelCase field names (`isWatched`), and the watched
/// flag is optional so store files written before the flag existed still
/// load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Movie title. Letters and whitespace only, enforced at add time.
    pub name: String,
    /// Release year. Exactly four digits, enforced at add time.
    pub year: String,
    /// Whether the movie has been watched.
    #[serde(default)]
    pub is_watched: bool,
}

impl Movie {
    /// Creates an unwatched movie.
    #[must_use]
    pub const fn new(name: String, year: String) -> Self {
        Self {
            name,
            year,
            is_watched: false,
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.year)
    }
}

/// Selector for the derived view of the collection.
///
/// The view is recomputed from the full collection on demand; it is never
/// persisted and holds no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchFilter {
    /// Every record.
    #[default]
    All,
    /// Only records marked watched.
    Watched,
    /// Only records not marked watched.
    Unwatched,
}

impl WatchFilter {
    /// Returns all filter variants.
    #[must_use]
    pub const fn all_variants() -> &'static [Self] {
        &[Self::All, Self::Watched, Self::Unwatched]
    }

    /// Returns the filter as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Watched => "watched",
            Self::Unwatched => "unwatched",
        }
    }

    /// Parses a filter from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(Self::All),
            "watched" => Some(Self::Watched),
            "unwatched" => Some(Self::Unwatched),
            _ => None,
        }
    }

    /// Returns true when `movie` belongs to this section.
    #[must_use]
    pub const fn matches(&self, movie: &Movie) -> bool {
        match self {
            Self::All => true,
            Self::Watched => movie.is_watched,
            Self::Unwatched => !movie.is_watched,
        }
    }
}

impl fmt::Display for WatchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_movie_is_unwatched() {
        let movie = Movie::new("Inception".to_string(), "2010".to_string());
        assert!(!movie.is_watched);
        assert_eq!(movie.to_string(), "Inception (2010)");
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let movie = Movie {
            name: "Heat".to_string(),
            year: "1995".to_string(),
            is_watched: true,
        };
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["isWatched"], serde_json::Value::Bool(true));
    }

    #[test]
    fn test_deserialize_without_watched_flag() {
        let movie: Movie = serde_json::from_str(r#"{"name":"Heat","year":"1995"}"#).unwrap();
        assert!(!movie.is_watched);
    }

    #[test]
    fn test_filter_parse_roundtrips() {
        for filter in WatchFilter::all_variants() {
            assert_eq!(WatchFilter::parse(filter.as_str()), Some(*filter));
        }
        assert_eq!(WatchFilter::parse("WATCHED"), Some(WatchFilter::Watched));
        assert_eq!(WatchFilter::parse("favorites"), None);
    }

    #[test]
    fn test_filter_matches() {
        let watched = Movie {
            name: "Alien".to_string(),
            year: "1979".to_string(),
            is_watched: true,
        };
        let unwatched = Movie::new("Dune".to_string(), "2021".to_string());

        assert!(WatchFilter::All.matches(&watched));
        assert!(WatchFilter::All.matches(&unwatched));
        assert!(WatchFilter::Watched.matches(&watched));
        assert!(!WatchFilter::Watched.matches(&unwatched));
        assert!(!WatchFilter::Unwatched.matches(&watched));
        assert!(WatchFilter::Unwatched.matches(&unwatched));
    }
}
