//! Core domain types for the TMDB movie catalog.
//!
//! This module defines the normalized record the rest of the system works
//! with, plus the typed intermediate representation the embedded credit
//! fields are parsed into.

use serde::{Deserialize, Serialize};

/// Stable external identifier for a movie (the TMDB id)
pub type MovieId = u32;

// =============================================================================
// Embedded entity records
// =============================================================================

/// One named entity inside an embedded list (a genre, keyword, or cast entry).
///
/// The raw tables store these as JSON arrays embedded in a CSV cell, e.g.
/// `[{"id": 28, "name": "Action"}, ...]`. Only the name participates in
/// feature text; every other field is ignored on decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedEntity {
    pub name: String,
}

/// One crew entry from the credits table.
///
/// `job` is optional because malformed rows sometimes omit it; a crew member
/// without a job can never match the director scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    #[serde(default)]
    pub job: Option<String>,
}

// =============================================================================
// Normalized movie record
// =============================================================================

/// One normalized movie, as produced by the build pipeline.
///
/// Every text field defaults to the empty string rather than being absent, so
/// downstream feature composition never has to handle missing data. Records
/// are immutable after the build; their position in the [`Corpus`] is the row
/// and column index into the similarity matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub movie_id: MovieId,
    /// User-facing lookup key (exact, case-sensitive)
    pub title: String,
    pub overview: String,
    /// Space-joined genre names, in source order
    pub genres: String,
    /// Space-joined keyword names, in source order
    pub keywords: String,
    /// Space-joined cast names, in source order
    pub cast: String,
    /// Name of the first crew member whose job is "Director", or empty
    pub director: String,
}

// =============================================================================
// Corpus
// =============================================================================

/// The ordered catalog of movies forming the recommendation universe.
///
/// Insertion order is significant: a record's position here is the
/// authoritative join key into the similarity matrix, and must never be
/// re-sorted independently of it. The corpus is owned by the build pipeline
/// and read-only everywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    records: Vec<MovieRecord>,
}

impl Corpus {
    /// Wrap an already-ordered record sequence.
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by its row index.
    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.records.get(index)
    }

    /// Resolve a title to its row index.
    ///
    /// Exact, case-sensitive match. If multiple records share the title, the
    /// first by corpus order wins; duplicates are deliberately not collapsed.
    pub fn index_of_title(&self, title: &str) -> Option<usize> {
        self.records.iter().position(|r| r.title == title)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }
}
