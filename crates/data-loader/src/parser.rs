//! Parser for the raw TMDB CSV tables.
//!
//! Two files feed the build:
//! - `tmdb_5000_movies.csv`: title, overview, plus embedded JSON lists for
//!   genres and keywords (and many columns we ignore)
//! - `tmdb_5000_credits.csv`: movie_id, title, embedded JSON lists for cast
//!   and crew
//!
//! Rows are decoded by header name with serde, so extra columns in either
//! file are ignored. The embedded lists are decoded into the typed
//! [`NamedEntity`]/[`CrewMember`] representation; a cell that fails to decode
//! yields empty feature text for that field, never an error.

use crate::error::{DataLoadError, Result};
use crate::types::{CrewMember, MovieId, NamedEntity};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One raw row of the movies table, pre-join.
///
/// Absent cells deserialize to `None` and are treated as empty downstream
/// (the reference data has movies with no overview).
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRow {
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
}

/// One raw row of the credits table, pre-join.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditRow {
    pub movie_id: MovieId,
    pub title: String,
    #[serde(default)]
    pub cast: Option<String>,
    #[serde(default)]
    pub crew: Option<String>,
}

/// Parse the movies CSV file, preserving file order.
pub fn parse_movies(path: &Path) -> Result<Vec<MovieRow>> {
    let reader = csv::Reader::from_path(path).map_err(|source| DataLoadError::Csv {
        file: path.display().to_string(),
        source,
    })?;
    collect_rows(reader, &path.display().to_string())
}

/// Parse the credits CSV file, preserving file order.
pub fn parse_credits(path: &Path) -> Result<Vec<CreditRow>> {
    let reader = csv::Reader::from_path(path).map_err(|source| DataLoadError::Csv {
        file: path.display().to_string(),
        source,
    })?;
    collect_rows(reader, &path.display().to_string())
}

fn collect_rows<R, T>(mut reader: csv::Reader<R>, file: &str) -> Result<Vec<T>>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
{
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        let row: T = row.map_err(|source| DataLoadError::Csv {
            file: file.to_string(),
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

// =============================================================================
// Embedded field extraction
// =============================================================================

/// Decode an embedded entity list and space-join its names, in source order.
///
/// `None`, an empty cell, or a cell that is not a valid JSON entity list all
/// yield the empty string.
pub fn extract_names(raw: Option<&str>) -> String {
    let entities = parse_entity_list::<NamedEntity>(raw);
    let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
    names.join(" ")
}

/// Scan an embedded crew list for the first record whose job is "Director".
///
/// Returns the director's name, or the empty string if the list is missing,
/// malformed, or contains no director.
pub fn extract_director(raw: Option<&str>) -> String {
    parse_entity_list::<CrewMember>(raw)
        .into_iter()
        .find(|member| member.job.as_deref() == Some("Director"))
        .map(|member| member.name)
        .unwrap_or_default()
}

/// Decode an embedded JSON list into typed records, degrading to empty.
fn parse_entity_list<T: for<'de> Deserialize<'de>>(raw: Option<&str>) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(entities) => entities,
        Err(err) => {
            if !raw.trim().is_empty() {
                debug!("discarding malformed embedded list: {err}");
            }
            Vec::new()
        }
    }
}
