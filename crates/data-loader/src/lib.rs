//! # Data Loader Crate
//!
//! This crate handles ingesting the raw TMDB catalog into the normalized,
//! ordered corpus the model pipeline builds from.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, Corpus, embedded entities)
//! - **parser**: Parse the two raw CSV tables and their embedded JSON lists
//! - **join**: Title join + feature normalization into the Corpus
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::build_corpus;
//! use std::path::Path;
//!
//! let corpus = build_corpus(
//!     Path::new("data/tmdb_5000_movies.csv"),
//!     Path::new("data/tmdb_5000_credits.csv"),
//! )?;
//!
//! println!("{} movies in the corpus", corpus.len());
//! ```
//!
//! ## Failure policy
//!
//! File-level problems (missing file, undecodable CSV) abort the build.
//! Record-level problems (malformed embedded entity lists, absent fields)
//! degrade to empty feature text and keep the record. Movies with no matching
//! credit row are dropped by the inner join; the count is logged.

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod join;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use join::{build_corpus, join_rows};
pub use types::{Corpus, CrewMember, MovieId, MovieRecord, NamedEntity};
