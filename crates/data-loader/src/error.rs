//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading and joining the raw TMDB tables.
///
/// Note that malformed *embedded* fields (the JSON entity lists inside a CSV
/// cell) are not represented here: those degrade to empty feature text at the
/// record level and never abort a build.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be opened or a row could not be read/decoded
    #[error("CSV error in {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The join of movies and credits produced no records at all
    #[error("corpus is empty after joining movies and credits")]
    EmptyCorpus,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
