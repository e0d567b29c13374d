//! Corpus construction: join the raw tables and normalize features.
//!
//! The movies and credits tables are joined on exact title equality with
//! inner-join semantics: a movie with no matching credit row is dropped, and
//! the drop count is logged for observability. Movie-file order is preserved,
//! because record position becomes the row/column index into the similarity
//! matrix.

use crate::error::{DataLoadError, Result};
use crate::parser::{self, CreditRow, MovieRow};
use crate::types::{Corpus, MovieRecord};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Load both raw tables and build the normalized corpus.
///
/// This is the main entry point for ingestion. The two files are parsed in
/// parallel; the join itself is a single ordered pass over the movies table.
pub fn build_corpus(movies_path: &Path, credits_path: &Path) -> Result<Corpus> {
    let (movies, credits) = rayon::join(
        || parser::parse_movies(movies_path),
        || parser::parse_credits(credits_path),
    );
    let movies = movies?;
    let credits = credits?;

    info!(
        "loaded {} movie rows and {} credit rows",
        movies.len(),
        credits.len()
    );

    join_rows(movies, credits)
}

/// Inner-join movie rows with credit rows on exact title equality.
///
/// Where the credits table carries duplicate titles, the first occurrence
/// wins; the movies table keeps one output record per input row.
pub fn join_rows(movies: Vec<MovieRow>, credits: Vec<CreditRow>) -> Result<Corpus> {
    let mut credits_by_title: HashMap<String, CreditRow> = HashMap::with_capacity(credits.len());
    for credit in credits {
        credits_by_title.entry(credit.title.clone()).or_insert(credit);
    }

    let total = movies.len();
    let mut records = Vec::with_capacity(total);
    for movie in movies {
        let Some(credit) = credits_by_title.get(&movie.title) else {
            continue;
        };
        records.push(normalize(movie, credit));
    }

    let dropped = total - records.len();
    if dropped > 0 {
        warn!("dropped {dropped} movie rows with no matching credits");
    }
    if records.is_empty() {
        return Err(DataLoadError::EmptyCorpus);
    }

    info!("built corpus of {} movies", records.len());
    Ok(Corpus::from_records(records))
}

/// Flatten one joined row into a normalized record.
///
/// Every embedded field degrades to empty text on absence or parse failure,
/// so normalization itself cannot fail.
fn normalize(movie: MovieRow, credit: &CreditRow) -> MovieRecord {
    MovieRecord {
        movie_id: credit.movie_id,
        title: movie.title,
        overview: movie.overview.unwrap_or_default(),
        genres: parser::extract_names(movie.genres.as_deref()),
        keywords: parser::extract_names(movie.keywords.as_deref()),
        cast: parser::extract_names(credit.cast.as_deref()),
        director: parser::extract_director(credit.crew.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_row(title: &str, genres: &str) -> MovieRow {
        MovieRow {
            title: title.to_string(),
            overview: Some(format!("Overview of {title}")),
            genres: Some(genres.to_string()),
            keywords: None,
        }
    }

    fn credit_row(movie_id: u32, title: &str) -> CreditRow {
        CreditRow {
            movie_id,
            title: title.to_string(),
            cast: Some(r#"[{"name": "Lead Actor"}]"#.to_string()),
            crew: Some(r#"[{"name": "The Director", "job": "Director"}]"#.to_string()),
        }
    }

    #[test]
    fn test_join_preserves_movie_order() {
        let movies = vec![
            movie_row("First", r#"[{"name": "Action"}]"#),
            movie_row("Second", r#"[{"name": "Drama"}]"#),
        ];
        let credits = vec![credit_row(2, "Second"), credit_row(1, "First")];

        let corpus = join_rows(movies, credits).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(0).unwrap().title, "First");
        assert_eq!(corpus.get(0).unwrap().movie_id, 1);
        assert_eq!(corpus.get(1).unwrap().title, "Second");
        assert_eq!(corpus.get(1).unwrap().movie_id, 2);
    }

    #[test]
    fn test_join_drops_unmatched_titles() {
        let movies = vec![
            movie_row("Matched", "[]"),
            movie_row("Unmatched", "[]"),
        ];
        let credits = vec![credit_row(7, "Matched")];

        let corpus = join_rows(movies, credits).unwrap();

        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.get(0).unwrap().title, "Matched");
    }

    #[test]
    fn test_join_duplicate_credit_title_first_wins() {
        let movies = vec![movie_row("Twin", "[]")];
        let credits = vec![credit_row(100, "Twin"), credit_row(200, "Twin")];

        let corpus = join_rows(movies, credits).unwrap();

        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.get(0).unwrap().movie_id, 100);
    }

    #[test]
    fn test_join_empty_result_is_an_error() {
        let movies = vec![movie_row("Only Here", "[]")];
        let credits = vec![credit_row(1, "Only There")];

        assert!(matches!(
            join_rows(movies, credits),
            Err(DataLoadError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_normalized_fields_never_absent() {
        let movies = vec![MovieRow {
            title: "Sparse".to_string(),
            overview: None,
            genres: Some("garbage".to_string()),
            keywords: None,
        }];
        let credits = vec![CreditRow {
            movie_id: 5,
            title: "Sparse".to_string(),
            cast: None,
            crew: Some("[malformed".to_string()),
        }];

        let corpus = join_rows(movies, credits).unwrap();
        let record = corpus.get(0).unwrap();

        assert_eq!(record.overview, "");
        assert_eq!(record.genres, "");
        assert_eq!(record.keywords, "");
        assert_eq!(record.cast, "");
        assert_eq!(record.director, "");
    }
}
