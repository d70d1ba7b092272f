// CSV reader for the catalog file. Columns are matched by header name, so their order is free.

use super::Catalog;
use crate::domain::model::{MovieRecord, Runtime, MAX_RATING, MIN_RATING};
use crate::error::LoadError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Header names every catalog file must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Rank",
    "Title",
    "Year",
    "Genre",
    "Rating",
    "Duration",
    "Image URL",
    "IMDb URL",
];

#[derive(Deserialize)]
struct RawRow {
    #[serde(rename = "Rank")]
    rank: u32,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Genre")]
    genre: String,
    #[serde(rename = "Rating")]
    rating: f64,
    #[serde(rename = "Duration")]
    duration: String,
    #[serde(rename = "Image URL")]
    image_url: String,
    #[serde(rename = "IMDb URL")]
    detail_url: String,
}

pub(crate) fn load_path(path: &Path) -> Result<Catalog, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = load_reader(file)?;
    tracing::info!(path = %path.display(), movies = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parses a complete catalog from any reader. Rejects empty input.
pub fn load_reader<R: Read>(rdr: R) -> Result<Catalog, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    if headers.is_empty() {
        return Err(LoadError::Empty);
    }
    for &column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    let mut seen_ranks = HashSet::new();
    for result in reader.records() {
        let row = result.map_err(|e| LoadError::InvalidRow {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            reason: e.to_string(),
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawRow = row
            .deserialize(Some(&headers))
            .map_err(|e| LoadError::InvalidRow {
                line,
                reason: e.to_string(),
            })?;
        if !seen_ranks.insert(raw.rank) {
            return Err(LoadError::DuplicateRank {
                rank: raw.rank,
                line,
            });
        }
        records.push(into_record(raw, line)?);
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    let catalog = Catalog::from_records(records)?;
    Ok(catalog)
}

fn into_record(raw: RawRow, line: u64) -> Result<MovieRecord, LoadError> {
    if raw.rank == 0 {
        return Err(LoadError::InvalidRow {
            line,
            reason: "rank must be positive".to_string(),
        });
    }
    if !(MIN_RATING..=MAX_RATING).contains(&raw.rating) {
        return Err(LoadError::InvalidRow {
            line,
            reason: format!(
                "rating {} outside [{}, {}]",
                raw.rating, MIN_RATING, MAX_RATING
            ),
        });
    }
    Ok(MovieRecord {
        rank: raw.rank,
        title: raw.title,
        year: raw.year,
        genre: raw.genre,
        rating: raw.rating,
        duration: Runtime::new(raw.duration),
        image_url: raw.image_url,
        detail_url: raw.detail_url,
    })
}
