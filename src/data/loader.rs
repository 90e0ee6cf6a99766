use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Catalog, Title};

/// Columns the loader requires; anything else is a pass-through extra.
pub const REQUIRED_COLUMNS: [&str; 5] = ["title", "type", "country", "release_year", "rating"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a catalog could not be loaded.  Fatal at startup; shown as a status
/// message when triggered from the file dialog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: {message}")]
    BadRow { row: usize, message: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("parsing JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with at least the five required columns
/// * `.json` – `[{ "title": ..., "type": ..., ... }, ...]` (records orient)
pub fn load_file(path: &Path) -> Result<Catalog, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names; empty cells are nulls.
/// `release_year` must parse as an integer when present; all five required
/// columns must exist in the header.  Extra columns ride along untouched.
fn load_csv(path: &Path) -> Result<Catalog, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let col = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };

    let title_idx = col("title")?;
    let kind_idx = col("type")?;
    let country_idx = col("country")?;
    let year_idx = col("release_year")?;
    let rating_idx = col("rating")?;

    let known = [title_idx, kind_idx, country_idx, year_idx, rating_idx];
    let extra_columns: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| !known.contains(i))
        .map(|(_, h)| h.clone())
        .collect();

    let mut titles = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        let mut extra = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            if known.contains(&col_idx) {
                continue;
            }
            if let Some(name) = headers.get(col_idx) {
                extra.insert(name.clone(), value.to_string());
            }
        }

        titles.push(Title {
            title: cell(title_idx).to_string(),
            kind: cell(kind_idx).to_string(),
            country: non_empty(cell(country_idx)),
            release_year: parse_year(cell(year_idx), row_no)?,
            rating: non_empty(cell(rating_idx)),
            extra,
        });
    }

    Ok(Catalog::from_titles(titles, extra_columns))
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn parse_year(s: &str, row: usize) -> Result<Option<i32>, LoadError> {
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<i32>().map(Some).map_err(|_| LoadError::BadRow {
        row,
        message: format!("'{s}' is not a valid release year"),
    })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// One record in a records-oriented JSON export (`df.to_json(orient='records')`).
#[derive(Debug, Deserialize)]
struct RawTitle {
    title: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    release_year: Option<i32>,
    #[serde(default)]
    rating: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, JsonValue>,
}

fn load_json(path: &Path) -> Result<Catalog, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<RawTitle> = serde_json::from_str(&text)?;

    // Extra columns in first-seen order across all records.
    let mut extra_columns: Vec<String> = Vec::new();
    for rec in &records {
        for key in rec.extra.keys() {
            if !extra_columns.contains(key) {
                extra_columns.push(key.clone());
            }
        }
    }

    let titles = records
        .into_iter()
        .map(|rec| Title {
            title: rec.title,
            kind: rec.kind,
            country: rec.country,
            release_year: rec.release_year,
            rating: rec.rating,
            extra: rec
                .extra
                .into_iter()
                .map(|(k, v)| (k, json_to_text(&v)))
                .collect(),
        })
        .collect();

    Ok(Catalog::from_titles(titles, extra_columns))
}

fn json_to_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_a_minimal_csv() {
        let file = csv_file(
            "title,type,country,release_year,rating\n\
             Alpha,Movie,US,2020,PG\n\
             Beta,TV Show,,2019,\n",
        );
        let catalog = load_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.titles[0].title, "Alpha");
        assert_eq!(catalog.titles[0].release_year, Some(2020));
        assert_eq!(catalog.titles[1].country, None);
        assert_eq!(catalog.titles[1].rating, None);
        assert_eq!(catalog.kinds, vec!["Movie", "TV Show"]);
        assert_eq!(catalog.countries, vec!["US"]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let file = csv_file("title,type,country,rating\nAlpha,Movie,US,PG\n");
        match load_file(file.path()) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, "release_year"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_year_is_an_error() {
        let file = csv_file(
            "title,type,country,release_year,rating\nAlpha,Movie,US,soon,PG\n",
        );
        assert!(matches!(
            load_file(file.path()),
            Err(LoadError::BadRow { row: 0, .. })
        ));
    }

    #[test]
    fn empty_year_is_null_not_an_error() {
        let file = csv_file("title,type,country,release_year,rating\nAlpha,Movie,US,,PG\n");
        let catalog = load_file(file.path()).unwrap();
        assert_eq!(catalog.titles[0].release_year, None);
    }

    #[test]
    fn extra_columns_pass_through() {
        let file = csv_file(
            "title,type,director,country,release_year,rating\n\
             Alpha,Movie,Jane Doe,US,2020,PG\n",
        );
        let catalog = load_file(file.path()).unwrap();
        assert_eq!(catalog.extra_columns, vec!["director"]);
        assert_eq!(
            catalog.titles[0].extra.get("director").map(String::as_str),
            Some("Jane Doe")
        );
    }

    #[test]
    fn loads_records_oriented_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(
            br#"[
                {"title":"Alpha","type":"Movie","country":"US","release_year":2020,"rating":"PG","director":"Jane Doe"},
                {"title":"Beta","type":"TV Show","country":null,"release_year":null,"rating":null}
            ]"#,
        )
        .unwrap();
        file.flush().unwrap();

        let catalog = load_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.titles[1].country, None);
        assert_eq!(catalog.titles[1].release_year, None);
        assert_eq!(catalog.extra_columns, vec!["director"]);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        assert!(matches!(
            load_file(Path::new("catalog.parquet")),
            Err(LoadError::UnsupportedExtension(ext)) if ext == "parquet"
        ));
    }

    #[test]
    fn missing_file_is_unreadable() {
        assert!(load_file(Path::new("/no/such/catalog.json")).is_err());
    }
}
