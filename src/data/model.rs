use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Title – one row of the catalog
// ---------------------------------------------------------------------------

/// A single catalog entry (one movie or TV show).
#[derive(Debug, Clone)]
pub struct Title {
    pub title: String,
    /// The dataset's `type` column ("Movie" / "TV Show"); `type` is reserved.
    pub kind: String,
    /// Production country; absent for a fair share of real catalogs.
    pub country: Option<String>,
    pub release_year: Option<i32>,
    /// Content rating ("PG-13", "TV-MA", …); absent when unrated.
    pub rating: Option<String>,
    /// Columns beyond the known five, kept verbatim for the raw-data table.
    pub extra: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed catalog with pre-computed distinct-value enumerations.
///
/// `kinds` and `countries` are in first-seen order with nulls dropped —
/// they populate the sidebar selectors (the UI prepends its own "All"
/// option, it is not stored here).
#[derive(Debug, Clone)]
pub struct Catalog {
    /// All titles (rows), in file order.
    pub titles: Vec<Title>,
    /// Distinct `type` values, first-seen order.
    pub kinds: Vec<String>,
    /// Distinct country values, first-seen order, nulls dropped.
    pub countries: Vec<String>,
    /// Ordered names of pass-through columns present in `Title::extra`.
    pub extra_columns: Vec<String>,
}

impl Catalog {
    /// Build the distinct-value indices from the loaded titles.
    pub fn from_titles(titles: Vec<Title>, extra_columns: Vec<String>) -> Self {
        let mut kinds: Vec<String> = Vec::new();
        let mut countries: Vec<String> = Vec::new();

        for t in &titles {
            if !kinds.contains(&t.kind) {
                kinds.push(t.kind.clone());
            }
            if let Some(c) = &t.country {
                if !countries.contains(c) {
                    countries.push(c.clone());
                }
            }
        }

        Catalog {
            titles,
            kinds,
            countries,
            extra_columns,
        }
    }

    /// Number of titles.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
