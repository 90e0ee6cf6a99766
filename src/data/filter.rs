use super::model::Catalog;

// ---------------------------------------------------------------------------
// Filter selection: one optional value per categorical axis
// ---------------------------------------------------------------------------

/// Sidebar selection state.  `None` on an axis is the UI's "All" option and
/// excludes nothing; a `Some` value keeps only exact (case-sensitive)
/// matches.  Recreated on every selection change, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    /// `type` column filter ("Movie", "TV Show", …).
    pub kind: Option<String>,
    /// `country` column filter.
    pub country: Option<String>,
}

impl FilterSelection {
    /// Both axes on "All".
    pub fn all() -> Self {
        Self::default()
    }
}

/// Return indices of titles that pass both axis filters (logical AND).
///
/// A title passes an axis when:
/// * The axis is `None` ("All") → passes
/// * The selected value is not in the catalog's distinct set → treated as
///   "All" (the UI only offers derived values, so a stale value is a no-op)
/// * The title's value equals the selection → passes
///
/// Titles with an absent country never match a concrete country selection.
/// Pure: same (catalog, selection) always yields the same indices.
pub fn filtered_indices(catalog: &Catalog, selection: &FilterSelection) -> Vec<usize> {
    let kind = match &selection.kind {
        Some(k) if catalog.kinds.contains(k) => Some(k),
        _ => None,
    };
    let country = match &selection.country {
        Some(c) if catalog.countries.contains(c) => Some(c),
        _ => None,
    };

    catalog
        .titles
        .iter()
        .enumerate()
        .filter(|(_, t)| {
            if let Some(k) = kind {
                if &t.kind != k {
                    return false;
                }
            }
            if let Some(c) = country {
                match &t.country {
                    Some(tc) if tc == c => {}
                    _ => return false,
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}
