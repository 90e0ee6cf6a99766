use crate::color::KindColors;
use crate::data::filter::{filtered_indices, FilterSelection};
use crate::data::model::Catalog;
use crate::data::views::{
    kind_distribution, rating_histogram, top_by_year, yearly_trend, RatingHistogram, TOP_N,
};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The catalog is loaded at most once per session and never invalidated;
/// everything derived from it (`visible_indices` and the four view
/// outputs) is recomputed wholesale by [`AppState::refilter`] whenever the
/// selection changes.
pub struct AppState {
    /// Loaded catalog (None until a file is loaded).
    pub catalog: Option<Catalog>,

    /// Current type/country selection.
    pub selection: FilterSelection,

    /// Indices of titles passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Most recent titles in the filtered view, up to [`TOP_N`].
    pub top_titles: Vec<usize>,

    /// Count per type, most frequent first (pie chart).
    pub kind_counts: Vec<(String, usize)>,

    /// Count per release year, ascending (line chart).
    pub yearly_counts: Vec<(i32, usize)>,

    /// (rating, type) counts (grouped bar chart).
    pub rating_histogram: RatingHistogram,

    /// One colour per type value, shared by pie and histogram.
    pub kind_colors: KindColors,

    /// Whether the raw-data table is shown below the charts.
    pub show_raw: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: None,
            selection: FilterSelection::all(),
            visible_indices: Vec::new(),
            top_titles: Vec::new(),
            kind_counts: Vec::new(),
            yearly_counts: Vec::new(),
            rating_histogram: RatingHistogram::default(),
            kind_colors: KindColors::default(),
            show_raw: false,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded catalog: reset the selection to "All", build
    /// the colour map, and compute the initial views.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.selection = FilterSelection::all();
        self.kind_colors = KindColors::new(&catalog.kinds);
        self.catalog = Some(catalog);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute the filtered view and all four aggregates.  This is the
    /// explicit on-selection-change handler: filter first, then the four
    /// independent builders over the same indices.
    pub fn refilter(&mut self) {
        let Some(catalog) = &self.catalog else {
            return;
        };
        self.visible_indices = filtered_indices(catalog, &self.selection);
        self.top_titles = top_by_year(catalog, &self.visible_indices, TOP_N);
        self.kind_counts = kind_distribution(catalog, &self.visible_indices);
        self.yearly_counts = yearly_trend(catalog, &self.visible_indices);
        self.rating_histogram = rating_histogram(catalog, &self.visible_indices);
    }

    /// Set the type filter (`None` = "All") and recompute.
    pub fn set_kind_filter(&mut self, kind: Option<String>) {
        if self.selection.kind != kind {
            self.selection.kind = kind;
            self.refilter();
        }
    }

    /// Set the country filter (`None` = "All") and recompute.
    pub fn set_country_filter(&mut self, country: Option<String>) {
        if self.selection.country != country {
            self.selection.country = country;
            self.refilter();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Title;
    use std::collections::BTreeMap;

    fn sample_catalog() -> Catalog {
        let title = |kind: &str, country: &str, year: i32, rating: &str| Title {
            title: format!("{kind} {year}"),
            kind: kind.to_string(),
            country: Some(country.to_string()),
            release_year: Some(year),
            rating: Some(rating.to_string()),
            extra: BTreeMap::new(),
        };
        Catalog::from_titles(
            vec![
                title("Movie", "US", 2020, "PG"),
                title("TV Show", "US", 2020, "TV-MA"),
                title("Movie", "CA", 2019, "PG"),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn set_catalog_computes_initial_views() {
        let mut state = AppState::default();
        state.set_catalog(sample_catalog());

        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert_eq!(state.top_titles.len(), 3);
        assert_eq!(state.yearly_counts, vec![(2019, 1), (2020, 2)]);
        assert_eq!(state.rating_histogram.total(), 3);
    }

    #[test]
    fn changing_the_kind_filter_recomputes_everything() {
        let mut state = AppState::default();
        state.set_catalog(sample_catalog());
        state.set_kind_filter(Some("Movie".to_string()));

        assert_eq!(state.visible_indices, vec![0, 2]);
        assert_eq!(state.top_titles, vec![0, 2]);
        assert_eq!(state.kind_counts, vec![("Movie".to_string(), 2)]);
        assert_eq!(state.yearly_counts, vec![(2019, 1), (2020, 1)]);
        assert_eq!(state.rating_histogram.total(), 2);
    }

    #[test]
    fn loading_a_catalog_resets_the_selection() {
        let mut state = AppState::default();
        state.set_catalog(sample_catalog());
        state.set_country_filter(Some("US".to_string()));
        assert_eq!(state.visible_indices, vec![0, 1]);

        state.set_catalog(sample_catalog());
        assert_eq!(state.selection, FilterSelection::all());
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }
}
