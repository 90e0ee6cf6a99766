use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::model::Catalog;

/// Default size of the "most recent titles" table.
pub const TOP_N: usize = 10;

/// Axis label for titles without a rating.  Kept as an explicit bucket
/// rather than dropped so the histogram still accounts for every row.
pub const MISSING_RATING: &str = "(missing)";

// ---------------------------------------------------------------------------
// Top-N selector
// ---------------------------------------------------------------------------

/// Indices of the `n` most recent titles in the view, release year
/// descending.  The sort is stable: equal years keep the view's (and hence
/// the catalog's) order; titles without a year sort last.
pub fn top_by_year(catalog: &Catalog, indices: &[usize], n: usize) -> Vec<usize> {
    let mut out: Vec<usize> = indices.to_vec();
    out.sort_by_key(|&i| Reverse(catalog.titles[i].release_year));
    out.truncate(n);
    out
}

// ---------------------------------------------------------------------------
// Type distribution
// ---------------------------------------------------------------------------

/// Count titles per `type` value in the view, most frequent first (ties
/// keep first-seen order).  Only observed types appear; counts sum to the
/// view size.  Feeds the pie chart.
pub fn kind_distribution(catalog: &Catalog, indices: &[usize]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for &i in indices {
        let kind = &catalog.titles[i].kind;
        match counts.iter_mut().find(|(k, _)| k == kind) {
            Some((_, n)) => *n += 1,
            None => counts.push((kind.clone(), 1)),
        }
    }
    // Presentation order only; the counts themselves carry the semantics.
    counts.sort_by_key(|&(_, n)| Reverse(n));
    counts
}

// ---------------------------------------------------------------------------
// Yearly trend
// ---------------------------------------------------------------------------

/// Count titles per release year, ascending by year with no duplicate
/// keys.  Titles without a year are excluded (they cannot sit on a year
/// axis).  Feeds the line chart.
pub fn yearly_trend(catalog: &Catalog, indices: &[usize]) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for &i in indices {
        if let Some(year) = catalog.titles[i].release_year {
            *counts.entry(year).or_default() += 1;
        }
    }
    counts.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Rating histogram
// ---------------------------------------------------------------------------

/// Counts over the (rating, type) cross-product observed in a view.
///
/// `ratings` is the x-axis in first-seen order; each series pairs a type
/// with one count per rating (`series[s].counts[r]` pairs with
/// `ratings[r]`).  Missing ratings land in the [`MISSING_RATING`] bucket.
#[derive(Debug, Clone, Default)]
pub struct RatingHistogram {
    pub ratings: Vec<String>,
    pub series: Vec<RatingSeries>,
}

/// One bar-chart series: a `type` value and its per-rating counts.
#[derive(Debug, Clone)]
pub struct RatingSeries {
    pub kind: String,
    pub counts: Vec<usize>,
}

impl RatingHistogram {
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Sum of all buckets; equals the size of the source view.
    pub fn total(&self) -> usize {
        self.series.iter().map(|s| s.counts.iter().sum::<usize>()).sum()
    }
}

/// Build the grouped rating histogram for a view.  Rating and series order
/// are both first-seen, matching how the underlying rows stream in.
pub fn rating_histogram(catalog: &Catalog, indices: &[usize]) -> RatingHistogram {
    let mut hist = RatingHistogram::default();

    for &i in indices {
        let title = &catalog.titles[i];
        let rating = title.rating.as_deref().unwrap_or(MISSING_RATING);

        let rating_idx = match hist.ratings.iter().position(|r| r == rating) {
            Some(idx) => idx,
            None => {
                hist.ratings.push(rating.to_string());
                for series in &mut hist.series {
                    series.counts.push(0);
                }
                hist.ratings.len() - 1
            }
        };

        let series_idx = match hist.series.iter().position(|s| s.kind == title.kind) {
            Some(idx) => idx,
            None => {
                hist.series.push(RatingSeries {
                    kind: title.kind.clone(),
                    counts: vec![0; hist.ratings.len()],
                });
                hist.series.len() - 1
            }
        };

        hist.series[series_idx].counts[rating_idx] += 1;
    }

    hist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Title;
    use std::collections::BTreeMap;

    fn title(kind: &str, year: Option<i32>, rating: Option<&str>) -> Title {
        Title {
            title: format!("{kind} {year:?}"),
            kind: kind.to_string(),
            country: None,
            release_year: year,
            rating: rating.map(str::to_string),
            extra: BTreeMap::new(),
        }
    }

    fn catalog(titles: Vec<Title>) -> Catalog {
        Catalog::from_titles(titles, Vec::new())
    }

    fn all_indices(catalog: &Catalog) -> Vec<usize> {
        (0..catalog.len()).collect()
    }

    // ---- top_by_year ----

    #[test]
    fn top_sorts_year_descending_and_truncates() {
        let c = catalog(vec![
            title("Movie", Some(2019), None),
            title("Movie", Some(2021), None),
            title("Movie", Some(2020), None),
        ]);
        let top = top_by_year(&c, &all_indices(&c), 2);
        assert_eq!(top, vec![1, 2]);
    }

    #[test]
    fn top_is_stable_for_equal_years() {
        let c = catalog(vec![
            title("Movie", Some(2020), Some("PG")),
            title("TV Show", Some(2020), Some("TV-MA")),
            title("Movie", Some(2019), Some("PG")),
        ]);
        let top = top_by_year(&c, &all_indices(&c), 10);
        // 2020 rows keep catalog order, 2019 follows.
        assert_eq!(top, vec![0, 1, 2]);
    }

    #[test]
    fn top_returns_whole_view_when_smaller_than_n() {
        let c = catalog(vec![title("Movie", Some(2020), None)]);
        assert_eq!(top_by_year(&c, &all_indices(&c), TOP_N).len(), 1);
    }

    #[test]
    fn top_sinks_titles_without_a_year() {
        let c = catalog(vec![
            title("Movie", None, None),
            title("Movie", Some(1999), None),
        ]);
        assert_eq!(top_by_year(&c, &all_indices(&c), 10), vec![1, 0]);
    }

    // ---- kind_distribution ----

    #[test]
    fn distribution_counts_sum_to_view_size() {
        let c = catalog(vec![
            title("Movie", Some(2020), None),
            title("TV Show", Some(2020), None),
            title("Movie", Some(2019), None),
        ]);
        let dist = kind_distribution(&c, &all_indices(&c));
        assert_eq!(dist, vec![("Movie".to_string(), 2), ("TV Show".to_string(), 1)]);
        let total: usize = dist.iter().map(|(_, n)| n).sum();
        assert_eq!(total, c.len());
    }

    #[test]
    fn distribution_over_filtered_view() {
        // Scenario: S=("All","US") leaves one Movie and one TV Show.
        let c = catalog(vec![
            title("Movie", Some(2020), Some("PG")),
            title("TV Show", Some(2020), Some("TV-MA")),
        ]);
        let dist = kind_distribution(&c, &[0, 1]);
        assert_eq!(dist.len(), 2);
        assert!(dist.iter().all(|(_, n)| *n == 1));
    }

    // ---- yearly_trend ----

    #[test]
    fn trend_is_strictly_ascending_with_counts() {
        let c = catalog(vec![
            title("Movie", Some(2020), None),
            title("Movie", Some(2019), None),
            title("Movie", Some(2020), None),
        ]);
        let trend = yearly_trend(&c, &all_indices(&c));
        assert_eq!(trend, vec![(2019, 1), (2020, 2)]);
        assert!(trend.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn trend_excludes_titles_without_a_year() {
        let c = catalog(vec![
            title("Movie", None, None),
            title("Movie", Some(2020), None),
        ]);
        assert_eq!(yearly_trend(&c, &all_indices(&c)), vec![(2020, 1)]);
    }

    // ---- rating_histogram ----

    #[test]
    fn histogram_groups_by_rating_and_kind() {
        let c = catalog(vec![
            title("Movie", Some(2020), Some("PG")),
            title("TV Show", Some(2020), Some("TV-MA")),
            title("Movie", Some(2019), Some("PG")),
        ]);
        let hist = rating_histogram(&c, &all_indices(&c));
        assert_eq!(hist.ratings, vec!["PG", "TV-MA"]);
        assert_eq!(hist.series.len(), 2);
        assert_eq!(hist.series[0].kind, "Movie");
        assert_eq!(hist.series[0].counts, vec![2, 0]);
        assert_eq!(hist.series[1].counts, vec![0, 1]);
        assert_eq!(hist.total(), 3);
    }

    #[test]
    fn missing_ratings_get_their_own_bucket() {
        let c = catalog(vec![
            title("Movie", Some(2020), None),
            title("Movie", Some(2020), Some("PG")),
        ]);
        let hist = rating_histogram(&c, &all_indices(&c));
        assert_eq!(hist.ratings, vec![MISSING_RATING, "PG"]);
        assert_eq!(hist.total(), 2);
    }

    // ---- empty view ----

    #[test]
    fn empty_view_yields_empty_results_everywhere() {
        let c = catalog(Vec::new());
        let none: Vec<usize> = Vec::new();
        assert!(top_by_year(&c, &none, TOP_N).is_empty());
        assert!(kind_distribution(&c, &none).is_empty());
        assert!(yearly_trend(&c, &none).is_empty());
        assert!(rating_histogram(&c, &none).is_empty());
    }
}
