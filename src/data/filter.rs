use super::model::{Country, CountryDataset, Indicator, Region};

// ---------------------------------------------------------------------------
// Filter criteria: the user-selected constraints from the side panel
// ---------------------------------------------------------------------------

/// Constraints applied to the full record set. `region: None` is the "All"
/// sentinel. `score_range` is a closed interval; inverted bounds are swapped
/// rather than rejected (the sliders normally prevent them, but raw callers
/// get the defensive guard). `top_n` never truncates the filtered subset
/// itself; it only parameterizes per-chart [`ranked_view`] calls downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub region: Option<Region>,
    pub score_range: (f64, f64),
    pub top_n: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            region: None,
            score_range: (0.0, 100.0),
            top_n: 20,
        }
    }
}

impl FilterCriteria {
    /// Score bounds with the `lo > hi` guard applied.
    pub fn normalized_range(&self) -> (f64, f64) {
        let (lo, hi) = self.score_range;
        if lo <= hi { (lo, hi) } else { (hi, lo) }
    }

    fn matches(&self, c: &Country) -> bool {
        if let Some(region) = self.region {
            if c.region != region {
                return false;
            }
        }
        let (lo, hi) = self.normalized_range();
        lo <= c.score && c.score <= hi
    }
}

/// Return indices of records passing the criteria, in source-table order.
/// Pure and exact: a record is included iff it satisfies both constraints.
pub fn filtered_indices(dataset: &CountryDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .countries()
        .iter()
        .enumerate()
        .filter(|(_, c)| criteria.matches(c))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Ranked views: the single sort-and-truncate operation shared by all charts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sort key for a ranked view: the world rank or any numeric indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Rank,
    Indicator(Indicator),
}

impl SortKey {
    fn value(&self, c: &Country) -> f64 {
        match self {
            SortKey::Rank => c.rank as f64,
            SortKey::Indicator(ind) => ind.value(c),
        }
    }
}

/// Sort `indices` by `key` in `direction` and keep the first `n`.
///
/// Ties on the key are broken by country name ascending, so boundary ties
/// (two records sharing the cut-off value) resolve deterministically. The
/// input slice is not modified.
pub fn ranked_view(
    dataset: &CountryDataset,
    indices: &[usize],
    key: SortKey,
    direction: SortDirection,
    n: usize,
) -> Vec<usize> {
    let mut sorted: Vec<usize> = indices.to_vec();
    sorted.sort_by(|&a, &b| {
        let (ca, cb) = (dataset.get(a), dataset.get(b));
        let ord = key.value(ca).total_cmp(&key.value(cb));
        let ord = match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        };
        ord.then_with(|| ca.name.cmp(cb.name))
    });
    sorted.truncate(n);
    sorted
}

/// Indices of records whose world rank is at or above the threshold
/// (rank ≤ `threshold`), in source order. This is the "Top 40" map
/// selection; it keeps every tie at the boundary rank.
pub fn rank_at_most(dataset: &CountryDataset, threshold: u32) -> Vec<usize> {
    dataset
        .countries()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.rank <= threshold)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> CountryDataset {
        CountryDataset::embedded()
    }

    fn names(ds: &CountryDataset, indices: &[usize]) -> Vec<&'static str> {
        indices.iter().map(|&i| ds.get(i).name).collect()
    }

    #[test]
    fn filter_is_exact_and_complete() {
        let ds = dataset();
        for region in [None, Some(Region::Europe), Some(Region::Americas)] {
            for range in [(0.0, 100.0), (50.0, 75.0), (60.0, 60.0)] {
                let criteria = FilterCriteria {
                    region,
                    score_range: range,
                    top_n: 20,
                };
                let kept = filtered_indices(&ds, &criteria);

                // Every kept record satisfies both constraints.
                for &i in &kept {
                    let c = ds.get(i);
                    assert!(region.is_none() || Some(c.region) == region);
                    assert!(range.0 <= c.score && c.score <= range.1);
                }
                // No satisfying record is excluded.
                for (i, c) in ds.countries().iter().enumerate() {
                    let satisfies = (region.is_none() || Some(c.region) == region)
                        && range.0 <= c.score
                        && c.score <= range.1;
                    assert_eq!(satisfies, kept.contains(&i), "record {}", c.name);
                }
            }
        }
    }

    #[test]
    fn filter_is_idempotent() {
        let ds = dataset();
        let criteria = FilterCriteria {
            region: Some(Region::AsiaPacific),
            score_range: (40.0, 90.0),
            top_n: 20,
        };
        let once = filtered_indices(&ds, &criteria);

        // Re-filtering the already-filtered subset changes nothing.
        let subset = CountryDataset::new(once.iter().map(|&i| ds.get(i).clone()).collect());
        let twice = filtered_indices(&subset, &criteria);
        assert_eq!(twice, (0..once.len()).collect::<Vec<_>>());
    }

    #[test]
    fn europe_full_range_yields_thirteen_countries() {
        let ds = dataset();
        let criteria = FilterCriteria {
            region: Some(Region::Europe),
            score_range: (0.0, 100.0),
            top_n: 20,
        };
        let kept = names(&ds, &filtered_indices(&ds, &criteria));
        assert_eq!(
            kept,
            vec![
                "Switzerland",
                "Ireland",
                "Luxembourg",
                "Estonia",
                "Netherlands",
                "Finland",
                "Denmark",
                "Sweden",
                "Germany",
                "United Kingdom",
                "Poland",
                "Russia",
                "Ukraine",
            ]
        );
    }

    #[test]
    fn low_score_band_catches_the_least_free() {
        let ds = dataset();
        let mut criteria = FilterCriteria {
            region: None,
            score_range: (0.0, 26.0),
            top_n: 20,
        };
        assert_eq!(
            names(&ds, &filtered_indices(&ds, &criteria)),
            vec!["Venezuela", "North Korea"]
        );

        // At 30 the band also picks up Cuba (score 26.9).
        criteria.score_range = (0.0, 30.0);
        assert_eq!(
            names(&ds, &filtered_indices(&ds, &criteria)),
            vec!["Cuba", "Venezuela", "North Korea"]
        );
    }

    #[test]
    fn inverted_bounds_are_swapped() {
        let ds = dataset();
        let inverted = FilterCriteria {
            region: None,
            score_range: (80.0, 70.0),
            top_n: 20,
        };
        let straight = FilterCriteria {
            score_range: (70.0, 80.0),
            ..inverted.clone()
        };
        assert_eq!(
            filtered_indices(&ds, &inverted),
            filtered_indices(&ds, &straight)
        );
    }

    #[test]
    fn ranked_view_sorts_truncates_and_breaks_ties_by_name() {
        let ds = dataset();
        let all: Vec<usize> = (0..ds.len()).collect();

        let top_unemployment = ranked_view(
            &ds,
            &all,
            SortKey::Indicator(Indicator::Unemployment),
            SortDirection::Descending,
            3,
        );
        assert_eq!(
            names(&ds, &top_unemployment),
            vec!["South Africa", "Nigeria", "Libya"]
        );

        // Bottom 15 by rank descending: ties at 168 (Iran/Sudan) and 130
        // (Egypt/Ukraine) fall inside the cut and order by name.
        let bottom15 = ranked_view(&ds, &all, SortKey::Rank, SortDirection::Descending, 15);
        assert_eq!(bottom15.len(), 15);
        let bottom_names = names(&ds, &bottom15);
        let pos = |n: &str| bottom_names.iter().position(|&x| x == n).unwrap();
        assert!(pos("Iran") < pos("Sudan"));
        assert!(pos("Egypt") < pos("Ukraine"));
        assert_eq!(bottom_names.last(), Some(&"Russia")); // rank 113 is the 15th
    }

    #[test]
    fn rank_threshold_selects_nineteen_of_top_forty() {
        let ds = dataset();
        let top40 = rank_at_most(&ds, 40);
        assert_eq!(top40.len(), 19);
        assert!(top40.iter().all(|&i| ds.get(i).rank <= 40));
    }
}
