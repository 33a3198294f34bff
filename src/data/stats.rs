use super::model::{CountryDataset, Indicator};

// ---------------------------------------------------------------------------
// Summary – the KPI-card aggregates
// ---------------------------------------------------------------------------

/// Aggregate statistics over a filtered subset. Empty-subset defaults are
/// part of the contract: zero means and no top-ranked record, never NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean_score: f64,
    pub mean_inflation: f64,
    /// Dataset index of the record with the minimum world rank, `None` when
    /// the subset is empty. On a minimum-rank tie (not present in the
    /// shipped data) the first record in subset order is returned.
    pub top_ranked: Option<usize>,
}

/// Compute the KPI aggregates over the given subset.
pub fn summarize(dataset: &CountryDataset, indices: &[usize]) -> Summary {
    let count = indices.len();
    if count == 0 {
        return Summary {
            count: 0,
            mean_score: 0.0,
            mean_inflation: 0.0,
            top_ranked: None,
        };
    }

    let mut score_sum = 0.0;
    let mut inflation_sum = 0.0;
    let mut top: Option<usize> = None;
    for &i in indices {
        let c = dataset.get(i);
        score_sum += c.score;
        inflation_sum += c.inflation;
        match top {
            Some(t) if dataset.get(t).rank <= c.rank => {}
            _ => top = Some(i),
        }
    }

    Summary {
        count,
        mean_score: score_sum / count as f64,
        mean_inflation: inflation_sum / count as f64,
        top_ranked: top,
    }
}

// ---------------------------------------------------------------------------
// Pearson correlation matrix
// ---------------------------------------------------------------------------

/// Pairwise Pearson correlations over [`Indicator::ALL`], rounded to two
/// decimals for display. Symmetric with a unit diagonal; a zero-variance
/// column produces NaN cells, which render as blanks.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    values: [[f64; Indicator::ALL.len()]; Indicator::ALL.len()],
}

impl CorrelationMatrix {
    pub fn fields(&self) -> &'static [Indicator] {
        &Indicator::ALL
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }
}

/// Correlation matrix over the subset, `None` when it has fewer than two
/// records (a single point correlates with nothing).
pub fn correlation_matrix(dataset: &CountryDataset, indices: &[usize]) -> Option<CorrelationMatrix> {
    if indices.len() < 2 {
        return None;
    }

    let n = Indicator::ALL.len();
    let series: Vec<Vec<f64>> = Indicator::ALL
        .iter()
        .map(|ind| indices.iter().map(|&i| ind.value(dataset.get(i))).collect())
        .collect();

    let mut values = [[f64::NAN; Indicator::ALL.len()]; Indicator::ALL.len()];
    for i in 0..n {
        for j in i..n {
            let r = round2(pearson(&series[i], &series[j]));
            values[i][j] = r;
            values[j][i] = r;
        }
    }
    Some(CorrelationMatrix { values })
}

/// Pearson correlation coefficient of two equal-length series. NaN when
/// either series has zero variance.
fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        cov / denom
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Ordinary least-squares trend line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// OLS fit of `y` on `x` over the subset. `None` for fewer than two points
/// or a constant x; callers then omit the trend line entirely instead of
/// drawing a degenerate one.
pub fn linear_trend(
    dataset: &CountryDataset,
    indices: &[usize],
    x: Indicator,
    y: Indicator,
) -> Option<LinearTrend> {
    if indices.len() < 2 {
        return None;
    }

    let points: Vec<(f64, f64)> = indices
        .iter()
        .map(|&i| {
            let c = dataset.get(i);
            (x.value(c), y.value(c))
        })
        .filter(|(px, py)| px.is_finite() && py.is_finite())
        .collect();
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|(px, _)| px).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, py)| py).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    for &(px, py) in &points {
        cov += (px - mean_x) * (py - mean_y);
        var_x += (px - mean_x) * (px - mean_x);
    }
    if var_x == 0.0 {
        return None;
    }

    let slope = cov / var_x;
    Some(LinearTrend {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, FilterCriteria};
    use crate::data::model::Region;

    fn dataset() -> CountryDataset {
        CountryDataset::embedded()
    }

    #[test]
    fn empty_subset_degrades_to_documented_defaults() {
        let ds = dataset();
        let criteria = FilterCriteria {
            region: None,
            score_range: (95.0, 100.0),
            top_n: 20,
        };
        let indices = filtered_indices(&ds, &criteria);
        assert!(indices.is_empty());

        let summary = summarize(&ds, &indices);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean_score, 0.0);
        assert_eq!(summary.mean_inflation, 0.0);
        assert_eq!(summary.top_ranked, None);
        assert!(correlation_matrix(&ds, &indices).is_none());
        assert!(linear_trend(&ds, &indices, Indicator::Score, Indicator::GdpPpp).is_none());
    }

    #[test]
    fn europe_mean_score_matches_the_table() {
        let ds = dataset();
        let criteria = FilterCriteria {
            region: Some(Region::Europe),
            score_range: (0.0, 100.0),
            top_n: 20,
        };
        let indices = filtered_indices(&ds, &criteria);
        let summary = summarize(&ds, &indices);
        assert_eq!(summary.count, 13);
        // 965.3 / 13
        assert!((summary.mean_score - 74.25).abs() < 0.1);
    }

    #[test]
    fn top_ranked_is_minimum_rank() {
        let ds = dataset();
        let criteria = FilterCriteria {
            region: None,
            score_range: (0.0, 26.0),
            top_n: 20,
        };
        let indices = filtered_indices(&ds, &criteria);
        let summary = summarize(&ds, &indices);
        // Venezuela (rank 175) beats North Korea (rank 176).
        assert_eq!(ds.get(summary.top_ranked.unwrap()).name, "Venezuela");

        // Widening to 30 brings in Cuba at rank 173, which takes over.
        let criteria = FilterCriteria {
            score_range: (0.0, 30.0),
            ..criteria
        };
        let indices = filtered_indices(&ds, &criteria);
        let summary = summarize(&ds, &indices);
        assert_eq!(ds.get(summary.top_ranked.unwrap()).name, "Cuba");
    }

    #[test]
    fn correlation_matrix_is_symmetric_with_unit_diagonal() {
        let ds = dataset();
        let all: Vec<usize> = (0..ds.len()).collect();
        let m = correlation_matrix(&ds, &all).unwrap();

        let n = m.fields().len();
        for i in 0..n {
            assert_eq!(m.get(i, i), 1.0, "diagonal at {}", m.fields()[i].name());
            for j in 0..n {
                assert_eq!(m.get(i, j), m.get(j, i));
                let v = m.get(i, j);
                assert!((-1.0..=1.0).contains(&v));
                // Rounded to two decimals.
                assert_eq!(v, (v * 100.0).round() / 100.0);
            }
        }
    }

    #[test]
    fn correlation_requires_two_records() {
        let ds = dataset();
        assert!(correlation_matrix(&ds, &[0]).is_none());
        assert!(correlation_matrix(&ds, &[0, 1]).is_some());
    }

    #[test]
    fn constant_series_correlates_as_nan() {
        // Singapore, Switzerland, New Zealand all have financial_freedom 80.
        let ds = dataset();
        let m = correlation_matrix(&ds, &[0, 1, 3]).unwrap();
        let ff = Indicator::ALL
            .iter()
            .position(|i| *i == Indicator::FinancialFreedom)
            .unwrap();
        assert!(m.get(ff, 0).is_nan());
        assert!(m.get(ff, ff).is_nan());
    }

    #[test]
    fn trend_recovers_an_exact_line() {
        // financial_freedom is 10 * (score-band-ish) in no exact way, so use
        // a hand-built subset where y = 2x + 1 holds exactly.
        use crate::data::model::{Country, Region};
        let mk = |name: &'static str, x: f64| Country {
            name,
            region: Region::Europe,
            rank: 1,
            score: x,
            gdp_ppp: 2.0 * x + 1.0,
            population: 0.0,
            unemployment: 0.0,
            inflation: 0.0,
            financial_freedom: 0.0,
            monetary_freedom: 0.0,
            gdp_growth_5yr: 0.0,
            iso_code: None,
        };
        let ds = CountryDataset::new(vec![mk("a", 1.0), mk("b", 2.0), mk("c", 5.0)]);
        let t = linear_trend(&ds, &[0, 1, 2], Indicator::Score, Indicator::GdpPpp).unwrap();
        assert!((t.slope - 2.0).abs() < 1e-12);
        assert!((t.intercept - 1.0).abs() < 1e-12);
        assert!((t.y_at(10.0) - 21.0).abs() < 1e-12);

        // Constant x has no defined slope.
        let flat = CountryDataset::new(vec![mk("a", 3.0), mk("b", 3.0)]);
        assert!(linear_trend(&flat, &[0, 1], Indicator::Score, Indicator::GdpPpp).is_none());
    }
}
