use crate::color::RegionColors;
use crate::data::filter::{filtered_indices, FilterCriteria, SortDirection, SortKey};
use crate::data::model::{CountryDataset, Region};
use crate::data::stats::{summarize, Summary};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The five dashboard sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Maps,
    Rankings,
    Trends,
    Correlations,
    Table,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Maps,
        Tab::Rankings,
        Tab::Trends,
        Tab::Correlations,
        Tab::Table,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Maps => "World Maps",
            Tab::Rankings => "Rankings",
            Tab::Trends => "Economic Trends",
            Tab::Correlations => "Correlations",
            Tab::Table => "Data Table",
        }
    }
}

/// The full UI state, independent of rendering. Each filter interaction
/// triggers one synchronous filter→derive pass via [`AppState::refilter`];
/// the dataset itself is read-only for the lifetime of the process.
pub struct AppState {
    /// The embedded dataset, built once at startup.
    pub dataset: CountryDataset,

    /// Current side-panel constraints.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// KPI aggregates over the visible subset (cached).
    pub summary: Summary,

    /// Region → colour mapping for scatter and legend rendering.
    pub region_colors: RegionColors,

    /// Currently selected dashboard tab.
    pub tab: Tab,

    /// Data-table sort state: key and direction.
    pub table_sort: (SortKey, SortDirection),

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let dataset = CountryDataset::embedded();
        let criteria = FilterCriteria::default();
        let visible_indices = filtered_indices(&dataset, &criteria);
        let summary = summarize(&dataset, &visible_indices);
        AppState {
            dataset,
            criteria,
            visible_indices,
            summary,
            region_colors: RegionColors::default(),
            tab: Tab::Maps,
            table_sort: (SortKey::Rank, SortDirection::Ascending),
            status_message: None,
        }
    }
}

impl AppState {
    /// Recompute the cached subset and aggregates after a criteria change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.criteria);
        self.summary = summarize(&self.dataset, &self.visible_indices);
    }

    /// Set the region filter (`None` = "All") and refilter.
    pub fn set_region(&mut self, region: Option<Region>) {
        if self.criteria.region != region {
            self.criteria.region = region;
            self.refilter();
        }
    }

    /// Toggle or switch the table sort: a second click on the active key
    /// flips the direction, a new key starts ascending.
    pub fn toggle_table_sort(&mut self, key: SortKey) {
        let (current, direction) = self.table_sort;
        self.table_sort = if current == key {
            (key, direction.flip())
        } else {
            (key, SortDirection::Ascending)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Indicator;

    #[test]
    fn default_state_shows_everything() {
        let state = AppState::default();
        assert_eq!(state.visible_indices.len(), state.dataset.len());
        assert_eq!(state.summary.count, 40);
    }

    #[test]
    fn set_region_refilters() {
        let mut state = AppState::default();
        state.set_region(Some(Region::SubSaharanAfrica));
        assert_eq!(state.visible_indices.len(), 5);
        state.set_region(None);
        assert_eq!(state.visible_indices.len(), 40);
    }

    #[test]
    fn table_sort_toggles_direction_on_repeat() {
        let mut state = AppState::default();
        let key = SortKey::Indicator(Indicator::Score);
        state.toggle_table_sort(key);
        assert_eq!(state.table_sort, (key, SortDirection::Ascending));
        state.toggle_table_sort(key);
        assert_eq!(state.table_sort, (key, SortDirection::Descending));
        state.toggle_table_sort(SortKey::Rank);
        assert_eq!(state.table_sort, (SortKey::Rank, SortDirection::Ascending));
    }
}
