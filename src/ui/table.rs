use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::{ranked_view, SortDirection, SortKey};
use crate::data::model::{Country, Indicator};
use crate::state::AppState;
use crate::ui::map::section;
use crate::ui::panels::export_csv;

// ---------------------------------------------------------------------------
// Data table tab – sortable tabular view plus the download buttons
// ---------------------------------------------------------------------------

struct ColumnSpec {
    header: &'static str,
    sort: Option<SortKey>,
    format: fn(&Country) -> String,
}

const COLUMNS: [ColumnSpec; 11] = [
    ColumnSpec {
        header: "Country",
        sort: None,
        format: |c| c.name.to_string(),
    },
    ColumnSpec {
        header: "Region",
        sort: None,
        format: |c| c.region.label().to_string(),
    },
    ColumnSpec {
        header: "World Rank",
        sort: Some(SortKey::Rank),
        format: |c| c.rank.to_string(),
    },
    ColumnSpec {
        header: "Freedom Score",
        sort: Some(SortKey::Indicator(Indicator::Score)),
        format: |c| format!("{:.1}", c.score),
    },
    ColumnSpec {
        header: "GDP PPP (USD)",
        sort: Some(SortKey::Indicator(Indicator::GdpPpp)),
        format: |c| format!("{:.0}", c.gdp_ppp),
    },
    ColumnSpec {
        header: "Population (M)",
        sort: Some(SortKey::Indicator(Indicator::Population)),
        format: |c| format!("{:.1}", c.population),
    },
    ColumnSpec {
        header: "Unemployment %",
        sort: Some(SortKey::Indicator(Indicator::Unemployment)),
        format: |c| format!("{:.1}", c.unemployment),
    },
    ColumnSpec {
        header: "Inflation %",
        sort: Some(SortKey::Indicator(Indicator::Inflation)),
        format: |c| format!("{:.1}", c.inflation),
    },
    ColumnSpec {
        header: "Financial Freedom",
        sort: Some(SortKey::Indicator(Indicator::FinancialFreedom)),
        format: |c| format!("{:.0}", c.financial_freedom),
    },
    ColumnSpec {
        header: "Monetary Freedom",
        sort: Some(SortKey::Indicator(Indicator::MonetaryFreedom)),
        format: |c| format!("{:.1}", c.monetary_freedom),
    },
    ColumnSpec {
        header: "5yr GDP Growth %",
        sort: Some(SortKey::Indicator(Indicator::GdpGrowth5yr)),
        format: |c| format!("{:.1}", c.gdp_growth_5yr),
    },
];

pub fn table_tab(ui: &mut Ui, state: &mut AppState) {
    section(
        ui,
        "Country Data Explorer",
        "Browse the filtered dataset · click numeric headers to sort",
    );

    let (sort_key, direction) = state.table_sort;
    let sorted = ranked_view(
        &state.dataset,
        &state.visible_indices,
        sort_key,
        direction,
        state.visible_indices.len(),
    );

    let mut clicked_sort: Option<SortKey> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(60.0), COLUMNS.len())
        .header(22.0, |mut header| {
            for column in &COLUMNS {
                header.col(|ui| {
                    match column.sort {
                        Some(key) => {
                            let marker = if key == sort_key {
                                match direction {
                                    SortDirection::Ascending => " ⏶",
                                    SortDirection::Descending => " ⏷",
                                }
                            } else {
                                ""
                            };
                            if ui
                                .button(RichText::new(format!("{}{marker}", column.header)).strong())
                                .clicked()
                            {
                                clicked_sort = Some(key);
                            }
                        }
                        None => {
                            ui.label(RichText::new(column.header).strong());
                        }
                    };
                });
            }
        })
        .body(|body| {
            body.rows(18.0, sorted.len(), |mut row| {
                let c = state.dataset.get(sorted[row.index()]);
                for column in &COLUMNS {
                    row.col(|ui| {
                        ui.label((column.format)(c));
                    });
                }
            });
        });

    if let Some(key) = clicked_sort {
        state.toggle_table_sort(key);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("⬇ Download Full Dataset").clicked() {
            let all: Vec<usize> = (0..state.dataset.len()).collect();
            let by_rank = ranked_view(
                &state.dataset,
                &all,
                SortKey::Rank,
                SortDirection::Ascending,
                all.len(),
            );
            export_csv(state, &by_rank, "economic_freedom_2022_full.csv");
        }
        if ui.button("⬇ Download Filtered").clicked() {
            let by_rank = ranked_view(
                &state.dataset,
                &state.visible_indices,
                SortKey::Rank,
                SortDirection::Ascending,
                state.visible_indices.len(),
            );
            export_csv(state, &by_rank, "economic_freedom_2022_filtered.csv");
        }
    });
}
