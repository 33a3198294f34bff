use std::collections::HashSet;

use eframe::egui::{self, Align2, Color32, FontId, Rect, Sense, Ui, Vec2};

use crate::color::score_color;
use crate::data::filter::{rank_at_most, ranked_view, SortDirection, SortKey};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Tile cartogram – the egui stand-in for a geographic choropleth
// ---------------------------------------------------------------------------
//
// egui has no map widget, so each country is drawn as a tile keyed by its
// ISO code and coloured by the active mode. Records without an ISO code are
// silently skipped here; they still appear in every non-map view.

/// Colouring mode of a map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapMode {
    /// Continuous freedom-score scale over all countries.
    Score,
    /// Countries with world rank ≤ 40 highlighted, others dimmed.
    Top40,
    /// The 15 worst-ranked countries highlighted, others dimmed.
    Bottom15,
}

const TILE: Vec2 = Vec2::new(58.0, 40.0);
const GAP: f32 = 4.0;
const DIM: Color32 = Color32::from_rgb(0x21, 0x26, 0x2d);
const TOP_HIGHLIGHT: Color32 = Color32::from_rgb(0xf7, 0x81, 0x66);
const BOTTOM_HIGHLIGHT: Color32 = Color32::from_rgb(0x58, 0xa6, 0xff);

/// Render one map view. Maps always show the full dataset, not the filtered
/// subset; the side-panel filters drive the other tabs.
pub fn tile_map(ui: &mut Ui, state: &AppState, mode: MapMode) {
    let ds = &state.dataset;

    let highlighted: HashSet<usize> = match mode {
        MapMode::Score => HashSet::new(),
        MapMode::Top40 => rank_at_most(ds, 40).into_iter().collect(),
        MapMode::Bottom15 => {
            let all: Vec<usize> = (0..ds.len()).collect();
            ranked_view(ds, &all, SortKey::Rank, SortDirection::Descending, 15)
                .into_iter()
                .collect()
        }
    };

    // Tiles in rank order; silent drop of records without an ISO code.
    let ranked: Vec<usize> = {
        let all: Vec<usize> = (0..ds.len()).collect();
        ranked_view(ds, &all, SortKey::Rank, SortDirection::Ascending, ds.len())
            .into_iter()
            .filter(|&i| ds.get(i).iso_code.is_some())
            .collect()
    };

    let avail = ui.available_width();
    let per_row = ((avail + GAP) / (TILE.x + GAP)).floor().max(1.0) as usize;
    let rows = ranked.len().div_ceil(per_row);
    let height = rows as f32 * (TILE.y + GAP);

    let (response, painter) = ui.allocate_painter(Vec2::new(avail, height), Sense::hover());
    let origin = response.rect.min;
    let hover = response.hover_pos();
    let mut hovered: Option<usize> = None;

    for (slot, &idx) in ranked.iter().enumerate() {
        let c = ds.get(idx);
        let col = slot % per_row;
        let row = slot / per_row;
        let min = origin
            + Vec2::new(
                col as f32 * (TILE.x + GAP),
                row as f32 * (TILE.y + GAP),
            );
        let rect = Rect::from_min_size(min, TILE);

        let fill = match mode {
            MapMode::Score => score_color(c.score),
            MapMode::Top40 => {
                if highlighted.contains(&idx) {
                    TOP_HIGHLIGHT
                } else {
                    DIM
                }
            }
            MapMode::Bottom15 => {
                if highlighted.contains(&idx) {
                    BOTTOM_HIGHLIGHT
                } else {
                    DIM
                }
            }
        };

        let is_hovered = hover.is_some_and(|p| rect.contains(p));
        if is_hovered {
            hovered = Some(idx);
        }

        if is_hovered {
            painter.rect_filled(rect.expand(1.5), 3.0, Color32::WHITE);
        }
        painter.rect_filled(rect, 3.0, fill);

        let text_color = if fill == DIM {
            Color32::from_gray(140)
        } else {
            Color32::WHITE
        };
        painter.text(
            rect.center() - Vec2::new(0.0, 7.0),
            Align2::CENTER_CENTER,
            c.iso_code.unwrap_or(""),
            FontId::proportional(11.0),
            text_color,
        );
        painter.text(
            rect.center() + Vec2::new(0.0, 8.0),
            Align2::CENTER_CENTER,
            format!("{:.1}", c.score),
            FontId::proportional(9.0),
            text_color,
        );
    }

    if let Some(idx) = hovered {
        let c = ds.get(idx);
        response.on_hover_ui(|ui| {
            ui.strong(c.name);
            ui.label(format!("Rank {} · Score {:.1}", c.rank, c.score));
            ui.label(c.region.label());
        });
    }
}

/// The whole maps tab: score choropleth plus the two highlight views.
pub fn maps_tab(ui: &mut Ui, state: &AppState) {
    section(
        ui,
        "2022 Economic Freedom Score — Global Choropleth",
        "Freedom index score for all countries · hover for details",
    );
    tile_map(ui, state, MapMode::Score);
    ui.add_space(12.0);

    section(
        ui,
        "Top 40 Ranking Countries",
        "World rank 40 or better, highlighted in orange",
    );
    tile_map(ui, state, MapMode::Top40);
    ui.add_space(12.0);

    section(
        ui,
        "Bottom Ranking Countries",
        "The 15 lowest-ranked countries, highlighted in blue",
    );
    tile_map(ui, state, MapMode::Bottom15);
}

pub(crate) fn section(ui: &mut Ui, title: &str, desc: &str) {
    ui.strong(title);
    ui.label(egui::RichText::new(desc).small().weak());
    ui.add_space(4.0);
}
