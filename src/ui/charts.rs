use eframe::egui::{Align2, Color32, FontId, Rect, Sense, Ui, Vec2};
use egui_plot::{Bar, BarChart, HLine, Legend, Line, LineStyle, Plot, PlotPoints, Points};

use crate::color::{correlation_color, score_color};
use crate::data::filter::{ranked_view, SortDirection, SortKey};
use crate::data::model::{Indicator, Region};
use crate::data::stats::{correlation_matrix, linear_trend};
use crate::state::AppState;
use crate::ui::map::section;

const POSITIVE: Color32 = Color32::from_rgb(0x3f, 0xb9, 0x50);
const NEGATIVE: Color32 = Color32::from_rgb(0xda, 0x36, 0x33);
const ACCENT: Color32 = Color32::from_rgb(0x58, 0xa6, 0xff);
const WARM: Color32 = Color32::from_rgb(0xf7, 0x81, 0x66);
const TREND: Color32 = Color32::from_rgb(0xe3, 0xb3, 0x41);

/// Top-n view over the currently visible subset.
fn top_by(state: &AppState, key: Indicator, direction: SortDirection, n: usize) -> Vec<usize> {
    ranked_view(
        &state.dataset,
        &state.visible_indices,
        SortKey::Indicator(key),
        direction,
        n,
    )
}

// ---------------------------------------------------------------------------
// Rankings tab
// ---------------------------------------------------------------------------

pub fn rankings_tab(ui: &mut Ui, state: &AppState) {
    ui.columns(2, |cols| {
        section(
            &mut cols[0],
            "Index Score by Unemployment Rate",
            "Unemployment % coloured by freedom score",
        );
        unemployment_bars(&mut cols[0], state);

        section(
            &mut cols[1],
            "Index Score by Population",
            "Population vs freedom score",
        );
        population_bars(&mut cols[1], state);
    });

    ui.add_space(12.0);
    section(
        ui,
        "Index Score by Financial Freedom (Treemap)",
        "Relative financial freedom by region and country",
    );
    financial_treemap(ui, state);
}

fn unemployment_bars(ui: &mut Ui, state: &AppState) {
    let view = top_by(
        state,
        Indicator::Unemployment,
        SortDirection::Descending,
        state.criteria.top_n,
    );

    let bars: Vec<Bar> = view
        .iter()
        .enumerate()
        .map(|(pos, &i)| {
            let c = state.dataset.get(i);
            Bar::new(pos as f64, c.unemployment)
                .fill(score_color(c.score))
                .name(c.name)
        })
        .collect();

    Plot::new("unemployment_bars")
        .height(300.0)
        .y_axis_label(Indicator::Unemployment.label())
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

fn population_bars(ui: &mut Ui, state: &AppState) {
    let view = top_by(
        state,
        Indicator::Population,
        SortDirection::Descending,
        state.criteria.top_n,
    );

    let bars: Vec<Bar> = view
        .iter()
        .enumerate()
        .map(|(pos, &i)| {
            let c = state.dataset.get(i);
            Bar::new(pos as f64, c.population)
                .fill(score_color(c.score))
                .name(c.name)
        })
        .collect();

    Plot::new("population_bars")
        .height(300.0)
        .x_axis_label(Indicator::Population.label())
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

/// Slice-and-dice treemap: region strips sized by total weight, countries
/// stacked within each strip. The `+ 10` keeps zero-score slices visible.
fn financial_treemap(ui: &mut Ui, state: &AppState) {
    let ds = &state.dataset;
    let weight = |i: usize| ds.get(i).financial_freedom + 10.0;

    let mut regions: Vec<(Region, Vec<usize>, f64)> = Vec::new();
    for region in Region::ALL {
        let members: Vec<usize> = state
            .visible_indices
            .iter()
            .copied()
            .filter(|&i| ds.get(i).region == region)
            .collect();
        if members.is_empty() {
            continue;
        }
        let total = members.iter().map(|&i| weight(i)).sum();
        regions.push((region, members, total));
    }
    let grand_total: f64 = regions.iter().map(|(_, _, t)| t).sum();
    if grand_total <= 0.0 {
        ui.weak("No countries in view.");
        return;
    }

    let size = Vec2::new(ui.available_width(), 320.0);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let area = response.rect;
    let hover = response.hover_pos();
    let mut hovered: Option<usize> = None;

    let mut x = area.min.x;
    for (region, members, total) in &regions {
        let strip_w = (total / grand_total) as f32 * area.width();
        let strip = Rect::from_min_size(
            eframe::egui::pos2(x, area.min.y),
            Vec2::new(strip_w, area.height()),
        );

        let mut y = strip.min.y + 16.0;
        let body_h = strip.height() - 16.0;
        for &i in members {
            let c = ds.get(i);
            let cell_h = (weight(i) / total) as f32 * body_h;
            let cell = Rect::from_min_size(
                eframe::egui::pos2(strip.min.x, y),
                Vec2::new(strip_w - 1.0, cell_h - 1.0),
            );
            painter.rect_filled(cell, 2.0, score_color(c.financial_freedom));
            if hover.is_some_and(|p| cell.contains(p)) {
                hovered = Some(i);
            }
            if cell.height() > 12.0 && cell.width() > 60.0 {
                painter.text(
                    cell.center(),
                    Align2::CENTER_CENTER,
                    c.name,
                    FontId::proportional(10.0),
                    Color32::WHITE,
                );
            }
            y += cell_h;
        }

        painter.text(
            eframe::egui::pos2(strip.center().x, strip.min.y + 8.0),
            Align2::CENTER_CENTER,
            region.label(),
            FontId::proportional(10.0),
            Color32::from_gray(180),
        );
        x += strip_w;
    }

    if let Some(i) = hovered {
        let c = ds.get(i);
        response.on_hover_ui(|ui| {
            ui.strong(c.name);
            ui.label(format!("Financial Freedom: {:.0}", c.financial_freedom));
            ui.label(format!("Score: {:.1}", c.score));
        });
    }
}

// ---------------------------------------------------------------------------
// Trends tab
// ---------------------------------------------------------------------------

pub fn trends_tab(ui: &mut Ui, state: &AppState) {
    ui.columns(2, |cols| {
        section(
            &mut cols[0],
            "5-Year GDP Growth Rate",
            "Green = positive growth · Red = economic contraction",
        );
        gdp_growth_bars(&mut cols[0], state);

        section(
            &mut cols[1],
            "Inflation Rate by Country",
            "Area chart of the highest-inflation countries in view",
        );
        inflation_area(&mut cols[1], state);
    });

    ui.add_space(12.0);
    section(
        ui,
        "GDP per Capita (PPP) vs Freedom Score",
        "Bubble size = population · coloured by region",
    );
    bubble_scatter(ui, state);
}

fn gdp_growth_bars(ui: &mut Ui, state: &AppState) {
    let view = top_by(
        state,
        Indicator::GdpGrowth5yr,
        SortDirection::Ascending,
        state.criteria.top_n,
    );

    let bars: Vec<Bar> = view
        .iter()
        .enumerate()
        .map(|(pos, &i)| {
            let c = state.dataset.get(i);
            let fill = if c.gdp_growth_5yr < 0.0 { NEGATIVE } else { POSITIVE };
            Bar::new(pos as f64, c.gdp_growth_5yr)
                .fill(fill)
                .name(c.name)
        })
        .collect();

    Plot::new("gdp_growth_bars")
        .height(280.0)
        .y_axis_label(Indicator::GdpGrowth5yr.label())
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
            plot_ui.hline(
                HLine::new(0.0)
                    .color(Color32::from_gray(80))
                    .width(1.0)
                    .style(LineStyle::Dashed { length: 6.0 }),
            );
        });
}

fn inflation_area(ui: &mut Ui, state: &AppState) {
    let view = top_by(
        state,
        Indicator::Inflation,
        SortDirection::Descending,
        state.criteria.top_n,
    );

    let points: PlotPoints = view
        .iter()
        .enumerate()
        .map(|(pos, &i)| [pos as f64, state.dataset.get(i).inflation])
        .collect();

    Plot::new("inflation_area")
        .height(280.0)
        .y_axis_label(Indicator::Inflation.label())
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .color(ACCENT)
                    .width(2.0)
                    .fill(0.0)
                    .name("Inflation (%)"),
            );
        });
}

fn bubble_scatter(ui: &mut Ui, state: &AppState) {
    Plot::new("bubble_scatter")
        .height(360.0)
        .legend(Legend::default())
        .x_axis_label(Indicator::Score.label())
        .y_axis_label(Indicator::GdpPpp.label())
        .show(ui, |plot_ui| {
            for &i in &state.visible_indices {
                let c = state.dataset.get(i);
                // Area-true sizing: radius grows with the square root.
                let radius = 2.0 + (c.population.sqrt() * 0.55) as f32;
                plot_ui.points(
                    Points::new(vec![[c.score, c.gdp_ppp]])
                        .radius(radius)
                        .color(state.region_colors.color_for(c.region))
                        .name(c.region.label()),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Correlations tab
// ---------------------------------------------------------------------------

pub fn correlations_tab(ui: &mut Ui, state: &AppState) {
    ui.columns(2, |cols| {
        section(
            &mut cols[0],
            "Inflation vs Unemployment",
            "Both indicators over the view, ordered by inflation",
        );
        dual_indicator_lines(&mut cols[0], state);

        section(
            &mut cols[1],
            "GDP (PPP) vs Monetary Freedom",
            "Scatter with least-squares trend line",
        );
        trend_scatter(&mut cols[1], state);
    });

    ui.add_space(12.0);
    section(
        ui,
        "Correlation Heatmap — Key Economic Indicators",
        "Pearson correlation matrix · green = positive · red = negative",
    );
    correlation_heatmap(ui, state);
}

fn dual_indicator_lines(ui: &mut Ui, state: &AppState) {
    let view = ranked_view(
        &state.dataset,
        &state.visible_indices,
        SortKey::Indicator(Indicator::Inflation),
        SortDirection::Ascending,
        state.visible_indices.len(),
    );

    let series = |ind: Indicator| -> PlotPoints {
        view.iter()
            .enumerate()
            .map(|(pos, &i)| [pos as f64, ind.value(state.dataset.get(i))])
            .collect()
    };

    Plot::new("dual_indicator_lines")
        .height(280.0)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(series(Indicator::Inflation))
                    .color(WARM)
                    .width(2.0)
                    .name("Inflation (%)"),
            );
            plot_ui.line(
                Line::new(series(Indicator::Unemployment))
                    .color(ACCENT)
                    .width(2.0)
                    .name("Unemployment (%)"),
            );
        });
}

fn trend_scatter(ui: &mut Ui, state: &AppState) {
    let trend = linear_trend(
        &state.dataset,
        &state.visible_indices,
        Indicator::MonetaryFreedom,
        Indicator::GdpPpp,
    );

    Plot::new("trend_scatter")
        .height(280.0)
        .legend(Legend::default())
        .x_axis_label(Indicator::MonetaryFreedom.label())
        .y_axis_label(Indicator::GdpPpp.label())
        .show(ui, |plot_ui| {
            let mut x_min = f64::INFINITY;
            let mut x_max = f64::NEG_INFINITY;
            for &i in &state.visible_indices {
                let c = state.dataset.get(i);
                x_min = x_min.min(c.monetary_freedom);
                x_max = x_max.max(c.monetary_freedom);
                plot_ui.points(
                    Points::new(vec![[c.monetary_freedom, c.gdp_ppp]])
                        .radius(4.0)
                        .color(state.region_colors.color_for(c.region))
                        .name(c.region.label()),
                );
            }

            // Omitted entirely when undefined, never drawn degenerate.
            if let Some(t) = trend {
                if x_min < x_max {
                    let line: PlotPoints =
                        vec![[x_min, t.y_at(x_min)], [x_max, t.y_at(x_max)]].into();
                    plot_ui.line(
                        Line::new(line)
                            .color(TREND)
                            .width(2.0)
                            .style(LineStyle::Dashed { length: 8.0 })
                            .name("Trend"),
                    );
                }
            }
        });
}

fn correlation_heatmap(ui: &mut Ui, state: &AppState) {
    let Some(matrix) = correlation_matrix(&state.dataset, &state.visible_indices) else {
        ui.weak("Not enough countries in view to correlate (need at least 2).");
        return;
    };

    let fields = matrix.fields();
    let n = fields.len();
    let label_w = 120.0;
    let label_h = 16.0;
    let cell = ((ui.available_width() - label_w) / n as f32).min(52.0);
    let size = Vec2::new(label_w + cell * n as f32, cell * n as f32 + label_h);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = response.rect.min;

    for row in 0..n {
        // Row label.
        painter.text(
            origin + Vec2::new(label_w - 6.0, (row as f32 + 0.5) * cell),
            Align2::RIGHT_CENTER,
            fields[row].name(),
            FontId::proportional(10.0),
            Color32::from_gray(160),
        );
        for col in 0..n {
            let v = matrix.get(row, col);
            let rect = Rect::from_min_size(
                origin + Vec2::new(label_w + col as f32 * cell, row as f32 * cell),
                Vec2::splat(cell - 1.0),
            );
            painter.rect_filled(rect, 2.0, correlation_color(v));
            if !v.is_nan() {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    format!("{v:.2}"),
                    FontId::proportional(9.0),
                    Color32::WHITE,
                );
            }
        }
    }

    // Column labels.
    for col in 0..n {
        painter.text(
            origin + Vec2::new(label_w + (col as f32 + 0.5) * cell, cell * n as f32 + 2.0),
            Align2::CENTER_TOP,
            fields[col].name(),
            FontId::proportional(8.0),
            Color32::from_gray(160),
        );
    }
}
