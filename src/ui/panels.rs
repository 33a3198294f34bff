use anyhow::Context;
use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::export;
use crate::data::model::Region;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets and KPI cards
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("EFI Dashboard");
    ui.label(
        RichText::new("Heritage Foundation · 2022")
            .small()
            .weak(),
    );
    ui.separator();

    // ---- Region filter ----
    ui.strong("Filter by Region");
    let current_label = state
        .criteria
        .region
        .map(|r| r.label())
        .unwrap_or("All");
    egui::ComboBox::from_id_salt("region_filter")
        .selected_text(current_label)
        .width(ui.available_width() - 8.0)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.criteria.region.is_none(), "All")
                .clicked()
            {
                state.set_region(None);
            }
            for region in Region::ALL {
                if ui
                    .selectable_label(state.criteria.region == Some(region), region.label())
                    .clicked()
                {
                    state.set_region(Some(region));
                }
            }
        });
    ui.add_space(8.0);

    // ---- Score range ----
    ui.strong("Score Range");
    let mut changed = false;
    changed |= ui
        .add(
            egui::Slider::new(&mut state.criteria.score_range.0, 0.0..=100.0)
                .integer()
                .text("min"),
        )
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(&mut state.criteria.score_range.1, 0.0..=100.0)
                .integer()
                .text("max"),
        )
        .changed();
    ui.add_space(8.0);

    // ---- Top N ----
    ui.strong("Top N Countries");
    ui.add(egui::Slider::new(&mut state.criteria.top_n, 5..=40));
    ui.add_space(8.0);

    if changed {
        state.refilter();
    }

    ui.separator();

    // ---- KPI cards ----
    kpi_cards(ui, state);

    ui.separator();

    // ---- CSV export ----
    if ui
        .button("⬇ Download Dataset (CSV)")
        .on_hover_text("Export the filtered subset")
        .clicked()
    {
        let indices = state.visible_indices.clone();
        export_csv(state, &indices, "economic_freedom_2022.csv");
    }
    ui.add_space(4.0);
    ui.label(
        RichText::new(format!(
            "Showing {} of {} countries",
            state.visible_indices.len(),
            state.dataset.len()
        ))
        .small()
        .weak(),
    );
}

/// The four summary readouts driven by the derive pipeline.
fn kpi_cards(ui: &mut Ui, state: &AppState) {
    let summary = &state.summary;
    let top_name = summary
        .top_ranked
        .map(|i| state.dataset.get(i).name)
        .unwrap_or("N/A");

    kpi(ui, "Countries Analyzed", &summary.count.to_string());
    kpi(ui, "Avg Freedom Score", &format!("{:.1}", summary.mean_score));
    kpi(ui, "Top Ranked (in view)", top_name);
    kpi(
        ui,
        "Avg Inflation Rate",
        &format!("{:.1}%", summary.mean_inflation),
    );
}

fn kpi(ui: &mut Ui, label: &str, value: &str) {
    ui.label(RichText::new(label.to_uppercase()).small().weak());
    ui.label(RichText::new(value).size(20.0).strong());
    ui.add_space(6.0);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export filtered…").clicked() {
                let indices = state.visible_indices.clone();
                export_csv(state, &indices, "economic_freedom_2022.csv");
                ui.close_menu();
            }
            if ui.button("Export full dataset…").clicked() {
                let indices: Vec<usize> = (0..state.dataset.len()).collect();
                export_csv(state, &indices, "economic_freedom_2022_full.csv");
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label("2022 Global Economic Freedom Dashboard");
        ui.separator();
        ui.label(format!(
            "{} of {} countries in view",
            state.visible_indices.len(),
            state.dataset.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// CSV save dialog
// ---------------------------------------------------------------------------

/// Ask for a target path and write the given subset as CSV.
pub fn export_csv(state: &mut AppState, indices: &[usize], suggested_name: &str) {
    let file = rfd::FileDialog::new()
        .set_title("Export CSV")
        .set_file_name(suggested_name)
        .add_filter("CSV", &["csv"])
        .save_file();

    let Some(path) = file else {
        return;
    };

    match export::write_csv_file(&state.dataset, indices, &path)
        .with_context(|| format!("exporting {}", path.display()))
    {
        Ok(()) => {
            log::info!("Exported {} rows to {}", indices.len(), path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to export CSV: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
