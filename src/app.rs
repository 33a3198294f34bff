use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{charts, map, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RustyAtlasApp {
    pub state: AppState,
}

impl eframe::App for RustyAtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters and KPIs ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tabbed dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    ui.selectable_value(&mut self.state.tab, tab, tab.label());
                }
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.state.tab {
                    Tab::Maps => map::maps_tab(ui, &self.state),
                    Tab::Rankings => charts::rankings_tab(ui, &self.state),
                    Tab::Trends => charts::trends_tab(ui, &self.state),
                    Tab::Correlations => charts::correlations_tab(ui, &self.state),
                    Tab::Table => table::table_tab(ui, &mut self.state),
                });
        });
    }
}
