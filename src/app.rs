use eframe::egui;

use crate::data::model::GdpTable;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GdpExplorerApp {
    pub state: AppState,
}

impl GdpExplorerApp {
    /// Start with the table produced by the startup load.
    pub fn with_table(table: GdpTable) -> Self {
        let mut state = AppState::default();
        state.set_table(table);
        Self { state }
    }
}

impl eframe::App for GdpExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: selection ----
        egui::SidePanel::left("selection_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::gdp_plot(ui, &self.state);
        });
    }
}
