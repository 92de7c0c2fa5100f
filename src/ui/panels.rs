use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the country multi-select and the year-range control.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Selection");
    ui.separator();

    let Some(table) = &state.table else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the loop.
    let countries = table.countries.clone();
    let marks: Vec<String> = table.year_marks.values().cloned().collect();
    let (year_lo, year_hi) = table.year_extent().unwrap_or((1800, 2100));

    // ---- Year range ----
    ui.strong("Years");
    let mut year_min = state.selection.year_min;
    let mut year_max = state.selection.year_max;
    ui.add(egui::Slider::new(&mut year_min, year_lo..=year_hi).text("from"));
    ui.add(egui::Slider::new(&mut year_max, year_lo..=year_hi).text("to"));
    state.set_year_range(year_min, year_max);

    // Century tick labels, mirroring the marks on the chart axis.
    if !marks.is_empty() {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            for label in &marks {
                ui.label(RichText::new(label).weak().small());
            }
        });
    }
    if year_min > year_max {
        ui.label(
            RichText::new("Empty range selected")
                .small()
                .color(Color32::YELLOW),
        );
    }
    ui.separator();

    // ---- Country multi-select ----
    let n_selected = state.selection.countries.len();
    ui.strong(format!("Countries  ({n_selected}/{})", countries.len()));
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for country in &countries {
                let mut checked = state.selection.countries.contains(country);

                // Swatch the label with the series colour.
                let mut text = RichText::new(country);
                if let Some(cm) = &state.color_map {
                    text = text.color(cm.color_for(country));
                }

                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_country(country);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} observations · {} visible",
                table.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Load a replacement CSV picked by the user. A failed load keeps the
/// previous table and reports through the status line; only the startup load
/// is allowed to be fatal.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open GDP-per-capita data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv(&path) {
            Ok(table) => {
                log::info!(
                    "loaded {} observations for {} countries from {}",
                    table.len(),
                    table.countries.len(),
                    path.display()
                );
                state.set_table(table);
            }
            Err(e) => {
                log::error!("failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
