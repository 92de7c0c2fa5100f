use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// GDP line chart (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered table as one line per selected country.
pub fn gdp_plot(ui: &mut Ui, state: &AppState) {
    let table = match &state.table {
        Some(table) => table,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a dataset to view GDP per capita  (File → Open…)");
            });
            return;
        }
    };

    ui.heading("Gapminder: GDP per capita, 1800 to 2100");
    ui.label(
        "Gapminder's estimates of GDP per capita for almost all countries, standardized \
         against a World Bank indicator. Pick countries and a year span on the left; the \
         chart follows the selection.",
    );

    // One series per country. Points arrive year-ascending because the table
    // is sorted by (country, year) and the filter preserves table order.
    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &state.visible_indices {
        let obs = &table.observations[idx];
        series
            .entry(obs.country.as_str())
            .or_default()
            .push([obs.year as f64, obs.gdp_per_capita]);
    }

    Plot::new("gdp_plot")
        .legend(Legend::default())
        .x_axis_label("year")
        .y_axis_label("gdp per capita")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (country, points) in series {
                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(country))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let line = Line::new(PlotPoints::from(points))
                    .name(country)
                    .color(color)
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
