mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::GdpExplorerApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The table is built once, before the event loop; without it there is no
    // dashboard, so retrieval or reshape failures terminate startup.
    let path = match std::env::var_os("GDP_DATA") {
        Some(local) => PathBuf::from(local),
        None => data::fetch::fetch_cached(data::fetch::DATA_URL)?,
    };
    let table = data::loader::load_csv(&path)
        .with_context(|| format!("loading dataset from {}", path.display()))?;
    log::info!(
        "loaded {} observations for {} countries",
        table.len(),
        table.countries.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GDP Explorer – Gapminder GDP per capita",
        options,
        Box::new(move |_cc| Ok(Box::new(GdpExplorerApp::with_table(table)))),
    )
    .map_err(|e| anyhow::anyhow!("running the UI event loop: {e}"))
}
