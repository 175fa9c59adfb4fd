#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;

use acestep_history::i18n::Catalog;

// Usage:
//   acestep_history [--labels <labels.json>]
//
// `--labels` overlays a nested JSON label file on the built-in English labels.
fn labels_path() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--labels" {
            return args.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--labels=") {
            return Some(PathBuf::from(path));
        }
    }
    None
}

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let mut catalog = Catalog::english();
    if let Some(path) = labels_path() {
        match Catalog::load(&path) {
            Ok(overlay) => {
                log::info!("Loaded {} labels from {}", overlay.len(), path.display());
                catalog.merge(overlay);
            }
            Err(e) => log::error!("Could not load labels from {}: {e}", path.display()),
        }
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([900.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "ACE-Step History",
        native_options,
        Box::new(move |cc| Ok(Box::new(acestep_history::HistoryApp::new(cc, &catalog)))),
    )
}
