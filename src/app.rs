use crate::i18n::Catalog;
use crate::ui::components::TableEvent;
use crate::ui::history::{HistorySection, create_history_section};

/// Host window holding the history tab
pub struct HistoryApp {
    history: HistorySection,
}

impl HistoryApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, catalog: &Catalog) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self::with_catalog(catalog)
    }

    /// Build the app without a window, e.g. for headless rendering
    pub fn with_catalog(catalog: &Catalog) -> Self {
        Self {
            history: create_history_section(|key: &str| catalog.translate(key)),
        }
    }

    pub fn history(&self) -> &HistorySection {
        &self.history
    }

    /// Draw one frame into `ctx`
    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Only one tab lives in this window
                let _ = ui.selectable_label(true, self.history.title());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.history.show(ui);
                });
        });

        self.log_interactions();
    }

    /// Nothing is wired to the handles here; surface what the user did
    /// so wiring code has something to hook into.
    fn log_interactions(&self) {
        for (name, component) in self.history.components() {
            if let crate::ui::components::Component::Button(button) = component {
                while button.borrow_mut().take_clicked() {
                    log::debug!("{name} clicked");
                }
            }
        }

        for event in self.history.history_table.borrow_mut().take_events() {
            match event {
                TableEvent::Select { row, column } => {
                    log::debug!("history_table select row={row} column={column}");
                }
                TableEvent::Edit { row, column } => {
                    log::debug!("history_table edit row={row} column={column}");
                }
            }
        }
    }
}

impl eframe::App for HistoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::HistoryApp;
    use crate::i18n::Catalog;

    #[test]
    fn english_app_renders_a_frame() {
        let mut app = HistoryApp::with_catalog(&Catalog::english());
        assert_eq!(app.history().title(), "📜 History");

        let ctx = egui::Context::default();
        let _output = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));
    }

    #[test]
    fn queued_clicks_are_drained_each_frame() {
        let mut app = HistoryApp::with_catalog(&Catalog::default());
        app.history().refresh_history_btn.borrow_mut().click();

        let ctx = egui::Context::default();
        let _output = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));

        assert!(!app.history().refresh_history_btn.borrow_mut().take_clicked());
    }
}
