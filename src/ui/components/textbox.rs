use egui::{RichText, TextEdit, Ui};

/// Single-line text field, read-only unless `interactive`
#[derive(Debug, Clone, Default)]
pub struct Textbox {
    pub label: String,
    pub value: String,
    pub interactive: bool,
    pub visible: bool,
}

impl Textbox {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            interactive: true,
            visible: true,
        }
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn show(&mut self, ui: &mut Ui) {
        if !self.visible {
            return;
        }
        ui.label(RichText::new(&self.label).weak().size(12.0));
        ui.add(
            TextEdit::singleline(&mut self.value)
                .interactive(self.interactive)
                .desired_width(f32::INFINITY),
        );
    }
}
