use egui::{Color32, RichText, Ui};

/// Visual weight of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    Primary,
    #[default]
    Secondary,
    /// Destructive action, drawn in red
    Stop,
}

/// Clickable button whose clicks are queued for the wiring code
#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
    pub variant: ButtonVariant,
    pub interactive: bool,
    pub visible: bool,
    /// Relative width inside a row
    pub scale: u32,
    pending_clicks: u32,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            interactive: true,
            visible: true,
            scale: 1,
            pending_clicks: 0,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// Returns true once per queued click
    pub fn take_clicked(&mut self) -> bool {
        if self.pending_clicks > 0 {
            self.pending_clicks -= 1;
            true
        } else {
            false
        }
    }

    /// Queue a click as if the user pressed the button
    pub fn click(&mut self) {
        if self.interactive && self.visible {
            self.pending_clicks += 1;
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        if !self.visible {
            return;
        }

        let (fill, text_color) = match self.variant {
            ButtonVariant::Primary => (Some(Color32::from_rgb(235, 110, 40)), Some(Color32::WHITE)),
            ButtonVariant::Secondary => (None, None),
            ButtonVariant::Stop => (Some(Color32::from_rgb(220, 50, 50)), Some(Color32::WHITE)),
        };

        let mut text = RichText::new(&self.label);
        if let Some(color) = text_color {
            text = text.color(color);
        }
        let mut button = egui::Button::new(text);
        if let Some(fill) = fill {
            button = button.fill(fill);
        }

        let width = ui.available_width();
        let height = ui.spacing().interact_size.y * 1.4;
        let response = ui.add_enabled(self.interactive, button.min_size(egui::vec2(width, height)));
        if response.clicked() {
            self.click();
        }
    }
}
