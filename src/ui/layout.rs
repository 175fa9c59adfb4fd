use egui::{Align, CollapsingHeader, Layout, RichText, Ui};

use super::components::Component;

/// Static markup block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// Centered title with an optional subtitle underneath
    Banner { title: String, subtitle: Option<String> },
    Heading { text: String, level: u8 },
}

impl Markup {
    fn texts(&self) -> Vec<String> {
        match self {
            Self::Banner { title, subtitle } => {
                std::iter::once(title.clone()).chain(subtitle.clone()).collect()
            }
            Self::Heading { text, .. } => vec![text.clone()],
        }
    }

    fn show(&self, ui: &mut Ui) {
        match self {
            Self::Banner { title, subtitle } => {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.heading(RichText::new(title).size(22.0).strong());
                    if let Some(subtitle) = subtitle {
                        ui.label(RichText::new(subtitle).weak());
                    }
                    ui.add_space(15.0);
                });
            }
            Self::Heading { text, level } => {
                let size = match *level {
                    1 => 24.0,
                    2 => 20.0,
                    3 => 17.0,
                    _ => 15.0,
                };
                ui.label(RichText::new(text).size(size).strong());
            }
        }
    }
}

/// Declarative layout tree, rendered every frame
#[derive(Debug, Clone)]
pub enum Node {
    /// Titled page; the title is drawn by the host's tab bar
    Tab { title: String, children: Vec<Node> },
    /// Children side by side, widths proportional to their scale
    Row(Vec<Node>),
    /// Children stacked vertically
    Column { scale: u32, children: Vec<Node> },
    /// Collapsible section
    Accordion { label: String, open: bool, children: Vec<Node> },
    Html(Markup),
    Component(Component),
}

impl Node {
    pub fn tab(title: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Tab {
            title: title.into(),
            children,
        }
    }

    pub fn column(scale: u32, children: Vec<Self>) -> Self {
        Self::Column {
            scale: scale.max(1),
            children,
        }
    }

    pub fn accordion(label: impl Into<String>, open: bool, children: Vec<Self>) -> Self {
        Self::Accordion {
            label: label.into(),
            open,
            children,
        }
    }

    pub fn component(component: impl Into<Component>) -> Self {
        Self::Component(component.into())
    }

    pub fn children(&self) -> &[Self] {
        match self {
            Self::Tab { children, .. }
            | Self::Column { children, .. }
            | Self::Accordion { children, .. }
            | Self::Row(children) => children,
            Self::Html(_) | Self::Component(_) => &[],
        }
    }

    /// Relative width when placed in a row
    pub fn scale(&self) -> u32 {
        match self {
            Self::Column { scale, .. } => *scale,
            Self::Component(component) => component.scale(),
            _ => 1,
        }
    }

    fn is_rendered(&self) -> bool {
        match self {
            Self::Component(component) => component.is_rendered(),
            _ => true,
        }
    }

    /// Every component in the tree, depth first
    pub fn components(&self) -> Vec<&Component> {
        let mut out = Vec::new();
        self.collect_components(&mut out);
        out
    }

    fn collect_components<'a>(&'a self, out: &mut Vec<&'a Component>) {
        if let Self::Component(component) = self {
            out.push(component);
        }
        for child in self.children() {
            child.collect_components(out);
        }
    }

    /// All label text a user can see, in tree order
    pub fn visible_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        self.collect_labels(&mut labels);
        labels
    }

    fn collect_labels(&self, labels: &mut Vec<String>) {
        match self {
            Self::Tab { title, .. } => labels.push(title.clone()),
            Self::Accordion { label, .. } => labels.push(label.clone()),
            Self::Html(markup) => labels.extend(markup.texts()),
            Self::Component(component) => labels.extend(component.visible_labels()),
            Self::Row(_) | Self::Column { .. } => {}
        }
        for child in self.children() {
            child.collect_labels(labels);
        }
    }

    pub fn show(&self, ui: &mut Ui) {
        match self {
            Self::Tab { children, .. } | Self::Column { children, .. } => {
                ui.vertical(|ui| {
                    for child in children {
                        child.show(ui);
                        ui.add_space(4.0);
                    }
                });
            }
            Self::Row(children) => Self::show_row(ui, children),
            Self::Accordion { label, open, children } => {
                CollapsingHeader::new(RichText::new(label).strong())
                    .id_salt(ui.id().with(label.as_str()))
                    .default_open(*open)
                    .show(ui, |ui| {
                        for child in children {
                            child.show(ui);
                        }
                    });
            }
            Self::Html(markup) => markup.show(ui),
            Self::Component(component) => component.show(ui),
        }
    }

    fn show_row(ui: &mut Ui, children: &[Self]) {
        let visible: Vec<&Self> = children.iter().filter(|c| c.is_rendered()).collect();
        if visible.is_empty() {
            return;
        }

        let total_scale: u32 = visible.iter().map(|c| c.scale()).sum();
        let spacing = ui.spacing().item_spacing.x;
        let usable = ui.available_width() - spacing * (visible.len() - 1) as f32;

        ui.horizontal_top(|ui| {
            for (index, child) in visible.iter().enumerate() {
                let width = (usable * child.scale() as f32 / total_scale as f32).max(1.0);
                // Columns may grow to the bottom; leaf widgets only take one line
                let height = match child {
                    Self::Column { .. } => ui.available_height(),
                    _ => ui.spacing().interact_size.y,
                };
                ui.push_id(index, |ui| {
                    ui.allocate_ui_with_layout(
                        egui::vec2(width, height),
                        Layout::top_down(Align::Min),
                        |ui| {
                            ui.set_width(width);
                            child.show(ui);
                        },
                    );
                });
            }
        });
    }
}

impl From<Component> for Node {
    fn from(component: Component) -> Self {
        Self::Component(component)
    }
}
