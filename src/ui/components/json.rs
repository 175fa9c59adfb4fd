use egui::{CollapsingHeader, Id, RichText, Ui};
use serde_json::Value;

/// Read-only viewer for a JSON document
#[derive(Debug, Clone, Default)]
pub struct Json {
    pub label: String,
    value: Option<Value>,
}

impl Json {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: Option<Value>) {
        self.value = value;
    }

    pub fn show(&mut self, ui: &mut Ui) {
        ui.label(RichText::new(&self.label).weak().size(12.0));
        match &self.value {
            Some(value) => {
                let root = ui.id().with("json_root");
                Self::show_value(ui, root, None, value);
            }
            None => {
                ui.label(RichText::new("null").monospace().weak());
            }
        }
    }

    fn show_value(ui: &mut Ui, id: Id, key: Option<&str>, value: &Value) {
        match value {
            Value::Object(map) => {
                let title = match key {
                    Some(key) => format!("{key}: {{{}}}", map.len()),
                    None => format!("{{{}}}", map.len()),
                };
                CollapsingHeader::new(RichText::new(title).monospace())
                    .id_salt(id)
                    .default_open(true)
                    .show(ui, |ui| {
                        for (child_key, child) in map {
                            Self::show_value(ui, id.with(child_key), Some(child_key), child);
                        }
                    });
            }
            Value::Array(items) => {
                let title = match key {
                    Some(key) => format!("{key}: [{}]", items.len()),
                    None => format!("[{}]", items.len()),
                };
                CollapsingHeader::new(RichText::new(title).monospace())
                    .id_salt(id)
                    .default_open(items.len() <= 16)
                    .show(ui, |ui| {
                        for (index, child) in items.iter().enumerate() {
                            let index_key = index.to_string();
                            Self::show_value(ui, id.with(index), Some(&index_key), child);
                        }
                    });
            }
            scalar => {
                let text = match key {
                    Some(key) => format!("{key}: {scalar}"),
                    None => scalar.to_string(),
                };
                ui.label(RichText::new(text).monospace());
            }
        }
    }
}
