//! The history tab: past generations, a preview, and per-item actions.
//!
//! [`create_history_section`] only declares the layout. What the buttons
//! do is up to whoever holds the returned handles.

mod row;
#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::path::PathBuf;

pub use row::{COLUMN_TYPES, HistoryRow};

use crate::error::UiError;
use crate::ui::components::{
    Audio, AudioHandle, Button, ButtonHandle, ButtonVariant, Column, Component, Dataframe,
    DataframeHandle, Handle, Json, JsonHandle, PathStateHandle, State, Textbox, TextboxHandle,
};
use crate::ui::layout::{Markup, Node};

/// Every translation key the history tab asks for
pub const TRANSLATION_KEYS: [&str; 20] = [
    "history.tab_title",
    "history.header",
    "history.subtitle",
    "history.refresh_btn",
    "history.table_headers.select",
    "history.table_headers.id",
    "history.table_headers.filename",
    "history.table_headers.date",
    "history.table_headers.caption",
    "history.table_headers.duration",
    "history.table_label",
    "history.details_header",
    "history.audio_preview_label",
    "history.metadata_label",
    "history.send_to_src_btn",
    "history.send_to_ref_btn",
    "history.load_params_btn",
    "history.delete_preview_btn",
    "history.delete_selected_btn",
    "history.status_label",
];

/// Names under which [`HistorySection::components`] exposes the handles
pub const COMPONENT_KEYS: [&str; 11] = [
    "refresh_history_btn",
    "history_table",
    "selected_audio",
    "selected_metadata",
    "send_to_src_btn",
    "send_to_ref_btn",
    "load_params_btn",
    "delete_btn",
    "delete_preview_btn",
    "selected_item_path",
    "status_output",
];

const TABLE_HEADER_KEYS: [&str; 6] = [
    "history.table_headers.select",
    "history.table_headers.id",
    "history.table_headers.filename",
    "history.table_headers.date",
    "history.table_headers.caption",
    "history.table_headers.duration",
];

/// Built history tab: the layout plus a handle to every interactive widget
#[derive(Debug)]
pub struct HistorySection {
    layout: Node,
    pub refresh_history_btn: ButtonHandle,
    pub history_table: DataframeHandle,
    pub selected_audio: AudioHandle,
    pub selected_metadata: JsonHandle,
    pub send_to_src_btn: ButtonHandle,
    pub send_to_ref_btn: ButtonHandle,
    pub load_params_btn: ButtonHandle,
    pub delete_btn: ButtonHandle,
    pub delete_preview_btn: ButtonHandle,
    /// Full path of the item picked in the table; empty until wiring sets it
    pub selected_item_path: PathStateHandle,
    pub status_output: TextboxHandle,
}

/// Build the history tab with labels looked up through `t`
pub fn create_history_section(t: impl Fn(&str) -> String) -> HistorySection {
    let refresh_history_btn = Handle::new(Button::new(t("history.refresh_btn")));

    let columns = TABLE_HEADER_KEYS
        .iter()
        .zip(COLUMN_TYPES)
        .map(|(&key, dtype)| Column {
            header: t(key),
            dtype,
        })
        .collect();
    let history_table = Handle::new(
        Dataframe::new(t("history.table_label"), columns)
            .interactive(true)
            .wrap(true),
    );

    let selected_audio =
        Handle::new(Audio::new(t("history.audio_preview_label")).interactive(false));
    let metadata_label = t("history.metadata_label");
    let selected_metadata = Handle::new(Json::new(metadata_label.clone()));

    let send_to_src_btn =
        Handle::new(Button::new(t("history.send_to_src_btn")).interactive(false));
    let send_to_ref_btn =
        Handle::new(Button::new(t("history.send_to_ref_btn")).interactive(false));

    let load_params_btn = Handle::new(
        Button::new(t("history.load_params_btn"))
            .variant(ButtonVariant::Primary)
            .interactive(false)
            .scale(3),
    );
    let delete_preview_btn = Handle::new(
        Button::new(t("history.delete_preview_btn"))
            .variant(ButtonVariant::Secondary)
            .interactive(false)
            .scale(1),
    );
    let delete_btn = Handle::new(
        Button::new(t("history.delete_selected_btn"))
            .variant(ButtonVariant::Stop)
            .interactive(true)
            .scale(1),
    );

    let selected_item_path = Handle::new(State::<Option<PathBuf>>::new(None));
    let status_output = Handle::new(
        Textbox::new(t("history.status_label"))
            .interactive(false)
            .visible(true),
    );

    let layout = Node::tab(
        t("history.tab_title"),
        vec![
            Node::Html(Markup::Banner {
                title: t("history.header"),
                subtitle: Some(t("history.subtitle")),
            }),
            Node::Row(vec![
                Node::column(
                    3,
                    vec![
                        Node::component(refresh_history_btn.clone()),
                        Node::component(history_table.clone()),
                    ],
                ),
                Node::column(
                    2,
                    vec![
                        Node::Html(Markup::Heading {
                            text: t("history.details_header"),
                            level: 3,
                        }),
                        Node::component(selected_audio.clone()),
                        Node::accordion(
                            metadata_label,
                            true,
                            vec![Node::component(selected_metadata.clone())],
                        ),
                        Node::Row(vec![
                            Node::component(send_to_src_btn.clone()),
                            Node::component(send_to_ref_btn.clone()),
                        ]),
                        Node::Row(vec![
                            Node::component(load_params_btn.clone()),
                            Node::component(delete_preview_btn.clone()),
                            Node::component(delete_btn.clone()),
                        ]),
                        Node::component(selected_item_path.clone()),
                        Node::component(status_output.clone()),
                    ],
                ),
            ]),
        ],
    );

    log::debug!("History section built");

    HistorySection {
        layout,
        refresh_history_btn,
        history_table,
        selected_audio,
        selected_metadata,
        send_to_src_btn,
        send_to_ref_btn,
        load_params_btn,
        delete_btn,
        delete_preview_btn,
        selected_item_path,
        status_output,
    }
}

impl HistorySection {
    /// Translated tab title
    pub fn title(&self) -> &str {
        match &self.layout {
            Node::Tab { title, .. } => title,
            _ => "",
        }
    }

    pub fn layout(&self) -> &Node {
        &self.layout
    }

    /// The handles keyed by their wiring names
    pub fn components(&self) -> BTreeMap<&'static str, Component> {
        BTreeMap::from([
            ("refresh_history_btn", self.refresh_history_btn.clone().into()),
            ("history_table", self.history_table.clone().into()),
            ("selected_audio", self.selected_audio.clone().into()),
            ("selected_metadata", self.selected_metadata.clone().into()),
            ("send_to_src_btn", self.send_to_src_btn.clone().into()),
            ("send_to_ref_btn", self.send_to_ref_btn.clone().into()),
            ("load_params_btn", self.load_params_btn.clone().into()),
            ("delete_btn", self.delete_btn.clone().into()),
            ("delete_preview_btn", self.delete_preview_btn.clone().into()),
            ("selected_item_path", self.selected_item_path.clone().into()),
            ("status_output", self.status_output.clone().into()),
        ])
    }

    pub fn visible_labels(&self) -> Vec<String> {
        self.layout.visible_labels()
    }

    /// Replace the table contents
    pub fn set_rows(&self, rows: Vec<HistoryRow>) -> Result<(), UiError> {
        let cells = rows.into_iter().map(HistoryRow::into_cells).collect();
        self.history_table.borrow_mut().set_rows(cells)
    }

    pub fn rows(&self) -> Result<Vec<HistoryRow>, UiError> {
        self.history_table
            .borrow()
            .rows()
            .iter()
            .map(|cells| HistoryRow::from_cells(cells))
            .collect()
    }

    /// Rows whose select box is ticked
    pub fn checked_rows(&self) -> Result<Vec<HistoryRow>, UiError> {
        Ok(self.rows()?.into_iter().filter(|row| row.selected).collect())
    }

    /// Draw the tab body
    pub fn show(&self, ui: &mut egui::Ui) {
        self.layout.show(ui);
    }
}
