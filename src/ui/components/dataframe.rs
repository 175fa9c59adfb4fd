use egui::{Grid, Label, RichText, ScrollArea, Sense, TextEdit, Ui};
use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// Datatype of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Bool,
    Str,
}

impl ColumnType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Str => "str",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    pub dtype: ColumnType,
}

/// One table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Bool(bool),
    Str(String),
}

impl Cell {
    fn matches(&self, dtype: ColumnType) -> bool {
        matches!(
            (self, dtype),
            (Self::Bool(_), ColumnType::Bool) | (Self::Str(_), ColumnType::Str)
        )
    }

    fn empty(dtype: ColumnType) -> Self {
        match dtype {
            ColumnType::Bool => Self::Bool(false),
            ColumnType::Str => Self::Str(String::new()),
        }
    }
}

/// Something the user did to the table during the last frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    Select { row: usize, column: usize },
    Edit { row: usize, column: usize },
}

/// Editable grid of typed cells
#[derive(Debug, Clone)]
pub struct Dataframe {
    pub label: String,
    pub interactive: bool,
    pub wrap: bool,
    pub max_height: f32,
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
    events: Vec<TableEvent>,
}

impl Dataframe {
    pub fn new(label: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            label: label.into(),
            interactive: false,
            wrap: false,
            max_height: 420.0,
            columns,
            rows: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.header.as_str())
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Replace all rows. Every row must match the column layout.
    pub fn set_rows(&mut self, rows: Vec<Vec<Cell>>) -> Result<(), UiError> {
        for row in &rows {
            self.check_row(row)?;
        }
        self.rows = rows;
        self.events.clear();
        Ok(())
    }

    /// Append one row, checked against the columns
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), UiError> {
        self.check_row(&row)?;
        self.rows.push(row);
        Ok(())
    }

    /// Append a row with every cell empty
    pub fn push_empty_row(&mut self) {
        let row = self.columns.iter().map(|c| Cell::empty(c.dtype)).collect();
        self.rows.push(row);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.events.clear();
    }

    /// Drain the events collected since the last call
    pub fn take_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    fn check_row(&self, row: &[Cell]) -> Result<(), UiError> {
        if row.len() != self.columns.len() {
            return Err(UiError::RowShape {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        for (index, (cell, column)) in row.iter().zip(&self.columns).enumerate() {
            if !cell.matches(column.dtype) {
                return Err(UiError::CellType {
                    column: index,
                    expected: column.dtype.name(),
                });
            }
        }
        Ok(())
    }

    pub fn show(&mut self, ui: &mut Ui) {
        ui.label(RichText::new(&self.label).strong());
        ui.add_space(4.0);

        let str_columns = self
            .columns
            .iter()
            .filter(|c| c.dtype == ColumnType::Str)
            .count();
        let bool_columns = self.columns.len() - str_columns;
        let text_columns = str_columns.max(1);
        let checkbox_width = ui.spacing().interact_size.y * 2.0;
        let text_width = ((ui.available_width() - checkbox_width * bool_columns as f32)
            / text_columns as f32
            - ui.spacing().item_spacing.x)
            .max(40.0);

        let interactive = self.interactive;
        let wrap = self.wrap;
        let columns = &self.columns;
        let rows = &mut self.rows;
        let events = &mut self.events;

        ScrollArea::both()
            .id_salt("history_dataframe")
            .max_height(self.max_height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                Grid::new(ui.id().with("dataframe_grid"))
                    .num_columns(columns.len())
                    .striped(true)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        for column in columns {
                            ui.strong(&column.header);
                        }
                        ui.end_row();

                        for (row_index, row) in rows.iter_mut().enumerate() {
                            for (column_index, cell) in row.iter_mut().enumerate() {
                                let (selected, edited) =
                                    Self::show_cell(ui, cell, interactive, wrap, text_width);
                                if selected {
                                    events.push(TableEvent::Select {
                                        row: row_index,
                                        column: column_index,
                                    });
                                }
                                if edited {
                                    events.push(TableEvent::Edit {
                                        row: row_index,
                                        column: column_index,
                                    });
                                }
                            }
                            ui.end_row();
                        }
                    });

                if rows.is_empty() {
                    ui.label(RichText::new("-").weak());
                }
            });
    }

    /// Returns (selected, edited)
    fn show_cell(ui: &mut Ui, cell: &mut Cell, interactive: bool, wrap: bool, width: f32) -> (bool, bool) {
        match cell {
            Cell::Bool(value) => {
                let response = ui.add_enabled(interactive, egui::Checkbox::without_text(value));
                (response.clicked(), response.changed())
            }
            Cell::Str(text) if interactive => {
                let response = ui.add(TextEdit::singleline(text).desired_width(width));
                (response.gained_focus(), response.changed())
            }
            Cell::Str(text) => {
                let mut label = Label::new(text.as_str()).sense(Sense::click());
                label = if wrap { label.wrap() } else { label.truncate() };
                let response = ui.add_sized([width, 0.0], label);
                (response.clicked(), false)
            }
        }
    }
}
