use serde::{Deserialize, Serialize};

use crate::error::UiError;
use crate::ui::components::{Cell, ColumnType};

/// Datatypes of the history table, in column order
pub const COLUMN_TYPES: [ColumnType; 6] = [
    ColumnType::Bool,
    ColumnType::Str,
    ColumnType::Str,
    ColumnType::Str,
    ColumnType::Str,
    ColumnType::Str,
];

/// One past generation as shown in the history table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub selected: bool,
    /// Timestamp id of the generation
    pub id: String,
    pub filename: String,
    pub date: String,
    pub caption: String,
    pub duration: String,
}

impl HistoryRow {
    pub fn into_cells(self) -> Vec<Cell> {
        vec![
            Cell::Bool(self.selected),
            Cell::Str(self.id),
            Cell::Str(self.filename),
            Cell::Str(self.date),
            Cell::Str(self.caption),
            Cell::Str(self.duration),
        ]
    }

    pub fn from_cells(cells: &[Cell]) -> Result<Self, UiError> {
        let [selected, id, filename, date, caption, duration] = cells else {
            return Err(UiError::RowShape {
                expected: COLUMN_TYPES.len(),
                found: cells.len(),
            });
        };

        let Cell::Bool(selected) = selected else {
            return Err(UiError::CellType {
                column: 0,
                expected: ColumnType::Bool.name(),
            });
        };

        Ok(Self {
            selected: *selected,
            id: text(id, 1)?,
            filename: text(filename, 2)?,
            date: text(date, 3)?,
            caption: text(caption, 4)?,
            duration: text(duration, 5)?,
        })
    }
}

fn text(cell: &Cell, column: usize) -> Result<String, UiError> {
    match cell {
        Cell::Str(value) => Ok(value.clone()),
        Cell::Bool(_) => Err(UiError::CellType {
            column,
            expected: ColumnType::Str.name(),
        }),
    }
}
