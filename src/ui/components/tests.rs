use std::path::PathBuf;

use super::{
    Button, Cell, Column, ColumnType, Component, Dataframe, Handle, Json, State, Textbox,
};
use crate::error::UiError;
use crate::ui::audio_player::PreviewState;

fn two_column_table() -> Dataframe {
    Dataframe::new(
        "Files",
        vec![
            Column {
                header: "Keep".to_owned(),
                dtype: ColumnType::Bool,
            },
            Column {
                header: "Name".to_owned(),
                dtype: ColumnType::Str,
            },
        ],
    )
}

#[test]
fn dataframe_rejects_rows_of_wrong_shape() {
    let mut table = two_column_table();
    let err = table
        .set_rows(vec![vec![Cell::Bool(true)]])
        .expect_err("one cell for two columns");
    assert!(matches!(err, UiError::RowShape { expected: 2, found: 1 }));
    assert!(table.rows().is_empty());
}

#[test]
fn dataframe_rejects_cells_of_wrong_type() {
    let mut table = two_column_table();
    let err = table
        .push_row(vec![Cell::Str("yes".to_owned()), Cell::Str("a.flac".to_owned())])
        .expect_err("string in a bool column");
    assert!(matches!(err, UiError::CellType { column: 0, expected: "bool" }));
}

#[test]
fn dataframe_keeps_valid_rows() {
    let mut table = two_column_table();
    table
        .set_rows(vec![
            vec![Cell::Bool(false), Cell::Str("a.flac".to_owned())],
            vec![Cell::Bool(true), Cell::Str("b.flac".to_owned())],
        ])
        .expect("valid rows");
    table.push_empty_row();

    assert_eq!(table.rows().len(), 3);
    assert_eq!(
        table.rows().last(),
        Some(&vec![Cell::Bool(false), Cell::Str(String::new())])
    );

    table.clear();
    assert!(table.rows().is_empty());
}

#[test]
fn cells_deserialize_from_plain_json() {
    let row: Vec<Cell> = serde_json::from_str(r#"[true, "1718000000"]"#).expect("valid json");
    assert_eq!(row, vec![Cell::Bool(true), Cell::Str("1718000000".to_owned())]);
}

#[test]
fn button_clicks_queue_until_taken() {
    let mut button = Button::new("Refresh");
    button.click();
    button.click();
    assert!(button.take_clicked());
    assert!(button.take_clicked());
    assert!(!button.take_clicked());

    button.visible = false;
    button.click();
    assert!(!button.take_clicked());
}

#[test]
fn button_scale_is_at_least_one() {
    assert_eq!(Button::new("x").scale(0).scale, 1);
    assert_eq!(Button::new("x").scale(3).scale, 3);
}

#[test]
fn handles_share_state_between_clones() {
    let handle = Handle::new(Textbox::new("Status"));
    let clone = handle.clone();
    clone.borrow_mut().set_value("done");

    assert!(handle.ptr_eq(&clone));
    assert_eq!(handle.borrow().value, "done");
    assert!(!handle.ptr_eq(&Handle::new(Textbox::new("Status"))));
}

#[test]
fn state_set_returns_previous_value() {
    let mut state = State::new(None);
    assert_eq!(state.set(Some(PathBuf::from("a.flac"))), None);
    assert_eq!(state.get().as_deref(), Some(std::path::Path::new("a.flac")));
}

#[test]
fn hidden_widgets_have_no_visible_labels() {
    let state: Component = Handle::new(State::<Option<PathBuf>>::new(None)).into();
    assert!(state.visible_labels().is_empty());
    assert!(!state.is_rendered());

    let textbox: Component = Handle::new(Textbox::new("Status").visible(false)).into();
    assert!(textbox.visible_labels().is_empty());

    let json: Component = Handle::new(Json::new("Metadata")).into();
    assert_eq!(json.visible_labels(), vec!["Metadata".to_owned()]);
}

#[test]
fn preview_time_is_formatted_as_minutes_and_seconds() {
    let mut preview = PreviewState::new();
    assert_eq!(preview.format_position(), "00:00");
    assert_eq!(preview.progress(), 0.0);

    preview.total_duration = 120.0;
    preview.set_position(62.9);
    assert_eq!(preview.format_position(), "01:02");
    assert_eq!(preview.format_duration(), "02:00");

    preview.set_position(500.0);
    assert_eq!(preview.format_position(), "02:00");
}

#[test]
fn preview_without_source_refuses_to_play() {
    let mut preview = PreviewState::new();
    assert!(matches!(preview.toggle_play(), Err(UiError::NoAudioLoaded)));
    assert!(!preview.is_playing);
}
