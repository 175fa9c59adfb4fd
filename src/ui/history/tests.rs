use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::PathBuf;

use super::{COMPONENT_KEYS, HistoryRow, TRANSLATION_KEYS, create_history_section};
use crate::ui::components::{ButtonVariant, Cell, ColumnType, Component};

fn identity(key: &str) -> String {
    key.to_owned()
}

fn sample_rows() -> Vec<HistoryRow> {
    vec![
        HistoryRow {
            selected: false,
            id: "1718000000".to_owned(),
            filename: "lofi_beat.flac".to_owned(),
            date: "2024-06-10 09:33:20".to_owned(),
            caption: "lofi hip hop, rainy night".to_owned(),
            duration: "30.0s".to_owned(),
        },
        HistoryRow {
            selected: true,
            id: "1718000100".to_owned(),
            filename: "synthwave.flac".to_owned(),
            date: "2024-06-10 09:35:00".to_owned(),
            caption: "synthwave, driving".to_owned(),
            duration: "62.5s".to_owned(),
        },
    ]
}

#[test]
fn components_have_exactly_the_wiring_keys() {
    let translators: [&dyn Fn(&str) -> String; 3] = [
        &identity,
        &|_: &str| String::new(),
        &|key: &str| key.to_uppercase(),
    ];

    let expected: BTreeSet<&str> = COMPONENT_KEYS.into_iter().collect();
    for t in translators {
        let section = create_history_section(t);
        let keys: BTreeSet<&str> = section.components().keys().copied().collect();
        assert_eq!(keys, expected);
        assert_eq!(section.components().len(), 11);
    }
}

#[test]
fn table_has_six_typed_columns_in_order() {
    let section = create_history_section(identity);
    let table = section.history_table.borrow();
    let columns = table.columns();

    assert_eq!(columns.len(), 6);
    let headers: Vec<&str> = columns.iter().map(|c| c.header.as_str()).collect();
    assert_eq!(
        headers,
        [
            "history.table_headers.select",
            "history.table_headers.id",
            "history.table_headers.filename",
            "history.table_headers.date",
            "history.table_headers.caption",
            "history.table_headers.duration",
        ]
    );
    let types: Vec<ColumnType> = columns.iter().map(|c| c.dtype).collect();
    assert_eq!(
        types,
        [
            ColumnType::Bool,
            ColumnType::Str,
            ColumnType::Str,
            ColumnType::Str,
            ColumnType::Str,
            ColumnType::Str,
        ]
    );
    assert!(table.interactive);
    assert!(table.wrap);
    assert_eq!(table.label, "history.table_label");
    assert!(table.rows().is_empty());
}

#[test]
fn buttons_start_with_documented_interactivity() {
    let section = create_history_section(identity);

    assert!(section.refresh_history_btn.borrow().interactive);
    assert!(!section.send_to_src_btn.borrow().interactive);
    assert!(!section.send_to_ref_btn.borrow().interactive);
    assert!(!section.load_params_btn.borrow().interactive);
    assert!(!section.delete_preview_btn.borrow().interactive);
    assert!(section.delete_btn.borrow().interactive);

    assert_eq!(section.refresh_history_btn.borrow().variant, ButtonVariant::Secondary);
    assert_eq!(section.load_params_btn.borrow().variant, ButtonVariant::Primary);
    assert_eq!(section.delete_preview_btn.borrow().variant, ButtonVariant::Secondary);
    assert_eq!(section.delete_btn.borrow().variant, ButtonVariant::Stop);

    assert_eq!(section.load_params_btn.borrow().scale, 3);
    assert_eq!(section.delete_preview_btn.borrow().scale, 1);
    assert_eq!(section.delete_btn.borrow().scale, 1);
}

#[test]
fn other_widgets_start_empty() {
    let section = create_history_section(identity);

    assert_eq!(*section.selected_item_path.borrow().get(), None);
    assert!(section.selected_metadata.borrow().value().is_none());

    let audio = section.selected_audio.borrow();
    assert!(!audio.interactive);
    assert!(audio.source().is_none());
    assert!(!audio.is_playing());

    let status = section.status_output.borrow();
    assert!(!status.interactive);
    assert!(status.visible);
    assert!(status.value.is_empty());
    assert_eq!(status.label, "history.status_label");
}

#[test]
fn two_builds_share_no_widget_state() {
    let first = create_history_section(identity);
    let second = create_history_section(identity);

    assert!(!first.delete_btn.ptr_eq(&second.delete_btn));
    assert!(!first.history_table.ptr_eq(&second.history_table));

    first.load_params_btn.borrow_mut().interactive = true;
    first.status_output.borrow_mut().set_value("Deleted 1 item");
    first
        .selected_item_path
        .borrow_mut()
        .set(Some(PathBuf::from("outputs/a.flac")));
    first.set_rows(sample_rows()).expect("rows match the columns");

    assert!(!second.load_params_btn.borrow().interactive);
    assert!(second.status_output.borrow().value.is_empty());
    assert_eq!(*second.selected_item_path.borrow().get(), None);
    assert!(second.history_table.borrow().rows().is_empty());
}

#[test]
fn component_map_shares_handles_with_fields() {
    let section = create_history_section(identity);
    let components = section.components();

    match components.get("delete_btn") {
        Some(Component::Button(handle)) => assert!(handle.ptr_eq(&section.delete_btn)),
        other => panic!("delete_btn is not a button: {other:?}"),
    }
    match components.get("history_table") {
        Some(Component::Dataframe(handle)) => assert!(handle.ptr_eq(&section.history_table)),
        other => panic!("history_table is not a dataframe: {other:?}"),
    }
    match components.get("selected_item_path") {
        Some(Component::PathState(handle)) => {
            assert!(handle.ptr_eq(&section.selected_item_path));
        }
        other => panic!("selected_item_path is not a state: {other:?}"),
    }

    let kinds: Vec<(&str, &str)> = components.iter().map(|(k, c)| (*k, c.kind())).collect();
    assert!(kinds.contains(&("selected_audio", "audio")));
    assert!(kinds.contains(&("selected_metadata", "json")));
    assert!(kinds.contains(&("status_output", "textbox")));
}

#[test]
fn identity_translation_shows_every_key_verbatim() {
    let section = create_history_section(identity);
    let labels = section.visible_labels();

    let keys: BTreeSet<&str> = TRANSLATION_KEYS.into_iter().collect();
    for label in &labels {
        assert!(keys.contains(label.as_str()), "unexpected label {label:?}");
    }
    let shown: BTreeSet<&str> = labels.iter().map(String::as_str).collect();
    assert_eq!(shown, keys);
    assert_eq!(section.title(), "history.tab_title");
}

#[test]
fn translator_is_asked_for_exactly_the_known_keys() {
    let asked = RefCell::new(BTreeSet::new());
    let _section = create_history_section(|key: &str| {
        asked.borrow_mut().insert(key.to_owned());
        format!("<{key}>")
    });

    let expected: BTreeSet<String> = TRANSLATION_KEYS.iter().map(|k| (*k).to_owned()).collect();
    assert_eq!(asked.into_inner(), expected);
}

#[test]
fn translated_labels_reach_the_widgets() {
    let section = create_history_section(|key: &str| match key {
        "history.delete_selected_btn" => "Delete selected".to_owned(),
        "history.table_headers.caption" => "Caption".to_owned(),
        other => other.to_owned(),
    });

    assert_eq!(section.delete_btn.borrow().label, "Delete selected");
    let table = section.history_table.borrow();
    assert_eq!(table.headers().nth(4), Some("Caption"));
}

#[test]
fn rows_round_trip_through_the_table() {
    let section = create_history_section(identity);
    section.set_rows(sample_rows()).expect("rows match the columns");

    assert_eq!(section.rows().expect("typed rows"), sample_rows());

    let checked = section.checked_rows().expect("typed rows");
    assert_eq!(checked.len(), 1);
    assert_eq!(checked.first().map(|r| r.id.as_str()), Some("1718000100"));
}

#[test]
fn row_from_wrong_cells_is_rejected() {
    let short = vec![Cell::Bool(true), Cell::Str("id".to_owned())];
    assert!(HistoryRow::from_cells(&short).is_err());

    let mut swapped = HistoryRow::default().into_cells();
    swapped.swap(0, 1);
    assert!(HistoryRow::from_cells(&swapped).is_err());
}

#[test]
fn disabled_buttons_ignore_clicks() {
    let section = create_history_section(identity);

    section.delete_preview_btn.borrow_mut().click();
    assert!(!section.delete_preview_btn.borrow_mut().take_clicked());

    section.delete_btn.borrow_mut().click();
    assert!(section.delete_btn.borrow_mut().take_clicked());
    assert!(!section.delete_btn.borrow_mut().take_clicked());
}

#[test]
fn renders_headless_without_audio_device() {
    let section = create_history_section(identity);
    section.set_rows(sample_rows()).expect("rows match the columns");
    section
        .selected_metadata
        .borrow_mut()
        .set_value(Some(serde_json::json!({
            "caption": "synthwave, driving",
            "bpm": 120,
            "tags": ["retro", "night"],
        })));
    section
        .selected_audio
        .borrow_mut()
        .set_source(Some(PathBuf::from("does/not/exist.flac")));

    let ctx = egui::Context::default();
    for _ in 0..2 {
        let _output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                section.show(ui);
            });
        });
    }

    assert!(!section.selected_audio.borrow().is_playing());
    assert!(section.history_table.borrow_mut().take_events().is_empty());
}

#[test]
fn layout_holds_every_returned_handle_once() {
    let section = create_history_section(identity);
    let in_tree = section.layout().components();
    assert_eq!(in_tree.len(), COMPONENT_KEYS.len());

    let kinds: Vec<&str> = in_tree.iter().map(|c| c.kind()).collect();
    assert_eq!(kinds.iter().filter(|k| **k == "button").count(), 6);
    assert_eq!(kinds.iter().filter(|k| **k == "state").count(), 1);

    match section.layout() {
        crate::ui::layout::Node::Tab { children, .. } => assert_eq!(children.len(), 2),
        other => panic!("root is not a tab: {other:?}"),
    }
}
