//! Unit formatting and measurement label tests.

use crate::helpers::TestEditorBuilder;
use floorboard::measure::{format_area, format_length, item_labels};
use floorboard::UnitMode;

#[test]
fn snapshot_length_formats() {
    insta::assert_snapshot!(format_length(2.0, UnitMode::Meters), @"2.00 m");
    insta::assert_snapshot!(format_length(2.0, UnitMode::Centimeters), @"200.0 cm");
    insta::assert_snapshot!(format_length(2.0, UnitMode::Millimeters), @"2000 mm");
    insta::assert_snapshot!(format_length(2.0, UnitMode::FeetInches), @"6′ 6.7″");
}

#[test]
fn snapshot_fractional_lengths() {
    insta::assert_snapshot!(format_length(0.5, UnitMode::Meters), @"0.50 m");
    insta::assert_snapshot!(format_length(1.25, UnitMode::Centimeters), @"125.0 cm");
    insta::assert_snapshot!(format_length(0.3048, UnitMode::FeetInches), @"1′ 0.0″");
}

#[test]
fn snapshot_area_format() {
    insta::assert_snapshot!(format_area(6.0), @"6.00 m²");
    insta::assert_snapshot!(format_area(0.126), @"0.13 m²");
}

#[test]
fn test_unit_mode_labels() {
    let labels: Vec<&str> = UnitMode::all().iter().map(|u| u.label()).collect();
    assert_eq!(labels, vec!["m", "cm", "mm", "ft-in"]);
}

#[test]
fn test_wall_length_label_in_meters() {
    // 4 grid units at 0.5 m/unit reads 2.00 m
    let mut editor = TestEditorBuilder::new()
        .with_wall((0.0, 0.0), (4.0, 0.0))
        .with_scale(0.5)
        .build();
    let id = editor.scene.items[0].id;
    editor.toggle_measure(id);

    let labels = item_labels(
        &editor.scene.items[0],
        &editor.viewport,
        editor.meters_per_grid,
        editor.unit,
    );
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].text, "2.00 m");
}

#[test]
fn test_room_area_label() {
    // 2 x 3 grid units at 1.0 m/unit reads 6.00 m²
    let mut editor = TestEditorBuilder::new()
        .with_room((0.0, 0.0), (2.0, 3.0))
        .with_scale(1.0)
        .build();
    let id = editor.scene.items[0].id;
    editor.toggle_measure(id);

    let labels = item_labels(
        &editor.scene.items[0],
        &editor.viewport,
        editor.meters_per_grid,
        editor.unit,
    );
    assert_eq!(labels.len(), 3);
    assert_eq!(labels[0].text, "2.00 m");
    assert_eq!(labels[1].text, "3.00 m");
    assert_eq!(labels[2].text, "6.00 m²");
}

#[test]
fn test_hidden_area_drops_center_badge() {
    let mut editor = TestEditorBuilder::new()
        .with_room((0.0, 0.0), (2.0, 3.0))
        .with_scale(1.0)
        .build();
    let id = editor.scene.items[0].id;
    editor.toggle_measure(id);
    editor.toggle_show_area(id);

    let labels = item_labels(
        &editor.scene.items[0],
        &editor.viewport,
        editor.meters_per_grid,
        editor.unit,
    );
    assert_eq!(labels.len(), 2);
}

#[test]
fn test_labels_empty_without_measure_flag() {
    let editor = TestEditorBuilder::new()
        .with_wall((0.0, 0.0), (4.0, 0.0))
        .build();
    let labels = item_labels(
        &editor.scene.items[0],
        &editor.viewport,
        editor.meters_per_grid,
        editor.unit,
    );
    assert!(labels.is_empty());
}
