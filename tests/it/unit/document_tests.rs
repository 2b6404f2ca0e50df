//! Persistence tests - document projection, defaults, and file round trips.

use crate::helpers::TestEditorBuilder;
use floorboard::{Document, Editor, ItemContent, WorldPoint};

#[test]
fn test_editor_document_round_trip() {
    let editor = TestEditorBuilder::new()
        .with_wall((0.0, 0.0), (4.0, 0.0))
        .with_door((1.0, 0.0), (2.0, 0.0))
        .with_room((0.0, 1.0), (3.0, 4.0))
        .with_text("Kitchen", (1.5, 2.5))
        .with_scale(0.5)
        .build();

    let doc = editor.to_document();
    assert_eq!(doc.meters_per_grid, 0.5);
    assert_eq!(doc.items.len(), 4);

    let mut restored = Editor::new();
    restored.load_document(doc);
    assert_eq!(restored.meters_per_grid, 0.5);
    assert_eq!(restored.scene.len(), 4);
    for (orig, back) in editor.scene.items.iter().zip(restored.scene.items.iter()) {
        assert_eq!(orig.content, back.content);
    }
}

#[test]
fn test_load_document_clears_selection() {
    let mut editor = TestEditorBuilder::new()
        .with_wall((0.0, 0.0), (1.0, 0.0))
        .build();
    let id = editor.scene.items[0].id;
    editor.selection.select_single(id);

    editor.load_document(Document::default());
    assert!(editor.selection.is_empty());
    assert!(editor.scene.is_empty());
}

#[test]
fn test_save_and_load_through_file() {
    let editor = TestEditorBuilder::new()
        .with_wall((0.0, 0.0), (4.0, 0.0))
        .with_text("Hall", (2.0, 1.0))
        .build();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");
    editor.to_document().save_to_path(&path).unwrap();

    let doc = Document::load_from_path(&path).unwrap();
    assert_eq!(doc.items.len(), 2);
    assert_eq!(doc.items[0], editor.scene.items[0].content);
    assert_eq!(doc.items[1], editor.scene.items[1].content);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Document::load_from_path(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, floorboard::DocumentError::Io(_)));
}

#[test]
fn test_externally_authored_document_fills_defaults() {
    // Minimal hand-written plan: only geometry, no optional fields
    let json = r#"{
        "items": [
            {"kind": "wall", "data": {"a": [0.0, 0.0], "b": [4.0, 0.0]}},
            {"kind": "text", "data": {"p": [2.0, 0.5], "text": "Entry"}}
        ]
    }"#;
    let mut editor = Editor::new();
    editor.load_document(Document::from_json(json).unwrap());

    assert_eq!(editor.meters_per_grid, 0.5);
    match &editor.scene.items[1].content {
        ItemContent::Text(t) => {
            assert_eq!(t.anchor, WorldPoint::new(2.0, 0.5));
            assert_eq!((t.angle, t.size), (0.0, 18));
            assert_eq!(t.color, "#111111");
        }
        other => panic!("unexpected item: {other:?}"),
    }
}

#[test]
fn test_rulers_survive_round_trip() {
    let mut editor = Editor::new();
    editor
        .scene
        .add_ruler(WorldPoint::new(0.0, 0.0), WorldPoint::new(0.0, 5.0));
    let json = editor.to_document().to_json().unwrap();

    let doc = Document::from_json(&json).unwrap();
    assert_eq!(
        doc.rulers,
        vec![(WorldPoint::new(0.0, 0.0), WorldPoint::new(0.0, 5.0))]
    );
}
