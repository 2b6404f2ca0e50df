//! Handle-driven transform workflows on selected items.

use crate::helpers::{
    TestEditorBuilder, click, drag_to, press, press_shift, release, segment_of,
};
use floorboard::{ItemContent, WorldPoint};

fn text_data(editor: &floorboard::Editor, i: usize) -> floorboard::TextData {
    match &editor.scene.items[i].content {
        ItemContent::Text(t) => t.clone(),
        other => panic!("unexpected item: {other:?}"),
    }
}

#[test]
fn test_click_selects_item_body() {
    let mut editor = TestEditorBuilder::new()
        .with_wall((0.0, 0.0), (4.0, 0.0))
        .build();
    let id = editor.scene.items[0].id;

    click(&mut editor, 144.0, 82.0);
    assert_eq!(editor.selection.primary(), Some(id));
    assert!(editor.input().is_idle());
}

#[test]
fn test_move_single_wall_with_snapping() {
    let mut editor = TestEditorBuilder::new()
        .with_wall((0.0, 0.0), (4.0, 0.0))
        .build();

    press(&mut editor, 144.0, 80.0);
    assert!(editor.input().is_transforming());
    drag_to(&mut editor, 144.0, 112.0);
    release(&mut editor, 144.0, 112.0);

    let (a, b) = segment_of(&editor, 0);
    assert_eq!(a, WorldPoint::new(0.0, 1.0));
    assert_eq!(b, WorldPoint::new(4.0, 1.0));
}

#[test]
fn test_incremental_anchor_avoids_snap_drift() {
    let mut editor = TestEditorBuilder::new()
        .with_wall((0.0, 0.0), (4.0, 0.0))
        .build();

    press(&mut editor, 144.0, 80.0);
    // Wander within the same snap cell, then cross into the next one
    drag_to(&mut editor, 150.0, 85.0);
    drag_to(&mut editor, 155.0, 90.0);
    drag_to(&mut editor, 144.0, 112.0);
    release(&mut editor, 144.0, 112.0);

    // Net effect is exactly one grid unit down, not an accumulation
    let (a, b) = segment_of(&editor, 0);
    assert_eq!(a, WorldPoint::new(0.0, 1.0));
    assert_eq!(b, WorldPoint::new(4.0, 1.0));
}

#[test]
fn test_drag_segment_endpoint() {
    let mut editor = TestEditorBuilder::new()
        .with_wall((0.0, 0.0), (4.0, 0.0))
        .build();

    // Select, then grab endpoint b
    click(&mut editor, 144.0, 80.0);
    press(&mut editor, 208.0, 80.0);
    drag_to(&mut editor, 208.0, 144.0);
    release(&mut editor, 208.0, 144.0);

    let (a, b) = segment_of(&editor, 0);
    assert_eq!(a, WorldPoint::new(0.0, 0.0));
    assert_eq!(b, WorldPoint::new(4.0, 2.0));
}

#[test]
fn test_rotate_segment_quarter_turn() {
    let mut editor = TestEditorBuilder::new()
        .with_wall((0.0, 0.0), (5.0, 0.0))
        .with_snap(false)
        .build();

    // Select the wall, then grab the rotate handle 28px along its normal
    click(&mut editor, 160.0, 82.0);
    press(&mut editor, 160.0, 108.0);
    assert!(editor.input().is_transforming());
    // Cursor angle moves from -90 to 0 degrees: a +90 degree turn
    drag_to(&mut editor, 200.0, 80.0);
    release(&mut editor, 200.0, 80.0);

    let (a, b) = segment_of(&editor, 0);
    let mid = WorldPoint::new(2.5, 0.0);
    assert!((a.distance_to(mid) - 2.5).abs() < 1e-3);
    assert!((b.distance_to(mid) - 2.5).abs() < 1e-3);
    // Perpendicular to the original horizontal direction
    assert!((b.x - a.x).abs() < 1e-3);
    assert!((b.y - a.y).abs() > 4.9);
}

#[test]
fn test_resize_room_east_edge() {
    let mut editor = TestEditorBuilder::new()
        .with_room((0.0, 0.0), (2.0, 3.0))
        .build();

    // Select by clicking inside, then grab the east edge handle
    click(&mut editor, 112.0, 112.0);
    press(&mut editor, 144.0, 128.0);
    drag_to(&mut editor, 208.0, 128.0);
    release(&mut editor, 208.0, 128.0);

    match &editor.scene.items[0].content {
        ItemContent::Room(room) => assert_eq!(room.bounds(), (0.0, 0.0, 4.0, 3.0)),
        other => panic!("unexpected item: {other:?}"),
    }
}

#[test]
fn test_resize_room_clamps_against_opposite_edge() {
    let mut editor = TestEditorBuilder::new()
        .with_room((0.0, 0.0), (2.0, 3.0))
        .with_snap(false)
        .build();

    click(&mut editor, 112.0, 112.0);
    press(&mut editor, 144.0, 128.0);
    // Drag the east edge far past the west edge
    drag_to(&mut editor, 0.0, 128.0);
    release(&mut editor, 0.0, 128.0);

    match &editor.scene.items[0].content {
        ItemContent::Room(room) => {
            let (x0, _, x1, _) = room.bounds();
            assert_eq!(x0, 0.0);
            assert!(x1 > 0.0 && x1 <= 0.011);
        }
        other => panic!("unexpected item: {other:?}"),
    }
}

#[test]
fn test_scale_text_corner_averages_axes() {
    let mut editor = TestEditorBuilder::new()
        .with_text("Hello", (0.0, 0.0))
        .build();

    // Select the label, then grab its se corner handle.
    // The heuristic measurer gives "Hello" a 68.4 x 36 px box around
    // (80, 80), so the corner sits near (114.2, 98).
    click(&mut editor, 80.0, 80.0);
    press(&mut editor, 114.0, 98.0);
    assert!(editor.input().is_transforming());
    // Twice the half-width out in x, unchanged in y: ratio (2 + 1) / 2
    drag_to(&mut editor, 148.4, 98.0);
    release(&mut editor, 148.4, 98.0);

    assert_eq!(text_data(&editor, 0).size, 27);
}

#[test]
fn test_scale_text_proportional_takes_larger_axis() {
    let mut editor = TestEditorBuilder::new()
        .with_text("Hello", (0.0, 0.0))
        .build();

    click(&mut editor, 80.0, 80.0);
    press_shift(&mut editor, 114.0, 98.0);
    drag_to(&mut editor, 148.4, 98.0);
    release(&mut editor, 148.4, 98.0);

    assert_eq!(text_data(&editor, 0).size, 36);
}

#[test]
fn test_scale_text_never_exceeds_size_range() {
    let mut editor = TestEditorBuilder::new()
        .with_text("Hello", (0.0, 0.0))
        .build();

    click(&mut editor, 80.0, 80.0);
    press(&mut editor, 114.0, 98.0);
    drag_to(&mut editor, 5000.0, 98.0);
    release(&mut editor, 5000.0, 98.0);

    // The combined ratio clamps at 8x: 18 * 8 = 144, inside [8, 512]
    assert_eq!(text_data(&editor, 0).size, 144);
}

#[test]
fn test_rotate_text_wraps_into_circle() {
    let mut editor = TestEditorBuilder::new()
        .with_text("Hello", (0.0, 0.0))
        .build();

    // Rotate handle sits 28px above the bbox top (y = 62 - 28 = 34)
    click(&mut editor, 80.0, 80.0);
    press(&mut editor, 80.0, 34.0);
    assert!(editor.input().is_transforming());
    // Cursor angle moves from +90 to 0 degrees: -90, wrapped to 270
    drag_to(&mut editor, 126.0, 80.0);
    release(&mut editor, 126.0, 80.0);

    let t = text_data(&editor, 0);
    assert!((t.angle - 270.0).abs() < 0.5);
}

#[test]
fn test_session_ends_on_release() {
    let mut editor = TestEditorBuilder::new()
        .with_wall((0.0, 0.0), (4.0, 0.0))
        .build();

    press(&mut editor, 144.0, 80.0);
    drag_to(&mut editor, 144.0, 112.0);
    release(&mut editor, 144.0, 112.0);
    assert!(editor.input().is_idle());

    // Mutations applied during the session remain
    let (a, _) = segment_of(&editor, 0);
    assert_eq!(a, WorldPoint::new(0.0, 1.0));
}

#[test]
fn test_removing_item_mid_session_resets_input() {
    let mut editor = TestEditorBuilder::new()
        .with_wall((0.0, 0.0), (4.0, 0.0))
        .build();
    let id = editor.scene.items[0].id;

    press(&mut editor, 144.0, 80.0);
    assert!(editor.input().references_item(id));
    editor.remove_item(id);
    assert!(editor.input().is_idle());
    // A stray move after the removal must not panic or resurrect state
    drag_to(&mut editor, 200.0, 200.0);
    assert!(editor.scene.is_empty());
}
