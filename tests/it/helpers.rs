//! Test helpers and builders for reducing boilerplate in tests.
//!
//! Provides:
//! - `TestEditorBuilder` - builder pattern for editors pre-loaded with items
//! - `QueuedPrompt` - a scripted text-prompt collaborator
//! - Pointer gesture helpers (`press`, `drag_to`, `release`, `click`)

use floorboard::{
    Editor, ItemContent, Modifiers, RoomData, ScreenPoint, SegmentData, TextData, TextPrompt,
    WorldPoint,
};
use std::collections::VecDeque;

/// Builder for editors with items and view configuration.
///
/// # Example
/// ```ignore
/// let mut editor = TestEditorBuilder::new()
///     .with_wall((0.0, 0.0), (4.0, 0.0))
///     .with_scale(0.5)
///     .build();
/// ```
pub struct TestEditorBuilder {
    items: Vec<ItemContent>,
    zoom: f32,
    origin: (f32, f32),
    snap: bool,
    meters_per_grid: f32,
}

impl Default for TestEditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEditorBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            zoom: 1.0,
            origin: (80.0, 80.0),
            snap: true,
            meters_per_grid: 0.5,
        }
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_snap(mut self, snap: bool) -> Self {
        self.snap = snap;
        self
    }

    pub fn with_scale(mut self, meters_per_grid: f32) -> Self {
        self.meters_per_grid = meters_per_grid;
        self
    }

    pub fn with_wall(mut self, a: (f32, f32), b: (f32, f32)) -> Self {
        self.items.push(ItemContent::Wall(SegmentData::new(
            WorldPoint::new(a.0, a.1),
            WorldPoint::new(b.0, b.1),
        )));
        self
    }

    pub fn with_door(mut self, a: (f32, f32), b: (f32, f32)) -> Self {
        self.items.push(ItemContent::Door(SegmentData::new(
            WorldPoint::new(a.0, a.1),
            WorldPoint::new(b.0, b.1),
        )));
        self
    }

    pub fn with_room(mut self, a: (f32, f32), b: (f32, f32)) -> Self {
        self.items.push(ItemContent::Room(RoomData::new(
            WorldPoint::new(a.0, a.1),
            WorldPoint::new(b.0, b.1),
        )));
        self
    }

    pub fn with_text(mut self, text: &str, p: (f32, f32)) -> Self {
        self.items.push(ItemContent::Text(TextData::new(
            WorldPoint::new(p.0, p.1),
            text,
        )));
        self
    }

    pub fn build(self) -> Editor {
        let mut editor = Editor::new();
        editor.viewport.zoom = self.zoom;
        editor.viewport.origin = ScreenPoint::new(self.origin.0, self.origin.1);
        editor.viewport.snap_to_grid = self.snap;
        editor.meters_per_grid = self.meters_per_grid;
        for content in self.items {
            editor.scene.add_item(content);
        }
        editor
    }
}

/// Text prompt that answers from a scripted queue, then declines.
pub struct QueuedPrompt {
    answers: VecDeque<String>,
}

impl QueuedPrompt {
    pub fn with(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TextPrompt for QueuedPrompt {
    fn ask_text(&mut self) -> Option<String> {
        self.answers.pop_front()
    }
}

/// Route engine tracing to the test writer; honors `RUST_LOG`.
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Pointer gesture helpers
// ============================================================================

pub fn press(editor: &mut Editor, x: f32, y: f32) {
    editor.pointer_down(ScreenPoint::new(x, y), Modifiers::NONE);
}

pub fn press_shift(editor: &mut Editor, x: f32, y: f32) {
    editor.pointer_down(ScreenPoint::new(x, y), Modifiers::SHIFT);
}

pub fn drag_to(editor: &mut Editor, x: f32, y: f32) {
    editor.pointer_move(ScreenPoint::new(x, y));
}

pub fn release(editor: &mut Editor, x: f32, y: f32) {
    editor.pointer_up(ScreenPoint::new(x, y));
}

/// Press and release at the same position.
pub fn click(editor: &mut Editor, x: f32, y: f32) {
    press(editor, x, y);
    release(editor, x, y);
}

/// Screen position of a world point under the editor's current view.
pub fn screen_of(editor: &Editor, wx: f32, wy: f32) -> (f32, f32) {
    let p = editor.viewport.world_to_screen(WorldPoint::new(wx, wy));
    (p.x, p.y)
}

/// Id of the item at index `i` in draw order.
pub fn item_id(editor: &Editor, i: usize) -> u64 {
    editor.scene.items[i].id
}

/// Segment endpoints of the item at index `i`, panicking on other kinds.
pub fn segment_of(editor: &Editor, i: usize) -> (WorldPoint, WorldPoint) {
    let seg = editor.scene.items[i]
        .content
        .as_segment()
        .expect("item is not a segment");
    (seg.a, seg.b)
}
