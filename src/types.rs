//! Core types for the floor-plan scene.
//!
//! Items are a closed sum: walls, doors, and windows are line segments,
//! rooms are axis-aligned rectangles, and text labels are rotatable anchored
//! strings. The serde shape of [`ItemContent`] (`{"kind": ..., "data": ...}`)
//! doubles as the persisted document representation.

use crate::constants::{DEFAULT_TEXT_COLOR, DEFAULT_TEXT_SIZE};
use crate::geometry::WorldPoint;
use serde::{Deserialize, Serialize};

/// An item placed in the scene.
///
/// The id is assigned by the scene on insertion and is never persisted;
/// selection and transform sessions refer to items by id so removal can
/// never leave a dangling reference.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: u64,
    pub content: ItemContent,
}

/// A transient measurement ruler: a pair of world points with no identity.
pub type Ruler = (WorldPoint, WorldPoint);

/// Geometry and payload of a scene item, one variant per kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum ItemContent {
    Wall(SegmentData),
    Door(SegmentData),
    Window(SegmentData),
    Room(RoomData),
    Text(TextData),
}

/// Endpoints of a wall, door, or window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentData {
    pub a: WorldPoint,
    pub b: WorldPoint,
    /// Show the computed length next to the segment
    #[serde(default)]
    pub measure: bool,
}

impl SegmentData {
    pub fn new(a: WorldPoint, b: WorldPoint) -> Self {
        Self {
            a,
            b,
            measure: false,
        }
    }

    pub fn midpoint(&self) -> WorldPoint {
        WorldPoint::new((self.a.x + self.b.x) / 2.0, (self.a.y + self.b.y) / 2.0)
    }

    pub fn length(&self) -> f32 {
        self.a.distance_to(self.b)
    }
}

/// Opposite corners of a room rectangle, stored in any order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomData {
    pub a: WorldPoint,
    pub b: WorldPoint,
    #[serde(default)]
    pub measure: bool,
    /// Show the computed area at the room center
    #[serde(default = "default_true")]
    pub show_area: bool,
}

impl RoomData {
    pub fn new(a: WorldPoint, b: WorldPoint) -> Self {
        Self {
            a,
            b,
            measure: false,
            show_area: true,
        }
    }

    /// Normalized corners: `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (
            self.a.x.min(self.b.x),
            self.a.y.min(self.b.y),
            self.a.x.max(self.b.x),
            self.a.y.max(self.b.y),
        )
    }
}

/// A rotatable text label anchored at a world point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextData {
    /// Anchor point; the rendered text is centered on it
    #[serde(rename = "p")]
    pub anchor: WorldPoint,
    pub text: String,
    /// Rotation in degrees, reduced into `[0, 360)`
    #[serde(default)]
    pub angle: f32,
    /// Font size in points, within `[MIN_TEXT_SIZE, MAX_TEXT_SIZE]`
    #[serde(default = "default_text_size")]
    pub size: u32,
    #[serde(default = "default_text_color")]
    pub color: String,
}

impl TextData {
    pub fn new(anchor: WorldPoint, text: impl Into<String>) -> Self {
        Self {
            anchor,
            text: text.into(),
            angle: 0.0,
            size: DEFAULT_TEXT_SIZE,
            color: DEFAULT_TEXT_COLOR.to_string(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_text_size() -> u32 {
    DEFAULT_TEXT_SIZE
}

fn default_text_color() -> String {
    DEFAULT_TEXT_COLOR.to_string()
}

impl ItemContent {
    pub fn kind_label(&self) -> &'static str {
        match self {
            ItemContent::Wall(_) => "wall",
            ItemContent::Door(_) => "door",
            ItemContent::Window(_) => "window",
            ItemContent::Room(_) => "room",
            ItemContent::Text(_) => "text",
        }
    }

    /// Segment payload for wall/door/window items.
    pub fn as_segment(&self) -> Option<&SegmentData> {
        match self {
            ItemContent::Wall(s) | ItemContent::Door(s) | ItemContent::Window(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_segment_mut(&mut self) -> Option<&mut SegmentData> {
        match self {
            ItemContent::Wall(s) | ItemContent::Door(s) | ItemContent::Window(s) => Some(s),
            _ => None,
        }
    }

    /// Measurement-overlay flag for kinds that carry one.
    pub fn measure_mut(&mut self) -> Option<&mut bool> {
        match self {
            ItemContent::Wall(s) | ItemContent::Door(s) | ItemContent::Window(s) => {
                Some(&mut s.measure)
            }
            ItemContent::Room(r) => Some(&mut r.measure),
            ItemContent::Text(_) => None,
        }
    }

    /// Kind-specific translation by a world-space delta.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        match self {
            ItemContent::Wall(s) | ItemContent::Door(s) | ItemContent::Window(s) => {
                s.a = s.a.offset(dx, dy);
                s.b = s.b.offset(dx, dy);
            }
            ItemContent::Room(r) => {
                r.a = r.a.offset(dx, dy);
                r.b = r.b.offset(dx, dy);
            }
            ItemContent::Text(t) => {
                t.anchor = t.anchor.offset(dx, dy);
            }
        }
    }
}

/// Which segment-shaped kind a linear tool draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Wall,
    Door,
    Window,
}

impl SegmentKind {
    pub fn content(self, a: WorldPoint, b: WorldPoint) -> ItemContent {
        let data = SegmentData::new(a, b);
        match self {
            SegmentKind::Wall => ItemContent::Wall(data),
            SegmentKind::Door => ItemContent::Door(data),
            SegmentKind::Window => ItemContent::Window(data),
        }
    }
}

/// The active creation/edit tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Select,
    Wall,
    Door,
    Window,
    Room,
    Text,
    Ruler,
    Eraser,
}

impl Tool {
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Wall => "wall",
            Tool::Door => "door",
            Tool::Window => "window",
            Tool::Room => "room",
            Tool::Text => "text",
            Tool::Ruler => "ruler",
            Tool::Eraser => "eraser",
        }
    }

    /// The segment kind a linear tool creates, if this is one.
    pub fn segment_kind(&self) -> Option<SegmentKind> {
        match self {
            Tool::Wall => Some(SegmentKind::Wall),
            Tool::Door => Some(SegmentKind::Door),
            Tool::Window => Some(SegmentKind::Window),
            _ => None,
        }
    }

    pub fn all() -> &'static [Tool] {
        &[
            Tool::Select,
            Tool::Wall,
            Tool::Door,
            Tool::Window,
            Tool::Room,
            Tool::Text,
            Tool::Ruler,
            Tool::Eraser,
        ]
    }
}

/// Modifier keys relevant to pointer gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift: keep text scaling proportional
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true };
}
