//! floorboard - an interactive 2D floor-plan scene/selection/transform
//! engine.
//!
//! The engine turns raw pointer gestures into mutations of a scene of
//! walls, doors, windows, rooms, text labels, and transient rulers on an
//! infinite pannable/zoomable canvas. Rendering, file dialogs, and text
//! entry are external collaborators consumed through narrow seams
//! ([`text::TextMeasurer`], [`editor::TextPrompt`], [`document::Document`]).
//!
//! ## Modules
//!
//! - `geometry` - pure point/segment/rectangle primitives
//! - `viewport` - world/screen transform, zoom, pan, grid snapping
//! - `types` - the item sum type and tool/modifier enums
//! - `scene` - the ordered item collection plus rulers
//! - `selection` - single- and multi-selection views over the scene
//! - `text` - text-extent seam and screen bounding boxes for labels
//! - `hit` - point hit-testing and marquee intersection
//! - `handles` - transform-handle layout and resolution
//! - `input` - the pointer state machine and transform sessions
//! - `measure` - unit formatting and measurement label geometry
//! - `document` - the persisted data projection (JSON)
//! - `editor` - the root state owning all of the above

pub mod constants;
pub mod document;
pub mod editor;
pub mod geometry;
pub mod handles;
pub mod hit;
pub mod input;
pub mod measure;
pub mod scene;
pub mod selection;
pub mod text;
pub mod types;
pub mod viewport;

pub use document::{Document, DocumentError, DocumentResult};
pub use editor::{Editor, NullPrompt, TextPrompt};
pub use geometry::{Rect, ScreenPoint, WorldPoint};
pub use input::{DrawPreview, InputState, SegmentEnd, TransformSession};
pub use measure::UnitMode;
pub use scene::Scene;
pub use selection::SelectionManager;
pub use text::{HeuristicTextMeasurer, TextMeasurer};
pub use types::{
    Item, ItemContent, Modifiers, RoomData, SegmentData, SegmentKind, TextData, Tool,
};
pub use viewport::Viewport;
