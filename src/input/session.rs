//! Transform sessions - the ephemeral state of one handle-initiated
//! manipulation, alive between pointer down and pointer up.
//!
//! Each variant carries the anchor state its update rule needs. Move modes
//! advance their anchor to the last observed point every update, so deltas
//! stay incremental and re-snapping cannot accumulate drift. The pure
//! update math lives here as free functions so it can be tested without an
//! editor.

use crate::constants::{
    MAX_TEXT_SIZE, MIN_ROOM_EXTENT, MIN_TEXT_SIZE, TEXT_SCALE_MAX, TEXT_SCALE_MIN,
};
use crate::geometry::{Rect, ScreenPoint, WorldPoint};
use crate::handles::{HandleAxis, HandleTag};

/// Which endpoint of a segment a drag grabbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentEnd {
    A,
    B,
}

/// The active manipulation and its per-mode anchor state.
#[derive(Clone, Debug, PartialEq)]
pub enum TransformSession {
    /// Translate one item; `anchor` is the last observed world point
    MoveSingle { id: u64, anchor: WorldPoint },

    /// Translate every selected item; `anchor` as above
    MoveGroup { anchor: WorldPoint },

    /// Scale a text label's font size from its bounding box at grab time
    ScaleText {
        id: u64,
        handle: HandleTag,
        /// Shift held: corner handles preserve aspect ratio
        keep_ratio: bool,
        start_bbox: Rect,
        start_size: u32,
    },

    /// Rotate a text label around its anchor's screen position
    RotateText {
        id: u64,
        center: ScreenPoint,
        /// Cursor angle at grab time, degrees
        start_cursor: f32,
        start_angle: f32,
    },

    /// Drag one or two edges of a room rectangle
    ResizeRoom { id: u64, handle: HandleTag },

    /// Drag one endpoint of a segment, leaving the other fixed
    DragSegmentEndpoint { id: u64, end: SegmentEnd },

    /// Rotate a segment around its original midpoint, preserving length
    RotateSegment {
        id: u64,
        center: WorldPoint,
        half_len: f32,
        /// Segment direction at grab time, radians
        start_dir: f32,
        /// Cursor angle at grab time, degrees
        start_cursor: f32,
    },
}

impl TransformSession {
    /// The item this session mutates; group moves have no single item.
    pub fn item_id(&self) -> Option<u64> {
        match self {
            TransformSession::MoveGroup { .. } => None,
            TransformSession::MoveSingle { id, .. }
            | TransformSession::ScaleText { id, .. }
            | TransformSession::RotateText { id, .. }
            | TransformSession::ResizeRoom { id, .. }
            | TransformSession::DragSegmentEndpoint { id, .. }
            | TransformSession::RotateSegment { id, .. } => Some(*id),
        }
    }

    pub fn mode_label(&self) -> &'static str {
        match self {
            TransformSession::MoveSingle { .. } => "move",
            TransformSession::MoveGroup { .. } => "move-group",
            TransformSession::ScaleText { .. } => "scale-text",
            TransformSession::RotateText { .. } => "rotate-text",
            TransformSession::ResizeRoom { .. } => "resize-room",
            TransformSession::DragSegmentEndpoint { .. } => "drag-endpoint",
            TransformSession::RotateSegment { .. } => "rotate-segment",
        }
    }
}

/// Scale ratio driven by the cursor's distance from the start box center,
/// normalized by the box's initial half-extents.
///
/// Edge handles use their axis alone; corner handles average both axes, or
/// take the larger one when aspect ratio is being preserved. The half-extent
/// denominators are floored at 1px so a degenerate box cannot blow up the
/// ratio.
pub(crate) fn text_scale_ratio(
    start_bbox: &Rect,
    handle: HandleTag,
    keep_ratio: bool,
    p: ScreenPoint,
) -> f32 {
    let (cx, cy) = start_bbox.center();
    let rx = (p.x - cx).abs() / (start_bbox.max_x - cx).max(1.0);
    let ry = (p.y - cy).abs() / (start_bbox.max_y - cy).max(1.0);
    let ratio = match handle.axis() {
        HandleAxis::Horizontal => rx,
        HandleAxis::Vertical => ry,
        HandleAxis::Corner => {
            if keep_ratio {
                rx.max(ry)
            } else {
                (rx + ry) / 2.0
            }
        }
    };
    ratio.clamp(TEXT_SCALE_MIN, TEXT_SCALE_MAX)
}

/// New font size for a scale ratio, clamped into the valid size range.
pub(crate) fn scaled_text_size(start_size: u32, ratio: f32) -> u32 {
    ((start_size as f32 * ratio).round() as u32).clamp(MIN_TEXT_SIZE, MAX_TEXT_SIZE)
}

/// Move the grabbed room edges to the pointer's world position, clamping
/// each against its opposite edge with a minimum gap. Non-grabbed edges are
/// untouched. Returns normalized corners.
pub(crate) fn resize_room_corners(
    a: WorldPoint,
    b: WorldPoint,
    handle: HandleTag,
    pointer: WorldPoint,
) -> (WorldPoint, WorldPoint) {
    let (mut x0, mut y0) = (a.x.min(b.x), a.y.min(b.y));
    let (mut x1, mut y1) = (a.x.max(b.x), a.y.max(b.y));
    if handle.moves_west() {
        x0 = pointer.x.min(x1 - MIN_ROOM_EXTENT);
    }
    if handle.moves_east() {
        x1 = pointer.x.max(x0 + MIN_ROOM_EXTENT);
    }
    if handle.moves_north() {
        y0 = pointer.y.min(y1 - MIN_ROOM_EXTENT);
    }
    if handle.moves_south() {
        y1 = pointer.y.max(y0 + MIN_ROOM_EXTENT);
    }
    (WorldPoint::new(x0, y0), WorldPoint::new(x1, y1))
}

/// Endpoints of a segment of `2 * half_len` centered on `center`, pointing
/// along `theta` radians.
pub(crate) fn rotated_segment_endpoints(
    center: WorldPoint,
    half_len: f32,
    theta: f32,
) -> (WorldPoint, WorldPoint) {
    let (dx, dy) = (half_len * theta.cos(), half_len * theta.sin());
    (
        WorldPoint::new(center.x - dx, center.y - dy),
        WorldPoint::new(center.x + dx, center.y + dy),
    )
}
