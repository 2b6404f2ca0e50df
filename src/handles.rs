//! Transform handles - screen-space hit targets that start transform modes.
//!
//! Rooms and text share one 8-point layout around their bounding box;
//! segments expose their two endpoints plus a rotate handle pushed off the
//! midpoint along the segment normal. Handle geometry scales mildly with
//! zoom and never drops below a usable floor.

use crate::constants::{
    HANDLE_SIZE, HIT_TOL, MIN_HANDLE_SIZE, MIN_ROTATE_HANDLE_OFFSET, ROTATE_HANDLE_OFFSET,
};
use crate::geometry::{Rect, ScreenPoint, dist_point_to_segment, segment_normal};

/// Position tag of a rectangle handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleTag {
    Nw,
    N,
    Ne,
    W,
    E,
    Sw,
    S,
    Se,
}

/// Which scale axis a rectangle handle drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleAxis {
    Horizontal,
    Vertical,
    Corner,
}

impl HandleTag {
    pub fn axis(&self) -> HandleAxis {
        match self {
            HandleTag::E | HandleTag::W => HandleAxis::Horizontal,
            HandleTag::N | HandleTag::S => HandleAxis::Vertical,
            _ => HandleAxis::Corner,
        }
    }

    /// Whether this handle drags the min-x edge.
    pub fn moves_west(&self) -> bool {
        matches!(self, HandleTag::W | HandleTag::Nw | HandleTag::Sw)
    }

    pub fn moves_east(&self) -> bool {
        matches!(self, HandleTag::E | HandleTag::Ne | HandleTag::Se)
    }

    pub fn moves_north(&self) -> bool {
        matches!(self, HandleTag::N | HandleTag::Nw | HandleTag::Ne)
    }

    pub fn moves_south(&self) -> bool {
        matches!(self, HandleTag::S | HandleTag::Sw | HandleTag::Se)
    }
}

/// Hit result on a selected text label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextHandle {
    Rotate,
    Scale(HandleTag),
    Inside,
}

/// Hit result on a selected room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomHandle {
    Resize(HandleTag),
    Inside,
}

/// Hit result on a selected wall/door/window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentHandle {
    EndA,
    EndB,
    Rotate,
    OnSegment,
}

/// Side length of a handle square at the given zoom.
pub fn handle_size(zoom: f32) -> f32 {
    (HANDLE_SIZE * zoom).max(MIN_HANDLE_SIZE)
}

/// Offset of a rotate handle from its item at the given zoom.
pub fn rotate_handle_offset(zoom: f32) -> f32 {
    (ROTATE_HANDLE_OFFSET * zoom).max(MIN_ROTATE_HANDLE_OFFSET)
}

/// The eight handle anchors of a bounding box: corners and edge midpoints.
pub fn rect_handle_positions(r: &Rect) -> [(f32, f32, HandleTag); 8] {
    let (cx, cy) = r.center();
    [
        (r.min_x, r.min_y, HandleTag::Nw),
        (cx, r.min_y, HandleTag::N),
        (r.max_x, r.min_y, HandleTag::Ne),
        (r.min_x, cy, HandleTag::W),
        (r.max_x, cy, HandleTag::E),
        (r.min_x, r.max_y, HandleTag::Sw),
        (cx, r.max_y, HandleTag::S),
        (r.max_x, r.max_y, HandleTag::Se),
    ]
}

fn in_handle_square(hx: f32, hy: f32, half: f32, p: ScreenPoint) -> bool {
    p.x >= hx - half && p.x <= hx + half && p.y >= hy - half && p.y <= hy + half
}

/// Anchor of the rotate handle above a text bounding box.
pub fn text_rotate_anchor(bbox: &Rect, zoom: f32) -> ScreenPoint {
    let (cx, _) = bbox.center();
    ScreenPoint::new(cx, bbox.min_y - rotate_handle_offset(zoom))
}

/// Resolve a pointer position against a selected text label's handles.
/// Precedence: rotate, then the 8 scale handles, then the body.
pub fn hit_text_handle(bbox: &Rect, zoom: f32, p: ScreenPoint) -> Option<TextHandle> {
    let half = handle_size(zoom) / 2.0;
    let rotate = text_rotate_anchor(bbox, zoom);
    if in_handle_square(rotate.x, rotate.y, half, p) {
        return Some(TextHandle::Rotate);
    }
    for (hx, hy, tag) in rect_handle_positions(bbox) {
        if in_handle_square(hx, hy, half, p) {
            return Some(TextHandle::Scale(tag));
        }
    }
    if bbox.contains(p.x, p.y) {
        return Some(TextHandle::Inside);
    }
    None
}

/// Resolve a pointer position against a selected room's handles.
pub fn hit_room_handle(rect: &Rect, zoom: f32, p: ScreenPoint) -> Option<RoomHandle> {
    let half = handle_size(zoom) / 2.0;
    for (hx, hy, tag) in rect_handle_positions(rect) {
        if in_handle_square(hx, hy, half, p) {
            return Some(RoomHandle::Resize(tag));
        }
    }
    if rect.contains(p.x, p.y) {
        return Some(RoomHandle::Inside);
    }
    None
}

/// Anchor of the rotate handle off a segment's midpoint, along its normal.
pub fn segment_rotate_anchor(a: ScreenPoint, b: ScreenPoint, zoom: f32) -> ScreenPoint {
    let (mx, my) = ((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
    let (nx, ny) = segment_normal((a.x, a.y), (b.x, b.y));
    let off = rotate_handle_offset(zoom);
    ScreenPoint::new(mx + nx * off, my + ny * off)
}

/// Resolve a pointer position against a selected segment's handles.
/// Precedence: endpoint a, endpoint b, rotate, then the segment body
/// within the hit tolerance.
pub fn hit_segment_handle(
    a: ScreenPoint,
    b: ScreenPoint,
    zoom: f32,
    p: ScreenPoint,
) -> Option<SegmentHandle> {
    let half = handle_size(zoom) / 2.0;
    if in_handle_square(a.x, a.y, half, p) {
        return Some(SegmentHandle::EndA);
    }
    if in_handle_square(b.x, b.y, half, p) {
        return Some(SegmentHandle::EndB);
    }
    let rotate = segment_rotate_anchor(a, b, zoom);
    if in_handle_square(rotate.x, rotate.y, half, p) {
        return Some(SegmentHandle::Rotate);
    }
    if dist_point_to_segment((p.x, p.y), (a.x, a.y), (b.x, b.y)) <= HIT_TOL {
        return Some(SegmentHandle::OnSegment);
    }
    None
}
