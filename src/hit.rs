//! Hit-testing and marquee selection.
//!
//! Both scan the scene linearly in insertion order; that order is part of
//! the observable contract. Segments are ranked by screen-space distance
//! within a fixed pixel tolerance and rooms by distance to their nearest
//! edge, while text labels return immediately on the first bounding-box
//! containment - so an older label can absorb clicks aimed at a newer one
//! drawn on top of it (see DESIGN.md).

use crate::constants::{HIT_TOL, SEGMENT_BBOX_PAD};
use crate::geometry::{Rect, ScreenPoint, segment_intersects_rect};
use crate::scene::Scene;
use crate::selection::SelectionManager;
use crate::text::{TextMeasurer, text_screen_bbox};
use crate::types::{Item, ItemContent, RoomData, SegmentData};
use crate::viewport::Viewport;

/// Screen-space rectangle of a room's normalized corners.
pub fn room_screen_rect(room: &RoomData, viewport: &Viewport) -> Rect {
    let (x0, y0, x1, y1) = room.bounds();
    let p0 = viewport.world_to_screen(crate::geometry::WorldPoint::new(x0, y0));
    let p1 = viewport.world_to_screen(crate::geometry::WorldPoint::new(x1, y1));
    Rect::from_corners(p0.x, p0.y, p1.x, p1.y)
}

fn segment_screen_endpoints(seg: &SegmentData, viewport: &Viewport) -> (ScreenPoint, ScreenPoint) {
    (
        viewport.world_to_screen(seg.a),
        viewport.world_to_screen(seg.b),
    )
}

/// Resolve a screen point to the item under it, or None.
///
/// Segments must come within [`HIT_TOL`] pixels; rooms count anywhere
/// inside their tolerance-expanded bounds, scored by edge distance; the
/// first text label whose box contains the point wins outright.
pub fn hit_test(
    scene: &Scene,
    viewport: &Viewport,
    measurer: &dyn TextMeasurer,
    p: ScreenPoint,
) -> Option<u64> {
    let mut best: Option<u64> = None;
    let mut best_dist = f32::INFINITY;

    for item in &scene.items {
        match &item.content {
            ItemContent::Wall(seg) | ItemContent::Door(seg) | ItemContent::Window(seg) => {
                let (a, b) = segment_screen_endpoints(seg, viewport);
                let d = crate::geometry::dist_point_to_segment((p.x, p.y), (a.x, a.y), (b.x, b.y));
                if d <= HIT_TOL && d < best_dist {
                    best = Some(item.id);
                    best_dist = d;
                }
            }
            ItemContent::Room(room) => {
                let rect = room_screen_rect(room, viewport);
                if rect.expand(HIT_TOL).contains(p.x, p.y) {
                    let d = (p.x - rect.min_x)
                        .abs()
                        .min((p.x - rect.max_x).abs())
                        .min((p.y - rect.min_y).abs())
                        .min((p.y - rect.max_y).abs());
                    if d < best_dist {
                        best = Some(item.id);
                        best_dist = d;
                    }
                }
            }
            ItemContent::Text(text) => {
                let bbox = text_screen_bbox(text, viewport, measurer);
                if bbox.contains(p.x, p.y) {
                    return Some(item.id);
                }
            }
        }
    }
    best
}

/// Ids of all items intersecting a screen-space marquee rectangle, in scan
/// order. The caller replaces the multi-selection with the result.
pub fn marquee_select(
    scene: &Scene,
    viewport: &Viewport,
    measurer: &dyn TextMeasurer,
    rect: &Rect,
) -> Vec<u64> {
    let mut hits = Vec::new();
    for item in &scene.items {
        let hit = match &item.content {
            ItemContent::Wall(seg) | ItemContent::Door(seg) | ItemContent::Window(seg) => {
                let (a, b) = segment_screen_endpoints(seg, viewport);
                segment_intersects_rect((a.x, a.y), (b.x, b.y), rect)
            }
            ItemContent::Room(room) => room_screen_rect(room, viewport).intersects(rect),
            ItemContent::Text(text) => {
                text_screen_bbox(text, viewport, measurer).intersects(rect)
            }
        };
        if hit {
            hits.push(item.id);
        }
    }
    hits
}

/// Screen-space bounding box of a single item. Segment boxes are padded so
/// thin horizontal/vertical segments still form a grabbable area.
pub fn item_screen_bbox(item: &Item, viewport: &Viewport, measurer: &dyn TextMeasurer) -> Rect {
    match &item.content {
        ItemContent::Wall(seg) | ItemContent::Door(seg) | ItemContent::Window(seg) => {
            let (a, b) = segment_screen_endpoints(seg, viewport);
            Rect::from_corners(a.x, a.y, b.x, b.y).expand(SEGMENT_BBOX_PAD)
        }
        ItemContent::Room(room) => room_screen_rect(room, viewport),
        ItemContent::Text(text) => text_screen_bbox(text, viewport, measurer),
    }
}

/// Union bounding box of the current multi-selection, if any of its items
/// still exist.
pub fn group_screen_bbox(
    scene: &Scene,
    selection: &SelectionManager,
    viewport: &Viewport,
    measurer: &dyn TextMeasurer,
) -> Option<Rect> {
    let mut bbox: Option<Rect> = None;
    for &id in selection.ids() {
        if let Some(item) = scene.get_item(id) {
            let r = item_screen_bbox(item, viewport, measurer);
            bbox = Some(match bbox {
                Some(acc) => acc.union(&r),
                None => r,
            });
        }
    }
    bbox
}
