//! Input state machine - one enum for every in-flight pointer gesture.

use crate::geometry::{Rect, ScreenPoint, WorldPoint};
use crate::input::session::TransformSession;
use crate::types::SegmentKind;

/// The active pointer gesture, if any.
///
/// Exactly one variant is live at a time; switching tools or releasing the
/// pointer resets to `Idle` (except the two-click drawing states, which
/// survive the release between their clicks).
#[derive(Clone, Debug, PartialEq, Default)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Canvas panning; the pointer delta feeds the viewport origin
    Panning {
        /// Last pointer position for delta calculation
        last: ScreenPoint,
    },

    /// Two-click wall/door/window creation, between first and second click
    DrawingSegment {
        kind: SegmentKind,
        start: WorldPoint,
        /// Live preview endpoint tracking the pointer
        current: WorldPoint,
    },

    /// Room creation, between pointer down and up
    DrawingRoom { start: WorldPoint, current: WorldPoint },

    /// Two-click ruler creation, between first and second click
    DrawingRuler { start: WorldPoint, current: WorldPoint },

    /// Marquee/box selection
    MarqueeSelecting {
        start: ScreenPoint,
        current: ScreenPoint,
    },

    /// A handle-initiated transform in progress
    Transforming(TransformSession),
}

/// A live creation preview for the rendering collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawPreview {
    Segment {
        kind: SegmentKind,
        a: WorldPoint,
        b: WorldPoint,
    },
    Room { a: WorldPoint, b: WorldPoint },
    Ruler { a: WorldPoint, b: WorldPoint },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_marquee_selecting(&self) -> bool {
        matches!(self, Self::MarqueeSelecting { .. })
    }

    pub fn is_drawing(&self) -> bool {
        matches!(
            self,
            Self::DrawingSegment { .. } | Self::DrawingRoom { .. } | Self::DrawingRuler { .. }
        )
    }

    pub fn is_transforming(&self) -> bool {
        matches!(self, Self::Transforming(_))
    }

    /// The item a live transform session is mutating, if any.
    pub fn transforming_item(&self) -> Option<u64> {
        match self {
            Self::Transforming(session) => session.item_id(),
            _ => None,
        }
    }

    /// True when a live session references the given item.
    pub fn references_item(&self, id: u64) -> bool {
        self.transforming_item() == Some(id)
    }

    /// The marquee rectangle in screen space, while one is being dragged.
    pub fn marquee_rect(&self) -> Option<Rect> {
        match self {
            Self::MarqueeSelecting { start, current } => Some(Rect::from_corners(
                start.x, start.y, current.x, current.y,
            )),
            _ => None,
        }
    }

    /// The creation preview to draw, while a drawing gesture is in flight.
    pub fn preview(&self) -> Option<DrawPreview> {
        match self {
            Self::DrawingSegment {
                kind,
                start,
                current,
            } => Some(DrawPreview::Segment {
                kind: *kind,
                a: *start,
                b: *current,
            }),
            Self::DrawingRoom { start, current } => Some(DrawPreview::Room {
                a: *start,
                b: *current,
            }),
            Self::DrawingRuler { start, current } => Some(DrawPreview::Ruler {
                a: *start,
                b: *current,
            }),
            _ => None,
        }
    }

    /// Reset to Idle, discarding any in-flight gesture state.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
