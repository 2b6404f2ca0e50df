//! Geometry kernel - pure functions over points, segments, and rectangles.
//!
//! Everything here is stateless and space-agnostic: the same primitives are
//! used on world coordinates (snapping, room resize) and on screen
//! coordinates (hit-testing, marquee intersection). Raw coordinates are
//! passed as `(f32, f32)` tuples; the typed [`WorldPoint`]/[`ScreenPoint`]
//! carriers live at the model layer.

use serde::{Deserialize, Serialize};

/// A point in world space (grid units, independent of zoom/pan).
///
/// Serializes as a `[x, y]` tuple to match the persisted document format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f32, f32)", into = "(f32, f32)")]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by a world-space delta.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Quantize to the nearest whole grid unit.
    pub fn rounded(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    pub fn distance_to(self, other: WorldPoint) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f32, f32)> for WorldPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<WorldPoint> for (f32, f32) {
    fn from(p: WorldPoint) -> Self {
        (p.x, p.y)
    }
}

/// A point in screen space (viewport pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle, stored normalized (min <= max on both axes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rect {
    /// Build from two opposite corners in any order.
    pub fn from_corners(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    /// Boundary-inclusive containment.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Boundary-inclusive overlap test; touching edges count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.max_x < other.min_x
            || other.max_x < self.min_x
            || self.max_y < other.min_y
            || other.max_y < self.min_y)
    }

    /// Grow (or shrink, for negative `by`) on all four sides.
    pub fn expand(&self, by: f32) -> Rect {
        Rect {
            min_x: self.min_x - by,
            min_y: self.min_y - by,
            max_x: self.max_x + by,
            max_y: self.max_y + by,
        }
    }

    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Distance from `p` to the closed segment `a..b`.
///
/// Degenerate segments (`a == b`) reduce to point distance.
pub fn dist_point_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    if dx == 0.0 && dy == 0.0 {
        return (p.0 - a.0).hypot(p.1 - a.1);
    }
    let t = (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / (dx * dx + dy * dy)).clamp(0.0, 1.0);
    let (qx, qy) = (a.0 + t * dx, a.1 + t * dy);
    (p.0 - qx).hypot(p.1 - qy)
}

fn ccw(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> bool {
    (c.1 - a.1) * (b.0 - a.0) > (b.1 - a.1) * (c.0 - a.0)
}

/// Strict proper-crossing test between segments `a..b` and `c..d`.
///
/// Collinear and endpoint-touching configurations are not treated as
/// intersections.
pub fn segments_intersect(a: (f32, f32), b: (f32, f32), c: (f32, f32), d: (f32, f32)) -> bool {
    ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
}

/// True if the segment has an endpoint inside `r` or crosses any of its
/// four edges.
pub fn segment_intersects_rect(p1: (f32, f32), p2: (f32, f32), r: &Rect) -> bool {
    if r.contains(p1.0, p1.1) || r.contains(p2.0, p2.1) {
        return true;
    }
    let corners = [
        (r.min_x, r.min_y),
        (r.max_x, r.min_y),
        (r.max_x, r.max_y),
        (r.min_x, r.max_y),
    ];
    (0..4).any(|i| segments_intersect(p1, p2, corners[i], corners[(i + 1) % 4]))
}

/// Unit vector perpendicular to `a -> b`.
///
/// A zero-length segment falls back to length 1 instead of dividing by zero.
pub fn segment_normal(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len = dx.hypot(dy);
    let len = if len == 0.0 { 1.0 } else { len };
    (-dy / len, dx / len)
}

/// Angle in degrees of `p` as seen from `c`, with the vertical axis
/// inverted so that a clockwise drag on a y-down canvas yields an
/// increasing angle.
pub fn screen_angle(c: ScreenPoint, p: ScreenPoint) -> f32 {
    (c.y - p.y).atan2(p.x - c.x).to_degrees()
}

/// Reduce an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}
