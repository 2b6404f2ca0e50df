//! Measurement labels and unit formatting.
//!
//! Lengths are derived from world-space grid distances times the editor's
//! meters-per-grid scale, then formatted in the active unit mode. Label
//! anchors are computed in screen space so the rendering collaborator can
//! place badges without re-deriving the geometry.

use crate::constants::MEASURE_OFFSET;
use crate::geometry::{ScreenPoint, WorldPoint, segment_normal};
use crate::types::{Item, ItemContent, RoomData};
use crate::viewport::Viewport;

/// Display unit for lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnitMode {
    #[default]
    Meters,
    Centimeters,
    Millimeters,
    FeetInches,
}

impl UnitMode {
    pub fn label(&self) -> &'static str {
        match self {
            UnitMode::Meters => "m",
            UnitMode::Centimeters => "cm",
            UnitMode::Millimeters => "mm",
            UnitMode::FeetInches => "ft-in",
        }
    }

    pub fn all() -> &'static [UnitMode] {
        &[
            UnitMode::Meters,
            UnitMode::Centimeters,
            UnitMode::Millimeters,
            UnitMode::FeetInches,
        ]
    }
}

/// Format a length given in meters for display.
pub fn format_length(meters: f32, unit: UnitMode) -> String {
    match unit {
        UnitMode::Meters => format!("{meters:.2} m"),
        UnitMode::Centimeters => format!("{:.1} cm", meters * 100.0),
        UnitMode::Millimeters => format!("{:.0} mm", meters * 1000.0),
        UnitMode::FeetInches => {
            let inches = meters * 39.370_079;
            let feet = (inches / 12.0).floor();
            let rem = inches - 12.0 * feet;
            format!("{feet:.0}\u{2032} {rem:.1}\u{2033}")
        }
    }
}

/// Format an area in square meters for display.
pub fn format_area(square_meters: f32) -> String {
    format!("{square_meters:.2} m\u{b2}")
}

/// A measurement badge: where to draw it and what it says.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasureLabel {
    pub anchor: ScreenPoint,
    pub text: String,
}

/// Length badge for a segment between two world points, pushed off the
/// midpoint along the segment normal. Also used for rulers and previews.
pub fn length_label(
    a: WorldPoint,
    b: WorldPoint,
    viewport: &Viewport,
    meters_per_grid: f32,
    unit: UnitMode,
) -> MeasureLabel {
    let meters = a.distance_to(b) * meters_per_grid;
    let p1 = viewport.world_to_screen(a);
    let p2 = viewport.world_to_screen(b);
    let (mx, my) = ((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0);
    let (nx, ny) = segment_normal((p1.x, p1.y), (p2.x, p2.y));
    let off = MEASURE_OFFSET * viewport.zoom;
    MeasureLabel {
        anchor: ScreenPoint::new(mx + nx * off, my + ny * off),
        text: format_length(meters, unit),
    }
}

/// Width/height badges outside a room's bottom and right edges, plus the
/// area badge at its center when enabled.
pub fn room_labels(
    room: &RoomData,
    viewport: &Viewport,
    meters_per_grid: f32,
    unit: UnitMode,
) -> Vec<MeasureLabel> {
    let (x0, y0, x1, y1) = room.bounds();
    let width_m = (x1 - x0) * meters_per_grid;
    let height_m = (y1 - y0) * meters_per_grid;
    let half_off = (MEASURE_OFFSET * 0.5) * viewport.zoom;

    let bottom = viewport.world_to_screen(WorldPoint::new((x0 + x1) / 2.0, y1));
    let right = viewport.world_to_screen(WorldPoint::new(x1, (y0 + y1) / 2.0));

    let mut labels = vec![
        MeasureLabel {
            anchor: ScreenPoint::new(bottom.x, bottom.y + half_off),
            text: format_length(width_m, unit),
        },
        MeasureLabel {
            anchor: ScreenPoint::new(right.x + half_off, right.y),
            text: format_length(height_m, unit),
        },
    ];
    if room.show_area {
        let center = viewport.world_to_screen(WorldPoint::new((x0 + x1) / 2.0, (y0 + y1) / 2.0));
        labels.push(MeasureLabel {
            anchor: center,
            text: format_area(width_m * height_m),
        });
    }
    labels
}

/// Measurement badges for an item, empty unless its measure flag is set.
pub fn item_labels(
    item: &Item,
    viewport: &Viewport,
    meters_per_grid: f32,
    unit: UnitMode,
) -> Vec<MeasureLabel> {
    match &item.content {
        ItemContent::Wall(seg) | ItemContent::Door(seg) | ItemContent::Window(seg) => {
            if seg.measure {
                vec![length_label(seg.a, seg.b, viewport, meters_per_grid, unit)]
            } else {
                Vec::new()
            }
        }
        ItemContent::Room(room) => {
            if room.measure {
                room_labels(room, viewport, meters_per_grid, unit)
            } else {
                Vec::new()
            }
        }
        ItemContent::Text(_) => Vec::new(),
    }
}
