//! Engine-wide constants.
//!
//! Centralizes magic numbers and default values so tolerances and limits
//! stay consistent across hit-testing, transforms, and persistence.

// ============================================================================
// Grid & Zoom
// ============================================================================

/// Pixels per world grid unit at zoom 1.0
pub const GRID_SIZE_PX: f32 = 32.0;

/// Default real-world scale in meters per grid unit
pub const DEFAULT_METERS_PER_GRID: f32 = 0.5;

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.4;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 2.5;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Default screen position of the world origin
pub const DEFAULT_ORIGIN: (f32, f32) = (80.0, 80.0);

// ============================================================================
// Hit Testing & Handles
// ============================================================================

/// Hit tolerance around segments and room edges, in screen pixels
pub const HIT_TOL: f32 = 8.0;

/// Base side length of a transform handle at zoom 1.0
pub const HANDLE_SIZE: f32 = 8.0;

/// Floor for the handle side length at low zoom
pub const MIN_HANDLE_SIZE: f32 = 6.0;

/// Base offset of the rotate handle from its item at zoom 1.0
pub const ROTATE_HANDLE_OFFSET: f32 = 28.0;

/// Floor for the rotate handle offset at low zoom
pub const MIN_ROTATE_HANDLE_OFFSET: f32 = 18.0;

/// Padding applied to segment bounding boxes when forming the group box
pub const SEGMENT_BBOX_PAD: f32 = 4.0;

// ============================================================================
// Transform Limits
// ============================================================================

/// Minimum remaining extent when resizing a room edge toward its opposite,
/// in world units
pub const MIN_ROOM_EXTENT: f32 = 0.01;

/// Lower bound on the text scale ratio during a scale drag
pub const TEXT_SCALE_MIN: f32 = 0.2;

/// Upper bound on the text scale ratio during a scale drag
pub const TEXT_SCALE_MAX: f32 = 8.0;

// ============================================================================
// Text Defaults
// ============================================================================

/// Default font size for new text labels
pub const DEFAULT_TEXT_SIZE: u32 = 18;

/// Minimum font size for text labels
pub const MIN_TEXT_SIZE: u32 = 8;

/// Maximum font size for text labels
pub const MAX_TEXT_SIZE: u32 = 512;

/// Smallest effective on-screen font size used for text extents
pub const MIN_TEXT_RENDER_SIZE: f32 = 8.0;

/// Padding around rendered text as a fraction of the effective font size
pub const TEXT_PAD_RATIO: f32 = 0.4;

/// Default text label color
pub const DEFAULT_TEXT_COLOR: &str = "#111111";

// ============================================================================
// Measurement Overlays
// ============================================================================

/// Distance (in px at zoom 1.0) to push measurement labels off the line
pub const MEASURE_OFFSET: f32 = 28.0;

// ============================================================================
// Palette (consumed by the rendering collaborator)
// ============================================================================

/// Wall stroke color
pub const WALL_COLOR: &str = "#222222";

/// Room fill color
pub const ROOM_FILL: &str = "#c7e6ff";

/// Room outline color
pub const ROOM_OUTLINE: &str = "#3a78a8";

/// Door stroke color
pub const DOOR_COLOR: &str = "#2a8f2a";

/// Window stroke color
pub const WINDOW_COLOR: &str = "#1f6fbd";

/// Selection overlay color
pub const SELECT_COLOR: &str = "#ff6b6b";

/// Grid line color
pub const GRID_COLOR: &str = "#e8e8e8";
