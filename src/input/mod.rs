//! Pointer input handling for the editor.
//!
//! All pointer interaction flows through an explicit state machine
//! ([`InputState`]), so impossible combinations (say, a marquee during a
//! transform) are unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning             (pointer down with the pan gesture active)
//! Idle -> Transforming        (select tool, down on a handle or item body)
//! Idle -> MarqueeSelecting    (select tool, down on empty canvas)
//! Idle -> DrawingSegment      (wall/door/window tool, first click)
//! Idle -> DrawingRoom         (room tool, pointer down)
//! Idle -> DrawingRuler        (ruler tool, first click)
//!
//! DrawingSegment -> Idle      (second click finalizes or discards)
//! DrawingRuler   -> Idle      (second click finalizes or discards)
//! Any other      -> Idle      (pointer up, or tool change)
//! ```
//!
//! ## Modules
//!
//! - `state` - the input state machine enum and renderer-facing queries
//! - `session` - transform session modes and their pure update math
//! - `pointer_down` - selection, transform entry, tool-specific starts
//! - `pointer_move` - per-mode updates while a gesture is in flight
//! - `pointer_up` - finalization of rooms, marquees, and sessions

mod pointer_down;
mod pointer_move;
mod pointer_up;
mod session;
mod state;

pub use session::{SegmentEnd, TransformSession};
pub use state::{DrawPreview, InputState};
