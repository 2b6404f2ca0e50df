//! Pointer up - finalize rooms and marquees, end transform sessions.

use crate::editor::Editor;
use crate::geometry::{Rect, ScreenPoint};
use crate::hit;
use crate::input::state::InputState;
use crate::types::{ItemContent, RoomData};
use tracing::debug;

impl Editor {
    /// Handle a primary-button release at a screen position.
    pub fn pointer_up(&mut self, pos: ScreenPoint) {
        let state = std::mem::take(&mut self.input);
        match state {
            InputState::DrawingRoom { start, .. } => {
                let corner = self.viewport.pointer_world(pos);
                // A zero-drag click would produce a degenerate rectangle;
                // discard it silently.
                if start != corner {
                    self.scene
                        .add_item(ItemContent::Room(RoomData::new(start, corner)));
                }
            }

            InputState::MarqueeSelecting { start, .. } => {
                let rect = Rect::from_corners(start.x, start.y, pos.x, pos.y);
                let ids = hit::marquee_select(
                    &self.scene,
                    &self.viewport,
                    self.measurer.as_ref(),
                    &rect,
                );
                debug!(count = ids.len(), "marquee selection");
                self.selection.set_multi(ids);
            }

            InputState::Transforming(session) => {
                // The scene mutations already applied stay; only the
                // session state is discarded.
                debug!(mode = session.mode_label(), "transform ended");
            }

            InputState::Panning { .. } | InputState::Idle => {}

            // Two-click drawing survives the release between its clicks.
            state @ (InputState::DrawingSegment { .. } | InputState::DrawingRuler { .. }) => {
                self.input = state;
            }
        }
    }
}
