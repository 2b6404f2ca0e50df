//! Pointer move - live updates for the gesture in flight.
//!
//! This is the hot path during a drag; each update recomputes only what the
//! active mode needs and leaves every other part of the engine untouched.

use crate::editor::Editor;
use crate::geometry::{ScreenPoint, screen_angle, wrap_degrees};
use crate::input::session::{
    self, SegmentEnd, TransformSession,
};
use crate::input::state::InputState;
use crate::types::ItemContent;

impl Editor {
    /// Handle a pointer move at a screen position.
    pub fn pointer_move(&mut self, pos: ScreenPoint) {
        match &mut self.input {
            InputState::Idle => {}

            InputState::Panning { last } => {
                let (dx, dy) = (pos.x - last.x, pos.y - last.y);
                *last = pos;
                self.viewport.pan_by(dx, dy);
            }

            InputState::DrawingSegment { current, .. }
            | InputState::DrawingRoom { current, .. }
            | InputState::DrawingRuler { current, .. } => {
                *current = self.viewport.pointer_world(pos);
            }

            InputState::MarqueeSelecting { current, .. } => {
                *current = pos;
            }

            InputState::Transforming(session) => match session {
                TransformSession::MoveSingle { id, anchor } => {
                    let w = self.viewport.pointer_world(pos);
                    let (dx, dy) = (w.x - anchor.x, w.y - anchor.y);
                    // Advance the anchor so the next delta is incremental;
                    // a cumulative-from-start delta would drift under
                    // re-snapping.
                    *anchor = w;
                    self.scene.move_item(*id, dx, dy);
                }

                TransformSession::MoveGroup { anchor } => {
                    let w = self.viewport.pointer_world(pos);
                    let (dx, dy) = (w.x - anchor.x, w.y - anchor.y);
                    *anchor = w;
                    let ids: Vec<u64> = self.selection.ids().copied().collect();
                    for id in ids {
                        self.scene.move_item(id, dx, dy);
                    }
                }

                TransformSession::ScaleText {
                    id,
                    handle,
                    keep_ratio,
                    start_bbox,
                    start_size,
                } => {
                    let ratio = session::text_scale_ratio(start_bbox, *handle, *keep_ratio, pos);
                    let new_size = session::scaled_text_size(*start_size, ratio);
                    if let Some(item) = self.scene.get_item_mut(*id) {
                        if let ItemContent::Text(text) = &mut item.content {
                            text.size = new_size;
                        }
                    }
                }

                TransformSession::RotateText {
                    id,
                    center,
                    start_cursor,
                    start_angle,
                } => {
                    let cursor = screen_angle(*center, pos);
                    let angle = wrap_degrees(*start_angle + (cursor - *start_cursor));
                    if let Some(item) = self.scene.get_item_mut(*id) {
                        if let ItemContent::Text(text) = &mut item.content {
                            text.angle = angle;
                        }
                    }
                }

                TransformSession::ResizeRoom { id, handle } => {
                    let w = self.viewport.pointer_world(pos);
                    if let Some(item) = self.scene.get_item_mut(*id) {
                        if let ItemContent::Room(room) = &mut item.content {
                            let (a, b) = session::resize_room_corners(room.a, room.b, *handle, w);
                            room.a = a;
                            room.b = b;
                        }
                    }
                }

                TransformSession::DragSegmentEndpoint { id, end } => {
                    let w = self.viewport.pointer_world(pos);
                    if let Some(item) = self.scene.get_item_mut(*id) {
                        if let Some(seg) = item.content.as_segment_mut() {
                            match end {
                                SegmentEnd::A => seg.a = w,
                                SegmentEnd::B => seg.b = w,
                            }
                        }
                    }
                }

                TransformSession::RotateSegment {
                    id,
                    center,
                    half_len,
                    start_dir,
                    start_cursor,
                } => {
                    let screen_center = self.viewport.world_to_screen(*center);
                    let cursor = screen_angle(screen_center, pos);
                    let theta = *start_dir + (cursor - *start_cursor).to_radians();
                    let (a, b) = session::rotated_segment_endpoints(*center, *half_len, theta);
                    // Snapping after rotation may slightly perturb the
                    // preserved length.
                    let a = self.viewport.snap_world(a);
                    let b = self.viewport.snap_world(b);
                    if let Some(item) = self.scene.get_item_mut(*id) {
                        if let Some(seg) = item.content.as_segment_mut() {
                            seg.a = a;
                            seg.b = b;
                        }
                    }
                }
            },
        }
    }
}
