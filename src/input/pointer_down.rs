//! Pointer down - selection, transform entry, and tool-specific starts.

use crate::editor::Editor;
use crate::geometry::{ScreenPoint, WorldPoint, screen_angle};
use crate::handles;
use crate::handles::{RoomHandle, SegmentHandle, TextHandle};
use crate::hit;
use crate::input::session::{SegmentEnd, TransformSession};
use crate::input::state::InputState;
use crate::text::text_screen_bbox;
use crate::types::{ItemContent, Modifiers, SegmentKind, TextData, Tool};
use tracing::debug;

impl Editor {
    /// Handle a primary-button press at a screen position.
    pub fn pointer_down(&mut self, pos: ScreenPoint, modifiers: Modifiers) {
        if self.pan_key_held {
            self.input = InputState::Panning { last: pos };
            return;
        }

        let world = self.viewport.pointer_world(pos);
        match self.tool {
            Tool::Select => {
                if !self.select_or_begin_transform(pos, modifiers) {
                    // Nothing hit: start a marquee; the previous selection
                    // is replaced when it finalizes on pointer up.
                    self.input = InputState::MarqueeSelecting {
                        start: pos,
                        current: pos,
                    };
                }
            }
            Tool::Wall => self.segment_tool_down(SegmentKind::Wall, world),
            Tool::Door => self.segment_tool_down(SegmentKind::Door, world),
            Tool::Window => self.segment_tool_down(SegmentKind::Window, world),
            Tool::Room => {
                self.input = InputState::DrawingRoom {
                    start: world,
                    current: world,
                };
            }
            Tool::Text => self.text_tool_down(world),
            Tool::Ruler => self.ruler_tool_down(world),
            Tool::Eraser => {
                let hit_id = hit::hit_test(
                    &self.scene,
                    &self.viewport,
                    self.measurer.as_ref(),
                    pos,
                );
                if let Some(id) = hit_id {
                    self.remove_item(id);
                }
            }
        }
    }

    /// Two-click creation for wall/door/window: the first click arms the
    /// preview, the second appends the item unless it would be degenerate.
    fn segment_tool_down(&mut self, kind: SegmentKind, world: WorldPoint) {
        match self.input {
            InputState::DrawingSegment { kind: armed, start, .. } if armed == kind => {
                if start != world {
                    let id = self.scene.add_item(kind.content(start, world));
                    debug!(id, "segment finalized");
                }
                self.input.reset();
            }
            _ => {
                self.input = InputState::DrawingSegment {
                    kind,
                    start: world,
                    current: world,
                };
            }
        }
    }

    fn ruler_tool_down(&mut self, world: WorldPoint) {
        match self.input {
            InputState::DrawingRuler { start, .. } => {
                if start != world {
                    if !self.keep_rulers {
                        self.scene.clear_rulers();
                    }
                    self.scene.add_ruler(start, world);
                }
                self.input.reset();
            }
            _ => {
                if !self.keep_rulers && !self.scene.rulers.is_empty() {
                    self.scene.clear_rulers();
                }
                self.input = InputState::DrawingRuler {
                    start: world,
                    current: world,
                };
            }
        }
    }

    /// Ask the prompt collaborator for label text; an empty or declined
    /// answer creates nothing.
    fn text_tool_down(&mut self, world: WorldPoint) {
        if let Some(text) = self.prompt.ask_text() {
            if !text.is_empty() {
                self.scene.add_item(ItemContent::Text(TextData::new(world, text)));
            }
        }
    }

    /// Select-tool press: enter a transform session or pick an item.
    /// Returns false when nothing was hit and a marquee should start.
    ///
    /// Priority: the multi-selection's group box, then the single
    /// selection's handles, then a fresh hit-test.
    fn select_or_begin_transform(&mut self, pos: ScreenPoint, modifiers: Modifiers) -> bool {
        if self.selection.len() > 1 {
            if let Some(bbox) = self.group_screen_bbox() {
                if bbox.contains(pos.x, pos.y) {
                    let anchor = self.viewport.pointer_world(pos);
                    self.input = InputState::Transforming(TransformSession::MoveGroup { anchor });
                    return true;
                }
            }
        }

        if let Some(session) = self.primary_handle_session(pos, modifiers) {
            debug!(mode = session.mode_label(), "transform started");
            self.input = InputState::Transforming(session);
            return true;
        }

        let hit_id = hit::hit_test(&self.scene, &self.viewport, self.measurer.as_ref(), pos);
        if let Some(id) = hit_id {
            self.selection.select_single(id);
            if let Some(session) = self.body_move_session(id, pos) {
                self.input = InputState::Transforming(session);
            }
            return true;
        }
        false
    }

    /// Test the single selection's handles at `pos` and build the matching
    /// session. Precedence within one item: rotate, then scale/resize
    /// handles, then the body (a plain move).
    fn primary_handle_session(
        &self,
        pos: ScreenPoint,
        modifiers: Modifiers,
    ) -> Option<TransformSession> {
        let id = self.selection.primary()?;
        let item = self.scene.get_item(id)?;
        let zoom = self.viewport.zoom;

        match &item.content {
            ItemContent::Text(text) => {
                let bbox = text_screen_bbox(text, &self.viewport, self.measurer.as_ref());
                match handles::hit_text_handle(&bbox, zoom, pos)? {
                    TextHandle::Rotate => {
                        let center = self.viewport.world_to_screen(text.anchor);
                        Some(TransformSession::RotateText {
                            id,
                            center,
                            start_cursor: screen_angle(center, pos),
                            start_angle: text.angle,
                        })
                    }
                    TextHandle::Scale(handle) => Some(TransformSession::ScaleText {
                        id,
                        handle,
                        keep_ratio: modifiers.shift,
                        start_bbox: bbox,
                        start_size: text.size,
                    }),
                    TextHandle::Inside => Some(self.move_session(id, pos)),
                }
            }
            ItemContent::Room(room) => {
                let rect = hit::room_screen_rect(room, &self.viewport);
                match handles::hit_room_handle(&rect, zoom, pos)? {
                    RoomHandle::Resize(handle) => {
                        Some(TransformSession::ResizeRoom { id, handle })
                    }
                    RoomHandle::Inside => Some(self.move_session(id, pos)),
                }
            }
            ItemContent::Wall(seg) | ItemContent::Door(seg) | ItemContent::Window(seg) => {
                let a = self.viewport.world_to_screen(seg.a);
                let b = self.viewport.world_to_screen(seg.b);
                match handles::hit_segment_handle(a, b, zoom, pos)? {
                    SegmentHandle::EndA => Some(TransformSession::DragSegmentEndpoint {
                        id,
                        end: SegmentEnd::A,
                    }),
                    SegmentHandle::EndB => Some(TransformSession::DragSegmentEndpoint {
                        id,
                        end: SegmentEnd::B,
                    }),
                    SegmentHandle::Rotate => {
                        let center = seg.midpoint();
                        let screen_center = self.viewport.world_to_screen(center);
                        Some(TransformSession::RotateSegment {
                            id,
                            center,
                            half_len: (seg.length() / 2.0).max(1e-6),
                            start_dir: (seg.b.y - seg.a.y).atan2(seg.b.x - seg.a.x),
                            start_cursor: screen_angle(screen_center, pos),
                        })
                    }
                    SegmentHandle::OnSegment => Some(self.move_session(id, pos)),
                }
            }
        }
    }

    /// A move session for a freshly picked item, when the press landed on
    /// its body rather than empty space around its bounding box.
    fn body_move_session(&self, id: u64, pos: ScreenPoint) -> Option<TransformSession> {
        let item = self.scene.get_item(id)?;
        let zoom = self.viewport.zoom;
        let on_body = match &item.content {
            ItemContent::Text(text) => {
                let bbox = text_screen_bbox(text, &self.viewport, self.measurer.as_ref());
                matches!(
                    handles::hit_text_handle(&bbox, zoom, pos),
                    Some(TextHandle::Inside)
                )
            }
            ItemContent::Room(room) => {
                let rect = hit::room_screen_rect(room, &self.viewport);
                matches!(
                    handles::hit_room_handle(&rect, zoom, pos),
                    Some(RoomHandle::Inside)
                )
            }
            ItemContent::Wall(seg) | ItemContent::Door(seg) | ItemContent::Window(seg) => {
                let a = self.viewport.world_to_screen(seg.a);
                let b = self.viewport.world_to_screen(seg.b);
                matches!(
                    handles::hit_segment_handle(a, b, zoom, pos),
                    Some(SegmentHandle::OnSegment)
                )
            }
        };
        on_body.then(|| self.move_session(id, pos))
    }

    fn move_session(&self, id: u64, pos: ScreenPoint) -> TransformSession {
        TransformSession::MoveSingle {
            id,
            anchor: self.viewport.pointer_world(pos),
        }
    }
}
