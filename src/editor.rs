//! Editor - the engine's root state and non-pointer operations.
//!
//! Owns the scene, viewport, selection, active tool, and any in-flight
//! pointer gesture. All mutation happens synchronously through `&mut self`
//! methods; the rendering collaborator re-reads state after every call.
//! Pointer-event handlers live in the `input` module.

use crate::constants::DEFAULT_METERS_PER_GRID;
use crate::document::Document;
use crate::geometry::{Rect, ScreenPoint};
use crate::hit;
use crate::input::InputState;
use crate::input::DrawPreview;
use crate::measure::UnitMode;
use crate::scene::Scene;
use crate::selection::SelectionManager;
use crate::text::{HeuristicTextMeasurer, TextMeasurer};
use crate::types::Tool;
use crate::viewport::Viewport;
use tracing::{debug, info};

/// Synchronous "ask the user for text" collaborator, used only by the text
/// tool. A modal host blocks inside `ask_text`; the engine is re-entered
/// only after it returns.
pub trait TextPrompt {
    fn ask_text(&mut self) -> Option<String>;
}

/// Prompt that always declines; the default for hosts without a dialog.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPrompt;

impl TextPrompt for NullPrompt {
    fn ask_text(&mut self) -> Option<String> {
        None
    }
}

pub struct Editor {
    pub scene: Scene,
    pub viewport: Viewport,
    pub selection: SelectionManager,
    /// Real-world scale, independent of zoom
    pub meters_per_grid: f32,
    /// Display unit for measurement labels
    pub unit: UnitMode,
    /// Keep previous rulers when placing a new one
    pub keep_rulers: bool,
    pub(crate) tool: Tool,
    pub(crate) input: InputState,
    pub(crate) pan_key_held: bool,
    pub(crate) measurer: Box<dyn TextMeasurer>,
    pub(crate) prompt: Box<dyn TextPrompt>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            viewport: Viewport::new(),
            selection: SelectionManager::new(),
            meters_per_grid: DEFAULT_METERS_PER_GRID,
            unit: UnitMode::default(),
            keep_rulers: false,
            tool: Tool::default(),
            input: InputState::default(),
            pan_key_held: false,
            measurer: Box::new(HeuristicTextMeasurer::default()),
            prompt: Box::new(NullPrompt),
        }
    }

    /// Replace the text-metrics collaborator.
    pub fn set_text_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.measurer = measurer;
    }

    /// Replace the text-prompt collaborator.
    pub fn set_text_prompt(&mut self, prompt: Box<dyn TextPrompt>) {
        self.prompt = prompt;
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch tools, discarding any in-progress draw or transform state.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            debug!(tool = tool.label(), "tool changed");
        }
        self.tool = tool;
        self.input.reset();
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Hold/release the keyboard pan modifier (space); while held, the next
    /// pointer down starts a pan instead of the active tool's gesture.
    pub fn set_pan_key(&mut self, held: bool) {
        self.pan_key_held = held;
    }

    /// Start panning from an explicit gesture (middle button down).
    pub fn begin_pan(&mut self, pos: ScreenPoint) {
        self.input = InputState::Panning { last: pos };
    }

    /// End an explicit pan gesture.
    pub fn end_pan(&mut self) {
        if self.input.is_panning() {
            self.input.reset();
        }
    }

    /// Zoom about a fixed screen anchor (typically the viewport center).
    pub fn zoom_by(&mut self, factor: f32, anchor: ScreenPoint) -> bool {
        self.viewport.zoom_about(factor, anchor)
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Remove an item, eagerly purging the selection and any transform
    /// session that references it.
    pub fn remove_item(&mut self, id: u64) -> bool {
        let removed = self.scene.remove_item(id);
        if removed {
            self.selection.remove(id);
            if self.input.references_item(id) {
                self.input.reset();
            }
        }
        removed
    }

    /// Delete every selected item.
    pub fn delete_selection(&mut self) {
        let ids: Vec<u64> = self.selection.ids().copied().collect();
        if ids.is_empty() {
            return;
        }
        for id in ids {
            self.scene.remove_item(id);
        }
        self.selection.clear();
        if self.input.is_transforming() {
            self.input.reset();
        }
        debug!("deleted selection");
    }

    /// Toggle the measurement overlay of a wall/door/window/room.
    pub fn toggle_measure(&mut self, id: u64) {
        if let Some(item) = self.scene.get_item_mut(id) {
            if let Some(measure) = item.content.measure_mut() {
                *measure = !*measure;
            }
        }
    }

    /// Toggle the area badge of a room.
    pub fn toggle_show_area(&mut self, id: u64) {
        if let Some(item) = self.scene.get_item_mut(id) {
            if let crate::types::ItemContent::Room(room) = &mut item.content {
                room.show_area = !room.show_area;
            }
        }
    }

    /// Remove all rulers and any ruler in progress.
    pub fn clear_rulers(&mut self) {
        self.scene.clear_rulers();
        if matches!(self.input, InputState::DrawingRuler { .. }) {
            self.input.reset();
        }
    }

    /// Reset to an empty scene: items, rulers, selection, and any in-flight
    /// gesture are discarded. The view and scale are kept.
    pub fn new_document(&mut self) {
        self.scene.clear();
        self.selection.clear();
        self.input.reset();
        info!("new document");
    }

    /// Project the scene for the persistence collaborator.
    pub fn to_document(&self) -> Document {
        self.scene.to_document(self.meters_per_grid)
    }

    /// Replace the scene from a persisted document.
    pub fn load_document(&mut self, doc: Document) {
        self.meters_per_grid = doc.meters_per_grid;
        self.scene = Scene::from_document(doc);
        self.selection.clear();
        self.input.reset();
        info!(items = self.scene.len(), "document loaded");
    }

    /// The live creation preview, for the rendering collaborator.
    pub fn draw_preview(&self) -> Option<DrawPreview> {
        self.input.preview()
    }

    /// The marquee rectangle being dragged, if any.
    pub fn marquee_rect(&self) -> Option<Rect> {
        self.input.marquee_rect()
    }

    /// Union screen bounding box of the multi-selection.
    pub fn group_screen_bbox(&self) -> Option<Rect> {
        hit::group_screen_bbox(
            &self.scene,
            &self.selection,
            &self.viewport,
            self.measurer.as_ref(),
        )
    }

    /// Status-line text for a pointer position.
    pub fn pointer_status(&self, pos: ScreenPoint) -> String {
        let w = self.viewport.pointer_world(pos);
        format!(
            "World: ({:.2}, {:.2}) | Scale: {:.3} m/cell | Zoom: {:.2}x",
            w.x, w.y, self.meters_per_grid, self.viewport.zoom
        )
    }
}
