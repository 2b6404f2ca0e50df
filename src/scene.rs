//! Scene model - the ordered item collection plus transient rulers.
//!
//! Insertion order doubles as back-to-front draw order. The scene owns its
//! items by value in an id-keyed table; everything else (selection,
//! transform sessions) refers to items by id.

use crate::document::Document;
use crate::geometry::{WorldPoint, wrap_degrees};
use crate::types::{Item, ItemContent, Ruler};
use crate::constants::{MAX_TEXT_SIZE, MIN_TEXT_SIZE};
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub items: Vec<Item>,
    pub rulers: Vec<Ruler>,
    next_item_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item and return its assigned id.
    ///
    /// Text payloads are sanitized on entry (size clamped, angle wrapped)
    /// so every item in the collection satisfies the model invariants.
    pub fn add_item(&mut self, mut content: ItemContent) -> u64 {
        if let ItemContent::Text(t) = &mut content {
            t.size = t.size.clamp(MIN_TEXT_SIZE, MAX_TEXT_SIZE);
            t.angle = wrap_degrees(t.angle);
        }
        let id = self.next_item_id;
        self.next_item_id += 1;
        debug!(id, kind = content.kind_label(), "added scene item");
        self.items.push(Item { id, content });
        id
    }

    /// Remove an item by id. Returns false when no such item exists.
    pub fn remove_item(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            debug!(id, "removed scene item");
        }
        removed
    }

    /// Drop all items and rulers.
    pub fn clear(&mut self) {
        self.items.clear();
        self.rulers.clear();
    }

    pub fn get_item(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_item_mut(&mut self, id: u64) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Translate an item by a world-space delta, kind-specifically.
    pub fn move_item(&mut self, id: u64, dx: f32, dy: f32) {
        if let Some(item) = self.get_item_mut(id) {
            item.content.translate(dx, dy);
        }
    }

    pub fn add_ruler(&mut self, a: WorldPoint, b: WorldPoint) {
        self.rulers.push((a, b));
    }

    pub fn clear_rulers(&mut self) {
        self.rulers.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pure data projection for the persistence collaborator. Ids and any
    /// transient state are excluded.
    pub fn to_document(&self, meters_per_grid: f32) -> Document {
        Document {
            meters_per_grid,
            items: self.items.iter().map(|item| item.content.clone()).collect(),
            rulers: self.rulers.clone(),
        }
    }

    /// Rebuild a scene from a persisted document, re-assigning fresh ids.
    pub fn from_document(doc: Document) -> Self {
        let mut scene = Scene::new();
        for content in doc.items {
            scene.add_item(content);
        }
        scene.rulers = doc.rulers;
        scene
    }
}
