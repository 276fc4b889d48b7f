//! Placed decorations and the in-memory store that owns them.
//!
//! The store is an insertion-ordered list. Order is paint order: later
//! entries are drawn on top of earlier ones. Entries are appended by
//! placement, have their position updated by repositioning, and are only ever
//! removed all at once by [`DecorationStore::clear`]. Nothing here outlives the
//! mounted studio.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::DecorationTemplate;
use crate::surface::Point;

/// Unique identifier of a placed decoration instance.
///
/// Distinct from the template id: it combines the template id with the
/// creation timestamp in milliseconds (`"ghost-1700000000000"`), plus a
/// `-n` suffix when two placements of one template share a millisecond.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecorationId(pub String);

impl DecorationId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecorationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A template instance positioned on the placement surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedDecoration {
    /// Instance id, unique within the store.
    pub id: DecorationId,
    /// Id of the catalog template this instance was created from.
    pub template_id: String,
    /// Emoji glyph copied from the template.
    pub emoji: String,
    /// Display name copied from the template.
    pub name: String,
    /// Surface-local x of the marker's center, in CSS pixels.
    pub x: f64,
    /// Surface-local y of the marker's center, in CSS pixels.
    pub y: f64,
}

impl PlacedDecoration {
    /// The marker's position as a point.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Insertion-ordered collection of placed decorations.
#[derive(Debug, Clone, Default)]
pub struct DecorationStore {
    items: Vec<PlacedDecoration>,
}

impl DecorationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new instance of `template` at `at`, stamped with `now_ms`.
    ///
    /// Returns a reference to the stored decoration.
    pub fn place(&mut self, template: &DecorationTemplate, at: Point, now_ms: u64) -> &PlacedDecoration {
        let id = self.fresh_id(&template.id, now_ms);
        let index = self.items.len();
        self.items.push(PlacedDecoration {
            id,
            template_id: template.id.to_string(),
            emoji: template.emoji.to_string(),
            name: template.name.to_string(),
            x: at.x,
            y: at.y,
        });
        &self.items[index]
    }

    /// Move the decoration with `id` to `at`. Only `x` and `y` change.
    ///
    /// Returns `false` if no such decoration exists.
    pub fn move_to(&mut self, id: &DecorationId, at: Point) -> bool {
        match self.items.iter_mut().find(|d| &d.id == id) {
            Some(decoration) => {
                decoration.x = at.x;
                decoration.y = at.y;
                true
            }
            None => false,
        }
    }

    /// Remove every decoration, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        count
    }

    #[must_use]
    pub fn get(&self, id: &DecorationId) -> Option<&PlacedDecoration> {
        self.items.iter().find(|d| &d.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &DecorationId) -> bool {
        self.get(id).is_some()
    }

    /// Decorations in paint order (first placed first).
    pub fn iter(&self) -> impl Iterator<Item = &PlacedDecoration> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PlacedDecoration] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn fresh_id(&self, template_id: &str, now_ms: u64) -> DecorationId {
        let base = format!("{template_id}-{now_ms}");
        let mut candidate = DecorationId(base.clone());
        let mut n = 1u32;
        while self.contains(&candidate) {
            candidate = DecorationId(format!("{base}-{n}"));
            n += 1;
        }
        candidate
    }
}
