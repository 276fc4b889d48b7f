//! Interaction tracker: the gesture state machine behind the studio.
//!
//! The host forwards browser input as plain values (client points, bounding
//! rects, drag data text, timestamps) and applies the [`Action`]s that come
//! back. Three gesture paths exist:
//!
//! - **Palette drag** (`Idle → Dragging → Idle`): drag-start stashes the
//!   serialized template in the drag data channel; the drop reads it back and
//!   places a decoration where it landed.
//! - **Palette touch** (`Idle → TouchPlacing → Idle`): there is no drop phase
//!   on touch screens, so the decoration is placed as soon as the touch
//!   starts, shifted right by the palette width onto the surface. Touch-end
//!   only returns to idle.
//! - **Reposition** (`Idle → Repositioning → Idle`): grabbing a placed marker
//!   tracks a transient position, updated at most once per frame, and commits
//!   it to the store on release.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use crate::catalog::DecorationTemplate;
use crate::consts::DRAG_DATA_KEY;
use crate::doc::{DecorationId, DecorationStore, PlacedDecoration};
use crate::frame::FrameSlot;
use crate::payload;
use crate::surface::{LayoutVariant, Point, Rect, grab_offset, palette_touch_to_local, to_local, to_surface};
use crate::theme::Theme;

/// Actions returned from tracker operations for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Store `data` in the drag data channel under `key`.
    SetDragData { key: &'static str, data: String },
    /// A decoration was appended to the store.
    Placed(PlacedDecoration),
    /// A move is pending; call [`Tracker::on_frame`] at the next paint.
    FrameRequested,
    /// The transient reposition preview moved. The store is unchanged.
    PreviewMoved { id: DecorationId, at: Point },
    /// A reposition was committed to the store.
    Moved { id: DecorationId, at: Point },
    /// The store was emptied.
    Cleared { count: usize },
    /// The theme flag flipped.
    ThemeChanged(Theme),
    /// Visible state changed without a more specific action.
    RenderNeeded,
}

/// How a palette gesture started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaletteInput {
    /// Native drag-and-drop; placement waits for the drop.
    Pointer,
    /// Touch start at `client`, placed immediately on `surface`.
    Touch { client: Point, surface: Rect },
}

/// The gesture currently in progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// A palette template is being dragged with a pointer.
    Dragging { template: DecorationTemplate },
    /// A palette template was placed by touch; waiting for touch-end.
    TouchPlacing { template: DecorationTemplate },
    /// A placed decoration is being moved.
    Repositioning {
        id: DecorationId,
        /// Pointer offset from the marker's center at grab time.
        grab: Point,
        /// Latest painted surface position; committed on release.
        position: Point,
    },
}

/// Tracker settings fixed for the studio's lifetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackerConfig {
    pub layout: LayoutVariant,
}

/// Transient reposition state exposed for the ghost marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview<'a> {
    pub decoration: &'a PlacedDecoration,
    pub at: Point,
}

/// Owns placed decorations, the theme flag, and the active gesture.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    config: TrackerConfig,
    store: DecorationStore,
    theme: Theme,
    gesture: Gesture,
    moves: FrameSlot<Point>,
}

impl Tracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: TrackerConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Palette ---

    /// Start dragging `template` out of the palette.
    ///
    /// Pointer drags hand back the serialized template for the drag data
    /// channel. Touch places the decoration right away, one palette width to
    /// the right of the finger and clamped inside the surface.
    pub fn begin_palette_drag(
        &mut self,
        template: &DecorationTemplate,
        input: PaletteInput,
        now_ms: u64,
    ) -> Vec<Action> {
        self.abandon_reposition();
        match input {
            PaletteInput::Pointer => {
                let data = match payload::encode(template) {
                    Ok(data) => data,
                    Err(e) => {
                        log::warn!("palette drag of {} not started: {e}", template.id);
                        return Vec::new();
                    }
                };
                log::debug!("palette drag started: {}", template.id);
                self.gesture = Gesture::Dragging { template: template.clone() };
                vec![Action::SetDragData { key: DRAG_DATA_KEY, data }]
            }
            PaletteInput::Touch { client, surface } => {
                let at = palette_touch_to_local(client, &surface);
                let placed = self.store.place(template, at, now_ms).clone();
                log::debug!("touch placed {} at ({:.1}, {:.1})", placed.id, at.x, at.y);
                self.gesture = Gesture::TouchPlacing { template: template.clone() };
                vec![Action::Placed(placed), Action::RenderNeeded]
            }
        }
    }

    /// Drag-end or touch-end on the palette: the palette gesture is over.
    pub fn end_palette_gesture(&mut self) {
        if matches!(self.gesture, Gesture::Dragging { .. } | Gesture::TouchPlacing { .. }) {
            self.gesture = Gesture::Idle;
        }
    }

    /// Drop drag data `data` at `client` onto `surface`.
    ///
    /// Data that is not a serialized template is logged and ignored; the
    /// store is left unchanged.
    pub fn drop_on_canvas(&mut self, data: &str, client: Point, surface: Rect, now_ms: u64) -> Vec<Action> {
        self.end_palette_gesture();
        let template = match payload::decode(data) {
            Ok(template) => template,
            Err(e) => {
                log::warn!("failed to parse decoration data: {e}");
                return Vec::new();
            }
        };
        let at = to_local(client, &surface, self.config.layout);
        let placed = self.store.place(&template, at, now_ms).clone();
        log::debug!("dropped {} at ({:.1}, {:.1})", placed.id, at.x, at.y);
        vec![Action::Placed(placed), Action::RenderNeeded]
    }

    // --- Reposition ---

    /// Grab the placed decoration `id` at `client`.
    ///
    /// `element` is the marker's bounding rect. The pointer's offset from the
    /// marker's center is kept for the rest of the gesture so the marker does
    /// not jump under the pointer. Markers live on the surface, so the layout's
    /// palette correction is not applied here. Unknown ids are ignored.
    pub fn begin_reposition(&mut self, id: &DecorationId, client: Point, element: Rect, surface: Rect) -> Vec<Action> {
        if !self.store.contains(id) {
            log::debug!("reposition ignored for unknown decoration {id}");
            return Vec::new();
        }
        self.moves.cancel();
        let grab = grab_offset(client, &element);
        let position = to_surface(client.offset_from(grab), &surface);
        log::debug!("reposition started: {id}");
        self.gesture = Gesture::Repositioning { id: id.clone(), grab, position };
        vec![Action::PreviewMoved { id: id.clone(), at: position }, Action::RenderNeeded]
    }

    /// Pointer or touch moved to `client`.
    ///
    /// The position is parked until the next frame; only the first move of a
    /// burst asks the host for a frame.
    pub fn on_move(&mut self, client: Point, surface: Rect) -> Vec<Action> {
        let Gesture::Repositioning { grab, .. } = &self.gesture else {
            return Vec::new();
        };
        let at = to_surface(client.offset_from(*grab), &surface);
        if self.moves.offer(at) {
            vec![Action::FrameRequested]
        } else {
            Vec::new()
        }
    }

    /// Paint boundary: apply the most recent pending move to the preview.
    pub fn on_frame(&mut self) -> Vec<Action> {
        let pending = self.moves.take();
        match (&mut self.gesture, pending) {
            (Gesture::Repositioning { id, position, .. }, Some(at)) => {
                *position = at;
                vec![Action::PreviewMoved { id: id.clone(), at }, Action::RenderNeeded]
            }
            _ => Vec::new(),
        }
    }

    /// Pointer or touch released: commit the preview position to the store.
    ///
    /// A move that has not been painted yet still wins, so the committed
    /// position is always the last one reported.
    pub fn on_release(&mut self) -> Vec<Action> {
        if !matches!(self.gesture, Gesture::Repositioning { .. }) {
            return Vec::new();
        }
        let pending = self.moves.flush();
        let Gesture::Repositioning { id, position, .. } = std::mem::take(&mut self.gesture) else {
            return Vec::new();
        };
        let at = pending.unwrap_or(position);
        if !self.store.move_to(&id, at) {
            return vec![Action::RenderNeeded];
        }
        log::debug!("repositioned {id} to ({:.1}, {:.1})", at.x, at.y);
        vec![Action::Moved { id, at }, Action::RenderNeeded]
    }

    /// Abandon a reposition without committing it (e.g. pointer cancel).
    pub fn cancel_reposition(&mut self) -> Vec<Action> {
        if self.abandon_reposition() {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Scene ---

    /// Remove every placed decoration.
    pub fn reset(&mut self) -> Action {
        self.abandon_reposition();
        let count = self.store.clear();
        log::debug!("scene reset, {count} decorations removed");
        Action::Cleared { count }
    }

    /// Flip between day and night.
    pub fn toggle_theme(&mut self) -> Action {
        self.theme = self.theme.toggled();
        Action::ThemeChanged(self.theme)
    }

    // --- Queries ---

    /// Placed decorations in paint order.
    #[must_use]
    pub fn decorations(&self) -> &[PlacedDecoration] {
        self.store.as_slice()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    #[must_use]
    pub fn config(&self) -> TrackerConfig {
        self.config
    }

    /// The decoration being repositioned and where its preview sits.
    #[must_use]
    pub fn preview(&self) -> Option<Preview<'_>> {
        let Gesture::Repositioning { id, position, .. } = &self.gesture else {
            return None;
        };
        self.store.get(id).map(|decoration| Preview { decoration, at: *position })
    }

    fn abandon_reposition(&mut self) -> bool {
        if matches!(self.gesture, Gesture::Repositioning { .. }) {
            self.moves.cancel();
            self.gesture = Gesture::Idle;
            true
        } else {
            false
        }
    }
}
