#[cfg(test)]
#[path = "studio_test.rs"]
mod studio_test;

use scene::doc::PlacedDecoration;
use scene::surface::Point;
use scene::theme::Theme;
use scene::tracker::Tracker;

/// Snapshot of the tracker consumed by the scene components.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudioState {
    /// Placed decorations in paint order.
    pub decorations: Vec<PlacedDecoration>,
    pub theme: Theme,
    /// Translucent marker following an in-progress reposition.
    pub ghost: Option<Ghost>,
}

/// Where the reposition preview is drawn and what it shows.
#[derive(Clone, Debug, PartialEq)]
pub struct Ghost {
    pub emoji: String,
    pub at: Point,
}

impl StudioState {
    /// Capture everything the view needs from `tracker`.
    #[must_use]
    pub fn from_tracker(tracker: &Tracker) -> Self {
        Self {
            decorations: tracker.decorations().to_vec(),
            theme: tracker.theme(),
            ghost: tracker
                .preview()
                .map(|p| Ghost { emoji: p.decoration.emoji.clone(), at: p.at }),
        }
    }

    #[must_use]
    pub fn is_night(&self) -> bool {
        self.theme.is_night()
    }

    /// Value shown by the decoration counter.
    #[must_use]
    pub fn count(&self) -> usize {
        self.decorations.len()
    }
}
