//! Day/night theme flag and the colors each theme paints the scene with.
//!
//! The theme only affects rendering. Toggling it never touches placement
//! state.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    #[must_use]
    pub fn from_night(is_night: bool) -> Self {
        if is_night { Self::Night } else { Self::Day }
    }

    #[must_use]
    pub fn is_night(self) -> bool {
        matches!(self, Self::Night)
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    /// Value for the `data-theme` attribute on the document element.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

/// CSS colors used to paint the scene in one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenePalette {
    pub surface: &'static str,
    pub ground: &'static str,
    pub wall: &'static str,
    pub roof: &'static str,
    pub door: &'static str,
    pub doorknob: &'static str,
    pub chimney: &'static str,
    pub window: &'static str,
    /// Window frame stroke; `None` when windows glow without a frame.
    pub window_frame: Option<&'static str>,
    pub counter_bg: &'static str,
    pub counter_fg: &'static str,
}

const DAY: ScenePalette = ScenePalette {
    surface: "#bfdbfe",
    ground: "#2d2d2d",
    wall: "#8b5e34",
    roof: "#6b4423",
    door: "#4a2911",
    doorknob: "#c0c0c0",
    chimney: "#4a2911",
    window: "#ffd700",
    window_frame: Some("#4a2911"),
    counter_bg: "#ffffff",
    counter_fg: "#1f2937",
};

const NIGHT: ScenePalette = ScenePalette {
    surface: "#111827",
    ground: "#1a1a1a",
    wall: "#4a4a4a",
    roof: "#333333",
    door: "#2a1810",
    doorknob: "#ffd700",
    chimney: "#333333",
    window: "#fff5b8",
    window_frame: None,
    counter_bg: "#1f2937",
    counter_fg: "#ffffff",
};

impl ScenePalette {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Day => DAY,
            Theme::Night => NIGHT,
        }
    }
}
