//! Shared constants for the scene crate.

// ── Layout ──────────────────────────────────────────────────────

/// Width of the decoration palette in CSS pixels.
///
/// Added to the x coordinate of drops when the layout measures event
/// coordinates from the window rather than from the placement surface.
pub const PALETTE_WIDTH_PX: f64 = 96.0;

// ── Drag and drop ───────────────────────────────────────────────

/// Key under which the serialized template travels in the drag data channel.
pub const DRAG_DATA_KEY: &str = "decoration";

// ── Rendering hints ─────────────────────────────────────────────

/// Opacity of the ghost marker that follows a reposition gesture.
pub const GHOST_OPACITY: f64 = 0.7;

/// Number of stars scattered across the night sky.
pub const STAR_COUNT: usize = 50;

/// Stars are kept within the top fraction of the sky (percent of height).
pub const STAR_MAX_TOP_PCT: f64 = 40.0;

/// Upper bound for a star's twinkle animation delay, in seconds.
pub const STAR_MAX_DELAY_S: f64 = 2.0;

// ── Scroll lock ─────────────────────────────────────────────────

/// Body style properties overridden while the studio is mounted, with the
/// value each one is locked to.
pub const SCROLL_LOCK_STYLES: [(&str, &str); 4] =
    [("overflow", "hidden"), ("position", "fixed"), ("width", "100%"), ("height", "100%")];
