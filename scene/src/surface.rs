//! Placement-surface geometry: points, rects and the client-to-surface mapping.
//!
//! Browser events report positions in client (viewport) coordinates. Placed
//! decorations are stored in surface-local coordinates, i.e. pixel offsets
//! from the top-left corner of the placement surface. Some layouts measure the
//! drag origin from the full window instead of the surface; for those the
//! palette width is added back on the x axis. The correction only applies to
//! coordinates that originate in the palette. Markers already on the surface
//! are mapped with [`to_surface`], or they drift by the palette width on
//! every grab.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::consts::PALETTE_WIDTH_PX;

/// A point in CSS pixels, in either client or surface space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn offset_from(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// An axis-aligned bounding box in client coordinates, as returned by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Geometric center of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point { x: self.left + self.width / 2.0, y: self.top + self.height / 2.0 }
    }

    /// Clamp a surface-local point into `0..=width` by `0..=height`.
    #[must_use]
    pub fn clamp_local(&self, local: Point) -> Point {
        Point {
            x: local.x.clamp(0.0, self.width.max(0.0)),
            y: local.y.clamp(0.0, self.height.max(0.0)),
        }
    }
}

/// Which origin the host layout measures drag coordinates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutVariant {
    /// Event coordinates line up with the surface; no correction.
    #[default]
    SurfaceRelative,
    /// Event coordinates are measured from the window, so the palette's width
    /// must be added back on the x axis.
    WindowRelative,
}

impl LayoutVariant {
    /// Horizontal correction applied to every mapped point.
    #[must_use]
    pub fn palette_offset(self) -> f64 {
        match self {
            Self::SurfaceRelative => 0.0,
            Self::WindowRelative => PALETTE_WIDTH_PX,
        }
    }
}

/// Client point relative to the surface origin, with no palette correction.
#[must_use]
pub fn to_surface(client: Point, surface: &Rect) -> Point {
    Point { x: client.x - surface.left, y: client.y - surface.top }
}

/// Convert a palette-originated client point to surface-local coordinates.
///
/// `x = client.x - surface.left + palette_offset`, `y = client.y - surface.top`.
#[must_use]
pub fn to_local(client: Point, surface: &Rect, layout: LayoutVariant) -> Point {
    let p = to_surface(client, surface);
    Point { x: p.x + layout.palette_offset(), y: p.y }
}

/// Map a touch on the palette onto the surface.
///
/// The finger is over the palette, left of the surface, so the palette width
/// is always added back. The result is clamped so the marker stays visible.
#[must_use]
pub fn palette_touch_to_local(client: Point, surface: &Rect) -> Point {
    surface.clamp_local(to_local(client, surface, LayoutVariant::WindowRelative))
}

/// Offset of a pointer from the center of the element it grabbed.
///
/// Subtracting this from later pointer positions keeps the element from
/// jumping so that its center sits under the pointer.
#[must_use]
pub fn grab_offset(client: Point, element: &Rect) -> Point {
    client.offset_from(element.center())
}
