//! Decoration templates offered by the palette.
//!
//! The catalog is a fixed static list. Templates are immutable; placing one
//! on the surface copies its fields into a [`crate::doc::PlacedDecoration`].
//! Templates also travel through the drag data channel as JSON (see
//! [`crate::payload`]), so they deserialize into owned strings while the
//! static entries borrow.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// An immutable palette entry: catalog id, emoji glyph, display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationTemplate {
    pub id: Cow<'static, str>,
    pub emoji: Cow<'static, str>,
    pub name: Cow<'static, str>,
}

impl DecorationTemplate {
    /// Build a template from static strings.
    #[must_use]
    pub const fn new(id: &'static str, emoji: &'static str, name: &'static str) -> Self {
        Self { id: Cow::Borrowed(id), emoji: Cow::Borrowed(emoji), name: Cow::Borrowed(name) }
    }
}

/// Every template in palette order.
pub static CATALOG: [DecorationTemplate; 8] = [
    DecorationTemplate::new("ghost", "\u{1F47B}", "Ghost"),
    DecorationTemplate::new("pumpkin", "\u{1F383}", "Pumpkin"),
    DecorationTemplate::new("bat", "\u{1F987}", "Bat"),
    DecorationTemplate::new("spider", "\u{1F577}\u{FE0F}", "Spider"),
    DecorationTemplate::new("skull", "\u{1F480}", "Skull"),
    DecorationTemplate::new("candle", "\u{1F56F}\u{FE0F}", "Candle"),
    DecorationTemplate::new("cat", "\u{1F408}\u{200D}\u{2B1B}", "Black Cat"),
    DecorationTemplate::new("web", "\u{1F578}\u{FE0F}", "Spider Web"),
];

/// All catalog templates, in the order the palette lists them.
#[must_use]
pub fn templates() -> &'static [DecorationTemplate] {
    &CATALOG
}

/// Look up a catalog template by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static DecorationTemplate> {
    CATALOG.iter().find(|t| t.id == id)
}
