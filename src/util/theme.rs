//! Document-level theme attribute.
//!
//! Sets `data-theme="day"|"night"` on the `<html>` element so global CSS can
//! follow the scene's theme. Nothing is stored; every mount starts in day.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser (`csr` disabled) the attribute cannot be applied and
//! the call is a no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use scene::theme::Theme;

/// Name of the attribute written on the document element.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Reflect `theme` on the `<html>` element.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            if let Err(e) = el.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                log::debug!("failed to set {THEME_ATTRIBUTE}: {e:?}");
            }
        }
    }
}

/// CSS modifier class for elements that restyle at night.
#[must_use]
pub fn night_class(theme: Theme, base: &str) -> String {
    if theme.is_night() { format!("{base} {base}--night") } else { base.to_owned() }
}
