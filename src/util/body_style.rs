//! Document body style access for the scroll lock.

#[cfg(test)]
#[path = "body_style_test.rs"]
mod body_style_test;

use scene::scroll_lock::{ScrollLock, StyleTarget};

/// Inline style of the document body.
#[cfg(feature = "csr")]
pub struct BodyStyle(web_sys::CssStyleDeclaration);

#[cfg(feature = "csr")]
impl StyleTarget for BodyStyle {
    fn property(&self, name: &str) -> String {
        self.0.get_property_value(name).unwrap_or_default()
    }

    fn set_property(&mut self, name: &str, value: &str) {
        let result = if value.is_empty() {
            self.0.remove_property(name).map(|_| ())
        } else {
            self.0.set_property(name, value)
        };
        if let Err(e) = result {
            log::debug!("body style {name} not updated: {e:?}");
        }
    }
}

/// Stand-in body for builds without a browser; styles live in memory.
#[cfg(not(feature = "csr"))]
#[derive(Default)]
pub struct BodyStyle(std::collections::HashMap<String, String>);

#[cfg(not(feature = "csr"))]
impl StyleTarget for BodyStyle {
    fn property(&self, name: &str) -> String {
        self.0.get(name).cloned().unwrap_or_default()
    }

    fn set_property(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            self.0.remove(name);
        } else {
            self.0.insert(name.to_owned(), value.to_owned());
        }
    }
}

/// Lock page scrolling until the returned guard is dropped.
///
/// Returns `None` when there is no document body to lock.
#[cfg(feature = "csr")]
pub fn lock_body_scroll() -> Option<ScrollLock<BodyStyle>> {
    let body = web_sys::window()?.document()?.body()?;
    Some(ScrollLock::acquire(BodyStyle(body.style())))
}

#[cfg(not(feature = "csr"))]
pub fn lock_body_scroll() -> Option<ScrollLock<BodyStyle>> {
    Some(ScrollLock::acquire(BodyStyle::default()))
}
