//! Scoped suspension of page scrolling.
//!
//! While the studio is mounted, dragging a decoration must not scroll the
//! page underneath it. The lock overrides a handful of body style properties
//! and remembers what they were; dropping the guard puts them back. Tying the
//! guard to the component's lifetime means the page is restored on every exit
//! path, including an unmount the studio did not initiate.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

use crate::consts::SCROLL_LOCK_STYLES;

/// Something with inline style properties, e.g. the document body.
pub trait StyleTarget {
    /// Current inline value of `name`; empty when unset.
    fn property(&self, name: &str) -> String;

    /// Set the inline value of `name`. An empty value removes the override.
    fn set_property(&mut self, name: &str, value: &str);
}

/// Guard that keeps the page scroll-locked until dropped.
pub struct ScrollLock<T: StyleTarget> {
    target: T,
    saved: Vec<(&'static str, String)>,
}

impl<T: StyleTarget> ScrollLock<T> {
    /// Lock scrolling on `target`, recording the values being overridden.
    pub fn acquire(mut target: T) -> Self {
        let mut saved = Vec::with_capacity(SCROLL_LOCK_STYLES.len());
        for (name, locked) in SCROLL_LOCK_STYLES {
            saved.push((name, target.property(name)));
            target.set_property(name, locked);
        }
        log::debug!("scroll lock acquired");
        Self { target, saved }
    }

    /// The locked target.
    pub fn target(&self) -> &T {
        &self.target
    }
}

impl<T: StyleTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        for (name, previous) in self.saved.drain(..) {
            self.target.set_property(name, &previous);
        }
        log::debug!("scroll lock released");
    }
}
