//! Interaction core for the haunted-house decoration studio.
//!
//! This crate owns everything about the studio that can be expressed without
//! a browser: the decoration catalog, the placed-decoration store, the
//! mapping from window coordinates to placement-surface coordinates, the drag
//! payload codec, and the gesture state machine that turns palette drags,
//! drops, touches and repositioning moves into store mutations. The host UI
//! crate wires DOM events into [`tracker::Tracker`] and applies the returned
//! [`tracker::Action`]s (drag data, frame requests, re-renders).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`tracker`] | Gesture state machine and the [`tracker::Action`]s it emits |
//! | [`doc`] | Insertion-ordered store of placed decorations |
//! | [`catalog`] | Static palette of decoration templates |
//! | [`surface`] | Points, rects and client-to-surface coordinate mapping |
//! | [`payload`] | JSON codec for the drag-and-drop transfer payload |
//! | [`frame`] | Single-slot coalescing of moves onto paint boundaries |
//! | [`scroll_lock`] | Scoped page-scroll suspension guard |
//! | [`theme`] | Day/night flag and the colors each theme paints with |
//! | [`consts`] | Shared constants (palette width, payload key, etc.) |

pub mod catalog;
pub mod consts;
pub mod doc;
pub mod frame;
pub mod payload;
pub mod scroll_lock;
pub mod surface;
pub mod theme;
pub mod tracker;
