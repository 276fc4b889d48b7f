//! Utility helpers shared across studio components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-facing helpers (event coordinates, animation frames, body styles,
//! the document theme attribute) are kept out of components so the components
//! read as event wiring only.

pub mod body_style;
pub mod dom_input;
pub mod frame;
pub mod star_field;
pub mod theme;
