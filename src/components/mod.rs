//! Leptos UI components.
//!
//! ARCHITECTURE
//! ============
//! `studio` hosts the placement surface and owns the tracker; the palette,
//! sky and house are leaf components that only render what they are given and
//! report clicks and drags back through callbacks.

pub mod decoration_panel;
pub mod haunted_house;
pub mod sky;
pub mod studio;
