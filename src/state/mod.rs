//! Client-side reactive state.
//!
//! DESIGN
//! ======
//! The tracker in the `scene` crate is the source of truth. Components read a
//! plain snapshot of it, republished after every tracker operation that
//! changes something visible.

pub mod studio;
