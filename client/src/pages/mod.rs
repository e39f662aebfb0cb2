//! Page-level components.

pub mod editor;
