//! Shared client helpers.

pub mod reorder;
pub mod ui_persistence;
