//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (form values, stage search, operator sheet,
//! notifications) so components depend on small focused models. Every model
//! is a plain struct held in an `RwSignal` and unit-tested without a browser.

pub mod editor;
pub mod operator_sheet;
pub mod stage_search;
pub mod toast;
