//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render editor panels and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod action_list;
pub mod form_field;
pub mod operator_sheet;
pub mod performer_panel;
pub mod stage_name_input;
pub mod toaster;
