//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the table, its paginator and the row-count overlay while
//! reading/writing the shared `TableState` from Leptos context.

pub mod artworks_table;
pub mod paginator;
pub mod row_count_overlay;
