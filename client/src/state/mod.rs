//! Client-side UI state.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data wrapped in `RwSignal`s and provided through
//! Leptos context by the root `App`.

pub mod table;
