//! Networking modules for the artworks REST proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the shared wire schema used by
//! both the browser and the server proxy.

pub mod api;
pub mod types;
