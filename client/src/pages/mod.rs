//! Route-level page components.

pub mod artworks;
