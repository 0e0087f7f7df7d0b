//! Pages of the showcase app.

pub mod checkboxes; // Tri-state checkbox demo (public for routing)
pub mod showcase;   // Context menu demo (public for routing)
