// Public library interface for squarify-rs
// This allows the debug CLI tool and downstream callers to use the layout engine

pub mod layout;

pub use layout::{squarify, Rect, WeightedRect};
