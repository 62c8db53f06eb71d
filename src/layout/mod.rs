// Squarified treemap layout engine.

mod squarify;

pub use squarify::{squarify, Rect, WeightedRect};
