//! Raster steps of icon generation: aspect-preserving resize, centering on a
//! transparent square, and the label overlay.
pub mod overlay;
pub mod padding;
pub mod resize;
