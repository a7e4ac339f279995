//! Core building blocks: scale-to-fit resize, transparent centering, label
//! overlay, and font resolution. These are internal primitives consumed by
//! the high-level `api` module.
pub mod fonts;
pub mod params;
pub mod processing;
