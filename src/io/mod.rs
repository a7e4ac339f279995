//! I/O layer: decoding the source artwork and writing resources into an
//! Android `res/` tree.
pub mod source;
pub use source::SourceImage;

pub mod writers;
