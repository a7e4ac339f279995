//! Output writers: PNG icon files and the `strings.xml` app-name rewrite.
pub mod png;
pub mod strings;
