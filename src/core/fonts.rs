//! Font resolution for the label overlay.
//!
//! Fonts are looked up through an ordered list of [`FontSource`] strategies:
//! explicit font files first, then well-known per-OS locations, then the
//! system font database. The first strategy that yields a usable face wins;
//! [`FontSource::System`] never fails, so a chain ending with it always
//! resolves.
use std::path::{Path, PathBuf};

use cosmic_text::FontSystem;
use cosmic_text::fontdb::Database;
use tracing::{debug, warn};

/// Font file name tried relative to the working directory.
pub const NAMED_FONT: &str = "arial.ttf";

const FALLBACK_LOCALE: &str = "en-US";

/// One way of obtaining a font.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FontSource {
    /// A TrueType/OpenType file on disk.
    File(PathBuf),
    /// Whatever the platform font database provides.
    System,
}

/// A font system ready for shaping, plus the family to request from it.
pub struct ResolvedFont {
    pub font_system: FontSystem,
    /// `None` means the font system's default family.
    pub family: Option<String>,
    pub source: FontSource,
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedFont")
            .field("family", &self.family)
            .field("source", &self.source)
            .finish()
    }
}

impl FontSource {
    /// Try this strategy. File strategies fail when the file is unreadable or
    /// contains no parsable face.
    pub fn load(&self) -> Option<ResolvedFont> {
        match self {
            FontSource::File(path) => load_font_file(path).map(|(font_system, family)| {
                ResolvedFont {
                    font_system,
                    family,
                    source: self.clone(),
                }
            }),
            FontSource::System => Some(system_font()),
        }
    }
}

fn system_font() -> ResolvedFont {
    ResolvedFont {
        font_system: FontSystem::new(),
        family: None,
        source: FontSource::System,
    }
}

fn load_font_file(path: &Path) -> Option<(FontSystem, Option<String>)> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            debug!("Font {:?} unavailable: {}", path, e);
            return None;
        }
    };

    let mut db = Database::new();
    db.load_font_data(data);
    let family = match db.faces().next() {
        Some(face) => face.families.first().map(|(name, _)| name.clone()),
        None => {
            warn!("Font {:?} contains no usable face", path);
            return None;
        }
    };

    Some((
        FontSystem::new_with_locale_and_db(FALLBACK_LOCALE.to_string(), db),
        family,
    ))
}

/// Well-known locations of a sans-serif font for the current OS.
pub fn platform_font_paths() -> Vec<PathBuf> {
    let paths: &[&str] = if cfg!(target_os = "windows") {
        &["C:/Windows/Fonts/arial.ttf"]
    } else if cfg!(target_os = "macos") {
        &[
            "/Library/Fonts/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
        ]
    } else {
        &[
            "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        ]
    };
    paths.iter().map(PathBuf::from).collect()
}

/// The full chain: user fonts, the named font, OS paths, then the system
/// database.
pub fn default_chain(user_fonts: &[PathBuf]) -> Vec<FontSource> {
    user_fonts
        .iter()
        .cloned()
        .chain(std::iter::once(PathBuf::from(NAMED_FONT)))
        .chain(platform_font_paths())
        .map(FontSource::File)
        .chain(std::iter::once(FontSource::System))
        .collect()
}

/// Walk `chain` in order and return the first font that loads. Falls back to
/// the system database if every strategy fails (including an empty chain).
pub fn resolve_font(chain: &[FontSource]) -> ResolvedFont {
    let font = chain
        .iter()
        .find_map(FontSource::load)
        .unwrap_or_else(system_font);
    debug!("Using font {:?} from {:?}", font.family, font.source);
    font
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_order_is_user_named_platform_system() {
        let chain = default_chain(&[PathBuf::from("custom.otf")]);
        assert_eq!(chain[0], FontSource::File(PathBuf::from("custom.otf")));
        assert_eq!(chain[1], FontSource::File(PathBuf::from(NAMED_FONT)));
        assert_eq!(chain.last(), Some(&FontSource::System));
        assert_eq!(chain.len(), 3 + platform_font_paths().len());
    }

    #[test]
    fn missing_file_falls_through() {
        let missing = FontSource::File(PathBuf::from("/nonexistent/droidicon/font.ttf"));
        assert!(missing.load().is_none());

        let resolved = resolve_font(&[missing, FontSource::System]);
        assert_eq!(resolved.source, FontSource::System);
        assert!(resolved.family.is_none());
    }

    #[test]
    fn garbage_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(FontSource::File(path).load().is_none());
    }

    #[test]
    fn empty_chain_still_resolves() {
        let resolved = resolve_font(&[]);
        assert_eq!(resolved.source, FontSource::System);
    }
}
