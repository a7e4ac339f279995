//! Shared types used across droidicon.
//! Includes the density table (`Density`), the saved file variants
//! (`IconVariant`), and how the label is handled (`LabelMode`).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Android density qualifiers for launcher mipmaps, smallest first.
pub const DPI_LABEL: [&str; 5] = ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"];

/// Launcher icon side in pixels for each entry of [`DPI_LABEL`].
pub const DPI_SIZE: [u32; 5] = [48, 72, 96, 144, 192];

/// One output bucket: a density qualifier and the square icon side for it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Density {
    pub label: String,
    pub size: u32,
}

impl Density {
    pub fn new(label: impl Into<String>, size: u32) -> Self {
        Self {
            label: label.into(),
            size,
        }
    }

    /// Resource directory name, e.g. `mipmap-xhdpi`.
    pub fn dir_name(&self) -> String {
        format!("mipmap-{}", self.label)
    }

    /// The standard launcher table (mdpi through xxxhdpi).
    pub fn launcher_table() -> Vec<Density> {
        DPI_LABEL
            .iter()
            .zip(DPI_SIZE)
            .map(|(label, size)| Density::new(*label, size))
            .collect()
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}x{})", self.dir_name(), self.size, self.size)
    }
}

/// The three PNGs written into every density directory.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum IconVariant {
    Launcher,
    Round,
    Foreground,
}

impl IconVariant {
    pub const ALL: [IconVariant; 3] = [
        IconVariant::Launcher,
        IconVariant::Round,
        IconVariant::Foreground,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            IconVariant::Launcher => "ic_launcher.png",
            IconVariant::Round => "ic_launcher_round.png",
            IconVariant::Foreground => "ic_launcher_foreground.png",
        }
    }

    /// Whether a baked label may be applied to this variant. The adaptive
    /// foreground layer never carries text.
    pub fn accepts_label(self) -> bool {
        !matches!(self, IconVariant::Foreground)
    }
}

impl std::fmt::Display for IconVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// How the application label relates to the saved icons.
#[derive(
    Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    /// Icons carry no text; the launcher draws the app name itself.
    #[default]
    Launcher,
    /// Launcher and round icons get the label drawn in a band below the artwork.
    Baked,
}

impl std::fmt::Display for LabelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelMode::Launcher => write!(f, "Launcher"),
            LabelMode::Baked => write!(f, "Baked"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_table_is_ordered_smallest_first() {
        let table = Density::launcher_table();
        let sizes: Vec<u32> = table.iter().map(|d| d.size).collect();
        assert_eq!(sizes, vec![48, 72, 96, 144, 192]);
        assert_eq!(table[0].dir_name(), "mipmap-mdpi");
        assert_eq!(table[4].dir_name(), "mipmap-xxxhdpi");
    }

    #[test]
    fn only_foreground_rejects_label() {
        assert!(IconVariant::Launcher.accepts_label());
        assert!(IconVariant::Round.accepts_label());
        assert!(!IconVariant::Foreground.accepts_label());
    }

    #[test]
    fn label_mode_deserializes_lowercase() {
        let mode: LabelMode = serde_json::from_str("\"baked\"").unwrap();
        assert_eq!(mode, LabelMode::Baked);
        assert_eq!(LabelMode::default(), LabelMode::Launcher);
    }
}
