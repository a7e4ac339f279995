//! High-level library API: generate a full set of launcher mipmaps from a
//! source image, or render single icons in memory. Prefer these entrypoints
//! over the low-level processing modules when integrating droidicon.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::info;

use crate::core::fonts::{ResolvedFont, default_chain, resolve_font};
use crate::core::params::GenerateParams;
use crate::core::processing::overlay::compose_label;
use crate::core::processing::padding::render_icon;
use crate::error::Result;
use crate::io::SourceImage;
use crate::io::writers::png::write_png;
use crate::io::writers::strings::update_app_name;
use crate::types::{Density, IconVariant, LabelMode};

/// Directory for the adaptive-icon foreground drawable.
pub const ADAPTIVE_DRAWABLE_DIR: &str = "drawable-v24";

/// Files written for one density bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityReport {
    pub density: Density,
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Summary of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub source_width: u32,
    pub source_height: u32,
    pub densities: Vec<DensityReport>,
    /// `None` when no app name was requested or strings.xml is absent
    pub strings_updated: Option<usize>,
}

impl BatchReport {
    pub fn files_written(&self) -> usize {
        self.densities.iter().map(|d| d.files.len()).sum()
    }
}

/// The in-memory images for one density, keyed by variant.
#[derive(Debug, Clone)]
pub struct RenderedSet {
    pub icon: RgbaImage,
    pub labeled: Option<RgbaImage>,
}

impl RenderedSet {
    pub fn image_for(&self, variant: IconVariant) -> &RgbaImage {
        match (&self.labeled, variant.accepts_label()) {
            (Some(labeled), true) => labeled,
            _ => &self.icon,
        }
    }
}

/// Render the icons for one density without touching the filesystem.
/// `font` is only consulted for [`LabelMode::Baked`].
pub fn render_density(
    source: &RgbaImage,
    density: &Density,
    label: &str,
    label_mode: LabelMode,
    font: Option<&mut ResolvedFont>,
) -> Result<RenderedSet> {
    let icon = render_icon(source, density.size)?;
    let labeled = match (label_mode, font) {
        (LabelMode::Baked, Some(font)) => {
            Some(compose_label(&icon, label, density.size, font).image)
        }
        _ => None,
    };
    Ok(RenderedSet { icon, labeled })
}

/// Render and save the three variants of one density under `res_dir`.
pub fn write_density(
    source: &RgbaImage,
    res_dir: &Path,
    density: &Density,
    label: &str,
    label_mode: LabelMode,
    font: Option<&mut ResolvedFont>,
) -> Result<DensityReport> {
    info!("Processing {}...", density);

    let dir = res_dir.join(density.dir_name());
    std::fs::create_dir_all(&dir)?;

    let rendered = render_density(source, density, label, label_mode, font)?;
    let mut files = Vec::with_capacity(IconVariant::ALL.len());
    for variant in IconVariant::ALL {
        let path = dir.join(variant.file_name());
        write_png(&path, rendered.image_for(variant))?;
        files.push(path);
    }

    Ok(DensityReport {
        density: density.clone(),
        dir,
        files,
    })
}

/// Generate every density listed in `params` from `params.source`.
///
/// Densities are processed in order and the first failure aborts the run;
/// directories written before the failure are left in place.
pub fn generate_icons(params: &GenerateParams) -> Result<BatchReport> {
    let source = SourceImage::open(&params.source)?;
    let (source_width, source_height) = source.dimensions();

    let mut font = match params.label_mode {
        LabelMode::Baked => Some(resolve_font(&default_chain(&params.fonts))),
        LabelMode::Launcher => None,
    };

    let mut report = BatchReport {
        source_width,
        source_height,
        ..BatchReport::default()
    };

    for density in &params.densities {
        let written = write_density(
            &source.pixels,
            &params.res_dir,
            density,
            &params.label,
            params.label_mode,
            font.as_mut(),
        )?;
        report.densities.push(written);
    }

    let drawable_dir = params.res_dir.join(ADAPTIVE_DRAWABLE_DIR);
    std::fs::create_dir_all(&drawable_dir)?;
    info!("Adaptive icon directory ready: {:?}", drawable_dir);

    if let Some(app_name) = &params.app_name {
        report.strings_updated = update_app_name(&params.res_dir, app_name)?;
    }

    info!(
        "Generated {} files across {} densities",
        report.files_written(),
        report.densities.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fonts::FontSource;
    use image::Rgba;

    fn source() -> RgbaImage {
        RgbaImage::from_pixel(64, 32, Rgba([40, 80, 120, 255]))
    }

    #[test]
    fn launcher_mode_uses_plain_icon_everywhere() {
        let density = Density::new("mdpi", 48);
        let set = render_density(&source(), &density, "Label", LabelMode::Launcher, None).unwrap();
        assert!(set.labeled.is_none());
        for variant in IconVariant::ALL {
            assert_eq!(set.image_for(variant).dimensions(), (48, 48));
        }
    }

    #[test]
    fn baked_mode_labels_all_but_foreground() {
        let density = Density::new("mdpi", 48);
        let mut font = resolve_font(&[FontSource::System]);
        let set =
            render_density(&source(), &density, "Label", LabelMode::Baked, Some(&mut font)).unwrap();

        assert_eq!(set.image_for(IconVariant::Launcher).dimensions(), (48, 60));
        assert_eq!(set.image_for(IconVariant::Round).dimensions(), (48, 60));
        assert_eq!(set.image_for(IconVariant::Foreground).dimensions(), (48, 48));
    }
}
