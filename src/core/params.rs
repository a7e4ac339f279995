use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{Density, LabelMode};

/// Source image location relative to the project root.
pub const DEFAULT_SOURCE: &str = "public/2587ffc4a4a8783df564c50559ed4f40.jpg";

/// Android resource directory relative to the project root.
pub const DEFAULT_RES_DIR: &str = "android/app/src/main/res";

pub const DEFAULT_LABEL: &str = "Morsmordre";

/// Generation parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateParams {
    pub source: PathBuf,
    pub res_dir: PathBuf,
    /// Output buckets, processed in order
    pub densities: Vec<Density>,
    /// Text drawn under the icon when `label_mode` is `Baked`
    pub label: String,
    pub label_mode: LabelMode,
    /// Font files tried before the platform defaults
    pub fonts: Vec<PathBuf>,
    /// If set, `values/strings.xml` is updated with this application name
    pub app_name: Option<String>,
}

impl GenerateParams {
    /// Default layout rooted at `project_dir`.
    pub fn for_project(project_dir: &Path) -> Self {
        Self {
            source: project_dir.join(DEFAULT_SOURCE),
            res_dir: project_dir.join(DEFAULT_RES_DIR),
            ..Self::default()
        }
    }
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            res_dir: PathBuf::from(DEFAULT_RES_DIR),
            densities: Density::launcher_table(),
            label: DEFAULT_LABEL.to_string(),
            label_mode: LabelMode::Launcher,
            fonts: Vec::new(),
            app_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let params: GenerateParams =
            serde_json::from_str(r#"{ "label_mode": "baked", "label": "Grimoire" }"#).unwrap();
        assert_eq!(params.label, "Grimoire");
        assert_eq!(params.label_mode, LabelMode::Baked);
        assert_eq!(params.densities, Density::launcher_table());
        assert_eq!(params.source, PathBuf::from(DEFAULT_SOURCE));
    }

    #[test]
    fn project_layout_is_rooted() {
        let params = GenerateParams::for_project(Path::new("/work/app"));
        assert_eq!(
            params.source,
            PathBuf::from("/work/app/public/2587ffc4a4a8783df564c50559ed4f40.jpg")
        );
        assert_eq!(params.res_dir, PathBuf::from("/work/app/android/app/src/main/res"));
    }
}
