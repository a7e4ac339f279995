use clap::Parser;
use std::path::PathBuf;

use droidicon::LabelMode;

#[derive(Parser, Debug)]
#[command(
    name = "droidicon",
    version,
    about = "Generate Android launcher icon mipmaps from one image"
)]
pub struct CliArgs {
    /// Project root; default source and res paths are resolved against it
    #[arg(short, long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Source image (defaults to public/2587ffc4a4a8783df564c50559ed4f40.jpg)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Android res directory (defaults to android/app/src/main/res)
    #[arg(short, long)]
    pub res_dir: Option<PathBuf>,

    /// JSON file with generation parameters; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Label drawn under the icon in baked mode
    #[arg(long)]
    pub label: Option<String>,

    /// Whether the label is left to the launcher or baked into the icons
    #[arg(long, value_enum)]
    pub label_mode: Option<LabelMode>,

    /// Font file tried before the platform defaults (repeatable)
    #[arg(long = "font")]
    pub fonts: Vec<PathBuf>,

    /// Also rename the app in values/strings.xml
    #[arg(long)]
    pub app_name: Option<String>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
