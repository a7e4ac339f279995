use std::error::Error as _;
use std::fs;
use std::path::Path;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use droidicon::{GenerateParams, generate_icons};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_config(path: &Path) -> Result<GenerateParams, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge config file (if any) and flags into the final parameters. Relative
/// paths from the config are resolved against the project directory.
pub fn resolve_params(args: &CliArgs) -> Result<GenerateParams, AppError> {
    let project_dir = args.project_dir.as_path();
    let mut params = match &args.config {
        Some(path) => {
            let mut params = load_config(path)?;
            params.source = project_dir.join(&params.source);
            params.res_dir = project_dir.join(&params.res_dir);
            params.fonts = params
                .fonts
                .iter()
                .map(|font| project_dir.join(font))
                .collect();
            params
        }
        None => GenerateParams::for_project(project_dir),
    };

    if let Some(source) = &args.source {
        params.source = source.clone();
    }
    if let Some(res_dir) = &args.res_dir {
        params.res_dir = res_dir.clone();
    }
    if let Some(label) = &args.label {
        params.label = label.clone();
    }
    if let Some(mode) = args.label_mode {
        params.label_mode = mode;
    }
    if !args.fonts.is_empty() {
        let mut fonts = args.fonts.clone();
        fonts.extend(params.fonts.drain(..));
        params.fonts = fonts;
    }
    if let Some(app_name) = &args.app_name {
        params.app_name = Some(app_name.clone());
    }

    if params.densities.is_empty() {
        return Err(AppError::NoDensities);
    }
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    info!("========================================");
    info!("  ANDROID ICON GENERATOR");
    info!("========================================");

    let result = resolve_params(&args).and_then(|params| {
        info!("Source: {:?}", params.source);
        info!("Output: {:?}", params.res_dir);
        info!("Label mode: {}", params.label_mode);
        generate_icons(&params).map_err(AppError::from)
    });

    match result {
        Ok(report) => {
            info!(
                "Done: {} files from {}x{} source",
                report.files_written(),
                report.source_width,
                report.source_height
            );
            Ok(())
        }
        Err(e) => {
            error!("Icon generation failed: {}", e);
            let mut cause = e.source();
            while let Some(inner) = cause {
                error!("  caused by: {}", inner);
                cause = inner.source();
            }
            Err(e.into())
        }
    }
}
