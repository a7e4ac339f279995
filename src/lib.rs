#![doc = r#"
droidicon — Android launcher icon generator.

This crate turns one source image (JPEG, PNG, WebP) into the launcher icon set an
Android project expects: for every density bucket (`mdpi` through `xxxhdpi`) the
source is scaled to fit a square, centered on a transparent canvas, and written as
`ic_launcher.png`, `ic_launcher_round.png`, and `ic_launcher_foreground.png` under
`res/mipmap-<density>/`. It powers the `droidicon` CLI and can be embedded in your
own build tooling.

Add dependency
--------------
```toml
[dependencies]
droidicon = "0.1"
```

Quick start: generate into a project
------------------------------------
```rust,no_run
use std::path::Path;
use droidicon::{generate_icons, GenerateParams};

fn main() -> droidicon::Result<()> {
    let params = GenerateParams::for_project(Path::new("/work/my-app"));
    let report = generate_icons(&params)?;
    println!("wrote {} files", report.files_written());
    Ok(())
}
```

Custom density table and baked label
------------------------------------
```rust,no_run
use std::path::PathBuf;
use droidicon::{generate_icons, Density, GenerateParams, LabelMode};

fn main() -> droidicon::Result<()> {
    let params = GenerateParams {
        source: PathBuf::from("art/icon.png"),
        res_dir: PathBuf::from("android/app/src/main/res"),
        densities: vec![Density::new("hdpi", 72), Density::new("xxhdpi", 144)],
        label: "Grimoire".to_string(),
        label_mode: LabelMode::Baked,
        ..GenerateParams::default()
    };
    generate_icons(&params)?;
    Ok(())
}
```

Render in memory
----------------
```rust
use droidicon::render_icon;
use image::{Rgba, RgbaImage};

let source = RgbaImage::from_pixel(1024, 512, Rgba([200, 40, 40, 255]));
let icon = render_icon(&source, 96).unwrap();
assert_eq!(icon.dimensions(), (96, 96));
// 96x48 artwork centered vertically: the top rows stay transparent.
assert_eq!(icon.get_pixel(0, 0)[3], 0);
```

Error handling
--------------
All public functions return `droidicon::Result<T>`; match on `droidicon::Error` to
tell a missing source apart from one that cannot be decoded.

```rust,no_run
use std::path::Path;
use droidicon::{generate_icons, Error, GenerateParams};

fn main() {
    let params = GenerateParams::for_project(Path::new("."));
    match generate_icons(&params) {
        Ok(_) => {}
        Err(Error::MissingSource { path }) => eprintln!("no source at {}", path.display()),
        Err(Error::Decode { source, .. }) => eprintln!("cannot decode: {source}"),
        Err(other) => eprintln!("failed: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — density table, icon variants, label mode.
- [`core`] — resize, centering, label overlay, font resolution.
- [`io`] — source decoding and resource writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::GenerateParams;
pub use error::{Error, Result};
pub use types::{DPI_LABEL, DPI_SIZE, Density, IconVariant, LabelMode};

pub use crate::core::fonts::{FontSource, ResolvedFont, resolve_font};
pub use crate::core::processing::overlay::{LabelOverlay, compose_label};
pub use crate::core::processing::padding::{center_on_canvas, render_icon};
pub use crate::core::processing::resize::{FitGeometry, fit_geometry};
pub use io::SourceImage;

pub use api::{BatchReport, DensityReport, RenderedSet, generate_icons, render_density};
