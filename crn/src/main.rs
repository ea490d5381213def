// main.rs      crn program
//
// Copyright (c) 2026  Douglas Lau
//
mod asset;

use crate::asset::AssetDefs;
use anyhow::{Context, Result};
use argh::FromArgs;
use cairn::Asset;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Default output directory
const OUT_DIR: &str = "public/models";

/// Generate solid models as GLB files
#[derive(FromArgs, PartialEq, Debug)]
struct Args {
    /// output directory (default: public/models)
    #[argh(option, short = 'o', default = "String::from(OUT_DIR)")]
    out_dir: String,

    /// asset definitions file (.mu) replacing the built-in assets
    #[argh(option, short = 'd')]
    defs: Option<String>,

    /// center models on their bounding box
    #[argh(switch, short = 'c')]
    center: bool,
}

/// Main function
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args: Args = argh::from_env();
    let defs = args.asset_defs()?;
    generate(&defs, Path::new(&args.out_dir), args.center)
}

impl Args {
    /// Get asset definitions
    fn asset_defs(&self) -> Result<AssetDefs> {
        match &self.defs {
            Some(path) => AssetDefs::read(Path::new(path)),
            None => AssetDefs::built_in(),
        }
    }
}

/// Generate all assets into a directory
fn generate(defs: &AssetDefs, out_dir: &Path, center: bool) -> Result<()> {
    for def in defs.assets() {
        let asset = Asset::try_from(def)?.centered(center);
        tracing::info!("building {} ({})", asset.name(), asset.shape().name());
        let path = asset
            .write_file(out_dir)
            .with_context(|| format!("Writing {}", asset.name()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
