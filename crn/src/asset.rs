// asset.rs     Asset definitions
//
// Copyright (c) 2026  Douglas Lau
//
use anyhow::{anyhow, bail, Context, Error};
use cairn::{Asset, Material, Shape};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

type Result<T> = std::result::Result<T, Error>;

/// Built-in asset definitions
pub const BUILT_IN: &str = r#"
asset:
  name: pink_pyramid
  shape: pyramid
  color: 1.0 0.31 0.85 1.0
  radius: 1.0
  height: 1.6
asset:
  name: orange_cone
  shape: cone
  color: 1.0 0.48 0.10 1.0
  radius: 1.0
  height: 1.8
  segments: 32
asset:
  name: light_green_cube
  shape: cube
  color: 0.49 1.0 0.48 1.0
  size: 1.6
"#;

/// Asset definition
#[derive(Debug, Deserialize)]
pub struct AssetDef {
    /// Asset name
    name: String,

    /// Shape name
    shape: String,

    /// Base color (RGBA)
    color: String,

    /// Cube edge length
    size: Option<f32>,

    /// Pyramid / cone radius
    radius: Option<f32>,

    /// Pyramid / cone height
    height: Option<f32>,

    /// Cone segment count
    segments: Option<usize>,
}

/// Definitions of all assets
#[derive(Debug, Deserialize)]
pub struct AssetDefs {
    /// Vec of all assets
    asset: Vec<AssetDef>,
}

impl AssetDefs {
    /// Get the built-in definitions
    pub fn built_in() -> Result<Self> {
        muon_rs::from_str(BUILT_IN).context("Invalid built-in assets")
    }

    /// Read definitions from a file
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("{} not found", path.display()))?;
        muon_rs::from_reader(file).context("Invalid asset definitions")
    }

    /// Get all asset definitions
    pub fn assets(&self) -> &[AssetDef] {
        &self.asset
    }
}

impl AssetDef {
    /// Parse base color
    fn color(&self) -> Result<[f32; 4]> {
        let rgba = self
            .color
            .split_whitespace()
            .map(|c| c.parse::<f32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| anyhow!("Invalid color: {}", self.color))?;
        match rgba[..] {
            [r, g, b, a] => Ok([r, g, b, a]),
            _ => bail!("Invalid color: {}", self.color),
        }
    }

    /// Build shape from definition
    fn shape(&self) -> Result<Shape> {
        let mut shape = Shape::from_name(&self.shape)
            .ok_or_else(|| anyhow!("Unknown shape: {}", self.shape))?;
        match &mut shape {
            Shape::Cube { size } => {
                if let Some(s) = self.size {
                    *size = s;
                }
            }
            Shape::Pyramid { radius, height } => {
                if let Some(r) = self.radius {
                    *radius = r;
                }
                if let Some(h) = self.height {
                    *height = h;
                }
            }
            Shape::Cone {
                radius,
                height,
                segments,
            } => {
                if let Some(r) = self.radius {
                    *radius = r;
                }
                if let Some(h) = self.height {
                    *height = h;
                }
                if let Some(s) = self.segments {
                    *segments = s;
                }
            }
        }
        Ok(shape)
    }
}

impl TryFrom<&AssetDef> for Asset {
    type Error = Error;

    fn try_from(def: &AssetDef) -> Result<Self> {
        let shape = def.shape()?;
        let material = Material::new(format!("{}_mat", def.name), def.color()?);
        Ok(Asset::new(&def.name, shape, material))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn def(shape: &str, color: &str) -> AssetDef {
        AssetDef {
            name: "test".into(),
            shape: shape.into(),
            color: color.into(),
            size: None,
            radius: None,
            height: None,
            segments: None,
        }
    }

    #[test]
    fn built_in() {
        let defs = AssetDefs::built_in().unwrap();
        let assets: Vec<Asset> = defs
            .assets()
            .iter()
            .map(|d| Asset::try_from(d).unwrap())
            .collect();
        assert_eq!(assets.len(), 3);
        assert_eq!(assets[0].name(), "pink_pyramid");
        assert_eq!(
            *assets[0].shape(),
            Shape::Pyramid {
                radius: 1.0,
                height: 1.6
            }
        );
        assert_eq!(assets[0].material().base_color, [1.0, 0.31, 0.85, 1.0]);
        assert_eq!(assets[1].name(), "orange_cone");
        assert_eq!(
            *assets[1].shape(),
            Shape::Cone {
                radius: 1.0,
                height: 1.8,
                segments: 32
            }
        );
        assert_eq!(assets[1].material().name, "orange_cone_mat");
        assert_eq!(assets[2].name(), "light_green_cube");
        assert_eq!(*assets[2].shape(), Shape::Cube { size: 1.6 });
        assert_eq!(assets[2].material().base_color, [0.49, 1.0, 0.48, 1.0]);
    }

    #[test]
    fn shape_params() {
        let mut d = def("cone", "1 1 1 1");
        d.segments = Some(4);
        d.height = Some(2.0);
        assert_eq!(
            d.shape().unwrap(),
            Shape::Cone {
                radius: 1.0,
                height: 2.0,
                segments: 4
            }
        );
    }

    #[test]
    fn invalid() {
        assert!(def("sphere", "1 1 1 1").shape().is_err());
        assert!(def("cube", "1 1 1").color().is_err());
        assert!(def("cube", "1 1 x 1").color().is_err());
        assert_eq!(
            def("cube", "0.5 1 0 1").color().unwrap(),
            [0.5, 1.0, 0.0, 1.0]
        );
    }
}
