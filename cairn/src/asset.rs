// asset.rs     Asset module
//
// Copyright (c) 2026  Douglas Lau
//
use crate::error::Result;
use crate::gltf;
use crate::material::Material;
use crate::mesh::Mesh;
use crate::shape::Shape;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Named solid with a material
///
/// ```rust
/// # use cairn::{Asset, Error, Material, Shape};
/// # fn main() -> Result<(), Error> {
/// let shape = Shape::Cube { size: 2.0 };
/// let asset = Asset::new("cube", shape, Material::new("cube_mat", [1.0; 4]));
/// let mut glb = Vec::new();
/// asset.write_glb(&mut glb)?;
/// assert_eq!(&glb[0..4], b"glTF");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Asset {
    /// Asset name (also the file stem)
    name: String,

    /// Solid shape
    shape: Shape,

    /// Surface material
    material: Material,

    /// Center node on bounding box
    centered: bool,
}

impl Asset {
    /// Create a new asset
    pub fn new(
        name: impl Into<String>,
        shape: Shape,
        material: Material,
    ) -> Self {
        Asset {
            name: name.into(),
            shape,
            material,
            centered: false,
        }
    }

    /// Center the model on its bounding box
    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Get the asset name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the shape
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Get the material
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Build the mesh
    pub fn build_mesh(&self) -> Result<Mesh> {
        self.shape.build()
    }

    /// Write asset as GLB
    pub fn write_glb<W: Write>(&self, writer: W) -> Result<()> {
        let mesh = self.build_mesh()?;
        gltf::export(writer, &self.name, &mesh, &self.material, self.centered)
    }

    /// Get the file path within a directory
    pub fn path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.glb", self.name))
    }

    /// Write asset to `<dir>/<name>.glb`, creating missing directories
    ///
    /// An existing file is overwritten.
    pub fn write_file(&self, dir: &Path) -> Result<PathBuf> {
        let path = self.path(dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(&path)?);
        self.write_glb(writer)?;
        tracing::debug!("wrote {}", path.display());
        Ok(path)
    }
}
