// gltf.rs      glTF module
//
// Copyright (c) 2026  Douglas Lau
//
use crate::error::{Error, Result};
use crate::glb;
use crate::material::Material;
use crate::mesh::Mesh;
use glam::Vec3;
use serde_derive::Serialize;
use serde_json::{json, Value};
use serde_repr::Serialize_repr;
use std::io::Write;

/// Accessor index of vertex positions
pub const POSITION: usize = 0;

/// Accessor index of vertex normals
pub const NORMAL: usize = 1;

/// Accessor index of triangle indices
pub const INDICES: usize = 2;

/// Component types for glTF accessor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize_repr)]
#[repr(u32)]
pub enum ComponentType {
    U32 = 5125,
    F32 = 5126,
}

/// Element types for glTF accessor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessorType {
    Scalar,
    Vec3,
}

/// Target for glTF buffer view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize_repr)]
#[repr(u32)]
pub enum Target {
    ArrayBuffer = 34962,
    ElementArrayBuffer = 34963,
}

/// Byte range of the binary buffer
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    /// Buffer index
    pub buffer: usize,

    /// Offset from start of buffer
    pub byte_offset: usize,

    /// Length in bytes
    pub byte_length: usize,

    /// Usage hint
    pub target: Target,
}

/// Typed view of a buffer view
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    /// Buffer view index
    pub buffer_view: usize,

    /// Offset within buffer view
    pub byte_offset: usize,

    /// Component type
    pub component_type: ComponentType,

    /// Element type
    #[serde(rename = "type")]
    pub type_: AccessorType,

    /// Count of elements
    pub count: usize,

    /// Minimum value of each component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Vec3>,

    /// Maximum value of each component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Vec3>,
}

/// Mesh packed into one binary buffer
///
/// Positions, normals and indices are stored in that order, with no
/// padding between them.
#[derive(Debug, Default)]
pub struct Packed {
    bin: Vec<u8>,
    views: Vec<View>,
    accessors: Vec<Accessor>,
}

/// Get little-endian bytes of all components of some vectors
fn vec3_words(v: &[Vec3]) -> impl Iterator<Item = [u8; 4]> + '_ {
    v.iter().flat_map(|v| v.to_array()).map(f32::to_le_bytes)
}

impl Packed {
    /// Pack a mesh
    pub fn new(mesh: &Mesh) -> Result<Self> {
        let (min, max) = mesh.bounds().ok_or(Error::EmptyMesh)?;
        let count = mesh.positions().len();
        let mut packed = Packed::default();
        // positions
        let view = packed.push_view(
            vec3_words(mesh.positions()),
            Target::ArrayBuffer,
        );
        packed.accessors.push(Accessor {
            buffer_view: view,
            byte_offset: 0,
            component_type: ComponentType::F32,
            type_: AccessorType::Vec3,
            count,
            min: Some(min),
            max: Some(max),
        });
        // normals
        let view =
            packed.push_view(vec3_words(mesh.normals()), Target::ArrayBuffer);
        packed.accessors.push(Accessor {
            buffer_view: view,
            byte_offset: 0,
            component_type: ComponentType::F32,
            type_: AccessorType::Vec3,
            count,
            min: None,
            max: None,
        });
        // indices
        let view = packed.push_view(
            mesh.indices().iter().map(|v| v.0.to_le_bytes()),
            Target::ElementArrayBuffer,
        );
        packed.accessors.push(Accessor {
            buffer_view: view,
            byte_offset: 0,
            component_type: ComponentType::U32,
            type_: AccessorType::Scalar,
            count: mesh.indices().len(),
            min: None,
            max: None,
        });
        tracing::debug!(
            "packed {} bytes in {} views",
            packed.bin.len(),
            packed.views.len()
        );
        Ok(packed)
    }

    /// Push a view, returning its index
    fn push_view<I>(&mut self, words: I, target: Target) -> usize
    where
        I: IntoIterator<Item = [u8; 4]>,
    {
        let byte_offset = self.bin.len();
        for word in words {
            self.bin.extend_from_slice(&word);
        }
        let idx = self.views.len();
        self.views.push(View {
            buffer: 0,
            byte_offset,
            byte_length: self.bin.len() - byte_offset,
            target,
        });
        idx
    }

    /// Get binary buffer
    pub fn bin(&self) -> &[u8] {
        &self.bin
    }

    /// Get buffer views
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// Get accessors
    pub fn accessors(&self) -> &[Accessor] {
        &self.accessors
    }

    /// Get root JSON of glTF
    ///
    /// A `translation` is applied to the node, leaving vertices unchanged.
    pub fn json(
        &self,
        name: &str,
        material: &Material,
        translation: Option<Vec3>,
    ) -> Value {
        let mut node = json!({
            "mesh": 0,
            "name": name,
        });
        if let Some(t) = translation {
            node["translation"] = json!(t);
        }
        json!({
            "asset": {
                "version": "2.0",
                "generator": concat!("cairn ", env!("CARGO_PKG_VERSION")),
            },
            "scene": 0,
            "scenes": [{
                "name": "Scene",
                "nodes": [0],
            }],
            "nodes": [node],
            "meshes": [{
                "name": name,
                "primitives": [{
                    "attributes": {
                        "POSITION": POSITION,
                        "NORMAL": NORMAL,
                    },
                    "indices": INDICES,
                    "material": 0,
                    "mode": 4,
                }],
            }],
            "materials": [{
                "name": material.name,
                "pbrMetallicRoughness": {
                    "baseColorFactor": material.base_color,
                    "metallicFactor": material.metallic,
                    "roughnessFactor": material.roughness,
                },
                "doubleSided": material.double_sided,
            }],
            "accessors": self.accessors,
            "bufferViews": self.views,
            "buffers": [{
                "byteLength": self.bin.len(),
            }],
        })
    }
}

/// Export a mesh to a writer as a GLB
///
/// When `center` is set, the node is translated so the bounding box is
/// centered on the origin.
pub fn export<W: Write>(
    writer: W,
    name: &str,
    mesh: &Mesh,
    material: &Material,
    center: bool,
) -> Result<()> {
    let packed = Packed::new(mesh)?;
    let translation = if center {
        let (min, max) = mesh.bounds().ok_or(Error::EmptyMesh)?;
        Some((min + max) * -0.5)
    } else {
        None
    };
    let root_json = packed.json(name, material, translation).to_string();
    glb::write(writer, &root_json, packed.bin())
}
