// mesh.rs      Mesh module
//
// Copyright (c) 2026  Douglas Lau
//
use crate::error::{Error, Result};
use glam::Vec3;

/// Vertex index
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vertex(pub u32);

impl TryFrom<usize> for Vertex {
    type Error = Error;

    fn try_from(v: usize) -> Result<Self> {
        let idx = v.try_into().map_err(|_| Error::TooManyVertices(v))?;
        Ok(Self(idx))
    }
}

/// Triangle face
///
/// Vertices are wound counter-clockwise when viewed from the outside.
///
/// ```text
/// v0______v2
///   \    /
///    \  /
///     \/
///     v1
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    /// Vertex indices
    vtx: [usize; 3],
}

/// Mesh builder
#[derive(Default)]
pub struct MeshBuilder {
    /// Vertex positions
    pos: Vec<Vec3>,

    /// Triangle faces
    faces: Vec<Face>,
}

/// 3D Mesh
#[derive(Debug)]
pub struct Mesh {
    /// Vertex positions
    pos: Vec<Vec3>,

    /// Vertex normals
    norm: Vec<Vec3>,

    /// Vertex indices
    indices: Vec<Vertex>,
}

impl Face {
    /// Create a new face
    ///
    /// Repeated vertices are allowed; such a face has zero area.
    pub fn new(vtx: [usize; 3]) -> Self {
        Self { vtx }
    }

    /// Get the vertex indices
    pub fn vtx(&self) -> [usize; 3] {
        self.vtx
    }
}

impl MeshBuilder {
    /// Create a mesh builder with capacity for N vertices and faces
    pub fn with_capacity(n_vertices: usize, n_faces: usize) -> Self {
        let pos = Vec::with_capacity(n_vertices);
        let faces = Vec::with_capacity(n_faces);
        MeshBuilder { pos, faces }
    }

    /// Get a vertex
    pub fn vertex(&self, idx: usize) -> Vec3 {
        self.pos[idx]
    }

    /// Get the count of vertices
    pub fn vertices(&self) -> usize {
        self.pos.len()
    }

    /// Push a vertex position
    pub fn push_vtx(&mut self, pos: Vec3) -> usize {
        let idx = self.pos.len();
        self.pos.push(pos);
        idx
    }

    /// Push a face
    pub fn push_face(&mut self, face: Face) -> Result<()> {
        let count = self.pos.len();
        if let Some(v) = face.vtx.iter().find(|v| **v >= count) {
            return Err(Error::InvalidVertex(*v));
        }
        self.faces.push(face);
        Ok(())
    }

    /// Build the mesh
    pub fn build(self) -> Result<Mesh> {
        let indices = self.build_indices()?;
        let norm = compute_normals(&self.pos, &self.faces);
        let pos = self.pos;
        tracing::debug!(
            "built mesh: {} vertices, {} faces",
            pos.len(),
            indices.len() / 3
        );
        Ok(Mesh { pos, norm, indices })
    }

    /// Build `Vec` of indices for all faces
    fn build_indices(&self) -> Result<Vec<Vertex>> {
        let mut indices = Vec::with_capacity(self.faces.len() * 3);
        for face in &self.faces {
            for v in face.vtx {
                indices.push(Vertex::try_from(v)?);
            }
        }
        Ok(indices)
    }
}

/// Calculate smooth normals for all vertices
///
/// Each face normal is accumulated onto its three vertices, then the sums
/// are normalized.  Vertices touching only zero-area faces (or no faces)
/// get a zero normal.
pub fn compute_normals(pos: &[Vec3], faces: &[Face]) -> Vec<Vec3> {
    let mut norm = vec![Vec3::ZERO; pos.len()];
    for face in faces {
        let [v0, v1, v2] = face.vtx;
        let trin = (pos[v1] - pos[v0])
            .cross(pos[v2] - pos[v0])
            .normalize_or_zero();
        norm[v0] += trin;
        norm[v1] += trin;
        norm[v2] += trin;
    }
    norm.iter().map(|n| n.normalize_or_zero()).collect()
}

impl Mesh {
    /// Create a new mesh builder
    pub fn builder() -> MeshBuilder {
        MeshBuilder::with_capacity(64, 64)
    }

    /// Get slice of all vertex positions
    pub fn positions(&self) -> &[Vec3] {
        &self.pos[..]
    }

    /// Get slice of all vertex normals
    pub fn normals(&self) -> &[Vec3] {
        &self.norm[..]
    }

    /// Get slice of vertex indices for all triangles
    pub fn indices(&self) -> &[Vertex] {
        &self.indices[..]
    }

    /// Get the count of triangle faces
    pub fn faces(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get minimum and maximum positions
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.pos.first()?;
        Some(
            self.pos
                .iter()
                .fold((first, first), |(min, max), v| (v.min(min), v.max(max))),
        )
    }
}
