// shape.rs     Shape module
//
// Copyright (c) 2026  Douglas Lau
//
use crate::error::Result;
use crate::mesh::{Face, Mesh};
use glam::Vec3;
use std::f32::consts::PI;

/// Default cube edge length
pub const CUBE_SIZE: f32 = 1.6;

/// Default pyramid base half-width
pub const PYRAMID_RADIUS: f32 = 1.0;

/// Default pyramid height
pub const PYRAMID_HEIGHT: f32 = 1.6;

/// Default cone base radius
pub const CONE_RADIUS: f32 = 1.0;

/// Default cone height
pub const CONE_HEIGHT: f32 = 1.8;

/// Default cone segments around the base
pub const CONE_SEGMENTS: usize = 32;

/// Solid shape with its parameters
///
/// Parameters are not validated; non-positive values produce degenerate
/// meshes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned cube centered on the origin
    Cube {
        /// Edge length
        size: f32,
    },

    /// Square pyramid with base on the XZ plane
    Pyramid {
        /// Base half-width
        radius: f32,

        /// Apex height
        height: f32,
    },

    /// Cone with base on the XZ plane
    Cone {
        /// Base radius
        radius: f32,

        /// Apex height
        height: f32,

        /// Count of segments around the base
        segments: usize,
    },
}

impl Shape {
    /// Look up a shape by name, with default parameters
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cube" => Some(Shape::Cube { size: CUBE_SIZE }),
            "pyramid" => Some(Shape::Pyramid {
                radius: PYRAMID_RADIUS,
                height: PYRAMID_HEIGHT,
            }),
            "cone" => Some(Shape::Cone {
                radius: CONE_RADIUS,
                height: CONE_HEIGHT,
                segments: CONE_SEGMENTS,
            }),
            _ => None,
        }
    }

    /// Get the shape name
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Cube { .. } => "cube",
            Shape::Pyramid { .. } => "pyramid",
            Shape::Cone { .. } => "cone",
        }
    }

    /// Build a mesh of the shape
    pub fn build(&self) -> Result<Mesh> {
        match *self {
            Shape::Cube { size } => build_cube(size),
            Shape::Pyramid { radius, height } => build_pyramid(radius, height),
            Shape::Cone {
                radius,
                height,
                segments,
            } => build_cone(radius, height, segments),
        }
    }
}

/// Build a cube mesh
pub fn build_cube(size: f32) -> Result<Mesh> {
    let s = size / 2.0;
    let mut builder = Mesh::builder();
    builder.push_vtx(Vec3::new(-s, -s, -s)); // 0 left bottom back
    builder.push_vtx(Vec3::new(s, -s, -s)); // 1 right bottom back
    builder.push_vtx(Vec3::new(s, s, -s)); // 2 right top back
    builder.push_vtx(Vec3::new(-s, s, -s)); // 3 left top back
    builder.push_vtx(Vec3::new(-s, -s, s)); // 4 left bottom front
    builder.push_vtx(Vec3::new(s, -s, s)); // 5 right bottom front
    builder.push_vtx(Vec3::new(s, s, s)); // 6 right top front
    builder.push_vtx(Vec3::new(-s, s, s)); // 7 left top front

    // back
    builder.push_face(Face::new([0, 2, 1]))?;
    builder.push_face(Face::new([0, 3, 2]))?;
    // front
    builder.push_face(Face::new([4, 5, 6]))?;
    builder.push_face(Face::new([4, 6, 7]))?;
    // bottom
    builder.push_face(Face::new([0, 1, 5]))?;
    builder.push_face(Face::new([0, 5, 4]))?;
    // top
    builder.push_face(Face::new([3, 6, 2]))?;
    builder.push_face(Face::new([3, 7, 6]))?;
    // left
    builder.push_face(Face::new([0, 7, 3]))?;
    builder.push_face(Face::new([0, 4, 7]))?;
    // right
    builder.push_face(Face::new([1, 6, 5]))?;
    builder.push_face(Face::new([1, 2, 6]))?;
    builder.build()
}

/// Build a square pyramid mesh
pub fn build_pyramid(radius: f32, height: f32) -> Result<Mesh> {
    let r = radius;
    let mut builder = Mesh::builder();
    builder.push_vtx(Vec3::new(-r, 0.0, -r));
    builder.push_vtx(Vec3::new(r, 0.0, -r));
    builder.push_vtx(Vec3::new(r, 0.0, r));
    builder.push_vtx(Vec3::new(-r, 0.0, r));
    let apex = builder.push_vtx(Vec3::new(0.0, height, 0.0));

    // base, facing down
    builder.push_face(Face::new([0, 1, 2]))?;
    builder.push_face(Face::new([0, 2, 3]))?;
    // sides
    for i in 0..4 {
        let j = (i + 1) % 4;
        builder.push_face(Face::new([i, apex, j]))?;
    }
    builder.build()
}

/// Build a cone mesh
///
/// Perimeter vertices come first, followed by the base center and apex.
pub fn build_cone(radius: f32, height: f32, segments: usize) -> Result<Mesh> {
    let mut builder = Mesh::builder();
    for i in 0..segments {
        let angle = i as f32 / segments as f32 * PI * 2.0;
        let (sin, cos) = angle.sin_cos();
        builder.push_vtx(Vec3::new(radius * cos, 0.0, radius * sin));
    }
    let center = builder.push_vtx(Vec3::ZERO);
    let apex = builder.push_vtx(Vec3::new(0.0, height, 0.0));

    // sides
    for i in 0..segments {
        let j = (i + 1) % segments;
        builder.push_face(Face::new([i, apex, j]))?;
    }
    // base, facing down
    for i in 0..segments {
        let j = (i + 1) % segments;
        builder.push_face(Face::new([i, j, center]))?;
    }
    builder.build()
}

#[cfg(test)]
mod test {
    use super::*;

    /// Check that every face points away from the vertex centroid
    fn assert_outward(mesh: &Mesh) {
        let pos = mesh.positions();
        let centroid = pos.iter().copied().sum::<Vec3>() / pos.len() as f32;
        for tri in mesh.indices().chunks(3) {
            let p: Vec<Vec3> =
                tri.iter().map(|v| pos[v.0 as usize]).collect();
            let norm = (p[1] - p[0]).cross(p[2] - p[0]);
            let mid = (p[0] + p[1] + p[2]) / 3.0;
            assert!(norm.dot(mid - centroid) > 0.0, "inward face: {tri:?}");
        }
    }

    fn assert_indices_in_bounds(mesh: &Mesh) {
        let count = mesh.positions().len();
        for v in mesh.indices() {
            assert!((v.0 as usize) < count);
        }
    }

    fn assert_unit_normals(mesh: &Mesh) {
        assert_eq!(mesh.normals().len(), mesh.positions().len());
        for n in mesh.normals() {
            assert!((n.length() - 1.0).abs() < 1e-5, "normal: {n}");
        }
    }

    #[test]
    fn cube() {
        let mesh = build_cube(1.6).unwrap();
        assert_eq!(mesh.positions().len(), 8);
        assert_eq!(mesh.faces(), 12);
        assert_eq!(mesh.positions()[0], Vec3::new(-0.8, -0.8, -0.8));
        assert_eq!(mesh.positions()[6], Vec3::new(0.8, 0.8, 0.8));
        assert_indices_in_bounds(&mesh);
        assert_unit_normals(&mesh);
        assert_outward(&mesh);
        // corner normals point along the diagonals
        let diag = Vec3::ONE.normalize();
        assert!(mesh.normals()[6].dot(diag) > 0.9);
        assert!(mesh.normals()[0].dot(-diag) > 0.9);
    }

    #[test]
    fn pyramid() {
        let mesh = build_pyramid(1.0, 1.6).unwrap();
        assert_eq!(mesh.positions().len(), 5);
        assert_eq!(mesh.faces(), 6);
        assert_eq!(mesh.positions()[4], Vec3::new(0.0, 1.6, 0.0));
        assert_indices_in_bounds(&mesh);
        assert_unit_normals(&mesh);
        assert_outward(&mesh);
        assert!(mesh.normals()[4].abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn cone() {
        let mesh = build_cone(1.0, 1.8, 4).unwrap();
        assert_eq!(mesh.positions().len(), 6);
        assert_eq!(mesh.faces(), 8);
        assert_eq!(mesh.positions()[4], Vec3::ZERO);
        assert_eq!(mesh.positions()[5], Vec3::new(0.0, 1.8, 0.0));
        assert_eq!(mesh.positions()[0], Vec3::new(1.0, 0.0, 0.0));
        assert_indices_in_bounds(&mesh);
        assert_unit_normals(&mesh);
        assert_outward(&mesh);
        assert!(mesh.normals()[4].abs_diff_eq(Vec3::NEG_Y, 1e-6));
    }

    #[test]
    fn cone_segments() {
        for segments in [3, 8, CONE_SEGMENTS, 100] {
            let mesh = build_cone(1.0, 1.8, segments).unwrap();
            assert_eq!(mesh.positions().len(), segments + 2);
            assert_eq!(mesh.faces(), segments * 2);
            assert_indices_in_bounds(&mesh);
            assert_unit_normals(&mesh);
            assert_outward(&mesh);
        }
    }

    #[test]
    fn cone_degenerate_segments() {
        let mesh = build_cone(1.0, 1.8, 1).unwrap();
        assert_eq!(mesh.positions().len(), 3);
        assert_eq!(mesh.faces(), 2);
        assert_indices_in_bounds(&mesh);
        assert_eq!(mesh.normals(), &[Vec3::ZERO; 3]);

        let mesh = build_cone(1.0, 1.8, 0).unwrap();
        assert_eq!(mesh.positions().len(), 2);
        assert_eq!(mesh.faces(), 0);
        assert_eq!(mesh.normals(), &[Vec3::ZERO; 2]);
    }

    #[test]
    fn bounds() {
        let mesh = build_cube(1.6).unwrap();
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vec3::splat(-0.8));
        assert_eq!(max, Vec3::splat(0.8));
        let mesh = build_cone(1.0, 1.8, CONE_SEGMENTS).unwrap();
        let (min, max) = mesh.bounds().unwrap();
        for p in mesh.positions() {
            assert!(p.cmpge(min).all() && p.cmple(max).all());
        }
        assert_eq!(min.y, 0.0);
        assert_eq!(max.y, 1.8);
        assert_eq!(max.x, 1.0);
        assert_eq!(min.x, -1.0);
    }

    #[test]
    fn lookup() {
        assert_eq!(Shape::from_name("cube"), Some(Shape::Cube { size: 1.6 }));
        assert_eq!(Shape::from_name("sphere"), None);
        for name in ["cube", "pyramid", "cone"] {
            let shape = Shape::from_name(name).unwrap();
            assert_eq!(shape.name(), name);
            assert!(shape.build().unwrap().faces() > 0);
        }
    }
}
