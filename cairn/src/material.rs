// material.rs  Material module
//
// Copyright (c) 2026  Douglas Lau
//

/// Default metallic factor
pub const METALLIC: f32 = 0.02;

/// Default roughness factor
pub const ROUGHNESS: f32 = 0.55;

/// Metallic-roughness material
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Material name
    pub name: String,

    /// Base color (linear RGBA)
    pub base_color: [f32; 4],

    /// Metallic factor
    pub metallic: f32,

    /// Roughness factor
    pub roughness: f32,

    /// Render back faces
    pub double_sided: bool,
}

impl Material {
    /// Create a single-sided material with default factors
    pub fn new(name: impl Into<String>, base_color: [f32; 4]) -> Self {
        Material {
            name: name.into(),
            base_color,
            metallic: METALLIC,
            roughness: ROUGHNESS,
            double_sided: false,
        }
    }
}
