// lib.rs      cairn crate.
//
// Copyright (c) 2026  Douglas Lau
//
mod asset;
mod error;
mod glb;
pub mod gltf;
mod material;
pub mod mesh;
pub mod shape;

pub use asset::Asset;
pub use error::{Error, Result};
pub use material::{Material, METALLIC, ROUGHNESS};
pub use mesh::{Face, Mesh, MeshBuilder, Vertex};
pub use shape::Shape;
