// error.rs     Error definitions
//
// Copyright (c) 2026  Douglas Lau
//

/// Cairn errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("I/O {0}")]
    Io(#[from] std::io::Error),

    /// Face refers to a vertex which does not exist
    #[error("Invalid vertex: {0}")]
    InvalidVertex(usize),

    /// Vertex index does not fit in an index buffer
    #[error("Too many vertices: {0}")]
    TooManyVertices(usize),

    /// Mesh has no vertices
    #[error("Empty mesh")]
    EmptyMesh,

    /// Chunk too large for GLB container
    #[error("Too large for GLB: {0} bytes")]
    TooLarge(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
