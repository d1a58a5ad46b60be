//! Error types for vertex mesh construction.

use thiserror::Error;

/// Result type for vertex mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while building or editing a vertex mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Mesh has no nodes or no elements.
    #[error("mesh is empty")]
    EmptyMesh,

    /// An element references a node that does not exist.
    #[error("invalid node index {index} (mesh has {node_count} nodes)")]
    InvalidNodeIndex {
        /// The invalid index.
        index: usize,
        /// Total number of nodes in the mesh.
        node_count: usize,
    },

    /// An element has fewer than three nodes.
    #[error("element {element} has {node_count} nodes, need at least 3")]
    DegenerateElement {
        /// Element index.
        element: usize,
        /// Number of nodes in the element.
        node_count: usize,
    },

    /// An element lists the same node more than once.
    #[error("element {element} lists node {node} more than once")]
    RepeatedNode {
        /// Element index.
        element: usize,
        /// The repeated node index.
        node: usize,
    },

    /// An element is not wound counter-clockwise in the x/y plane.
    #[error("element {element} is not counter-clockwise (signed area {signed_area})")]
    InconsistentWinding {
        /// Element index.
        element: usize,
        /// Signed area of the element's x/y projection.
        signed_area: f64,
    },

    /// The node positions have fewer than two coordinates.
    #[error("planar vertex meshes need at least 2 dimensions, got {dimension}")]
    UnsupportedDimension {
        /// Dimension of the node positions.
        dimension: usize,
    },

    /// A boundary flag list does not match the node count.
    #[error("expected {expected} boundary flags, got {actual}")]
    FlagCountMismatch {
        /// Number of nodes in the mesh.
        expected: usize,
        /// Number of flags provided.
        actual: usize,
    },
}

impl MeshError {
    /// Create an invalid node index error.
    #[must_use]
    pub const fn invalid_node(index: usize, node_count: usize) -> Self {
        Self::InvalidNodeIndex { index, node_count }
    }
}
