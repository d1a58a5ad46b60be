//! Planar vertex-model tissue meshes.
//!
//! In a vertex model each cell is a polygon and neighbouring cells share
//! nodes and edges. This crate provides:
//!
//! - [`Node`] - A shared vertex with boundary flag, containing elements and
//!   accumulated applied force
//! - [`VertexElement`] - A polygonal cell as a cyclic list of node indices
//! - [`VertexMesh`] - The mesh, with boundary classification and edge gradients
//! - [`TissueTopology`] / [`ForceSink`] - The interface force laws work against
//!
//! # Winding Order
//!
//! Elements are **counter-clockwise** in the x/y plane. Positions may carry
//! more than two coordinates, but topology is always planar.
//!
//! # Example
//!
//! ```
//! use vertex_mesh::{TissueTopology, generate::quad_grid};
//!
//! // A 6x6 sheet of square cells with the four central cells removed
//! let sheet = quad_grid(6, 6, 1.0).unwrap();
//! let center = sheet.centroid().unwrap();
//! let wounded = sheet.without_elements_within(&center, 1.0).unwrap();
//!
//! assert_eq!(wounded.element_count(), 32);
//! assert_eq!(wounded.boundary_node_count(), 32);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adjacency;
mod element;
mod error;
pub mod generate;
mod mesh;
mod node;
mod traits;

pub use adjacency::EdgeAdjacency;
pub use element::VertexElement;
pub use error::{MeshError, MeshResult};
pub use mesh::VertexMesh;
pub use node::Node;
pub use traits::{ForceSink, TissueTopology};

// Re-export nalgebra types for convenience
pub use nalgebra::{SVector, Vector2, Vector3};
