//! Generators for simple vertex meshes.

use nalgebra::Vector2;

use crate::{MeshError, MeshResult, VertexMesh};

/// Generate a rectangular grid of `nx` by `ny` square elements.
///
/// Node `(i, j)` has index `j * (nx + 1) + i` and sits at
/// `(i * spacing, j * spacing)`. Element `(i, j)` has index `j * nx + i`
/// and is wound counter-clockwise.
///
/// # Errors
///
/// Returns [`MeshError::EmptyMesh`] if either dimension is zero.
///
/// # Example
///
/// ```
/// use vertex_mesh::{TissueTopology, generate::quad_grid};
///
/// let mesh = quad_grid(3, 2, 1.0).unwrap();
/// assert_eq!(mesh.node_count(), 12);
/// assert_eq!(mesh.element_count(), 6);
/// assert_eq!(mesh.boundary_node_count(), 10);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn quad_grid(nx: usize, ny: usize, spacing: f64) -> MeshResult<VertexMesh<2>> {
    if nx == 0 || ny == 0 {
        return Err(MeshError::EmptyMesh);
    }

    let row = nx + 1;
    let mut positions = Vec::with_capacity(row * (ny + 1));
    for j in 0..=ny {
        for i in 0..=nx {
            positions.push(Vector2::new(i as f64 * spacing, j as f64 * spacing));
        }
    }

    let mut elements = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            let a = j * row + i;
            elements.push(vec![a, a + 1, a + 1 + row, a + row]);
        }
    }

    VertexMesh::from_parts(positions, elements)
}
