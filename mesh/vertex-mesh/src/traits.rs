//! Traits describing what force laws need from a tissue mesh.

use nalgebra::SVector;

use crate::{Node, VertexElement};

/// Read access to the topology and geometry of a vertex-model tissue.
///
/// This is the narrow interface through which force laws see a mesh:
/// node lookup with boundary flags and containing elements, element lookup
/// with cyclic node order, and edge-length gradients.
pub trait TissueTopology<const D: usize> {
    /// Get the number of nodes.
    fn node_count(&self) -> usize;

    /// Get a node by index.
    ///
    /// Returns `None` if the index is out of bounds.
    fn node(&self, index: usize) -> Option<&Node<D>>;

    /// Get the number of elements.
    fn element_count(&self) -> usize;

    /// Get an element by index.
    ///
    /// Returns `None` if the index is out of bounds.
    fn element(&self, index: usize) -> Option<&VertexElement>;

    /// Gradient of the length of the edge leaving `local_index` in an element.
    ///
    /// The edge runs from the node at `local_index` to its cyclic successor;
    /// the gradient is taken with respect to the position of the node at
    /// `local_index`. Returns `None` if either index is out of range.
    fn next_edge_gradient(&self, element_index: usize, local_index: usize)
    -> Option<SVector<f64, D>>;

    /// Whether every element lists its nodes with the same rotational sense.
    ///
    /// Boundary tracing follows successor nodes only and relies on this.
    fn has_consistent_winding(&self) -> bool;

    /// Check if the node at `index` exists and is a boundary node.
    fn is_boundary_node(&self, index: usize) -> bool {
        self.node(index).is_some_and(Node::is_boundary)
    }

    /// Count the boundary nodes.
    fn boundary_node_count(&self) -> usize {
        (0..self.node_count())
            .filter(|&i| self.is_boundary_node(i))
            .count()
    }
}

/// Write access to per-node applied forces.
pub trait ForceSink<const D: usize> {
    /// Add a force to the node's accumulated applied force.
    ///
    /// Returns `false` if the node does not exist.
    fn add_applied_force(&mut self, node_index: usize, force: &SVector<f64, D>) -> bool;
}
