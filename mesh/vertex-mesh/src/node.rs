//! Mesh nodes.

use std::collections::BTreeSet;

use nalgebra::SVector;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node (vertex) of a vertex-model tissue mesh.
///
/// Nodes are shared between the polygonal elements (cells) that meet at
/// them. Each node knows which elements contain it, whether it lies on a
/// boundary of the tissue, and accumulates the applied force that force laws
/// contribute during a simulation step.
///
/// Containing element indices are kept in a sorted set so that every
/// traversal over them visits elements in ascending index order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node<const D: usize> {
    index: usize,
    position: SVector<f64, D>,
    boundary: bool,
    containing_elements: BTreeSet<usize>,
    applied_force: SVector<f64, D>,
}

impl<const D: usize> Node<D> {
    /// Create a node with no containing elements and zero applied force.
    ///
    /// # Example
    ///
    /// ```
    /// use vertex_mesh::{Node, Vector2};
    ///
    /// let node = Node::new(3, Vector2::new(1.0, 2.0), true);
    /// assert_eq!(node.index(), 3);
    /// assert!(node.is_boundary());
    /// assert_eq!(node.containing_element_count(), 0);
    /// ```
    #[must_use]
    pub fn new(index: usize, position: SVector<f64, D>, boundary: bool) -> Self {
        Self {
            index,
            position,
            boundary,
            containing_elements: BTreeSet::new(),
            applied_force: SVector::zeros(),
        }
    }

    /// Global index of this node.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current position.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> &SVector<f64, D> {
        &self.position
    }

    /// Whether this node lies on a boundary of the tissue.
    #[inline]
    #[must_use]
    pub const fn is_boundary(&self) -> bool {
        self.boundary
    }

    /// Set the boundary flag.
    pub fn set_boundary(&mut self, boundary: bool) {
        self.boundary = boundary;
    }

    /// Indices of the elements containing this node, in ascending order.
    pub fn containing_element_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.containing_elements.iter().copied()
    }

    /// Number of elements containing this node.
    #[must_use]
    pub fn containing_element_count(&self) -> usize {
        self.containing_elements.len()
    }

    /// Record that the element with the given index contains this node.
    pub fn add_containing_element(&mut self, element_index: usize) {
        self.containing_elements.insert(element_index);
    }

    /// Force accumulated on this node during the current step.
    #[inline]
    #[must_use]
    pub const fn applied_force(&self) -> &SVector<f64, D> {
        &self.applied_force
    }

    /// Add a force contribution to the accumulated applied force.
    pub fn add_applied_force_contribution(&mut self, force: &SVector<f64, D>) {
        self.applied_force += force;
    }

    /// Reset the accumulated applied force to zero.
    pub fn clear_applied_force(&mut self) {
        self.applied_force = SVector::zeros();
    }

    pub(crate) fn translate(&mut self, displacement: &SVector<f64, D>) {
        self.position += displacement;
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) fn clear_containing_elements(&mut self) {
        self.containing_elements.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn new_node_has_zero_force() {
        let node = Node::new(0, Vector2::new(0.5, -1.0), false);
        assert_eq!(*node.applied_force(), Vector2::zeros());
        assert!(!node.is_boundary());
    }

    #[test]
    fn containing_elements_are_sorted() {
        let mut node = Node::new(0, Vector2::zeros(), true);
        node.add_containing_element(7);
        node.add_containing_element(2);
        node.add_containing_element(5);
        node.add_containing_element(2);

        let elements: Vec<usize> = node.containing_element_indices().collect();
        assert_eq!(elements, vec![2, 5, 7]);
    }

    #[test]
    fn applied_force_is_additive() {
        let mut node = Node::new(0, Vector2::zeros(), true);
        node.add_applied_force_contribution(&Vector2::new(1.0, 0.0));
        node.add_applied_force_contribution(&Vector2::new(0.5, 2.0));
        assert_eq!(*node.applied_force(), Vector2::new(1.5, 2.0));

        node.clear_applied_force();
        assert_eq!(*node.applied_force(), Vector2::zeros());
    }
}
