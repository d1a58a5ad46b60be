//! Polygonal elements (cells).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygonal element of a vertex mesh.
///
/// The element stores the global indices of its nodes as a cyclic sequence.
/// Elements built by [`VertexMesh`](crate::VertexMesh) are wound
/// counter-clockwise, so walking the sequence forward keeps the element
/// interior on the left.
///
/// # Example
///
/// ```
/// use vertex_mesh::VertexElement;
///
/// let element = VertexElement::new(0, vec![4, 9, 2, 7]);
/// assert_eq!(element.node_count(), 4);
/// assert_eq!(element.local_index_of(2), Some(2));
/// assert_eq!(element.next_local(3), 0);
/// assert_eq!(element.previous_local(0), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexElement {
    index: usize,
    nodes: Vec<usize>,
}

impl VertexElement {
    /// Create an element from its global index and cyclic node list.
    #[must_use]
    pub const fn new(index: usize, nodes: Vec<usize>) -> Self {
        Self { index, nodes }
    }

    /// Global index of this element.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of nodes (and edges) of the polygon.
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Global node indices in cyclic order.
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Global index of the node at a local position.
    ///
    /// Returns `None` if the local index is out of range.
    #[inline]
    #[must_use]
    pub fn node_at(&self, local_index: usize) -> Option<usize> {
        self.nodes.get(local_index).copied()
    }

    /// Local position of a global node index in this element.
    #[must_use]
    pub fn local_index_of(&self, node_index: usize) -> Option<usize> {
        self.nodes.iter().position(|&n| n == node_index)
    }

    /// Local index following `local_index` in cyclic order.
    #[inline]
    #[must_use]
    pub fn next_local(&self, local_index: usize) -> usize {
        (local_index + 1) % self.nodes.len()
    }

    /// Local index preceding `local_index` in cyclic order.
    #[inline]
    #[must_use]
    pub fn previous_local(&self, local_index: usize) -> usize {
        (self.nodes.len() + local_index - 1) % self.nodes.len()
    }

    /// Iterate over the directed edges `(from, to)` of the polygon.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.nodes.len();
        (0..n).map(move |i| (self.nodes[i], self.nodes[(i + 1) % n]))
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) fn remap_nodes(&mut self, remap: impl Fn(usize) -> usize) {
        for node in &mut self.nodes {
            *node = remap(*node);
        }
    }
}
