//! Edge usage between elements.
//!
//! An edge used by exactly one element lies on a boundary of the tissue,
//! and both of its end nodes are boundary nodes.

use hashbrown::{HashMap, HashSet};

use crate::VertexElement;

/// Maps each undirected edge to the elements that use it.
#[derive(Debug, Clone)]
pub struct EdgeAdjacency {
    /// Maps edge (v0, v1) to element indices. v0 < v1.
    edge_to_elements: HashMap<(usize, usize), Vec<usize>>,
}

impl EdgeAdjacency {
    /// Build edge usage from a list of elements.
    ///
    /// # Example
    ///
    /// ```
    /// use vertex_mesh::{EdgeAdjacency, VertexElement};
    ///
    /// // Two squares sharing the edge (1, 4)
    /// let elements = vec![
    ///     VertexElement::new(0, vec![0, 1, 4, 3]),
    ///     VertexElement::new(1, vec![1, 2, 5, 4]),
    /// ];
    /// let adj = EdgeAdjacency::build(&elements);
    ///
    /// assert_eq!(adj.edge_count(), 7);
    /// assert_eq!(adj.boundary_edge_count(), 6);
    /// ```
    #[must_use]
    pub fn build(elements: &[VertexElement]) -> Self {
        let mut edge_to_elements: HashMap<(usize, usize), Vec<usize>> = HashMap::new();

        for element in elements {
            for (a, b) in element.edges() {
                edge_to_elements
                    .entry(normalize_edge(a, b))
                    .or_default()
                    .push(element.index());
            }
        }

        Self { edge_to_elements }
    }

    /// Elements using an edge, or `None` if no element has it.
    #[must_use]
    pub fn elements_for_edge(&self, v0: usize, v1: usize) -> Option<&[usize]> {
        self.edge_to_elements
            .get(&normalize_edge(v0, v1))
            .map(Vec::as_slice)
    }

    /// Iterate over all boundary edges (edges used by exactly one element).
    pub fn boundary_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edge_to_elements
            .iter()
            .filter(|(_, elements)| elements.len() == 1)
            .map(|(&edge, _)| edge)
    }

    /// Count the number of boundary edges.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_to_elements
            .values()
            .filter(|elements| elements.len() == 1)
            .count()
    }

    /// Nodes touched by at least one boundary edge.
    #[must_use]
    pub fn boundary_nodes(&self) -> HashSet<usize> {
        self.boundary_edges().flat_map(|(a, b)| [a, b]).collect()
    }

    /// Get the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_to_elements.len()
    }
}

/// Normalize edge direction so v0 < v1.
#[inline]
fn normalize_edge(v0: usize, v1: usize) -> (usize, usize) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_squares() -> Vec<VertexElement> {
        vec![
            VertexElement::new(0, vec![0, 1, 4, 3]),
            VertexElement::new(1, vec![1, 2, 5, 4]),
        ]
    }

    #[test]
    fn shared_edge_has_two_elements() {
        let adj = EdgeAdjacency::build(&two_squares());

        assert_eq!(adj.elements_for_edge(1, 4), Some(&[0, 1][..]));
        assert_eq!(adj.elements_for_edge(4, 1), Some(&[0, 1][..]));
        assert_eq!(adj.elements_for_edge(0, 1), Some(&[0][..]));
        assert!(adj.elements_for_edge(0, 5).is_none());
    }

    #[test]
    fn every_node_of_a_strip_is_boundary() {
        let adj = EdgeAdjacency::build(&two_squares());
        let boundary = adj.boundary_nodes();
        assert_eq!(boundary.len(), 6);
    }

    #[test]
    fn interior_node_is_not_boundary() {
        // Four squares around node 4 of a 3x3 node grid
        let elements = vec![
            VertexElement::new(0, vec![0, 1, 4, 3]),
            VertexElement::new(1, vec![1, 2, 5, 4]),
            VertexElement::new(2, vec![3, 4, 7, 6]),
            VertexElement::new(3, vec![4, 5, 8, 7]),
        ];
        let adj = EdgeAdjacency::build(&elements);
        let boundary = adj.boundary_nodes();

        assert_eq!(boundary.len(), 8);
        assert!(!boundary.contains(&4));
        assert_eq!(adj.boundary_edge_count(), 8);
    }
}
