//! Meshes shared by the unit tests.

use hashbrown::{HashMap, HashSet};
use std::f64::consts::PI;
use vertex_mesh::generate::quad_grid;
use vertex_mesh::{Node, SVector, TissueTopology, Vector2, VertexElement, VertexMesh};

/// A 6x6 grid of unit squares with the four central squares removed.
///
/// Outer rim: 24 nodes. Hole rim: 8 nodes.
pub fn grid_with_hole() -> VertexMesh<2> {
    let grid = quad_grid(6, 6, 1.0).unwrap();
    let center = grid.centroid().unwrap();
    grid.without_elements_within(&center, 1.0).unwrap()
}

/// A hexagonal hole inside an octagonal sheet.
///
/// Nodes 0..8 form the outer octagon (radius 3), nodes 8..14 an interior
/// hexagon (radius 2) and nodes 14..20 the hole rim (radius 1). Elements
/// 0..6 are quads around the hole; elements 6 and 7 are the upper and lower
/// halves of the outer annulus.
pub fn hexagon_in_octagon() -> VertexMesh<2> {
    let ring = |count: usize, radius: f64| {
        (0..count).map(move |k| {
            #[allow(clippy::cast_precision_loss)]
            let angle = 2.0 * PI * k as f64 / count as f64;
            Vector2::new(radius * angle.cos(), radius * angle.sin())
        })
    };
    let positions: Vec<_> = ring(8, 3.0).chain(ring(6, 2.0)).chain(ring(6, 1.0)).collect();

    let outer = |j: usize| j % 8;
    let middle = |k: usize| 8 + k % 6;
    let hole = |k: usize| 14 + k % 6;

    let mut elements: Vec<Vec<usize>> = (0..6)
        .map(|k| vec![hole(k), middle(k), middle(k + 1), hole(k + 1)])
        .collect();
    elements.push(vec![
        middle(0),
        outer(0),
        outer(1),
        outer(2),
        outer(3),
        outer(4),
        middle(3),
        middle(2),
        middle(1),
    ]);
    elements.push(vec![
        middle(3),
        outer(4),
        outer(5),
        outer(6),
        outer(7),
        outer(0),
        middle(0),
        middle(5),
        middle(4),
    ]);

    VertexMesh::from_parts(positions, elements).unwrap()
}

/// A mesh given purely by topology, with prescribed edge gradients.
#[derive(Debug, Default)]
pub struct StubMesh {
    pub nodes: Vec<Node<2>>,
    pub elements: Vec<VertexElement>,
    pub gradients: HashMap<(usize, usize), SVector<f64, 2>>,
    pub undefined_gradients: HashSet<(usize, usize)>,
    pub reported_boundary_count: Option<usize>,
}

impl StubMesh {
    /// Build from boundary flags and element node lists.
    pub fn new(boundary: &[bool], elements: &[&[usize]]) -> Self {
        let mut nodes: Vec<Node<2>> = boundary
            .iter()
            .enumerate()
            .map(|(i, &b)| Node::new(i, Vector2::zeros(), b))
            .collect();
        let elements: Vec<VertexElement> = elements
            .iter()
            .enumerate()
            .map(|(i, nodes)| VertexElement::new(i, nodes.to_vec()))
            .collect();
        for element in &elements {
            for &n in element.nodes() {
                nodes[n].add_containing_element(element.index());
            }
        }
        Self {
            nodes,
            elements,
            gradients: HashMap::new(),
            undefined_gradients: HashSet::new(),
            reported_boundary_count: None,
        }
    }

    pub fn with_gradient(mut self, element: usize, local: usize, gradient: Vector2<f64>) -> Self {
        self.gradients.insert((element, local), gradient);
        self
    }

    /// Make `next_edge_gradient` report no gradient for one edge.
    pub fn without_gradient(mut self, element: usize, local: usize) -> Self {
        self.undefined_gradients.insert((element, local));
        self
    }
}

impl TissueTopology<2> for StubMesh {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, index: usize) -> Option<&Node<2>> {
        self.nodes.get(index)
    }

    fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn element(&self, index: usize) -> Option<&VertexElement> {
        self.elements.get(index)
    }

    fn next_edge_gradient(&self, element_index: usize, local_index: usize) -> Option<Vector2<f64>> {
        self.element(element_index)?.node_at(local_index)?;
        if self.undefined_gradients.contains(&(element_index, local_index)) {
            return None;
        }
        Some(
            self.gradients
                .get(&(element_index, local_index))
                .copied()
                .unwrap_or_else(Vector2::zeros),
        )
    }

    fn has_consistent_winding(&self) -> bool {
        true
    }

    fn boundary_node_count(&self) -> usize {
        self.reported_boundary_count.unwrap_or_else(|| {
            self.nodes.iter().filter(|n| n.is_boundary()).count()
        })
    }
}
