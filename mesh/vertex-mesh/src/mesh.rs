//! Vertex mesh with polygonal elements.

use hashbrown::HashMap;
use nalgebra::SVector;
use tracing::{debug, info, warn};

use crate::{EdgeAdjacency, ForceSink, MeshError, MeshResult, Node, TissueTopology, VertexElement};

/// A planar vertex-model tissue mesh.
///
/// Cells are simple polygons sharing nodes. The mesh derives, for every
/// node, the set of elements containing it and whether it is a boundary
/// node (touched by an edge that only one element uses).
///
/// # Winding Order
///
/// Elements must be **counter-clockwise** in the x/y plane. This is checked
/// once in [`VertexMesh::from_parts`]; boundary tracing depends on it.
///
/// # Example
///
/// ```
/// use vertex_mesh::{TissueTopology, Vector2, VertexMesh};
///
/// let positions = vec![
///     Vector2::new(0.0, 0.0),
///     Vector2::new(1.0, 0.0),
///     Vector2::new(1.0, 1.0),
///     Vector2::new(0.0, 1.0),
/// ];
/// let mesh = VertexMesh::from_parts(positions, vec![vec![0, 1, 2, 3]]).unwrap();
///
/// assert_eq!(mesh.node_count(), 4);
/// assert_eq!(mesh.boundary_node_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct VertexMesh<const D: usize> {
    nodes: Vec<Node<D>>,
    elements: Vec<VertexElement>,
}

impl<const D: usize> VertexMesh<D> {
    /// Build a mesh from node positions and element node lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is empty, an element has fewer than three
    /// nodes, repeats a node or references a missing one, an element is not
    /// counter-clockwise, or `D < 2`.
    pub fn from_parts(
        positions: Vec<SVector<f64, D>>,
        elements: Vec<Vec<usize>>,
    ) -> MeshResult<Self> {
        if D < 2 {
            return Err(MeshError::UnsupportedDimension { dimension: D });
        }
        if positions.is_empty() || elements.is_empty() {
            return Err(MeshError::EmptyMesh);
        }

        let node_count = positions.len();
        let elements: Vec<VertexElement> = elements
            .into_iter()
            .enumerate()
            .map(|(index, nodes)| VertexElement::new(index, nodes))
            .collect();
        for element in &elements {
            validate_element(element, node_count)?;
        }

        let nodes = positions
            .into_iter()
            .enumerate()
            .map(|(index, position)| Node::new(index, position, false))
            .collect();

        let mut mesh = Self { nodes, elements };
        mesh.rebuild_topology();
        mesh.check_winding()?;

        debug!(
            "Built vertex mesh: {} nodes, {} elements, {} boundary nodes",
            mesh.nodes.len(),
            mesh.elements.len(),
            mesh.boundary_node_count()
        );

        Ok(mesh)
    }

    /// All nodes, in index order.
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[Node<D>] {
        &self.nodes
    }

    /// All elements, in index order.
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[VertexElement] {
        &self.elements
    }

    /// Override the boundary flag of one node.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidNodeIndex`] if the node does not exist.
    pub fn set_boundary_node(&mut self, index: usize, boundary: bool) -> MeshResult<()> {
        let node_count = self.nodes.len();
        let node = self
            .nodes
            .get_mut(index)
            .ok_or(MeshError::invalid_node(index, node_count))?;
        node.set_boundary(boundary);
        Ok(())
    }

    /// Replace every boundary flag, e.g. with flags read from an input file.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::FlagCountMismatch`] if `flags` does not have one
    /// entry per node.
    pub fn set_boundary_flags(&mut self, flags: &[bool]) -> MeshResult<()> {
        if flags.len() != self.nodes.len() {
            return Err(MeshError::FlagCountMismatch {
                expected: self.nodes.len(),
                actual: flags.len(),
            });
        }

        let changed = self
            .nodes
            .iter()
            .zip(flags)
            .filter(|(node, flag)| node.is_boundary() != **flag)
            .count();
        if changed > 0 {
            warn!("{changed} boundary flags differ from the edge-derived classification");
        }

        for (node, &flag) in self.nodes.iter_mut().zip(flags) {
            node.set_boundary(flag);
        }
        Ok(())
    }

    /// Move a node by a displacement.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidNodeIndex`] if the node does not exist.
    pub fn move_node(&mut self, index: usize, displacement: &SVector<f64, D>) -> MeshResult<()> {
        let node_count = self.nodes.len();
        let node = self
            .nodes
            .get_mut(index)
            .ok_or(MeshError::invalid_node(index, node_count))?;
        node.translate(displacement);
        Ok(())
    }

    /// Reset every node's applied force to zero.
    pub fn reset_applied_forces(&mut self) {
        for node in &mut self.nodes {
            node.clear_applied_force();
        }
    }

    /// Signed area of an element's projection onto the x/y plane.
    ///
    /// Positive for counter-clockwise elements.
    #[must_use]
    pub fn signed_area(&self, element_index: usize) -> Option<f64> {
        let element = self.elements.get(element_index)?;
        let mut twice_area = 0.0;
        for (a, b) in element.edges() {
            let pa = self.nodes.get(a)?.position();
            let pb = self.nodes.get(b)?.position();
            twice_area += pa[0] * pb[1] - pb[0] * pa[1];
        }
        Some(0.5 * twice_area)
    }

    /// Mean position of an element's nodes.
    #[must_use]
    pub fn element_centroid(&self, element_index: usize) -> Option<SVector<f64, D>> {
        let element = self.elements.get(element_index)?;
        let mut sum = SVector::<f64, D>::zeros();
        for &n in element.nodes() {
            sum += self.nodes.get(n)?.position();
        }
        #[allow(clippy::cast_precision_loss)]
        let count = element.node_count() as f64;
        Some(sum / count)
    }

    /// Mean of all element centroids.
    #[must_use]
    pub fn centroid(&self) -> Option<SVector<f64, D>> {
        if self.elements.is_empty() {
            return None;
        }
        let mut sum = SVector::<f64, D>::zeros();
        for element in &self.elements {
            sum += self.element_centroid(element.index())?;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = self.elements.len() as f64;
        Some(sum / count)
    }

    /// Length of the edge leaving `local_index` in an element.
    #[must_use]
    pub fn edge_length(&self, element_index: usize, local_index: usize) -> Option<f64> {
        let (this, next) = self.edge_positions(element_index, local_index)?;
        Some((this - next).norm())
    }

    /// Perimeter of an element.
    #[must_use]
    pub fn element_perimeter(&self, element_index: usize) -> Option<f64> {
        let element = self.elements.get(element_index)?;
        (0..element.node_count())
            .map(|local| self.edge_length(element_index, local))
            .sum()
    }

    /// Build a new mesh without the elements matching `remove`.
    ///
    /// Nodes no longer used by any element are dropped and the remaining
    /// nodes and elements are renumbered in their original order. Boundary
    /// flags are recomputed, so removing a patch of elements opens a hole
    /// whose rim becomes a new boundary loop.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::EmptyMesh`] if every element is removed.
    pub fn without_elements(&self, remove: impl Fn(&VertexElement) -> bool) -> MeshResult<Self> {
        let kept: Vec<&VertexElement> = self.elements.iter().filter(|&e| !remove(e)).collect();
        if kept.is_empty() {
            return Err(MeshError::EmptyMesh);
        }

        // Compact node list in original order
        let mut referenced = vec![false; self.nodes.len()];
        for element in &kept {
            for &n in element.nodes() {
                referenced[n] = true;
            }
        }
        let mut remap: HashMap<usize, usize> = HashMap::new();
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for (old_index, node) in self.nodes.iter().enumerate() {
            if referenced[old_index] {
                let mut node = node.clone();
                node.set_index(nodes.len());
                remap.insert(old_index, nodes.len());
                nodes.push(node);
            }
        }

        let elements = kept
            .into_iter()
            .enumerate()
            .map(|(new_index, element)| {
                let mut element = element.clone();
                element.set_index(new_index);
                element.remap_nodes(|n| remap.get(&n).copied().unwrap_or(n));
                element
            })
            .collect::<Vec<_>>();

        info!(
            "Removed {} elements and {} nodes",
            self.elements.len() - elements.len(),
            self.nodes.len() - nodes.len()
        );

        let mut mesh = Self { nodes, elements };
        mesh.rebuild_topology();
        Ok(mesh)
    }

    /// Build a new mesh without the elements whose centroid lies strictly
    /// within `radius` of `center`.
    ///
    /// This is how a circular wound is cut into a tissue.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::EmptyMesh`] if every element is removed.
    pub fn without_elements_within(
        &self,
        center: &SVector<f64, D>,
        radius: f64,
    ) -> MeshResult<Self> {
        self.without_elements(|element| {
            self.element_centroid(element.index())
                .is_some_and(|c| (c - center).norm() < radius)
        })
    }

    fn edge_positions(
        &self,
        element_index: usize,
        local_index: usize,
    ) -> Option<(&SVector<f64, D>, &SVector<f64, D>)> {
        let element = self.elements.get(element_index)?;
        let this = element.node_at(local_index)?;
        let next = element.node_at(element.next_local(local_index))?;
        Some((
            self.nodes.get(this)?.position(),
            self.nodes.get(next)?.position(),
        ))
    }

    fn rebuild_topology(&mut self) {
        for node in &mut self.nodes {
            node.clear_containing_elements();
        }
        for element in &self.elements {
            for &n in element.nodes() {
                if let Some(node) = self.nodes.get_mut(n) {
                    node.add_containing_element(element.index());
                }
            }
        }

        let boundary = EdgeAdjacency::build(&self.elements).boundary_nodes();
        for node in &mut self.nodes {
            let on_boundary = boundary.contains(&node.index());
            node.set_boundary(on_boundary);
        }
    }

    fn check_winding(&self) -> MeshResult<()> {
        for element in &self.elements {
            let signed_area = self.signed_area(element.index()).unwrap_or(0.0);
            if signed_area <= 0.0 {
                return Err(MeshError::InconsistentWinding {
                    element: element.index(),
                    signed_area,
                });
            }
        }
        Ok(())
    }
}

fn validate_element(element: &VertexElement, node_count: usize) -> MeshResult<()> {
    if element.node_count() < 3 {
        return Err(MeshError::DegenerateElement {
            element: element.index(),
            node_count: element.node_count(),
        });
    }
    for (local, &n) in element.nodes().iter().enumerate() {
        if n >= node_count {
            return Err(MeshError::invalid_node(n, node_count));
        }
        if element.nodes()[..local].contains(&n) {
            return Err(MeshError::RepeatedNode {
                element: element.index(),
                node: n,
            });
        }
    }
    Ok(())
}

impl<const D: usize> TissueTopology<D> for VertexMesh<D> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, index: usize) -> Option<&Node<D>> {
        self.nodes.get(index)
    }

    fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn element(&self, index: usize) -> Option<&VertexElement> {
        self.elements.get(index)
    }

    fn next_edge_gradient(
        &self,
        element_index: usize,
        local_index: usize,
    ) -> Option<SVector<f64, D>> {
        let (this, next) = self.edge_positions(element_index, local_index)?;
        let delta = this - next;
        let length = delta.norm();
        if length > 0.0 {
            Some(delta / length)
        } else {
            Some(SVector::zeros())
        }
    }

    fn has_consistent_winding(&self) -> bool {
        // Nodes may have moved since construction.
        self.elements
            .iter()
            .all(|e| self.signed_area(e.index()).is_some_and(|area| area > 0.0))
    }
}

impl<const D: usize> ForceSink<D> for VertexMesh<D> {
    fn add_applied_force(&mut self, node_index: usize, force: &SVector<f64, D>) -> bool {
        match self.nodes.get_mut(node_index) {
            Some(node) => {
                node.add_applied_force_contribution(force);
                true
            }
            None => false,
        }
    }
}
