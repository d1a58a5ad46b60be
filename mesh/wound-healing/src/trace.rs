//! Boundary loop tracing.
//!
//! A loop is traced from a boundary node by repeatedly stepping to the
//! successor of the current node in one of its containing elements. The
//! elements are scanned in ascending index order and the first successor that
//! is a boundary node (or the start node, which closes the loop) is taken.
//!
//! Only successors are ever examined. Since all elements share one winding,
//! this walks every rim in a fixed rotational sense: counter-clockwise around
//! the outer edge of the tissue and clockwise around a hole.

use hashbrown::HashSet;
use tracing::{debug, info};
use vertex_mesh::TissueTopology;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{WoundError, WoundResult};

/// An ordered cycle of boundary nodes.
///
/// The last node is followed by the first; the start node is not repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundaryLoop {
    /// Node indices in trace order.
    pub nodes: Vec<usize>,
}

impl BoundaryLoop {
    /// Number of nodes (and edges) in the loop.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the loop has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if a node lies on the loop.
    #[must_use]
    pub fn contains(&self, node: usize) -> bool {
        self.nodes.contains(&node)
    }

    /// Node the loop was traced from.
    #[must_use]
    pub fn start(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    /// Check if `other` visits the same nodes in the same cyclic order,
    /// possibly starting elsewhere.
    ///
    /// # Example
    ///
    /// ```
    /// use wound_healing::BoundaryLoop;
    ///
    /// let a = BoundaryLoop { nodes: vec![1, 2, 3, 4] };
    /// let b = BoundaryLoop { nodes: vec![3, 4, 1, 2] };
    /// let c = BoundaryLoop { nodes: vec![4, 3, 2, 1] };
    ///
    /// assert!(a.is_rotation_of(&b));
    /// assert!(!a.is_rotation_of(&c));
    /// ```
    #[must_use]
    pub fn is_rotation_of(&self, other: &Self) -> bool {
        let n = self.nodes.len();
        if n != other.nodes.len() {
            return false;
        }
        let Some(&first) = self.nodes.first() else {
            return true;
        };
        let Some(offset) = other.nodes.iter().position(|&node| node == first) else {
            return false;
        };
        self.nodes
            .iter()
            .enumerate()
            .all(|(i, &node)| other.nodes[(i + offset) % n] == node)
    }
}

/// Result of looking for the next node along a rim.
enum Step {
    /// The successor is the start node.
    Closed,
    /// The successor is a new boundary node.
    Advance(usize),
}

/// Trace the boundary loop that contains `start`.
///
/// # Errors
///
/// - [`WoundError::NodeNotFound`] / [`WoundError::NotBoundaryNode`] for a bad
///   start node.
/// - [`WoundError::MalformedBoundary`] if some node has no boundary successor,
///   the trace revisits a node other than the start, or it grows past the
///   number of boundary nodes in the mesh.
/// - [`WoundError::DegenerateLoop`] if the loop has fewer than two nodes.
/// - [`WoundError::ElementNotFound`] / [`WoundError::NodeNotInElement`] if the
///   mesh's containing-element sets are inconsistent.
///
/// # Example
///
/// ```
/// use vertex_mesh::generate::quad_grid;
/// use wound_healing::trace_boundary_loop;
///
/// // The rim of a 2x2 grid, counter-clockwise from the corner
/// let mesh = quad_grid(2, 2, 1.0).unwrap();
/// let rim = trace_boundary_loop(&mesh, 0).unwrap();
/// assert_eq!(rim.nodes, vec![0, 1, 2, 5, 8, 7, 6, 3]);
/// ```
pub fn trace_boundary_loop<const D: usize, M>(mesh: &M, start: usize) -> WoundResult<BoundaryLoop>
where
    M: TissueTopology<D> + ?Sized,
{
    let start_node = mesh
        .node(start)
        .ok_or(WoundError::NodeNotFound { index: start })?;
    if !start_node.is_boundary() {
        return Err(WoundError::NotBoundaryNode { node: start });
    }

    let limit = mesh.boundary_node_count();
    let mut nodes = vec![start];
    let mut visited: HashSet<usize> = HashSet::new();
    visited.insert(start);
    let mut current = start;

    loop {
        match next_step(mesh, current, start)? {
            Step::Closed => break,
            Step::Advance(next) => {
                if !visited.insert(next) {
                    return Err(WoundError::malformed(
                        start,
                        next,
                        "trace revisited a node without returning to the start",
                    ));
                }
                // The visited set already bounds a consistent mesh; this
                // catches a topology whose boundary count is too low.
                if nodes.len() >= limit {
                    return Err(WoundError::malformed(
                        start,
                        next,
                        format!("trace exceeded the {limit} boundary nodes of the mesh"),
                    ));
                }
                nodes.push(next);
                current = next;
            }
        }
    }

    if nodes.len() < 2 {
        return Err(WoundError::DegenerateLoop {
            start,
            length: nodes.len(),
        });
    }

    debug!("Traced boundary loop from node {}: {} nodes", start, nodes.len());
    Ok(BoundaryLoop { nodes })
}

/// Trace every boundary loop of the mesh.
///
/// Loops are started from the lowest-indexed boundary node not yet on a
/// traced loop, so the result is ordered by each loop's smallest node.
///
/// # Errors
///
/// Propagates any error from [`trace_boundary_loop`].
pub fn find_boundary_loops<const D: usize, M>(mesh: &M) -> WoundResult<Vec<BoundaryLoop>>
where
    M: TissueTopology<D> + ?Sized,
{
    let mut traced: HashSet<usize> = HashSet::new();
    let mut loops = Vec::new();

    for index in 0..mesh.node_count() {
        if !mesh.is_boundary_node(index) || traced.contains(&index) {
            continue;
        }
        let boundary = trace_boundary_loop(mesh, index)?;
        traced.extend(boundary.nodes.iter().copied());
        loops.push(boundary);
    }

    info!(
        "Found {} boundary loops, sizes: {:?}",
        loops.len(),
        loops.iter().map(BoundaryLoop::len).collect::<Vec<_>>()
    );

    Ok(loops)
}

/// Find the node following `current` along its rim.
fn next_step<const D: usize, M>(mesh: &M, current: usize, start: usize) -> WoundResult<Step>
where
    M: TissueTopology<D> + ?Sized,
{
    let node = mesh
        .node(current)
        .ok_or(WoundError::NodeNotFound { index: current })?;

    for element_index in node.containing_element_indices() {
        let successor = successor_in_element(mesh, element_index, current)?;
        if successor == start {
            return Ok(Step::Closed);
        }
        if mesh.is_boundary_node(successor) {
            return Ok(Step::Advance(successor));
        }
    }

    Err(WoundError::malformed(
        start,
        current,
        "no containing element has a boundary successor",
    ))
}

/// Global index of the node after `node` in an element's cyclic order.
pub(crate) fn successor_in_element<const D: usize, M>(
    mesh: &M,
    element_index: usize,
    node: usize,
) -> WoundResult<usize>
where
    M: TissueTopology<D> + ?Sized,
{
    let element = mesh
        .element(element_index)
        .ok_or(WoundError::ElementNotFound {
            index: element_index,
        })?;
    let local = element
        .local_index_of(node)
        .ok_or(WoundError::NodeNotInElement {
            node,
            element: element_index,
        })?;
    element
        .node_at(element.next_local(local))
        .ok_or(WoundError::NodeNotInElement {
            node,
            element: element_index,
        })
}
