//! Line tension along the wound rim.
//!
//! Each rim node is pulled along the negative gradient of the total length of
//! the rim edges meeting at it. The edges are found element by element: in
//! every element containing the node, the edge to the predecessor counts if
//! the predecessor is a boundary node, and likewise the edge to the successor.

use nalgebra::SVector;
use vertex_mesh::{ForceSink, TissueTopology};

use crate::error::{WoundError, WoundResult};
use crate::result::{NodeForce, WoundForces};
use crate::trace::BoundaryLoop;

/// Line tension force on a single node.
///
/// For each element containing the node, with `prev` and `next` its cyclic
/// neighbours in that element:
///
/// - if `prev` is a boundary node, subtract `tension` times the negated
///   gradient of the edge `prev -> node` (taken at `prev`);
/// - if `next` is a boundary node, subtract `tension` times the gradient of
///   the edge `node -> next` (taken at the node).
///
/// # Errors
///
/// Returns an error if the node or one of its elements cannot be looked up,
/// and [`WoundError::MissingEdgeGradient`] if the mesh has no gradient for a
/// rim edge.
pub fn node_line_tension<const D: usize, M>(
    mesh: &M,
    node_index: usize,
    tension: f64,
) -> WoundResult<SVector<f64, D>>
where
    M: TissueTopology<D> + ?Sized,
{
    let node = mesh
        .node(node_index)
        .ok_or(WoundError::NodeNotFound { index: node_index })?;

    let mut contribution = SVector::<f64, D>::zeros();

    for element_index in node.containing_element_indices() {
        let element = mesh
            .element(element_index)
            .ok_or(WoundError::ElementNotFound {
                index: element_index,
            })?;
        let not_in_element = WoundError::NodeNotInElement {
            node: node_index,
            element: element_index,
        };
        let Some(local_index) = element.local_index_of(node_index) else {
            return Err(not_in_element);
        };

        let previous_local_index = element.previous_local(local_index);
        let next_local_index = element.next_local(local_index);
        let (Some(previous_node), Some(next_node)) = (
            element.node_at(previous_local_index),
            element.node_at(next_local_index),
        ) else {
            return Err(not_in_element);
        };

        if mesh.is_boundary_node(previous_node) {
            let previous_edge_gradient =
                -edge_gradient(mesh, element_index, previous_local_index)?;
            contribution -= previous_edge_gradient * tension;
        }

        if mesh.is_boundary_node(next_node) {
            let next_edge_gradient = edge_gradient(mesh, element_index, local_index)?;
            contribution -= next_edge_gradient * tension;
        }
    }

    Ok(contribution)
}

/// Compute line tension forces for every node of a wound loop.
///
/// Nothing is written to the mesh; apply the result with
/// [`WoundForces::commit`].
///
/// # Errors
///
/// Propagates any error from [`node_line_tension`].
pub fn accumulate_wound_tension<const D: usize, M>(
    mesh: &M,
    wound: BoundaryLoop,
    tension: f64,
) -> WoundResult<WoundForces<D>>
where
    M: TissueTopology<D> + ?Sized,
{
    let contributions = wound
        .nodes
        .iter()
        .map(|&node| {
            node_line_tension(mesh, node, tension).map(|force| NodeForce { node, force })
        })
        .collect::<WoundResult<Vec<_>>>()?;

    Ok(WoundForces {
        wound,
        contributions,
    })
}

/// Compute line tension for a wound loop and add it to the mesh.
///
/// Every rim force is computed before any is applied, so on error the mesh's
/// applied forces are unchanged. Returns the forces that were added.
///
/// # Errors
///
/// Propagates any error from [`accumulate_wound_tension`] or
/// [`WoundForces::commit`].
pub fn apply_wound_tension<const D: usize, M>(
    mesh: &mut M,
    wound: BoundaryLoop,
    tension: f64,
) -> WoundResult<WoundForces<D>>
where
    M: TissueTopology<D> + ForceSink<D> + ?Sized,
{
    let forces = accumulate_wound_tension(&*mesh, wound, tension)?;
    forces.commit(mesh)?;
    Ok(forces)
}

fn edge_gradient<const D: usize, M>(
    mesh: &M,
    element_index: usize,
    local_index: usize,
) -> WoundResult<SVector<f64, D>>
where
    M: TissueTopology<D> + ?Sized,
{
    mesh.next_edge_gradient(element_index, local_index)
        .ok_or(WoundError::MissingEdgeGradient {
            element: element_index,
            local_index,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{StubMesh, hexagon_in_octagon};
    use crate::params::shorter_loop;
    use crate::select::select_wound_loop;
    use approx::assert_relative_eq;
    use vertex_mesh::Vector2;

    /// Node 0 sits in two elements whose successors (1 and 3) are boundary
    /// nodes and whose predecessors (2 and 4) are interior.
    fn two_successor_edges() -> StubMesh {
        StubMesh::new(
            &[true, true, false, true, false],
            &[&[0, 1, 2], &[0, 3, 4]],
        )
        .with_gradient(0, 0, Vector2::new(1.0, 0.0))
        .with_gradient(1, 0, Vector2::new(0.0, 1.0))
    }

    #[test]
    fn successor_edges_are_subtracted() {
        let mesh = two_successor_edges();
        let force = node_line_tension(&mesh, 0, 1.0).unwrap();
        assert_relative_eq!(force, Vector2::new(-1.0, -1.0));
    }

    #[test]
    fn predecessor_edge_is_added() {
        // Node 0's predecessor in element 0 is the boundary node 2; the
        // gradient of edge 2 -> 0 is taken at local index 2.
        let mesh = StubMesh::new(&[true, false, true], &[&[0, 1, 2]])
            .with_gradient(0, 2, Vector2::new(0.5, -2.0));
        let force = node_line_tension(&mesh, 0, 2.0).unwrap();
        assert_relative_eq!(force, Vector2::new(1.0, -4.0));
    }

    #[test]
    fn force_is_linear_in_tension() {
        let mesh = hexagon_in_octagon();
        let wound = select_wound_loop(&mesh, shorter_loop).unwrap();
        let single = accumulate_wound_tension(&mesh, wound.clone(), 0.7).unwrap();
        let double = accumulate_wound_tension(&mesh, wound, 1.4).unwrap();

        for (a, b) in single.contributions.iter().zip(&double.contributions) {
            assert_eq!(a.node, b.node);
            assert_relative_eq!(a.force * 2.0, b.force, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_tension_gives_zero_forces() {
        let mesh = hexagon_in_octagon();
        let wound = select_wound_loop(&mesh, shorter_loop).unwrap();
        let forces = accumulate_wound_tension(&mesh, wound, 0.0).unwrap();

        assert_eq!(forces.contributions.len(), 6);
        for c in &forces.contributions {
            assert_eq!(c.force, Vector2::zeros());
        }
    }

    #[test]
    fn hexagonal_rim_is_pulled_inward() {
        let mesh = hexagon_in_octagon();
        let wound = select_wound_loop(&mesh, shorter_loop).unwrap();
        let forces = accumulate_wound_tension(&mesh, wound, 1.0).unwrap();

        // Node 14 sits at (1, 0) between rim neighbours at 60 degrees either
        // side; the two unit edge gradients sum to (1, 0).
        assert_relative_eq!(
            *forces.force_on(14).unwrap(),
            Vector2::new(-1.0, 0.0),
            epsilon = 1e-9
        );
        for c in &forces.contributions {
            let position = mesh.nodes()[c.node].position();
            assert!(c.force.dot(position) < 0.0);
        }
        assert_relative_eq!(forces.total_force(), Vector2::zeros(), epsilon = 1e-9);
    }

    #[test]
    fn applied_tension_adds_to_rim_nodes() {
        let mut mesh = hexagon_in_octagon();
        let wound = select_wound_loop(&mesh, shorter_loop).unwrap();
        let applied = apply_wound_tension(&mut mesh, wound.clone(), 1.0).unwrap();
        apply_wound_tension(&mut mesh, wound, 1.0).unwrap();

        for c in &applied.contributions {
            assert_relative_eq!(
                *mesh.nodes()[c.node].applied_force(),
                c.force * 2.0,
                epsilon = 1e-12
            );
        }
        assert_eq!(*mesh.nodes()[0].applied_force(), Vector2::zeros());
    }

    #[test]
    fn failed_application_leaves_forces_untouched() {
        let mut mesh = hexagon_in_octagon();
        let wound = BoundaryLoop {
            nodes: vec![14, 19, 42],
        };
        assert!(matches!(
            apply_wound_tension(&mut mesh, wound, 1.0),
            Err(WoundError::NodeNotFound { index: 42 })
        ));
        assert!(mesh.nodes().iter().all(|n| n.applied_force().norm() == 0.0));
    }

    #[test]
    fn missing_gradient_is_reported_per_edge() {
        let mesh = two_successor_edges().without_gradient(1, 0);
        assert!(matches!(
            node_line_tension(&mesh, 0, 1.0),
            Err(WoundError::MissingEdgeGradient {
                element: 1,
                local_index: 0
            })
        ));
    }

    #[test]
    fn stale_element_is_an_error() {
        let mut mesh = two_successor_edges();
        mesh.nodes[0].add_containing_element(9);
        assert!(matches!(
            node_line_tension(&mesh, 0, 1.0),
            Err(WoundError::ElementNotFound { index: 9 })
        ));
    }
}
