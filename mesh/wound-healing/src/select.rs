//! Choosing which boundary loop is the wound.

use hashbrown::HashSet;
use tracing::{info, warn};
use vertex_mesh::TissueTopology;

use crate::error::{WoundError, WoundResult};
use crate::params::{LoopChoice, LoopPick};
use crate::trace::{BoundaryLoop, trace_boundary_loop};

/// Trace the two boundary loops of a wounded tissue and pick the wound.
///
/// The first loop is traced from the lowest-indexed boundary node, the second
/// from the lowest-indexed boundary node not on the first. `choice` then
/// decides between them from their node counts; with
/// [`shorter_loop`](crate::shorter_loop) the smaller loop wins and ties go to
/// the first.
///
/// Boundary nodes on neither loop (a mesh with more than two loops) are
/// ignored; a warning is logged.
///
/// # Errors
///
/// - [`WoundError::InsufficientBoundaryLoops`] if the mesh has no boundary
///   nodes, or every boundary node lies on the first loop.
/// - Any error from [`trace_boundary_loop`].
///
/// # Example
///
/// ```
/// use vertex_mesh::generate::quad_grid;
/// use wound_healing::{select_wound_loop, shorter_loop};
///
/// let sheet = quad_grid(6, 6, 1.0).unwrap();
/// let center = sheet.centroid().unwrap();
/// let wounded = sheet.without_elements_within(&center, 1.0).unwrap();
///
/// let wound = select_wound_loop(&wounded, shorter_loop).unwrap();
/// assert_eq!(wound.len(), 8);
/// ```
pub fn select_wound_loop<const D: usize, M>(mesh: &M, choice: LoopChoice) -> WoundResult<BoundaryLoop>
where
    M: TissueTopology<D> + ?Sized,
{
    let node_count = mesh.node_count();

    let first_start = (0..node_count)
        .find(|&i| mesh.is_boundary_node(i))
        .ok_or(WoundError::InsufficientBoundaryLoops { found: 0 })?;
    let first = trace_boundary_loop(mesh, first_start)?;

    let second_start = (0..node_count)
        .find(|&i| mesh.is_boundary_node(i) && !first.contains(i))
        .ok_or(WoundError::InsufficientBoundaryLoops { found: 1 })?;
    let second = trace_boundary_loop(mesh, second_start)?;

    let traced: HashSet<usize> = first.nodes.iter().chain(&second.nodes).copied().collect();
    let untraced = (0..node_count)
        .filter(|&i| mesh.is_boundary_node(i) && !traced.contains(&i))
        .count();
    if untraced > 0 {
        warn!("{untraced} boundary nodes lie on neither traced loop; extra loops are ignored");
    }

    let pick = choice(first.len(), second.len());
    let wound = match pick {
        LoopPick::First => first,
        LoopPick::Second => second,
    };

    info!(
        "Selected {:?} boundary loop as wound: {} nodes starting at node {:?}",
        pick,
        wound.len(),
        wound.start()
    );

    Ok(wound)
}
