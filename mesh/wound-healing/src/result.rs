//! Result types for a wound tension evaluation.

use nalgebra::SVector;
use vertex_mesh::{ForceSink, TissueTopology};

use crate::error::{WoundError, WoundResult};
use crate::trace::BoundaryLoop;

/// Line tension force computed for one wound rim node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeForce<const D: usize> {
    /// Node index.
    pub node: usize,
    /// Force to add to the node.
    pub force: SVector<f64, D>,
}

/// Forces computed for the wound rim, not yet applied to the mesh.
///
/// Computing and applying are separate so that a failed evaluation never
/// leaves the mesh with a partial set of forces.
#[derive(Debug, Clone)]
pub struct WoundForces<const D: usize> {
    /// The boundary loop chosen as the wound rim.
    pub wound: BoundaryLoop,
    /// One entry per rim node, in loop order.
    pub contributions: Vec<NodeForce<D>>,
}

impl<const D: usize> WoundForces<D> {
    /// Force computed for a node, or `None` if it is not on the rim.
    #[must_use]
    pub fn force_on(&self, node: usize) -> Option<&SVector<f64, D>> {
        self.contributions
            .iter()
            .find(|c| c.node == node)
            .map(|c| &c.force)
    }

    /// Sum of all rim forces.
    #[must_use]
    pub fn total_force(&self) -> SVector<f64, D> {
        self.contributions
            .iter()
            .fold(SVector::zeros(), |acc, c| acc + c.force)
    }

    /// Largest force magnitude on the rim.
    #[must_use]
    pub fn max_magnitude(&self) -> f64 {
        self.contributions
            .iter()
            .map(|c| c.force.norm())
            .fold(0.0, f64::max)
    }

    /// Add every rim force to the mesh.
    ///
    /// All nodes are checked before any force is added.
    ///
    /// # Errors
    ///
    /// Returns [`WoundError::NodeNotFound`] if a rim node is missing from the
    /// mesh; nothing is applied in that case.
    pub fn commit<M>(&self, mesh: &mut M) -> WoundResult<()>
    where
        M: TissueTopology<D> + ForceSink<D> + ?Sized,
    {
        if let Some(missing) = self
            .contributions
            .iter()
            .find(|c| mesh.node(c.node).is_none())
        {
            return Err(WoundError::NodeNotFound {
                index: missing.node,
            });
        }

        for contribution in &self.contributions {
            if !mesh.add_applied_force(contribution.node, &contribution.force) {
                return Err(WoundError::NodeNotFound {
                    index: contribution.node,
                });
            }
        }
        Ok(())
    }
}

impl<const D: usize> std::fmt::Display for WoundForces<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Wound Line Tension:")?;
        writeln!(f, "  Rim nodes: {}", self.wound.len())?;
        writeln!(f, "  Max force: {:.4}", self.max_magnitude())?;
        writeln!(f, "  Net force: {:.4}", self.total_force().norm())?;
        Ok(())
    }
}
