//! The wound healing force law.

use std::fmt;

use tracing::debug;
use vertex_mesh::{ForceSink, TissueTopology};

use crate::error::{WoundError, WoundResult};
use crate::params::WoundParams;
use crate::result::WoundForces;
use crate::select::select_wound_loop;
use crate::tension::accumulate_wound_tension;

/// A force law contributing to the applied forces of a tissue mesh.
///
/// A simulation calls [`ForceLaw::add_force_contribution`] for every force
/// law once per step, after resetting the applied forces.
pub trait ForceLaw<const D: usize> {
    /// Add this law's forces to the mesh's applied forces.
    ///
    /// # Errors
    ///
    /// Returns an error if the forces cannot be evaluated; no forces are
    /// added in that case.
    fn add_force_contribution<M>(&self, mesh: &mut M) -> WoundResult<()>
    where
        M: TissueTopology<D> + ForceSink<D>;

    /// Write this law's parameters for a simulation's parameter file.
    ///
    /// # Errors
    ///
    /// Returns any error from the writer.
    fn output_force_parameters(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// Line tension along the rim of a wound in a vertex-model tissue.
///
/// Every evaluation locates the wound afresh: it traces the two boundary
/// loops of the mesh, picks the wound with the configured rule, and pulls
/// each rim node along the negative gradient of the rim length, scaled by
/// the tension parameter. No state is kept between evaluations, so the
/// mesh may be remeshed freely between steps.
///
/// # Example
///
/// ```
/// use vertex_mesh::generate::quad_grid;
/// use wound_healing::{ForceLaw, WoundHealingForce};
///
/// let sheet = quad_grid(6, 6, 1.0).unwrap();
/// let center = sheet.centroid().unwrap();
/// let mut wounded = sheet.without_elements_within(&center, 1.0).unwrap();
///
/// let mut force = WoundHealingForce::new();
/// force.set_tension_parameter(1.0).unwrap();
/// force.add_force_contribution(&mut wounded).unwrap();
///
/// let pulled = wounded
///     .nodes()
///     .iter()
///     .filter(|n| n.applied_force().norm() > 0.0)
///     .count();
/// assert_eq!(pulled, 4); // the hole corners; straight rim segments balance out
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WoundHealingForce {
    params: WoundParams,
}

impl WoundHealingForce {
    /// Create a force with the default tension of 0.12.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a force from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`WoundError::InvalidParams`] if the parameters are invalid.
    pub fn with_params(params: WoundParams) -> WoundResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Current parameters.
    #[must_use]
    pub const fn params(&self) -> &WoundParams {
        &self.params
    }

    /// Line tension along the wound rim.
    #[must_use]
    pub const fn tension_parameter(&self) -> f64 {
        self.params.tension_parameter
    }

    /// Set the line tension along the wound rim.
    ///
    /// # Errors
    ///
    /// Returns [`WoundError::InvalidParams`] if `tension` is negative or not
    /// finite; the current value is kept.
    pub fn set_tension_parameter(&mut self, tension: f64) -> WoundResult<()> {
        let params = self.params.tension_parameter(tension);
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Locate the wound and compute its line tension forces without applying
    /// them.
    ///
    /// # Errors
    ///
    /// - [`WoundError::InconsistentWinding`] if the mesh cannot guarantee a
    ///   common element winding.
    /// - Any error from locating the wound or computing the forces.
    pub fn compute_forces<const D: usize, M>(&self, mesh: &M) -> WoundResult<WoundForces<D>>
    where
        M: TissueTopology<D> + ?Sized,
    {
        if !mesh.has_consistent_winding() {
            return Err(WoundError::InconsistentWinding);
        }
        let wound = select_wound_loop(mesh, self.params.loop_choice)?;
        let forces = accumulate_wound_tension(mesh, wound, self.params.tension_parameter)?;
        debug!(
            "Wound tension {}: max rim force {:.4e}",
            self.params.tension_parameter,
            forces.max_magnitude()
        );
        Ok(forces)
    }
}

impl<const D: usize> ForceLaw<D> for WoundHealingForce {
    fn add_force_contribution<M>(&self, mesh: &mut M) -> WoundResult<()>
    where
        M: TissueTopology<D> + ForceSink<D>,
    {
        let forces = self.compute_forces(&*mesh)?;
        forces.commit(mesh)
    }

    fn output_force_parameters(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(
            out,
            "\t\t\t<WoundTensionParameter>{}</WoundTensionParameter>",
            self.params.tension_parameter
        )
    }
}
