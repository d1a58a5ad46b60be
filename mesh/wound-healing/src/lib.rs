//! Wound line tension for planar vertex-model tissues.
//!
//! When a patch of cells is removed from an epithelial sheet, the cells
//! around the gap assemble a contractile ring that pulls the wound closed.
//! This crate models that ring as an extra line tension along the wound rim:
//!
//! - [`trace_boundary_loop`] - Follow a boundary from one node using only
//!   element-local successor adjacency
//! - [`select_wound_loop`] - Trace the two boundary loops and pick the wound
//! - [`accumulate_wound_tension`] - Per-node edge-gradient forces along the rim
//! - [`apply_wound_tension`] - Accumulate, then add the forces to the mesh
//! - [`WoundHealingForce`] - The force law tying these together each step
//!
//! # Algorithm
//!
//! No geometric test (centroid, winding number) is used to find the wound.
//! Boundary loops are traced purely from node/element adjacency, relying on
//! all elements being wound the same way, and the loop with fewer nodes is
//! taken as the wound. The rule is pluggable via [`LoopChoice`].
//!
//! # Example
//!
//! ```
//! use vertex_mesh::generate::quad_grid;
//! use wound_healing::{ForceLaw, WoundHealingForce, WoundParams};
//!
//! // Cut a wound into a sheet of square cells
//! let sheet = quad_grid(6, 6, 1.0).unwrap();
//! let center = sheet.centroid().unwrap();
//! let mut tissue = sheet.without_elements_within(&center, 1.0).unwrap();
//!
//! // Apply wound line tension for one step
//! let force = WoundHealingForce::with_params(WoundParams::with_tension(0.5)).unwrap();
//! let forces = force.compute_forces(&tissue).unwrap();
//! println!("{forces}");
//! forces.commit(&mut tissue).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
#[cfg(test)]
mod fixtures;
mod force;
mod params;
mod result;
mod select;
mod tension;
mod trace;

pub use error::{WoundError, WoundResult};
pub use force::{ForceLaw, WoundHealingForce};
pub use params::{LoopChoice, LoopPick, WoundParams, longer_loop, shorter_loop};
pub use result::{NodeForce, WoundForces};
pub use select::select_wound_loop;
pub use tension::{accumulate_wound_tension, apply_wound_tension, node_line_tension};
pub use trace::{BoundaryLoop, find_boundary_loops, trace_boundary_loop};
