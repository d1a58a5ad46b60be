//! Wound closure under line tension.
//!
//! Steps a wounded sheet forward with explicit Euler updates driven only by
//! the wound healing force and checks that the wound rim contracts while the
//! rest of the tissue stays put.
//!
//! Run with: cargo test -p wound-healing wound_closure

use vertex_mesh::generate::quad_grid;
use vertex_mesh::{TissueTopology, VertexMesh};
use wound_healing::{BoundaryLoop, ForceLaw, WoundHealingForce, WoundParams};

fn wounded_sheet() -> VertexMesh<2> {
    let sheet = quad_grid(8, 8, 1.0).unwrap();
    let center = sheet.centroid().unwrap();
    sheet.without_elements_within(&center, 1.0).unwrap()
}

fn rim_length(mesh: &VertexMesh<2>, rim: &BoundaryLoop) -> f64 {
    let n = rim.len();
    (0..n)
        .map(|i| {
            let a = mesh.nodes()[rim.nodes[i]].position();
            let b = mesh.nodes()[rim.nodes[(i + 1) % n]].position();
            (a - b).norm()
        })
        .sum()
}

/// One simulation step: reset forces, apply the law, move nodes.
fn step(mesh: &mut VertexMesh<2>, force: &WoundHealingForce, dt: f64) {
    mesh.reset_applied_forces();
    force.add_force_contribution(mesh).unwrap();
    let displacements: Vec<_> = mesh
        .nodes()
        .iter()
        .map(|n| n.applied_force() * dt)
        .collect();
    for (index, displacement) in displacements.iter().enumerate() {
        mesh.move_node(index, displacement).unwrap();
    }
}

#[test]
fn wound_rim_contracts() {
    let mut mesh = wounded_sheet();
    let force = WoundHealingForce::with_params(WoundParams::with_tension(1.0)).unwrap();
    let wound = force.compute_forces(&mesh).unwrap().wound;
    assert_eq!(wound.len(), 8);

    let mut previous = rim_length(&mesh, &wound);
    assert!((previous - 8.0).abs() < 1e-12);

    for _ in 0..10 {
        step(&mut mesh, &force, 0.05);
        let length = rim_length(&mesh, &wound);
        assert!(length < previous, "rim grew from {previous} to {length}");
        previous = length;
    }
    assert!(previous < 8.0);
}

#[test]
fn tissue_away_from_wound_is_untouched() {
    let reference = wounded_sheet();
    let mut mesh = wounded_sheet();
    let force = WoundHealingForce::with_params(WoundParams::with_tension(1.0)).unwrap();
    let wound = force.compute_forces(&mesh).unwrap().wound;

    for _ in 0..5 {
        step(&mut mesh, &force, 0.05);
    }

    for (before, after) in reference.nodes().iter().zip(mesh.nodes()) {
        if !wound.contains(before.index()) {
            assert_eq!(before.position(), after.position());
        }
    }
}

#[test]
fn wound_is_relocated_every_step() {
    let mut mesh = wounded_sheet();
    let force = WoundHealingForce::new();

    let first = force.compute_forces(&mesh).unwrap().wound;
    step(&mut mesh, &force, 0.1);
    let second = force.compute_forces(&mesh).unwrap().wound;

    // Moving nodes does not change which nodes form the rim.
    assert_eq!(first, second);
    assert_eq!(mesh.boundary_node_count(), 32 + 8);
}
