use std::f32::consts::PI;
use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use super::config::PlacementConfig;
use super::stats::generate_stats_for_kind;
use super::types::Node;
use super::types::Structure;
use super::types::StructureKind;
use crate::traits::PlanarExt;
use crate::traits::SphericalExt;

/// A candidate position accepted by [`sample_separated`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position:  Vec3,
    pub attempts:  usize,
    /// false when the attempt budget ran out and the last candidate was taken anyway
    pub separated: bool,
}

/// Rejection sampling with a retry budget.
///
/// Draws candidates until `is_clear` accepts one or `attempt_budget` draws have been made, in
/// which case the last candidate is returned with `separated == false`. Never fails.
pub fn sample_separated<R: Rng>(
    rng: &mut R,
    attempt_budget: usize,
    mut sample: impl FnMut(&mut R) -> Vec3,
    is_clear: impl Fn(Vec3) -> bool,
) -> Placement {
    let budget = attempt_budget.max(1);
    let mut attempts = 1;
    let mut position = sample(rng);

    loop {
        if is_clear(position) {
            return Placement {
                position,
                attempts,
                separated: true,
            };
        }
        if attempts >= budget {
            return Placement {
                position,
                attempts,
                separated: false,
            };
        }
        position = sample(rng);
        attempts += 1;
    }
}

/// Uniform in azimuth and polar angle, so points cluster toward the poles (not area-uniform)
fn sample_node_position(radius: f32, rng: &mut impl Rng) -> Vec3 {
    let azimuth = rng.random::<f32>() * TAU;
    let polar = rng.random::<f32>() * PI;
    Vec3::from_polar_z(radius, polar, azimuth)
}

fn sample_structure_position(spawn_range: f32, height: f32, rng: &mut impl Rng) -> Vec3 {
    let x = (rng.random::<f32>() - 0.5) * spawn_range;
    let z = (rng.random::<f32>() - 0.5) * spawn_range;
    Vec3::new(x, height, z)
}

pub fn place_nodes(config: &PlacementConfig, rng: &mut impl Rng) -> Vec<Placement> {
    let mut accepted: Vec<Placement> = Vec::with_capacity(config.node_count);

    for index in 0..config.node_count {
        let placement = sample_separated(
            rng,
            config.node_attempts,
            |rng| sample_node_position(config.sphere_radius, rng),
            |candidate| {
                accepted
                    .iter()
                    .all(|placed| placed.position.distance(candidate) >= config.min_node_distance)
            },
        );
        if !placement.separated {
            debug!(
                "node {index}: no clear spot after {} attempts, keeping closest miss",
                placement.attempts
            );
        }
        accepted.push(placement);
    }

    accepted
}

pub fn place_structures(config: &PlacementConfig, rng: &mut impl Rng) -> Vec<Placement> {
    let min = config.structures_min.min(config.structures_max);
    let max = config.structures_min.max(config.structures_max);
    let count = rng.random_range(min..=max);

    let mut accepted: Vec<Placement> = Vec::with_capacity(count);
    for _ in 0..count {
        let placement = sample_separated(
            rng,
            config.structure_attempts,
            |rng| {
                sample_structure_position(
                    config.structure_spawn_range,
                    config.structure_height,
                    rng,
                )
            },
            |candidate| {
                accepted.iter().all(|placed| {
                    placed.position.planar_distance(candidate) >= config.min_structure_distance
                })
            },
        );
        accepted.push(placement);
    }

    accepted
}

/// Generates the full node layout, each node carrying 2-4 structures with fresh stats
pub fn generate_nodes(config: &PlacementConfig, rng: &mut impl Rng) -> Vec<Node> {
    let node_placements = place_nodes(config, rng);

    node_placements
        .into_iter()
        .enumerate()
        .map(|(node_index, node_placement)| {
            let structures = place_structures(config, rng)
                .into_iter()
                .enumerate()
                .map(|(structure_index, placement)| {
                    let kind = StructureKind::ALL[rng.random_range(0..StructureKind::ALL.len())];
                    Structure {
                        id: format!("{}-{node_index}-{structure_index}", kind.slug()),
                        kind,
                        position: placement.position,
                        stats: generate_stats_for_kind(kind, rng),
                    }
                })
                .collect();

            Node {
                id: format!("node-{node_index}"),
                position: node_placement.position,
                structures,
            }
        })
        .collect()
}
