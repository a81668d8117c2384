use bevy::prelude::*;

use super::constants::*;

/// Tunables for layout generation. Read once at startup.
#[derive(Resource, Reflect, Debug, PartialEq, Clone)]
#[reflect(Resource)]
pub struct PlacementConfig {
    pub node_count:             usize,
    pub sphere_radius:          f32,
    pub min_node_distance:      f32,
    pub node_attempts:          usize,
    pub structures_min:         usize,
    pub structures_max:         usize,
    pub structure_spawn_range:  f32,
    pub structure_height:       f32,
    pub min_structure_distance: f32,
    pub structure_attempts:     usize,
    /// `Some` makes the layout reproducible, `None` draws from the thread rng
    pub seed:                   Option<u64>,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            node_count:             NODE_COUNT,
            sphere_radius:          NODE_SPHERE_RADIUS,
            min_node_distance:      MIN_NODE_DISTANCE,
            node_attempts:          NODE_PLACEMENT_ATTEMPTS,
            structures_min:         STRUCTURES_PER_NODE_MIN,
            structures_max:         STRUCTURES_PER_NODE_MAX,
            structure_spawn_range:  STRUCTURE_SPAWN_RANGE,
            structure_height:       STRUCTURE_HEIGHT,
            min_structure_distance: MIN_STRUCTURE_DISTANCE,
            structure_attempts:     STRUCTURE_PLACEMENT_ATTEMPTS,
            seed:                   None,
        }
    }
}
