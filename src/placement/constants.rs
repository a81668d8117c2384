//! Constants for the placement module
//! Layout sizes, separations and retry budgets for procedural generation.

// =============================================================================
// Node Placement (orbital waypoints on the planet sphere)
// =============================================================================

/// Radius of the planet body. Nodes sit just outside it and it occludes picking.
pub const PLANET_RADIUS: f32 = 2.0;

/// Number of nodes generated on the planet sphere
pub const NODE_COUNT: usize = 8;

/// Radius of the sphere nodes sit on (slightly above the planet surface)
pub const NODE_SPHERE_RADIUS: f32 = 2.05;

/// Hard lower bound on the distance between two nodes
pub const MIN_NODE_DISTANCE: f32 = 1.2;

/// Candidates drawn per node before the last one is accepted regardless
pub const NODE_PLACEMENT_ATTEMPTS: usize = 100;

// =============================================================================
// Structure Placement (ground plane around a node)
// =============================================================================

/// Fewest structures a node can hold
pub const STRUCTURES_PER_NODE_MIN: usize = 2;

/// Most structures a node can hold
pub const STRUCTURES_PER_NODE_MAX: usize = 4;

/// Side length of the square footprint structures are scattered over, centred on the origin
pub const STRUCTURE_SPAWN_RANGE: f32 = 40.0;

/// Fixed height structures stand at
pub const STRUCTURE_HEIGHT: f32 = 1.0;

/// Hard lower bound on the ground-plane distance between two structures of one node
pub const MIN_STRUCTURE_DISTANCE: f32 = 12.0;

/// Candidates drawn per structure before the last one is accepted regardless
pub const STRUCTURE_PLACEMENT_ATTEMPTS: usize = 50;

// =============================================================================
// Stat Thresholds (a uniform draw above the threshold reads "good")
// =============================================================================

pub const YIELD_GOOD_THRESHOLD: f32 = 0.3;
pub const HUMIDITY_GOOD_THRESHOLD: f32 = 0.5;
pub const THERMAL_GOOD_THRESHOLD: f32 = 0.4;
pub const ROBOTICS_ACTIVE_THRESHOLD: f32 = 0.1;
