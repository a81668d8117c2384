//! Constants for the input module
//! Pointer gesture tuning and pick radii.

use std::f32::consts::PI;

// =============================================================================
// Drag
// =============================================================================

/// Radians of view rotation per pixel of pointer travel
pub const DRAG_SENSITIVITY: f32 = 0.005;

/// Keeps the orbit polar angle away from the poles so the view never flips
pub const ORBIT_PHI_MARGIN: f32 = 0.1;

/// Polar angle the orbit view starts at
pub const INITIAL_ORBIT_PHI: f32 = PI / 2.5;

/// Horizontal look-around limit around a focused moon (radians)
pub const MOON_THETA_LIMIT: f32 = 1.1;

/// Vertical look-around limit around a focused moon (radians)
pub const MOON_PHI_LIMIT: f32 = 0.6;

// =============================================================================
// Swipe and Tap
// =============================================================================

/// Horizontal travel (px) a release needs to count as a swipe
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Camera pan offset per pixel of an in-progress surface swipe
pub const SWIPE_OFFSET_GAIN: f32 = 0.05;

/// Maximum travel (px) for a release to count as a tap
pub const TAP_TOLERANCE: f32 = 6.0;

// =============================================================================
// Picking
// =============================================================================

/// Hit sphere radius around a node marker
pub const NODE_PICK_RADIUS: f32 = 0.18;

/// Hit sphere radius around a surface structure
pub const STRUCTURE_PICK_RADIUS: f32 = 1.5;
