//! Constants for the scene module
//! Sizes, colours and animation rates of the placeholder meshes.

use bevy::color::Color;
use bevy::math::Vec3;

// =============================================================================
// Orbit Scene
// =============================================================================

/// Planet spin while the orbit view is active (rad/s)
pub const PLANET_SPIN_ORBIT: f32 = 0.05;

/// Planet spin while any other view is active (rad/s)
pub const PLANET_SPIN_IDLE: f32 = 0.01;

pub const PLANET_COLOR: Color = Color::srgb(0.18, 0.22, 0.35);

pub const NODE_MARKER_RADIUS: f32 = 0.06;

pub const NODE_MARKER_COLOR: Color = Color::srgb(0.0, 0.9, 1.0);

pub const SUN_ILLUMINANCE: f32 = 8_000.0;

pub const SUN_POSITION: Vec3 = Vec3::new(8.0, 6.0, 5.0);

// =============================================================================
// Surface Scene
// =============================================================================

pub const GROUND_SIZE: f32 = 60.0;

pub const GROUND_COLOR: Color = Color::srgb(0.12, 0.11, 0.10);

/// Footprint and height of a structure body; it stands on the ground with its centre at the
/// structure position
pub const STRUCTURE_BODY_SIZE: Vec3 = Vec3::new(2.0, 2.0, 2.0);

pub const POLYMER_PLANT_COLOR: Color = Color::srgb(0.85, 0.45, 0.15);

pub const ROBOTICS_WORKSHOP_COLOR: Color = Color::srgb(0.55, 0.60, 0.70);

pub const AEROPONIC_FARM_COLOR: Color = Color::srgb(0.25, 0.75, 0.35);

/// How far a selected structure rises above its resting height
pub const SELECTED_LIFT: f32 = 0.4;

/// Smoothing rate of the selection lift (per second)
pub const LIFT_SMOOTHING_RATE: f32 = 4.0;
