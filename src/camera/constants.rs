//! Constants for the camera module
//! Orbit radii, smoothing rates and per-mode framing offsets.

use bevy::math::Vec2;
use bevy::math::Vec3;

// =============================================================================
// Orbit
// =============================================================================

/// Orbit camera distance from the planet centre in a landscape window
pub const ORBIT_RADIUS: f32 = 10.0;

/// Orbit camera distance in a portrait window, wide enough to keep the moons in view
pub const PORTRAIT_ORBIT_RADIUS: f32 = 13.0;

/// Orbit position smoothing rate (per second)
pub const ORBIT_SMOOTHING_RATE: f32 = 3.0;

/// Idle drift amplitude, theta then phi (radians)
pub const DRIFT_AMPLITUDE: Vec2 = Vec2::new(0.05, 0.02);

/// Idle drift angular frequency, theta then phi
pub const DRIFT_FREQUENCY: Vec2 = Vec2::new(0.1, 0.07);

// =============================================================================
// Transition, Surface and Moon
// =============================================================================

/// Smoothing rate shared by the transition, surface and moon views (per second)
pub const FOLLOW_SMOOTHING_RATE: f32 = 6.0;

/// Fly-in target is the node position pushed out by this factor
pub const TRANSITION_TARGET_SCALE: f32 = 1.3;

/// The fly-in counts as arrived once the camera is this close to its target
pub const TRANSITION_ARRIVAL_DISTANCE: f32 = 0.3;

/// Base camera offset from the focused structure
pub const SURFACE_OFFSET: Vec3 = Vec3::new(6.0, 1.8, 6.0);

/// Sway amplitude around `SURFACE_OFFSET`; x and y follow a sine, z a cosine
pub const SURFACE_SWAY_AMPLITUDE: Vec3 = Vec3::new(0.8, 0.1, 0.2);

pub const SURFACE_SWAY_FREQUENCY: Vec3 = Vec3::new(0.4, 0.2, 0.3);

/// The surface camera looks this far above the structure base
pub const SURFACE_LOOK_HEIGHT: f32 = 0.6;

/// Camera distance from a focused moon, in moon radii
pub const MOON_DISTANCE_FACTOR: f32 = 5.0;

// =============================================================================
// Transition Warp
// =============================================================================

/// Resting vertical field of view (radians)
pub const BASE_FIELD_OF_VIEW: f32 = std::f32::consts::FRAC_PI_4;

/// Field of view the lens widens to while the transition flag is raised
pub const WARP_FIELD_OF_VIEW: f32 = 1.05;

/// Field of view smoothing rate (per second)
pub const WARP_SMOOTHING_RATE: f32 = 4.0;
