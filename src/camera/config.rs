use bevy::color::palettes::tailwind;
use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use super::constants::*;
use crate::actions::CameraInspector;
use crate::actions::toggle_active;

pub struct CameraConfigPlugin;

impl Plugin for CameraConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<CameraConfig>::default()
                .run_if(toggle_active::<CameraInspector>(false)),
        )
        .init_resource::<CameraConfig>();
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct CameraConfig {
    pub clear_color:                 Color,
    #[inspector(min = 2.5, max = 30.0, display = NumberDisplay::Slider)]
    pub orbit_radius:                f32,
    #[inspector(min = 2.5, max = 30.0, display = NumberDisplay::Slider)]
    pub portrait_orbit_radius:       f32,
    #[inspector(min = 0.1, max = 20.0, display = NumberDisplay::Slider)]
    pub orbit_smoothing_rate:        f32,
    pub drift_amplitude:             Vec2,
    pub drift_frequency:             Vec2,
    #[inspector(min = 0.1, max = 20.0, display = NumberDisplay::Slider)]
    pub follow_smoothing_rate:       f32,
    #[inspector(min = 1.0, max = 3.0, display = NumberDisplay::Slider)]
    pub transition_target_scale:     f32,
    #[inspector(min = 0.01, max = 2.0, display = NumberDisplay::Slider)]
    pub transition_arrival_distance: f32,
    pub surface_offset:              Vec3,
    pub surface_sway_amplitude:      Vec3,
    pub surface_sway_frequency:      Vec3,
    #[inspector(min = 0.0, max = 3.0, display = NumberDisplay::Slider)]
    pub surface_look_height:         f32,
    #[inspector(min = 1.5, max = 20.0, display = NumberDisplay::Slider)]
    pub moon_distance_factor:        f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            clear_color:                 Color::from(tailwind::SLATE_900),
            orbit_radius:                ORBIT_RADIUS,
            portrait_orbit_radius:       PORTRAIT_ORBIT_RADIUS,
            orbit_smoothing_rate:        ORBIT_SMOOTHING_RATE,
            drift_amplitude:             DRIFT_AMPLITUDE,
            drift_frequency:             DRIFT_FREQUENCY,
            follow_smoothing_rate:       FOLLOW_SMOOTHING_RATE,
            transition_target_scale:     TRANSITION_TARGET_SCALE,
            transition_arrival_distance: TRANSITION_ARRIVAL_DISTANCE,
            surface_offset:              SURFACE_OFFSET,
            surface_sway_amplitude:      SURFACE_SWAY_AMPLITUDE,
            surface_sway_frequency:      SURFACE_SWAY_FREQUENCY,
            surface_look_height:         SURFACE_LOOK_HEIGHT,
            moon_distance_factor:        MOON_DISTANCE_FACTOR,
        }
    }
}

impl CameraConfig {
    pub const fn orbit_radius_for(&self, portrait: bool) -> f32 {
        if portrait {
            self.portrait_orbit_radius
        } else {
            self.orbit_radius
        }
    }

    /// Offset from the focused structure at `elapsed`, before the swipe pan is applied
    pub fn surface_offset_at(&self, elapsed: f32) -> Vec3 {
        let phase = self.surface_sway_frequency * elapsed;
        self.surface_offset
            + self.surface_sway_amplitude * Vec3::new(phase.x.sin(), phase.y.sin(), phase.z.cos())
    }

    /// Idle drift `(theta, phi)` at `elapsed`
    pub fn drift_at(&self, elapsed: f32) -> Vec2 {
        let phase = self.drift_frequency * elapsed;
        self.drift_amplitude * Vec2::new(phase.x.sin(), phase.y.sin())
    }
}
