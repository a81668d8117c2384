use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use super::constants::*;
use crate::actions::PointerInspector;
use crate::actions::toggle_active;

pub struct PointerConfigPlugin;

impl Plugin for PointerConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<PointerConfig>::default()
                .run_if(toggle_active::<PointerInspector>(false)),
        )
        .init_resource::<PointerConfig>();
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct PointerConfig {
    #[inspector(min = 0.001, max = 0.02, display = NumberDisplay::Slider)]
    pub drag_sensitivity:  f32,
    #[inspector(min = 0.0, max = 0.5, display = NumberDisplay::Slider)]
    pub orbit_phi_margin:  f32,
    #[inspector(min = 0.0, max = 1.5, display = NumberDisplay::Slider)]
    pub moon_theta_limit:  f32,
    #[inspector(min = 0.0, max = 1.5, display = NumberDisplay::Slider)]
    pub moon_phi_limit:    f32,
    /// pixels
    #[inspector(min = 10.0, max = 200.0, display = NumberDisplay::Slider)]
    pub swipe_threshold:   f32,
    #[inspector(min = 0.0, max = 0.2, display = NumberDisplay::Slider)]
    pub swipe_offset_gain: f32,
    /// pixels
    #[inspector(min = 0.0, max = 20.0, display = NumberDisplay::Slider)]
    pub tap_tolerance:     f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity:  DRAG_SENSITIVITY,
            orbit_phi_margin:  ORBIT_PHI_MARGIN,
            moon_theta_limit:  MOON_THETA_LIMIT,
            moon_phi_limit:    MOON_PHI_LIMIT,
            swipe_threshold:   SWIPE_THRESHOLD,
            swipe_offset_gain: SWIPE_OFFSET_GAIN,
            tap_tolerance:     TAP_TOLERANCE,
        }
    }
}
