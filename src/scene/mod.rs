mod constants;
mod orbit;
mod surface;

use bevy::prelude::*;

use crate::state::NavigationMode;

/// Placeholder meshes standing in for the planet, its moons and a node's structures
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        // the layout is generated during `Startup`
        app.add_systems(PostStartup, orbit::spawn_orbit_scene)
            .add_systems(Update, (orbit::spin_planet, orbit::orbit_moons))
            .add_systems(
                Update,
                orbit::show_node_markers.run_if(state_changed::<NavigationMode>),
            )
            .add_systems(
                OnEnter(NavigationMode::Surface),
                (orbit::hide_orbit_scene, surface::spawn_surface_scene),
            )
            .add_systems(
                OnExit(NavigationMode::Surface),
                (orbit::show_orbit_scene, surface::despawn_surface_scene),
            )
            .add_systems(
                Update,
                surface::lift_selected_structure.run_if(in_state(NavigationMode::Surface)),
            );
    }
}
