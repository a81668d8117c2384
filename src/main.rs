//! Orbitnav - orbital view navigation and camera control built with Bevy 0.18
//!
//! Navigate a planet, its moons and the facilities on its surface:
//! - Procedural node and structure placement with minimum-separation rejection sampling
//! - A four-mode navigation state machine (orbit, transition, surface, moon)
//! - Per-mode pointer gestures, keyboard shortcuts and a smoothed camera rig
//! - Bevy Remote Protocol (BRP) support for debugging

mod actions;
mod camera;
mod input;
mod navigation;
mod placement;
mod scene;
mod schedule;
mod state;
mod traits;

use bevy::prelude::*;
#[cfg(not(target_arch = "wasm32"))]
use bevy_brp_extras::BrpExtrasPlugin;
use bevy_inspector_egui::bevy_egui::EguiPlugin;

use crate::actions::ActionsPlugin;
use crate::camera::CameraPlugin;
use crate::input::InputPlugin;
use crate::navigation::NavigationPlugin;
use crate::placement::PlacementPlugin;
use crate::scene::ScenePlugin;
use crate::schedule::SchedulePlugin;
use crate::state::StatePlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "orbitnav".to_string(),
            ..default()
        }),
        ..default()
    }));

    // exclude when targeting wasm - this breaks in the browser right now
    #[cfg(not(target_arch = "wasm32"))]
    app.add_plugins(BrpExtrasPlugin::default());

    app.add_plugins((
        EguiPlugin::default(),
        ActionsPlugin,
        CameraPlugin,
        InputPlugin,
        NavigationPlugin,
        PlacementPlugin,
        ScenePlugin,
        SchedulePlugin,
        StatePlugin,
    ))
    .run();
}
