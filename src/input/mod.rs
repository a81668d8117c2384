mod config;
mod constants;
mod interpreter;
mod pick;
mod pointer;

use bevy::prelude::*;
use config::PointerConfigPlugin;
pub use interpreter::PointerInterpreter;
pub use interpreter::ViewAngles;
use pick::PointerTap;

use crate::schedule::NavigationSet;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PointerConfigPlugin)
            .init_resource::<PointerInterpreter>()
            .add_message::<PointerTap>()
            .add_systems(
                Update,
                (
                    pointer::read_mouse,
                    pointer::read_touches,
                    pick::select_tapped_target,
                )
                    .chain()
                    .in_set(NavigationSet::UserInput),
            )
            .add_systems(
                Update,
                pointer::track_selected_moon.in_set(NavigationSet::StateUpdates),
            );
    }
}
