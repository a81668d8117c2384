mod advisory;
mod constants;
mod state_machine;
mod telemetry;

use bevy::prelude::*;
pub use state_machine::Navigation;
pub use telemetry::StructureTelemetry;

use crate::schedule::NavigationSet;

pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Navigation>()
            .add_message::<StructureTelemetry>()
            .add_systems(
                Update,
                (tick_transition_advisory, telemetry::apply_structure_telemetry)
                    .in_set(NavigationSet::StateUpdates),
            );
    }
}

fn tick_transition_advisory(time: Res<Time>, mut navigation: ResMut<Navigation>) {
    navigation.tick_advisory(time.delta());
}

#[cfg(test)]
pub(crate) use state_machine::tests::test_navigation;
