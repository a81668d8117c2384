use bevy::prelude::*;

/// Per-frame ordering: pointer and keys feed transitions, transitions settle, the camera rig reads
/// the settled state, then the `NavigationMode` mirror catches up.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum NavigationSet {
    UserInput,
    StateUpdates,
    CameraRig,
    ModeSync,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                NavigationSet::UserInput,
                NavigationSet::StateUpdates,
                NavigationSet::CameraRig,
                NavigationSet::ModeSync,
            )
                .chain(),
        );
    }
}
