use bevy::dev_tools::states::*;
use bevy::prelude::*;

use crate::navigation::Navigation;
use crate::schedule::NavigationSet;

pub struct StatePlugin;

impl Plugin for StatePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<NavigationMode>()
            .add_systems(
                Update,
                mirror_navigation_mode.in_set(NavigationSet::ModeSync),
            )
            .add_systems(Update, log_transitions::<NavigationMode>);
    }
}

/// The active navigation view.
///
/// `Navigation` owns the authoritative value; this state is a mirror of it so scene code can hang
/// work off `OnEnter`/`OnExit`/`in_state`. The mirror lags by one frame.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Reflect, States)]
pub enum NavigationMode {
    /// free orbit around the planet, nodes and moons selectable
    #[default]
    Orbit,
    /// automatic fly-in toward a selected node; ends when the camera arrives
    Transition,
    /// ground level among the selected node's structures
    Surface,
    /// close orbit around a selected moon
    Moon,
}

fn mirror_navigation_mode(
    navigation: Res<Navigation>,
    state: Res<State<NavigationMode>>,
    mut next_state: ResMut<NextState<NavigationMode>>,
) {
    let mode = navigation.mode();
    if *state.get() != mode {
        debug!("mirroring navigation mode {mode:?}");
        next_state.set(mode);
    }
}

#[cfg(test)]
mod tests {
    use bevy::state::app::StatesPlugin;

    use super::*;
    use crate::placement::Node;

    fn navigation_with_one_node() -> Navigation {
        Navigation::new(
            vec![Node {
                id:         "node-0".into(),
                position:   Vec3::new(0.0, 0.0, 2.05),
                structures: Vec::new(),
            }],
            Vec::new(),
        )
    }

    #[test]
    fn test_state_follows_navigation_mode() {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<NavigationMode>()
            .insert_resource(navigation_with_one_node())
            .add_systems(Update, mirror_navigation_mode);

        app.update();
        assert_eq!(
            *app.world().resource::<State<NavigationMode>>().get(),
            NavigationMode::Orbit
        );

        app.world_mut().resource_mut::<Navigation>().select_node(0);
        // first update queues the change, the next one applies it
        app.update();
        app.update();
        assert_eq!(
            *app.world().resource::<State<NavigationMode>>().get(),
            NavigationMode::Transition
        );
    }
}
