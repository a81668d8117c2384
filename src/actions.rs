use std::marker::PhantomData;

use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use crate::navigation::Navigation;
use crate::state::NavigationMode;

pub struct ActionsPlugin;

impl Plugin for ActionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EnhancedInputPlugin)
            .add_input_context::<NavigationKeys>()
            .add_systems(Startup, spawn_navigation_keys);

        add_command::<Back>(app, NavigationCommand::Back);
        add_command::<NextTarget>(app, NavigationCommand::Next);
        add_command::<PreviousTarget>(app, NavigationCommand::Previous);
        add_command::<FirstMoon>(app, NavigationCommand::FocusMoon(0));
        add_command::<SecondMoon>(app, NavigationCommand::FocusMoon(1));
        add_command::<ThirdMoon>(app, NavigationCommand::FocusMoon(2));

        add_toggle::<CameraInspector>(app);
        add_toggle::<PointerInspector>(app);
    }
}

/// Input context for every keyboard shortcut
#[derive(Component, Debug)]
pub struct NavigationKeys;

#[derive(InputAction)]
#[action_output(bool)]
pub struct Back;

#[derive(InputAction)]
#[action_output(bool)]
pub struct NextTarget;

#[derive(InputAction)]
#[action_output(bool)]
pub struct PreviousTarget;

#[derive(InputAction)]
#[action_output(bool)]
pub struct FirstMoon;

#[derive(InputAction)]
#[action_output(bool)]
pub struct SecondMoon;

#[derive(InputAction)]
#[action_output(bool)]
pub struct ThirdMoon;

#[derive(InputAction)]
#[action_output(bool)]
pub struct CameraInspector;

#[derive(InputAction)]
#[action_output(bool)]
pub struct PointerInspector;

fn spawn_navigation_keys(mut commands: Commands) {
    commands.spawn((
        Name::new("NavigationKeys"),
        NavigationKeys,
        actions!(NavigationKeys[
            (Action::<Back>::new(), bindings![KeyCode::Escape]),
            (Action::<NextTarget>::new(), bindings![KeyCode::ArrowRight]),
            (Action::<PreviousTarget>::new(), bindings![KeyCode::ArrowLeft]),
            (Action::<FirstMoon>::new(), bindings![KeyCode::Digit1]),
            (Action::<SecondMoon>::new(), bindings![KeyCode::Digit2]),
            (Action::<ThirdMoon>::new(), bindings![KeyCode::Digit3]),
            (Action::<CameraInspector>::new(), bindings![KeyCode::F1]),
            (Action::<PointerInspector>::new(), bindings![KeyCode::F2]),
        ]),
    ));
}

/// What a navigation shortcut asks for; its effect depends on the current mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationCommand {
    /// leave the surface or the moon view
    Back,
    /// next structure on the surface, next moon in moon view
    Next,
    /// previous structure on the surface, previous moon in moon view
    Previous,
    /// jump to a moon from orbit
    FocusMoon(usize),
}

impl NavigationCommand {
    pub fn apply(self, navigation: &mut Navigation) {
        match (navigation.mode(), self) {
            (NavigationMode::Orbit, Self::FocusMoon(index)) => navigation.focus_moon(index),
            (NavigationMode::Surface, Self::Back) => navigation.exit_surface(),
            (NavigationMode::Surface, Self::Next) => navigation.next_structure(),
            (NavigationMode::Surface, Self::Previous) => navigation.prev_structure(),
            (NavigationMode::Moon, Self::Back) => navigation.exit_moon(),
            (NavigationMode::Moon, Self::Next) => navigation.next_moon(),
            (NavigationMode::Moon, Self::Previous) => navigation.prev_moon(),
            (mode, command) => debug!("{command:?} ignored in {mode:?}"),
        }
    }
}

fn add_command<A: InputAction>(app: &mut App, command: NavigationCommand) {
    app.add_observer(move |_: On<Start<A>>, mut navigation: ResMut<Navigation>| {
        command.apply(&mut navigation);
    });
}

/// Flips each time action `A` starts
#[derive(Resource, Debug)]
pub struct ActionToggle<A> {
    flipped: bool,
    action:  PhantomData<fn() -> A>,
}

impl<A> Default for ActionToggle<A> {
    fn default() -> Self {
        Self {
            flipped: false,
            action:  PhantomData,
        }
    }
}

impl<A> ActionToggle<A> {
    pub const fn flip(&mut self) { self.flipped = !self.flipped; }

    pub const fn is_active(&self, default: bool) -> bool { default != self.flipped }
}

fn add_toggle<A: InputAction>(app: &mut App) {
    app.init_resource::<ActionToggle<A>>()
        .add_observer(|_: On<Start<A>>, mut toggle: ResMut<ActionToggle<A>>| toggle.flip());
}

/// Run condition that starts at `default` and flips every time action `A` starts
pub fn toggle_active<A: InputAction>(
    default: bool,
) -> impl FnMut(Option<Res<ActionToggle<A>>>) -> bool + Clone {
    move |toggle: Option<Res<ActionToggle<A>>>| {
        toggle.map_or(default, |toggle| toggle.is_active(default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::test_navigation;

    fn run(mut navigation: Navigation, command: NavigationCommand) -> Navigation {
        command.apply(&mut navigation);
        navigation
    }

    #[test]
    fn test_digit_focuses_moon_from_orbit() {
        let navigation = run(test_navigation(), NavigationCommand::FocusMoon(2));
        assert_eq!(navigation.mode(), NavigationMode::Moon);
        assert_eq!(navigation.selected_moon_index(), Some(2));
    }

    #[test]
    fn test_back_leaves_surface() {
        let mut navigation = test_navigation();
        navigation.select_node(0);
        navigation.enter_surface();

        let navigation = run(navigation, NavigationCommand::Back);
        assert_eq!(navigation.mode(), NavigationMode::Orbit);
        assert!(navigation.selected_node().is_none());
    }

    #[test]
    fn test_steps_structures_and_moons() {
        let mut surface = test_navigation();
        surface.select_node(0);
        surface.enter_surface();
        assert_eq!(
            run(surface, NavigationCommand::Previous).focused_structure_index(),
            2
        );

        let mut moon = test_navigation();
        moon.focus_moon(0);
        assert_eq!(
            run(moon, NavigationCommand::Next).selected_moon_index(),
            Some(1)
        );
    }

    #[test]
    fn test_commands_ignored_during_transition() {
        let mut navigation = test_navigation();
        navigation.select_node(1);
        let navigation = run(navigation, NavigationCommand::Back);
        assert_eq!(navigation.mode(), NavigationMode::Transition);
        assert_eq!(
            navigation.selected_node().map(|node| node.id.as_str()),
            Some("node-1")
        );
    }

    #[test]
    fn test_moon_digit_ignored_on_surface() {
        let mut navigation = test_navigation();
        navigation.select_node(0);
        navigation.enter_surface();
        let navigation = run(navigation, NavigationCommand::FocusMoon(1));
        assert_eq!(navigation.mode(), NavigationMode::Surface);
        assert!(navigation.selected_moon_index().is_none());
    }

    #[test]
    fn test_toggle_flips_from_default() {
        let mut toggle = ActionToggle::<CameraInspector>::default();
        assert!(!toggle.is_active(false));
        assert!(toggle.is_active(true));

        toggle.flip();
        assert!(toggle.is_active(false));
        assert!(!toggle.is_active(true));

        toggle.flip();
        assert!(!toggle.is_active(false));
    }
}
