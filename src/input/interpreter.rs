use std::f32::consts::PI;

use bevy::prelude::*;

use super::config::PointerConfig;
use super::constants::INITIAL_ORBIT_PHI;
use crate::navigation::Navigation;
use crate::state::NavigationMode;

/// Mouse and each touch id are separate pointers
#[derive(Reflect, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch(u64),
}

/// Azimuth (`theta`) and polar/elevation (`phi`) view angles in radians
#[derive(Reflect, Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewAngles {
    pub theta: f32,
    pub phi:   f32,
}

#[derive(Reflect, Clone, Copy, Debug)]
struct Gesture {
    source: PointerSource,
    mode:   NavigationMode,
    origin: Vec2,
    last:   Vec2,
    travel: f32,
}

/// Turns raw pointer samples into navigation effects based on the mode a gesture started in.
///
/// Owns the accumulated orbit and moon view angles that the camera rig reads each frame.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct PointerInterpreter {
    gesture:      Option<Gesture>,
    orbit:        ViewAngles,
    moon:         ViewAngles,
    tracked_moon: Option<usize>,
}

impl Default for PointerInterpreter {
    fn default() -> Self {
        Self {
            gesture:      None,
            orbit:        ViewAngles {
                theta: 0.0,
                phi:   INITIAL_ORBIT_PHI,
            },
            moon:         ViewAngles::default(),
            tracked_moon: None,
        }
    }
}

impl PointerInterpreter {
    pub const fn orbit_angles(&self) -> ViewAngles { self.orbit }

    pub const fn moon_angles(&self) -> ViewAngles { self.moon }

    pub const fn is_dragging(&self) -> bool { self.gesture.is_some() }

    /// Latest position of the gesture owned by `source`
    pub fn gesture_position(&self, source: PointerSource) -> Option<Vec2> {
        self.gesture
            .filter(|gesture| gesture.source == source)
            .map(|gesture| gesture.last)
    }

    pub fn pointer_down(&mut self, mode: NavigationMode, source: PointerSource, position: Vec2) {
        if self.gesture.is_some() || mode == NavigationMode::Transition {
            return;
        }
        self.gesture = Some(Gesture {
            source,
            mode,
            origin: position,
            last: position,
            travel: 0.0,
        });
    }

    pub fn pointer_move(
        &mut self,
        navigation: &mut Navigation,
        config: &PointerConfig,
        source: PointerSource,
        position: Vec2,
    ) {
        let Some(gesture) = self
            .gesture
            .as_mut()
            .filter(|gesture| gesture.source == source)
        else {
            return;
        };

        let delta = position - gesture.last;
        gesture.last = position;
        gesture.travel = gesture.travel.max(position.distance(gesture.origin));
        let (mode, origin) = (gesture.mode, gesture.origin);

        if navigation.mode() != mode {
            return;
        }

        match mode {
            NavigationMode::Orbit => {
                self.orbit.theta = delta
                    .x
                    .mul_add(-config.drag_sensitivity, self.orbit.theta);
                self.orbit.phi = delta
                    .y
                    .mul_add(-config.drag_sensitivity, self.orbit.phi)
                    .clamp(config.orbit_phi_margin, PI - config.orbit_phi_margin);
            },
            NavigationMode::Moon => {
                self.moon.theta = delta
                    .x
                    .mul_add(-config.drag_sensitivity, self.moon.theta)
                    .clamp(-config.moon_theta_limit, config.moon_theta_limit);
                self.moon.phi = delta
                    .y
                    .mul_add(-config.drag_sensitivity, self.moon.phi)
                    .clamp(-config.moon_phi_limit, config.moon_phi_limit);
            },
            NavigationMode::Surface => {
                navigation.set_navigation_offset((origin.x - position.x) * config.swipe_offset_gain);
            },
            NavigationMode::Transition => {},
        }
    }

    /// Ends the gesture owned by `source`. Returns the release position when it was a tap in a
    /// mode that supports picking.
    pub fn pointer_up(
        &mut self,
        navigation: &mut Navigation,
        config: &PointerConfig,
        source: PointerSource,
        position: Vec2,
    ) -> Option<Vec2> {
        let gesture = self.gesture.filter(|gesture| gesture.source == source)?;
        self.gesture = None;

        if gesture.mode == NavigationMode::Surface {
            navigation.set_navigation_offset(0.0);
        }
        if navigation.mode() != gesture.mode {
            return None;
        }

        let swipe = gesture.origin.x - position.x;
        let is_swipe = swipe.abs() > config.swipe_threshold;
        match gesture.mode {
            NavigationMode::Surface if is_swipe => {
                debug!("surface swipe {swipe:.0}px");
                if swipe > 0.0 {
                    navigation.next_structure();
                } else {
                    navigation.prev_structure();
                }
            },
            NavigationMode::Moon if is_swipe => {
                debug!("moon swipe {swipe:.0}px");
                if swipe > 0.0 {
                    navigation.next_moon();
                } else {
                    navigation.prev_moon();
                }
            },
            _ => {},
        }

        let travel = gesture.travel.max(position.distance(gesture.origin));
        let pickable = matches!(
            gesture.mode,
            NavigationMode::Orbit | NavigationMode::Surface
        );
        (pickable && travel <= config.tap_tolerance).then_some(position)
    }

    /// A cancelled pointer ends its gesture without committing anything
    pub fn pointer_cancel(&mut self, navigation: &mut Navigation, source: PointerSource) {
        let Some(gesture) = self.gesture.filter(|gesture| gesture.source == source) else {
            return;
        };
        self.gesture = None;
        if gesture.mode == NavigationMode::Surface {
            navigation.set_navigation_offset(0.0);
        }
    }

    /// Moon look-around resets whenever a different moon becomes selected
    pub fn observe_selected_moon(&mut self, selected_moon: Option<usize>) {
        if self.tracked_moon != selected_moon {
            self.tracked_moon = selected_moon;
            self.moon = ViewAngles::default();
        }
    }
}
