use bevy::prelude::*;

use super::config::CameraConfig;
use crate::input::ViewAngles;
use crate::navigation::Navigation;
use crate::state::NavigationMode;
use crate::traits::SphericalExt;

/// Exponential approach toward `target`. The step factor is clamped so a long frame lands on the
/// target instead of overshooting it.
pub fn smooth_toward(current: Vec3, target: Vec3, rate: f32, delta: f32) -> Vec3 {
    current.lerp(target, (rate * delta).clamp(0.0, 1.0))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at:  Vec3,
}

/// Everything outside the navigation state the rig needs for one frame
#[derive(Clone, Copy, Debug)]
pub struct RigFrame {
    pub elapsed:  f32,
    pub delta:    f32,
    pub orbit:    ViewAngles,
    pub moon:     ViewAngles,
    pub dragging: bool,
    pub portrait: bool,
}

/// Smoothed camera state carried from frame to frame
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct CameraRig {
    position:        Vec3,
    look_at:         Vec3,
    /// seeded on the first surface frame, cleared whenever the surface view is left
    surface_look_at: Option<Vec3>,
    /// held while dragging so the view doesn't jump when the drag starts
    drift:           Vec2,
}

impl CameraRig {
    pub const fn new(position: Vec3) -> Self {
        Self {
            position,
            look_at: Vec3::ZERO,
            surface_look_at: None,
            drift: Vec2::ZERO,
        }
    }

    pub const fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            look_at:  self.look_at,
        }
    }

    /// Advances the rig one frame. Returns `None` and leaves the pose untouched when the current
    /// mode is missing the selection it frames.
    ///
    /// In `Transition` this is the only caller of `Navigation::enter_surface`.
    pub fn evaluate(
        &mut self,
        navigation: &mut Navigation,
        config: &CameraConfig,
        frame: &RigFrame,
    ) -> Option<CameraPose> {
        let mode = navigation.mode();
        // reseeded per surface visit rather than held for the camera's lifetime
        if mode != NavigationMode::Surface {
            self.surface_look_at = None;
        }

        match mode {
            NavigationMode::Orbit => self.orbit(config, frame),
            NavigationMode::Transition => {
                if self.transition(navigation, config, frame)? {
                    debug!("camera arrived at {:?}", navigation.selected_node().map(|node| &node.id));
                    navigation.enter_surface();
                }
            },
            NavigationMode::Surface => self.surface(navigation, config, frame)?,
            NavigationMode::Moon => self.moon(navigation, config, frame)?,
        }

        Some(self.pose())
    }

    fn orbit(&mut self, config: &CameraConfig, frame: &RigFrame) {
        if !frame.dragging {
            self.drift = config.drift_at(frame.elapsed);
        }

        let target = Vec3::from_polar_y(
            config.orbit_radius_for(frame.portrait),
            frame.orbit.phi + self.drift.y,
            frame.orbit.theta + self.drift.x,
        );
        self.position = smooth_toward(self.position, target, config.orbit_smoothing_rate, frame.delta);
        self.look_at = Vec3::ZERO;
    }

    /// `Some(true)` once the camera is close enough to the fly-in target
    fn transition(
        &mut self,
        navigation: &Navigation,
        config: &CameraConfig,
        frame: &RigFrame,
    ) -> Option<bool> {
        let node = navigation.selected_node()?.position;
        let target = node * config.transition_target_scale;

        self.position = smooth_toward(self.position, target, config.follow_smoothing_rate, frame.delta);
        self.look_at = node;

        Some(self.position.distance(target) < config.transition_arrival_distance)
    }

    fn surface(
        &mut self,
        navigation: &Navigation,
        config: &CameraConfig,
        frame: &RigFrame,
    ) -> Option<()> {
        let structure = navigation.focused_structure()?.position;

        let offset = config.surface_offset_at(frame.elapsed)
            + Vec3::X * navigation.navigation_offset();
        let target = structure + offset;
        let look_target = structure + Vec3::Y * config.surface_look_height;

        self.position = smooth_toward(self.position, target, config.follow_smoothing_rate, frame.delta);
        let look_at = smooth_toward(
            self.surface_look_at.unwrap_or(look_target),
            look_target,
            config.follow_smoothing_rate,
            frame.delta,
        );
        self.surface_look_at = Some(look_at);
        self.look_at = look_at;
        Some(())
    }

    fn moon(&mut self, navigation: &Navigation, config: &CameraConfig, frame: &RigFrame) -> Option<()> {
        let moon = navigation.selected_moon()?;

        let phase = moon.orbital_phase(frame.elapsed);
        let center = moon.orbital_position(frame.elapsed);
        let radial = center.normalize_or_zero();
        let tangent = Vec3::new(-phase.sin(), 0.0, phase.cos());
        let distance = moon.size * config.moon_distance_factor;

        let ViewAngles { theta, phi } = frame.moon;
        let offset = radial * (phi.cos() * theta.cos() * distance)
            + tangent * (phi.cos() * theta.sin() * distance)
            + Vec3::Y * (phi.sin() * distance);

        self.position = smooth_toward(self.position, center + offset, config.follow_smoothing_rate, frame.delta);
        self.look_at = center;
        Some(())
    }
}
