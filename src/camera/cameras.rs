use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::config::CameraConfig;
use super::constants::BASE_FIELD_OF_VIEW;
use super::constants::WARP_FIELD_OF_VIEW;
use super::constants::WARP_SMOOTHING_RATE;
use super::rig::CameraRig;
use super::rig::RigFrame;
use crate::input::PointerInterpreter;
use crate::navigation::Navigation;
use crate::schedule::NavigationSet;
use crate::traits::SphericalExt;

pub struct CamerasPlugin;

impl Plugin for CamerasPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_navigation_camera)
            .add_systems(
                Update,
                (drive_camera_rig, warp_field_of_view).in_set(NavigationSet::CameraRig),
            )
            .add_systems(Update, update_clear_color);
    }
}

/// The one camera the navigation rig drives
#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct NavigationCamera;

fn spawn_navigation_camera(
    mut commands: Commands,
    config: Res<CameraConfig>,
    interpreter: Res<PointerInterpreter>,
) {
    let angles = interpreter.orbit_angles();
    let rig = CameraRig::new(Vec3::from_polar_y(config.orbit_radius, angles.phi, angles.theta));
    let pose = rig.pose();

    commands.spawn((
        Name::new("NavigationCamera"),
        Camera3d::default(),
        Transform::from_translation(pose.position).looking_at(pose.look_at, Vec3::Y),
        rig,
        NavigationCamera,
    ));
}

fn drive_camera_rig(
    time: Res<Time>,
    config: Res<CameraConfig>,
    interpreter: Res<PointerInterpreter>,
    window: Single<&Window, With<PrimaryWindow>>,
    mut navigation: ResMut<Navigation>,
    camera: Single<(&mut CameraRig, &mut Transform), With<NavigationCamera>>,
) {
    let (mut rig, mut transform) = camera.into_inner();

    let frame = RigFrame {
        elapsed:  time.elapsed_secs(),
        delta:    time.delta_secs(),
        orbit:    interpreter.orbit_angles(),
        moon:     interpreter.moon_angles(),
        dragging: interpreter.is_dragging(),
        portrait: window.width() < window.height(),
    };

    if let Some(pose) = rig.evaluate(&mut navigation, &config, &frame) {
        *transform = Transform::from_translation(pose.position).looking_at(pose.look_at, Vec3::Y);
    }
}

/// Widens the lens while a transition is in flight
fn warp_field_of_view(
    time: Res<Time>,
    navigation: Res<Navigation>,
    mut projection: Single<&mut Projection, With<NavigationCamera>>,
) {
    let Projection::Perspective(perspective) = &mut **projection else {
        return;
    };

    let target = if navigation.is_transitioning() {
        WARP_FIELD_OF_VIEW
    } else {
        BASE_FIELD_OF_VIEW
    };
    let factor = (WARP_SMOOTHING_RATE * time.delta_secs()).min(1.0);
    perspective.fov += (target - perspective.fov) * factor;
}

fn update_clear_color(camera_config: Res<CameraConfig>, mut clear_color: ResMut<ClearColor>) {
    if camera_config.is_changed() {
        clear_color.0 = camera_config.clear_color;
    }
}
