use bevy::prelude::*;

use super::constants::NODE_PICK_RADIUS;
use super::constants::STRUCTURE_PICK_RADIUS;
use crate::camera::NavigationCamera;
use crate::navigation::Navigation;
use crate::placement::Moon;
use crate::placement::Node;
use crate::placement::PLANET_RADIUS;
use crate::placement::Structure;
use crate::state::NavigationMode;

/// A pointer release short enough to count as a tap, in window coordinates
#[derive(Message, Clone, Copy, Debug)]
pub struct PointerTap {
    pub position: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitPick {
    Moon(usize),
    Node(usize),
}

/// Distance along `ray` to the first intersection with a sphere, if the sphere is in front of it
pub fn ray_sphere_distance(ray: Ray3d, center: Vec3, radius: f32) -> Option<f32> {
    let to_origin = ray.origin - center;
    let half_b = to_origin.dot(*ray.direction);
    let c = radius.mul_add(-radius, to_origin.length_squared());
    let discriminant = half_b.mul_add(half_b, -c);
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    [-half_b - root, -half_b + root]
        .into_iter()
        .find(|distance| *distance >= 0.0)
}

/// Nearest moon or node under `ray`. The planet body hides anything behind it.
pub fn pick_orbit(
    ray: Ray3d,
    nodes: &[Node],
    moons: &[Moon],
    elapsed: f32,
    node_radius: f32,
) -> Option<OrbitPick> {
    let planet = ray_sphere_distance(ray, Vec3::ZERO, PLANET_RADIUS).unwrap_or(f32::INFINITY);

    let moon_hits = moons.iter().enumerate().filter_map(|(index, moon)| {
        ray_sphere_distance(ray, moon.orbital_position(elapsed), moon.size)
            .map(|distance| (distance, OrbitPick::Moon(index)))
    });
    let node_hits = nodes.iter().enumerate().filter_map(|(index, node)| {
        ray_sphere_distance(ray, node.position, node_radius)
            .map(|distance| (distance, OrbitPick::Node(index)))
    });

    moon_hits
        .chain(node_hits)
        .filter(|(distance, _)| *distance <= planet)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, pick)| pick)
}

/// Index of the nearest structure under `ray`
pub fn pick_structure(ray: Ray3d, structures: &[Structure], radius: f32) -> Option<usize> {
    structures
        .iter()
        .enumerate()
        .filter_map(|(index, structure)| {
            ray_sphere_distance(ray, structure.position, radius).map(|distance| (distance, index))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, index)| index)
}

/// Applies a tap along `ray` to the current mode. In orbit it focuses a moon or selects a node.
/// On the surface it focuses the tapped structure, and a second tap on it clears the selection.
pub fn apply_tap(navigation: &mut Navigation, ray: Ray3d, elapsed: f32) {
    match navigation.mode() {
        NavigationMode::Orbit => {
            let pick = pick_orbit(
                ray,
                navigation.nodes(),
                navigation.moons(),
                elapsed,
                NODE_PICK_RADIUS,
            );
            match pick {
                Some(OrbitPick::Moon(index)) => navigation.focus_moon(index),
                Some(OrbitPick::Node(index)) => navigation.select_node(index),
                None => {},
            }
        },
        NavigationMode::Surface => {
            let Some(structure_id) = navigation.selected_node().and_then(|node| {
                pick_structure(ray, &node.structures, STRUCTURE_PICK_RADIUS)
                    .map(|index| node.structures[index].id.clone())
            }) else {
                return;
            };

            let already_selected = navigation
                .selected_structure()
                .is_some_and(|structure| structure.id == structure_id);
            navigation.set_focused_structure(&structure_id);
            navigation.set_selected_structure((!already_selected).then_some(structure_id.as_str()));
        },
        NavigationMode::Transition | NavigationMode::Moon => {},
    }
}

pub fn select_tapped_target(
    mut taps: MessageReader<PointerTap>,
    camera: Single<(&Camera, &GlobalTransform), With<NavigationCamera>>,
    time: Res<Time>,
    mut navigation: ResMut<Navigation>,
) {
    let (camera, camera_transform) = *camera;

    for tap in taps.read() {
        let Ok(ray) = camera.viewport_to_world(camera_transform, tap.position) else {
            continue;
        };
        apply_tap(&mut navigation, ray, time.elapsed_secs());
    }
}
