use bevy::prelude::*;

use super::constants::*;
use crate::navigation::Navigation;
use crate::placement::PLANET_RADIUS;
use crate::state::NavigationMode;

#[derive(Component, Debug)]
pub struct OrbitScene;

#[derive(Component, Debug)]
pub struct Planet;

/// Index into `Navigation::moons`
#[derive(Component, Debug)]
pub struct MoonBody(usize);

#[derive(Component, Debug)]
pub struct NodeMarker;

pub fn spawn_orbit_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    navigation: Res<Navigation>,
) {
    let planet = (
        Name::new("Planet"),
        Planet,
        Mesh3d(meshes.add(Sphere::new(PLANET_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: PLANET_COLOR,
            perceptual_roughness: 0.6,
            ..default()
        })),
        Transform::default(),
    );

    let moons: Vec<_> = navigation
        .moons()
        .iter()
        .enumerate()
        .map(|(index, moon)| {
            (
                Name::new(moon.id.clone()),
                MoonBody(index),
                Mesh3d(meshes.add(Sphere::new(moon.size))),
                MeshMaterial3d(materials.add(moon.color)),
                Transform::from_translation(moon.orbital_position(0.0)),
            )
        })
        .collect();

    let marker_mesh = meshes.add(Sphere::new(NODE_MARKER_RADIUS));
    let marker_material = materials.add(StandardMaterial {
        base_color: NODE_MARKER_COLOR,
        emissive: NODE_MARKER_COLOR.to_linear() * 4.0,
        ..default()
    });

    commands
        .spawn((
            Name::new("OrbitScene"),
            OrbitScene,
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn(planet);
            for moon in moons {
                parent.spawn(moon);
            }
            for node in navigation.nodes() {
                parent.spawn((
                    Name::new(node.id.clone()),
                    NodeMarker,
                    Mesh3d(marker_mesh.clone()),
                    MeshMaterial3d(marker_material.clone()),
                    Transform::from_translation(node.position),
                ));
            }
        });

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub const fn planet_spin_rate(mode: NavigationMode) -> f32 {
    match mode {
        NavigationMode::Orbit => PLANET_SPIN_ORBIT,
        _ => PLANET_SPIN_IDLE,
    }
}

pub fn spin_planet(
    time: Res<Time>,
    navigation: Res<Navigation>,
    mut planets: Query<&mut Transform, With<Planet>>,
) {
    let angle = planet_spin_rate(navigation.mode()) * time.delta_secs();
    for mut transform in &mut planets {
        transform.rotate_y(angle);
    }
}

pub fn orbit_moons(
    time: Res<Time>,
    navigation: Res<Navigation>,
    mut moons: Query<(&MoonBody, &mut Transform)>,
) {
    for (MoonBody(index), mut transform) in &mut moons {
        if let Some(moon) = navigation.moons().get(*index) {
            transform.translation = moon.orbital_position(time.elapsed_secs());
        }
    }
}

/// Node markers are only pickable, so only shown, from the orbit view
pub fn show_node_markers(
    state: Res<State<NavigationMode>>,
    mut markers: Query<&mut Visibility, With<NodeMarker>>,
) {
    let visibility = if *state.get() == NavigationMode::Orbit {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut marker in &mut markers {
        *marker = visibility;
    }
}

pub fn hide_orbit_scene(mut scenes: Query<&mut Visibility, With<OrbitScene>>) {
    for mut visibility in &mut scenes {
        *visibility = Visibility::Hidden;
    }
}

pub fn show_orbit_scene(mut scenes: Query<&mut Visibility, With<OrbitScene>>) {
    for mut visibility in &mut scenes {
        *visibility = Visibility::Inherited;
    }
}
