use bevy::prelude::*;

use super::constants::*;
use crate::navigation::Navigation;
use crate::placement::StructureKind;

#[derive(Component, Debug)]
pub struct SurfaceScene;

#[derive(Component, Debug)]
pub struct StructureBody {
    id:          String,
    rest_height: f32,
}

pub const fn structure_color(kind: StructureKind) -> Color {
    match kind {
        StructureKind::PolymerPlant => POLYMER_PLANT_COLOR,
        StructureKind::RoboticsWorkshop => ROBOTICS_WORKSHOP_COLOR,
        StructureKind::AeroponicFarm => AEROPONIC_FARM_COLOR,
    }
}

pub const fn lift_height(rest_height: f32, selected: bool) -> f32 {
    if selected {
        rest_height + SELECTED_LIFT
    } else {
        rest_height
    }
}

pub fn spawn_surface_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    navigation: Res<Navigation>,
) {
    let Some(node) = navigation.selected_node() else {
        warn!("entered the surface view without a selected node");
        return;
    };
    debug!("spawning {} structures for {}", node.structures.len(), node.id);

    let ground = (
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(GROUND_COLOR)),
        Transform::default(),
    );

    let body_mesh = meshes.add(Cuboid::from_size(STRUCTURE_BODY_SIZE));
    let structures: Vec<_> = node
        .structures
        .iter()
        .map(|structure| {
            (
                Name::new(format!("{} {}", structure.kind.label(), structure.id)),
                StructureBody {
                    id:          structure.id.clone(),
                    rest_height: structure.position.y,
                },
                Mesh3d(body_mesh.clone()),
                MeshMaterial3d(materials.add(structure_color(structure.kind))),
                Transform::from_translation(structure.position),
            )
        })
        .collect();

    commands
        .spawn((
            Name::new("SurfaceScene"),
            SurfaceScene,
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn(ground);
            for structure in structures {
                parent.spawn(structure);
            }
        });
}

pub fn despawn_surface_scene(mut commands: Commands, scenes: Query<Entity, With<SurfaceScene>>) {
    for entity in &scenes {
        commands.entity(entity).try_despawn();
    }
}

pub fn lift_selected_structure(
    time: Res<Time>,
    navigation: Res<Navigation>,
    mut bodies: Query<(&StructureBody, &mut Transform)>,
) {
    let selected = navigation.selected_structure().map(|structure| structure.id.as_str());
    let factor = (LIFT_SMOOTHING_RATE * time.delta_secs()).min(1.0);

    for (body, mut transform) in &mut bodies {
        let target = lift_height(body.rest_height, selected == Some(body.id.as_str()));
        transform.translation.y += (target - transform.translation.y) * factor;
    }
}
