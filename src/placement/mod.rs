mod config;
mod constants;
mod generator;
mod moons;
mod stats;
mod types;

use bevy::prelude::*;
pub use config::PlacementConfig;
pub use constants::PLANET_RADIUS;
pub use generator::generate_nodes;
pub use moons::generate_moons;
use rand::SeedableRng;
use rand::rngs::StdRng;
pub use types::Moon;
pub use types::Node;
pub use types::Stat;
pub use types::StatStatus;
pub use types::Structure;
pub use types::StructureKind;

use crate::navigation::Navigation;

pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlacementConfig>()
            .add_systems(Startup, generate_layout);
    }
}

/// Runs once - the layout lives for the rest of the process
fn generate_layout(mut commands: Commands, config: Res<PlacementConfig>) {
    let nodes = match config.seed {
        Some(seed) => generate_nodes(&config, &mut StdRng::seed_from_u64(seed)),
        None => generate_nodes(&config, &mut rand::rng()),
    };
    let moons = generate_moons();

    let structure_count: usize = nodes.iter().map(|node| node.structures.len()).sum();
    info!(
        "generated {} nodes, {structure_count} structures, {} moons",
        nodes.len(),
        moons.len()
    );

    commands.insert_resource(Navigation::new(nodes, moons));
}
