mod cameras;
mod config;
mod constants;
mod rig;

use bevy::prelude::*;
pub use cameras::NavigationCamera;
use cameras::CamerasPlugin;
use config::CameraConfigPlugin;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(CameraConfigPlugin)
            .add_plugins(CamerasPlugin);
    }
}
