use bevy::prelude::*;

use super::state_machine::Navigation;
use crate::placement::Stat;
use crate::placement::StatStatus;

/// Fresh stats for one structure, pushed by whatever feeds the live dashboard
#[derive(Message, Clone, Debug)]
pub struct StructureTelemetry {
    pub structure_id: String,
    pub stats:        Vec<Stat>,
}

pub fn apply_structure_telemetry(
    mut telemetry: MessageReader<StructureTelemetry>,
    mut navigation: ResMut<Navigation>,
) {
    for update in telemetry.read() {
        if update
            .stats
            .iter()
            .any(|stat| stat.status == StatStatus::Critical)
        {
            warn!("{} reports a critical reading", update.structure_id);
        }
        if !navigation.update_structure_stats(&update.structure_id, update.stats.clone()) {
            debug!("telemetry for unknown structure {}", update.structure_id);
        }
    }
}
