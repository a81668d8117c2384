use std::time::Duration;

/// How long the advisory transition flag stays raised after entering or leaving a node
pub const SURFACE_ADVISORY_DURATION: Duration = Duration::from_millis(1500);

/// How long the advisory transition flag stays raised after focusing or leaving a moon
pub const MOON_ADVISORY_DURATION: Duration = Duration::from_millis(1000);
