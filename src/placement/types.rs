use bevy::prelude::*;

/// Facility categories a structure can belong to
#[derive(Reflect, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StructureKind {
    PolymerPlant,
    RoboticsWorkshop,
    AeroponicFarm,
}

impl StructureKind {
    pub const ALL: [Self; 3] = [Self::PolymerPlant, Self::RoboticsWorkshop, Self::AeroponicFarm];

    pub const fn label(self) -> &'static str {
        match self {
            Self::PolymerPlant => "Polymer Plants",
            Self::RoboticsWorkshop => "Robotics Workshop",
            Self::AeroponicFarm => "Aeroponic Farms",
        }
    }

    /// id prefix, e.g. `polymer-plants`
    pub const fn slug(self) -> &'static str {
        match self {
            Self::PolymerPlant => "polymer-plants",
            Self::RoboticsWorkshop => "robotics-workshop",
            Self::AeroponicFarm => "aeroponic-farms",
        }
    }
}

#[derive(Reflect, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatStatus {
    Good,
    Warning,
    Critical,
}

/// One line of telemetry shown for a structure
#[derive(Reflect, Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label:  String,
    pub value:  String,
    pub status: StatStatus,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: impl Into<String>, status: StatStatus) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            status,
        }
    }
}

/// A facility on the ground plane of a node's surface view
#[derive(Reflect, Clone, Debug, PartialEq)]
pub struct Structure {
    pub id:       String,
    pub kind:     StructureKind,
    pub position: Vec3,
    pub stats:    Vec<Stat>,
}

/// A selectable waypoint on the planet sphere
#[derive(Reflect, Clone, Debug, PartialEq)]
pub struct Node {
    pub id:         String,
    pub position:   Vec3,
    pub structures: Vec<Structure>,
}

/// An orbiting satellite. Its position is never stored - it is derived from elapsed time.
#[derive(Reflect, Clone, Debug, PartialEq)]
pub struct Moon {
    pub id:          String,
    pub size:        f32,
    /// orbital radius
    pub distance:    f32,
    /// radians per second
    pub speed:       f32,
    /// phase offset in radians
    pub angle:       f32,
    pub color:       Color,
    pub description: String,
}

impl Moon {
    /// Orbital phase at `elapsed` seconds
    pub fn orbital_phase(&self, elapsed: f32) -> f32 { elapsed.mul_add(self.speed, self.angle) }

    /// Position on the moon's circular orbit in the XZ plane at `elapsed` seconds
    pub fn orbital_position(&self, elapsed: f32) -> Vec3 {
        let phase = self.orbital_phase(elapsed);
        Vec3::new(phase.cos() * self.distance, 0.0, phase.sin() * self.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_moon() -> Moon {
        Moon {
            id:          "moon-test".into(),
            size:        0.25,
            distance:    3.8,
            speed:       0.3,
            angle:       0.0,
            color:       Color::WHITE,
            description: String::new(),
        }
    }

    #[test]
    fn test_orbital_position_is_deterministic() {
        let moon = test_moon();
        let first = moon.orbital_position(17.25);
        let second = moon.orbital_position(17.25);
        assert_eq!(first, second);
    }

    #[test]
    fn test_orbital_position_stays_on_orbit() {
        let moon = test_moon();
        for elapsed in [0.0, 1.0, 12.5, 300.0] {
            let position = moon.orbital_position(elapsed);
            assert!((position.length() - moon.distance).abs() < 1e-4);
            assert!(position.y.abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_orbital_position_starts_at_phase_angle() {
        let mut moon = test_moon();
        moon.angle = std::f32::consts::FRAC_PI_2;
        let position = moon.orbital_position(0.0);
        assert!(position.distance(Vec3::new(0.0, 0.0, moon.distance)) < 1e-4);
    }

    #[test]
    fn test_structure_slugs() {
        assert_eq!(StructureKind::PolymerPlant.slug(), "polymer-plants");
        assert_eq!(StructureKind::RoboticsWorkshop.slug(), "robotics-workshop");
        assert_eq!(StructureKind::AeroponicFarm.slug(), "aeroponic-farms");
    }
}
