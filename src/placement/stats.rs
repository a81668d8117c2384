use rand::Rng;

use super::constants::HUMIDITY_GOOD_THRESHOLD;
use super::constants::ROBOTICS_ACTIVE_THRESHOLD;
use super::constants::THERMAL_GOOD_THRESHOLD;
use super::constants::YIELD_GOOD_THRESHOLD;
use super::types::Stat;
use super::types::StatStatus;
use super::types::StructureKind;

/// A draw strictly above `threshold` reads good, anything else is a warning
pub const fn status_from_draw(draw: f32, threshold: f32) -> StatStatus {
    if draw > threshold {
        StatStatus::Good
    } else {
        StatStatus::Warning
    }
}

/// Initial telemetry for a freshly placed structure
pub fn generate_stats_for_kind(kind: StructureKind, rng: &mut impl Rng) -> Vec<Stat> {
    match kind {
        StructureKind::AeroponicFarm => vec![
            Stat::new(
                "YIELD",
                format!("{}%", rng.random_range(60..100)),
                status_from_draw(rng.random(), YIELD_GOOD_THRESHOLD),
            ),
            Stat::new(
                "HUMIDITY",
                format!("{}%", rng.random_range(70..90)),
                status_from_draw(rng.random(), HUMIDITY_GOOD_THRESHOLD),
            ),
            Stat::new("SYSTEMS", "OPTIMAL", StatStatus::Good),
        ],
        StructureKind::PolymerPlant => vec![
            Stat::new(
                "PURITY",
                format!("{}%", rng.random_range(95..100)),
                StatStatus::Good,
            ),
            Stat::new(
                "THERMAL",
                format!("{}°C", rng.random_range(300..500)),
                status_from_draw(rng.random(), THERMAL_GOOD_THRESHOLD),
            ),
        ],
        StructureKind::RoboticsWorkshop => {
            let activity = if rng.random::<f32>() > ROBOTICS_ACTIVE_THRESHOLD {
                "ACTIVE"
            } else {
                "IDLE"
            };
            vec![
                Stat::new(
                    "STATUS",
                    activity,
                    status_from_draw(rng.random(), ROBOTICS_ACTIVE_THRESHOLD),
                ),
                Stat::new(
                    "BOTS",
                    format!("{} Units", rng.random_range(10..30)),
                    StatStatus::Good,
                ),
                Stat::new(
                    "QUEUE",
                    format!("{} Pending", rng.random_range(0..5)),
                    StatStatus::Good,
                ),
            ]
        },
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn labels(stats: &[Stat]) -> Vec<&str> { stats.iter().map(|stat| stat.label.as_str()).collect() }

    fn percent(value: &str) -> u32 {
        value
            .trim_end_matches('%')
            .parse()
            .unwrap_or(u32::MAX)
    }

    #[test]
    fn test_status_threshold_is_strict() {
        assert_eq!(status_from_draw(0.31, 0.3), StatStatus::Good);
        assert_eq!(status_from_draw(0.3, 0.3), StatStatus::Warning);
        assert_eq!(status_from_draw(0.0, 0.5), StatStatus::Warning);
        assert_eq!(status_from_draw(0.99, 0.4), StatStatus::Good);
        assert_eq!(status_from_draw(0.1, ROBOTICS_ACTIVE_THRESHOLD), StatStatus::Warning);
    }

    #[test]
    fn test_labels_per_kind() {
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(
            labels(&generate_stats_for_kind(StructureKind::AeroponicFarm, &mut rng)),
            ["YIELD", "HUMIDITY", "SYSTEMS"]
        );
        assert_eq!(
            labels(&generate_stats_for_kind(StructureKind::PolymerPlant, &mut rng)),
            ["PURITY", "THERMAL"]
        );
        assert_eq!(
            labels(&generate_stats_for_kind(StructureKind::RoboticsWorkshop, &mut rng)),
            ["STATUS", "BOTS", "QUEUE"]
        );
    }

    #[test]
    fn test_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..200 {
            let farm = generate_stats_for_kind(StructureKind::AeroponicFarm, &mut rng);
            assert!((60..100).contains(&percent(&farm[0].value)));
            assert!((70..90).contains(&percent(&farm[1].value)));
            assert_eq!(farm[2].status, StatStatus::Good);

            let plant = generate_stats_for_kind(StructureKind::PolymerPlant, &mut rng);
            assert!((95..100).contains(&percent(&plant[0].value)));
            assert_eq!(plant[0].status, StatStatus::Good);
            assert!(plant[1].value.ends_with("°C"));

            let workshop = generate_stats_for_kind(StructureKind::RoboticsWorkshop, &mut rng);
            assert!(workshop[0].value == "ACTIVE" || workshop[0].value == "IDLE");
            assert!(workshop[1].value.ends_with(" Units"));
            assert!(workshop[2].value.ends_with(" Pending"));
        }
    }

    #[test]
    fn test_generated_stats_are_never_critical() {
        let mut rng = StdRng::seed_from_u64(13);
        for kind in StructureKind::ALL {
            for _ in 0..100 {
                assert!(
                    generate_stats_for_kind(kind, &mut rng)
                        .iter()
                        .all(|stat| stat.status != StatStatus::Critical)
                );
            }
        }
    }
}
