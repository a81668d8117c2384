use bevy::prelude::*;

use super::types::Moon;

/// The moon list is fixed configuration, not generated
pub fn generate_moons() -> Vec<Moon> {
    vec![
        Moon {
            id:          "moon-phobos".into(),
            size:        0.25,
            distance:    3.8,
            speed:       0.3,
            angle:       0.0,
            color:       Color::srgb_u8(0xb0, 0xb0, 0xb0),
            description: "A cratered rock captured by gravity.".into(),
        },
        Moon {
            id:          "moon-deimos".into(),
            size:        0.18,
            distance:    5.2,
            speed:       0.2,
            angle:       2.1,
            color:       Color::srgb_u8(0x90, 0x80, 0x70),
            description: "Small and irregular, rich in carbon.".into(),
        },
        Moon {
            id:          "moon-triton".into(),
            size:        0.35,
            distance:    7.5,
            speed:       0.1,
            angle:       4.2,
            color:       Color::srgb_u8(0xaa, 0xdd, 0xff),
            description: "A captured Kuiper belt object.".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_moons_in_orbit_order() {
        let moons = generate_moons();
        let ids: Vec<_> = moons.iter().map(|moon| moon.id.as_str()).collect();
        assert_eq!(ids, ["moon-phobos", "moon-deimos", "moon-triton"]);
        assert!(moons.windows(2).all(|pair| pair[0].distance < pair[1].distance));
    }

    #[test]
    fn test_moons_clear_the_planet() {
        // planet radius is 2, camera sits size * 5 out from each moon
        assert!(generate_moons().iter().all(|moon| moon.distance - moon.size > 2.0));
    }
}
