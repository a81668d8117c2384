use bevy::prelude::*;

/// Extension trait for `Vec3` to build points from spherical coordinates
pub trait SphericalExt {
    /// Polar angle measured from +Z, azimuth in the XY plane. Used for node placement.
    fn from_polar_z(radius: f32, polar: f32, azimuth: f32) -> Self;

    /// Polar angle measured from +Y, azimuth around Y starting at +Z. Used for camera orbits.
    fn from_polar_y(radius: f32, polar: f32, azimuth: f32) -> Self;
}

impl SphericalExt for Vec3 {
    fn from_polar_z(radius: f32, polar: f32, azimuth: f32) -> Self {
        Self::new(
            radius * polar.sin() * azimuth.cos(),
            radius * polar.sin() * azimuth.sin(),
            radius * polar.cos(),
        )
    }

    fn from_polar_y(radius: f32, polar: f32, azimuth: f32) -> Self {
        Self::new(
            radius * polar.sin() * azimuth.sin(),
            radius * polar.cos(),
            radius * polar.sin() * azimuth.cos(),
        )
    }
}

/// Extension trait for `Vec3` to ignore height when measuring ground distances
pub trait PlanarExt {
    /// Distance between two points projected onto the XZ ground plane
    fn planar_distance(self, other: Self) -> f32;
}

impl PlanarExt for Vec3 {
    #[inline]
    fn planar_distance(self, other: Self) -> f32 { self.xz().distance(other.xz()) }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn test_polar_z_north_pole_is_plus_z() {
        let point = Vec3::from_polar_z(2.0, 0.0, 1.3);
        assert!(point.distance(Vec3::new(0.0, 0.0, 2.0)) < 1e-5);
    }

    #[test]
    fn test_polar_y_equator_faces_plus_z_at_zero_azimuth() {
        let point = Vec3::from_polar_y(10.0, FRAC_PI_2, 0.0);
        assert!(point.distance(Vec3::new(0.0, 0.0, 10.0)) < 1e-4);
    }

    #[test]
    fn test_spherical_points_keep_radius() {
        for (polar, azimuth) in [(0.3, 0.1), (1.7, 4.0), (3.0, 6.2)] {
            assert!((Vec3::from_polar_z(2.05, polar, azimuth).length() - 2.05).abs() < 1e-4);
            assert!((Vec3::from_polar_y(13.0, polar, azimuth).length() - 13.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_planar_distance_ignores_height() {
        let a = Vec3::new(0.0, 1.0, 0.0);
        let b = Vec3::new(3.0, 9.0, 4.0);
        assert!((a.planar_distance(b) - 5.0).abs() < 1e-6);
    }
}
