//! Vector utilities for positions and movement

use glam::Vec3;

/// Calculates the distance between two points
#[inline]
pub fn distance(a: &Vec3, b: &Vec3) -> f32 {
    (*b - *a).length()
}

/// Calculates the squared distance between two points
#[inline]
pub fn distance_squared(a: &Vec3, b: &Vec3) -> f32 {
    (*b - *a).length_squared()
}

/// Unit vector pointing from `from` towards `to`, or zero if the points coincide
#[inline]
pub fn direction(from: &Vec3, to: &Vec3) -> Vec3 {
    (*to - *from).normalize_or_zero()
}

/// Moves `current` towards `target` by at most `max_step`.
///
/// Returns the new position and whether `target` was reached. A step that
/// would overshoot lands exactly on `target`.
pub fn move_towards(current: &Vec3, target: &Vec3, max_step: f32) -> (Vec3, bool) {
    let offset = *target - *current;
    let remaining = offset.length();

    if remaining <= max_step || remaining <= f32::EPSILON {
        (*target, true)
    } else {
        (*current + offset / remaining * max_step, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);

        assert_eq!(distance(&a, &b), 5.0);
        assert_eq!(distance_squared(&a, &b), 25.0);
    }

    #[test]
    fn test_direction() {
        let d = direction(&Vec3::ZERO, &Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(d, Vec3::Y);

        assert_eq!(direction(&Vec3::ONE, &Vec3::ONE), Vec3::ZERO);
    }

    #[test]
    fn test_move_towards_partial_step() {
        let (pos, reached) = move_towards(&Vec3::ZERO, &Vec3::new(10.0, 0.0, 0.0), 2.5);

        assert!(!reached);
        assert!((pos - Vec3::new(2.5, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_move_towards_snaps_on_overshoot() {
        let target = Vec3::new(1.0, 1.0, 0.0);
        let (pos, reached) = move_towards(&Vec3::ZERO, &target, 100.0);

        assert!(reached);
        assert_eq!(pos, target);
    }
}
