//! Ecliptic angle helpers. All values are in degrees.

/// Full circle in degrees
pub const CIRCLE: f64 = 360.0;

/// Map any finite degree value into `[0, 360)`.
pub fn norm(deg: f64) -> f64 {
    let r = deg % CIRCLE;
    let r = if r < 0.0 { r + CIRCLE } else { r };
    // tiny negatives round up to exactly 360 after the shift
    if r >= CIRCLE {
        0.0
    } else {
        // -0.0 + 0.0 is +0.0
        r + 0.0
    }
}

/// Forward angular distance from `from` to `to`, in `[0, 360)`.
///
/// The distance from 350° to 10° is 20°, not -340°.
pub fn distance(from: f64, to: f64) -> f64 {
    norm(to - from)
}

/// The point directly opposite `deg` on the circle.
pub fn opposite(deg: f64) -> f64 {
    norm(deg + 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_norm_basic() {
        assert_eq!(norm(0.0), 0.0);
        assert_eq!(norm(360.0), 0.0);
        assert_eq!(norm(370.0), 10.0);
        assert_eq!(norm(-10.0), 350.0);
        assert_eq!(norm(-720.0), 0.0);
    }

    #[test]
    fn test_norm_tiny_negative() {
        let r = norm(-1e-20);
        assert!((0.0..CIRCLE).contains(&r));
    }

    #[test]
    fn test_norm_has_no_negative_zero() {
        for x in [-0.0, -360.0, -720.0, 0.0, 360.0] {
            let r = norm(x);
            assert_eq!(r, 0.0);
            assert!(r.is_sign_positive(), "norm({}) gave {}", x, r);
        }
        assert_eq!(serde_json::to_string(&norm(-360.0)).unwrap(), "0.0");
    }

    #[test]
    fn test_distance_wraps_forward() {
        assert_eq!(distance(350.0, 10.0), 20.0);
        assert_eq!(distance(10.0, 350.0), 340.0);
        assert_eq!(distance(42.0, 42.0), 0.0);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(opposite(0.0), 180.0);
        assert_eq!(opposite(270.0), 90.0);
        assert_eq!(opposite(180.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_norm_in_range(x in -1.0e6f64..1.0e6) {
            let r = norm(x);
            prop_assert!((0.0..CIRCLE).contains(&r));
            prop_assert!(r.is_sign_positive());
        }

        #[test]
        fn prop_distance_in_range(a in -720.0f64..720.0, b in -720.0f64..720.0) {
            let d = distance(a, b);
            prop_assert!((0.0..CIRCLE).contains(&d));
        }

        #[test]
        fn prop_opposite_is_half_circle_away(x in 0.0f64..360.0) {
            let o = opposite(x);
            prop_assert!((0.0..CIRCLE).contains(&o));
            prop_assert!((distance(x, o) - 180.0).abs() < 1e-9);
        }
    }
}
