//! Easing functions for the growth animation

/// Easing function types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    /// Fast start, decelerate toward completion (growth strokes)
    #[default]
    OutCubic,
    /// Overshoot past the target before settling (heart bloom)
    OutBack,
}

/// Apply easing function to a value t in range [0, 1]
pub fn ease(t: f64, easing: Easing) -> f64 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
        Easing::OutBack => {
            let c1 = 1.70158;
            let c3 = c1 + 1.0;
            1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
        }
    }
}

/// Parameter at which an OutCubic stroke reaches the given progress.
///
/// Used to schedule a root offshoot after the parent pen has arrived at
/// its anchor point.
pub fn out_cubic_inverse(v: f64) -> f64 {
    1.0 - (1.0 - v.clamp(0.0, 1.0)).cbrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_bounds() {
        for easing in [Easing::OutCubic, Easing::OutBack] {
            assert!(ease(0.0, easing).abs() < 1e-9, "{:?} should start at 0", easing);
            assert!((ease(1.0, easing) - 1.0).abs() < 1e-9, "{:?} should end at 1", easing);
        }
    }

    #[test]
    fn test_out_cubic_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease(i as f64 / 100.0, Easing::OutCubic);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_out_cubic_clamped_to_unit_interval() {
        for i in 0..=100 {
            let v = ease(i as f64 / 100.0, Easing::OutCubic);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_out_back_overshoots() {
        let peak = (1..100)
            .map(|i| ease(i as f64 / 100.0, Easing::OutBack))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "OutBack should exceed 1 before settling, peak={}", peak);
    }

    #[test]
    fn test_ease_clamps_input() {
        assert_eq!(ease(-0.5, Easing::OutCubic), 0.0);
        assert_eq!(ease(1.5, Easing::OutCubic), 1.0);
    }

    #[test]
    fn test_out_cubic_inverse_roundtrip() {
        for i in 0..=20 {
            let v = i as f64 / 20.0;
            let t = out_cubic_inverse(v);
            assert!((ease(t, Easing::OutCubic) - v).abs() < 1e-9);
        }
    }
}
