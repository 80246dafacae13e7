//! Easing curves for tile animations

/// Peak scale reached by the pop curve before it settles back to 1.0
pub const POP_PEAK: f32 = 1.1;

/// Fraction of the pop duration spent ramping up to the peak
pub const POP_RAMP_END: f32 = 0.9;

/// Easing function types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    /// Linear interpolation (slides)
    #[default]
    Linear,
    /// Power ramp (t^2.5) up to [`POP_PEAK`] at 90%, then a linear settle to 1.0
    PopOvershoot,
}

/// Apply easing function to a value t in range [0, 1]
pub fn ease(t: f32, easing: Easing) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::PopOvershoot => {
            if t <= POP_RAMP_END {
                POP_PEAK * (t / POP_RAMP_END).powf(2.5)
            } else {
                let tail = (t - POP_RAMP_END) / (1.0 - POP_RAMP_END);
                POP_PEAK + (1.0 - POP_PEAK) * tail
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_bounds() {
        for easing in [Easing::Linear, Easing::PopOvershoot] {
            assert!(ease(0.0, easing).abs() < 1e-6, "{:?} should start at 0", easing);
            assert!((ease(1.0, easing) - 1.0).abs() < 1e-6, "{:?} should end at 1", easing);
        }
    }

    #[test]
    fn test_ease_clamps_input() {
        assert_eq!(ease(-0.5, Easing::Linear), 0.0);
        assert_eq!(ease(1.5, Easing::Linear), 1.0);
        assert!((ease(7.0, Easing::PopOvershoot) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pop_overshoots_then_settles() {
        let peak = ease(POP_RAMP_END, Easing::PopOvershoot);
        assert!((peak - POP_PEAK).abs() < 1e-5);
        assert!(peak > 1.0);

        // Monotonic ramp up to the peak.
        let mut prev = 0.0;
        for i in 0..=90 {
            let v = ease(i as f32 / 100.0, Easing::PopOvershoot);
            assert!(v >= prev - 1e-6);
            prev = v;
        }

        // Monotonic settle afterwards.
        for i in 91..=100 {
            let v = ease(i as f32 / 100.0, Easing::PopOvershoot);
            assert!(v <= prev + 1e-6);
            assert!(v >= 1.0 - 1e-6);
            prev = v;
        }
    }
}
