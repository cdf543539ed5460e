//! Probability primitives
//!
//! Weighted-choice helpers shared by every generation stage. Percentages
//! outside [0, 100] are clamped rather than rejected so generation always
//! produces a planet.

use rand::Rng;

/// Clamp a percentage into [0, 100], warning when the input was out of range.
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        log::warn!("probability is NaN, treating as 0%");
        return 0.0;
    }
    if !(0.0..=100.0).contains(&percent) {
        log::warn!("probability {}% out of range, clamping to [0, 100]", percent);
    }
    percent.clamp(0.0, 100.0)
}

/// Return true with the given chance, expressed in percent.
///
/// 0% never succeeds and 100% always does.
pub fn determine_probability<R: Rng + ?Sized>(rng: &mut R, percent: f64) -> bool {
    let percent = clamp_percent(percent);
    rng.gen::<f64>() * 100.0 < percent
}

/// Pick `option_a` with probability `50 + skew` percent, `option_b` otherwise.
///
/// A positive skew favours `option_a`.
pub fn pick_skewed<T, R: Rng + ?Sized>(rng: &mut R, option_a: T, option_b: T, skew: f64) -> T {
    if determine_probability(rng, 50.0 + skew) {
        option_a
    } else {
        option_b
    }
}

/// Unskewed 50/50 pick.
pub fn pick_even<T, R: Rng + ?Sized>(rng: &mut R, option_a: T, option_b: T) -> T {
    pick_skewed(rng, option_a, option_b, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn clamp_keeps_in_range_values() {
        assert_eq!(clamp_percent(0.0), 0.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp_percent(100.0), 100.0);
    }

    #[test]
    fn clamp_saturates_out_of_range_values() {
        assert_eq!(clamp_percent(-12.0), 0.0);
        assert_eq!(clamp_percent(150.0), 100.0);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
    }

    #[test]
    fn zero_percent_never_succeeds() {
        // Lowest possible draw
        let mut rng = StepRng::new(0, 0);
        assert!(!determine_probability(&mut rng, 0.0));
        assert!(!determine_probability(&mut rng, -5.0));
    }

    #[test]
    fn hundred_percent_always_succeeds() {
        // Highest possible draw
        let mut rng = StepRng::new(u64::MAX, 0);
        assert!(determine_probability(&mut rng, 100.0));
        assert!(determine_probability(&mut rng, 250.0));
        assert!(!determine_probability(&mut rng, 99.9));
    }

    #[test]
    fn saturated_skew_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            assert_eq!(pick_skewed(&mut rng, 'a', 'b', 100.0), 'a');
            assert_eq!(pick_skewed(&mut rng, 'a', 'b', -100.0), 'b');
        }
    }

    #[test]
    fn low_draw_picks_first_option() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(pick_even(&mut rng, 1, 2), 1);
        assert_eq!(pick_skewed(&mut rng, 1, 2, -15.0), 1);
    }

    #[test]
    fn frequency_tracks_requested_percentage() {
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 100_000;
        let hits = (0..trials)
            .filter(|_| determine_probability(&mut rng, 30.0))
            .count();
        let observed = hits as f64 * 100.0 / trials as f64;
        assert!((observed - 30.0).abs() < 1.0, "observed {}%", observed);
    }

    #[test]
    fn positive_skew_favours_first_option() {
        let mut rng = StdRng::seed_from_u64(99);
        let trials = 100_000;
        let firsts = (0..trials)
            .filter(|_| pick_skewed(&mut rng, true, false, 15.0))
            .count();
        let observed = firsts as f64 * 100.0 / trials as f64;
        assert!((observed - 65.0).abs() < 1.0, "observed {}%", observed);
    }
}
