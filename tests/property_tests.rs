use proptest::prelude::*;
use openmoo::services::probability::{clamp_percent, determine_probability, pick_skewed};
use openmoo::{Biology, Minerals, Planet, PlanetSetup, PlanetSize, Survey, UniverseModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    /// Property: Gas giants are always Huge or Large
    #[test]
    fn gas_giants_are_large_or_huge(
        seed in any::<u64>(),
        mineral_rich in any::<bool>(),
        organic_rich in any::<bool>()
    ) {
        let modifiers = UniverseModifiers { mineral_rich, organic_rich };
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..50 {
            let planet = Planet::randomized(modifiers, &mut rng);
            if planet.setup() == PlanetSetup::GasGiant {
                prop_assert!(
                    matches!(planet.size(), PlanetSize::Huge | PlanetSize::Large),
                    "gas giant with size {}",
                    planet.size().name()
                );
            }
        }
    }

    /// Property: Only normal planets have biology other than Barren
    #[test]
    fn non_normal_planets_are_barren(
        seed in any::<u64>(),
        mineral_rich in any::<bool>(),
        organic_rich in any::<bool>()
    ) {
        let modifiers = UniverseModifiers { mineral_rich, organic_rich };
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..50 {
            let planet = Planet::randomized(modifiers, &mut rng);
            if planet.setup() != PlanetSetup::Normal {
                prop_assert_eq!(planet.biology(), Biology::Barren);
            }
        }
    }

    /// Property: Gems and gold never come from the same roll
    #[test]
    fn gems_and_gold_are_exclusive(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..50 {
            let s = Planet::randomized(UniverseModifiers::default(), &mut rng).specialities();
            prop_assert!(!(s.gem_deposits && s.gold_deposits));
        }
    }

    /// Property: Poor tiers never carry deposits, lifeless worlds never carry natives
    #[test]
    fn specialities_respect_their_gates(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..50 {
            let planet = Planet::randomized(UniverseModifiers::default(), &mut rng);
            let s = planet.specialities();
            if matches!(planet.minerals(), Minerals::Poor | Minerals::UltraPoor) {
                prop_assert!(!s.gem_deposits && !s.gold_deposits);
            }
            if !planet.biology().supports_life() {
                prop_assert!(!s.natives && !s.artefacts);
            }
        }
    }

    /// Property: Same survey parameters give the same planets
    #[test]
    fn surveys_are_deterministic(seed in any::<u64>(), count in 1usize..40) {
        let modifiers = UniverseModifiers::default();
        let a = Survey::new(seed, count, modifiers).unwrap().generate();
        let b = Survey::new(seed, count, modifiers).unwrap().generate();
        prop_assert_eq!(a, b);
    }

    /// Property: Clamped percentages always land in [0, 100]
    #[test]
    fn clamp_stays_in_range(percent in -1.0e6f64..1.0e6f64) {
        let clamped = clamp_percent(percent);
        prop_assert!((0.0..=100.0).contains(&clamped));
    }

    /// Property: Out-of-range percentages saturate
    #[test]
    fn saturated_percentages_are_certain(seed in any::<u64>(), excess in 0.0f64..1.0e6f64) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert!(determine_probability(&mut rng, 100.0 + excess));
        prop_assert!(!determine_probability(&mut rng, -excess));
    }

    /// Property: A skew of +/-50 or more fixes the pick
    #[test]
    fn saturated_skew_fixes_pick(seed in any::<u64>(), skew in 50.0f64..1000.0f64) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(pick_skewed(&mut rng, "a", "b", skew), "a");
        prop_assert_eq!(pick_skewed(&mut rng, "a", "b", -skew), "b");
    }
}
