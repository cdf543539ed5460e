//! Planet generation stages
//!
//! Each stage is a cascade of independent probability checks evaluated in
//! order; the first check that succeeds decides the result and the remaining
//! checks are never drawn. Skews are applied only to the checks that carry
//! them, so the cascades must not be collapsed into a weighted table.

use rand::Rng;

use crate::models::constants::{
    Biology, Gravity, Minerals, PlanetSetup, PlanetSize, ARTEFACTS_CHANCE, EXTREME_TIER_CHANCE,
    GAIA_NATIVES_CHANCE, GRAVITY_SKEW, MINERAL_RICH_BIOLOGY_SKEW, MINERAL_RICH_PENALTY,
    MINERAL_RICH_TIER_SKEW, NON_PLANET_CHANCE, NORMAL_SIZE_GRAVITY_SHIFT_CHANCE,
    ORGANIC_RICH_BIOLOGY_SKEW, ORGANIC_RICH_PENALTY, OUTER_TIER_CHANCE, TERRAN_NATIVES_CHANCE,
};
use crate::services::probability::{determine_probability, pick_even, pick_skewed};

use super::{Specialities, UniverseModifiers};

/// Stage 1: 30% asteroid field or gas giant (even split), otherwise a normal planet.
pub fn determine_type<R: Rng + ?Sized>(rng: &mut R) -> PlanetSetup {
    if determine_probability(rng, NON_PLANET_CHANCE) {
        return pick_even(rng, PlanetSetup::Asteroids, PlanetSetup::GasGiant);
    }
    PlanetSetup::Normal
}

/// Stage 2: gas giants are Huge or Large; everything else follows the
/// 4.6 / 27.2 tier cascade around Normal.
pub fn determine_size<R: Rng + ?Sized>(rng: &mut R, setup: PlanetSetup) -> PlanetSize {
    if setup == PlanetSetup::GasGiant {
        return pick_even(rng, PlanetSize::Huge, PlanetSize::Large);
    }

    if determine_probability(rng, EXTREME_TIER_CHANCE) {
        return pick_even(rng, PlanetSize::Huge, PlanetSize::Tiny);
    }
    if determine_probability(rng, OUTER_TIER_CHANCE) {
        return pick_even(rng, PlanetSize::Large, PlanetSize::Small);
    }
    PlanetSize::Normal
}

/// Stage 3: mineral tier. The tier chance is skewed by a mineral-rich
/// universe; the rich/poor pick is skewed by the universe penalty.
pub fn determine_minerals<R: Rng + ?Sized>(rng: &mut R, modifiers: UniverseModifiers) -> Minerals {
    let mut penalty = 0.0;
    let mut skew = 0.0;
    if modifiers.mineral_rich {
        skew = MINERAL_RICH_TIER_SKEW;
        penalty = MINERAL_RICH_PENALTY;
    }
    if modifiers.organic_rich {
        penalty = ORGANIC_RICH_PENALTY;
    }

    if determine_probability(rng, EXTREME_TIER_CHANCE + skew) {
        return pick_skewed(rng, Minerals::UltraRich, Minerals::UltraPoor, penalty);
    }
    if determine_probability(rng, OUTER_TIER_CHANCE + skew) {
        return pick_skewed(rng, Minerals::Rich, Minerals::Poor, penalty);
    }
    Minerals::Abundant
}

/// Stage 4: biology. Asteroid fields and gas giants are always barren.
///
/// Only the Gaia, Terran and middle (36%) checks carry the universe skew.
pub fn determine_biology<R: Rng + ?Sized>(
    rng: &mut R,
    modifiers: UniverseModifiers,
    setup: PlanetSetup,
) -> Biology {
    if setup != PlanetSetup::Normal {
        return Biology::Barren;
    }

    // Organic overrides mineral when both are set
    let mut skew = 0.0;
    if modifiers.mineral_rich {
        skew = MINERAL_RICH_BIOLOGY_SKEW;
    }
    if modifiers.organic_rich {
        skew = ORGANIC_RICH_BIOLOGY_SKEW;
    }

    if determine_probability(rng, 6.0 + skew) {
        return Biology::Gaia;
    }
    if determine_probability(rng, 10.0 + skew) {
        return Biology::Terran;
    }
    if determine_probability(rng, 19.0) {
        return if modifiers.organic_rich {
            pick_even(rng, Biology::Tundra, Biology::Desert)
        } else {
            pick_even(rng, Biology::Swamp, Biology::Ocean)
        };
    }
    if determine_probability(rng, 36.0 + skew) {
        return if modifiers.mineral_rich {
            pick_even(rng, Biology::Barren, Biology::Radiated)
        } else if modifiers.organic_rich {
            pick_even(rng, Biology::Swamp, Biology::Ocean)
        } else {
            pick_even(rng, Biology::Tundra, Biology::Desert)
        };
    }
    if determine_probability(rng, 19.0) {
        return if modifiers.mineral_rich {
            pick_even(rng, Biology::Tundra, Biology::Desert)
        } else {
            pick_even(rng, Biology::Barren, Biology::Radiated)
        };
    }
    if determine_probability(rng, 10.0) {
        return Biology::Toxic;
    }

    pick_even(rng, Biology::Barren, Biology::Radiated)
}

/// Stage 5: gravity follows size. Small worlds lean low, large worlds lean high.
pub fn determine_gravity<R: Rng + ?Sized>(rng: &mut R, size: PlanetSize) -> Gravity {
    match size {
        PlanetSize::Tiny => pick_even(rng, Gravity::Low, Gravity::Normal),
        PlanetSize::Small => pick_skewed(rng, Gravity::Low, Gravity::Normal, GRAVITY_SKEW),
        PlanetSize::Normal => {
            if determine_probability(rng, NORMAL_SIZE_GRAVITY_SHIFT_CHANCE) {
                Gravity::Low
            } else if determine_probability(rng, NORMAL_SIZE_GRAVITY_SHIFT_CHANCE) {
                Gravity::High
            } else {
                Gravity::Normal
            }
        }
        PlanetSize::Large => pick_skewed(rng, Gravity::High, Gravity::Normal, GRAVITY_SKEW),
        PlanetSize::Huge => pick_even(rng, Gravity::High, Gravity::Normal),
    }
}

/// Stage 6: natives and artefacts on living worlds, gem or gold deposits by
/// mineral tier. Gold is only rolled when no gems were found.
pub fn determine_specialities<R: Rng + ?Sized>(
    rng: &mut R,
    biology: Biology,
    minerals: Minerals,
) -> Specialities {
    let mut specialities = Specialities::default();

    let natives_chance = match biology {
        Biology::Gaia => Some(GAIA_NATIVES_CHANCE),
        Biology::Terran => Some(TERRAN_NATIVES_CHANCE),
        _ => None,
    };
    if let Some(chance) = natives_chance {
        specialities.natives = determine_probability(rng, chance);
    }

    if biology.supports_life() {
        specialities.artefacts = determine_probability(rng, ARTEFACTS_CHANCE);
    }

    if let Some(chance) = minerals.deposit_chance() {
        specialities.gem_deposits = determine_probability(rng, chance);
        if !specialities.gem_deposits {
            specialities.gold_deposits = determine_probability(rng, chance);
        }
    }

    specialities
}
