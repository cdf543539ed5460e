//! Planet model
//!
//! A planet's full attribute set, derived from the universe modifiers by a
//! six-stage generation pipeline. Stages run strictly in order because each
//! one reads the results of the stages before it.

pub mod generation;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::constants::{Biology, Gravity, Minerals, PlanetSetup, PlanetSize};

use generation::{
    determine_biology, determine_gravity, determine_minerals, determine_size,
    determine_specialities, determine_type,
};

/// Galaxy-wide flags that skew generation. Both may be set at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseModifiers {
    pub mineral_rich: bool,
    pub organic_rich: bool,
}

/// Special features found on a planet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialities {
    /// Native inhabitants
    pub natives: bool,
    /// Remains of an ancient civilization
    pub artefacts: bool,
    pub gold_deposits: bool,
    pub gem_deposits: bool,
}

impl Specialities {
    pub fn any(&self) -> bool {
        self.natives || self.artefacts || self.gold_deposits || self.gem_deposits
    }
}

/// A generated planet. Once built it is plain data for the rest of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    modifiers: UniverseModifiers,
    setup: PlanetSetup,
    size: PlanetSize,
    minerals: Minerals,
    biology: Biology,
    gravity: Gravity,
    specialities: Specialities,
}

impl Planet {
    /// Generate a new planet under the given universe modifiers.
    pub fn randomized<R: Rng + ?Sized>(modifiers: UniverseModifiers, rng: &mut R) -> Self {
        let setup = determine_type(rng);
        log::debug!("type: {}", setup.name());
        let size = determine_size(rng, setup);
        log::debug!("size: {}", size.name());
        let minerals = determine_minerals(rng, modifiers);
        log::debug!("minerals: {}", minerals.name());
        let biology = determine_biology(rng, modifiers, setup);
        log::debug!("biology: {}", biology.name());
        let gravity = determine_gravity(rng, size);
        log::debug!("gravity: {}", gravity.name());
        let specialities = determine_specialities(rng, biology, minerals);
        log::debug!("specialities: {:?}", specialities);

        Planet {
            modifiers,
            setup,
            size,
            minerals,
            biology,
            gravity,
            specialities,
        }
    }

    /// Re-roll every attribute, keeping the universe modifiers.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Planet::randomized(self.modifiers, rng);
    }

    // ========== Accessor Methods ==========

    pub fn modifiers(&self) -> UniverseModifiers {
        self.modifiers
    }

    pub fn setup(&self) -> PlanetSetup {
        self.setup
    }

    pub fn size(&self) -> PlanetSize {
        self.size
    }

    pub fn minerals(&self) -> Minerals {
        self.minerals
    }

    pub fn biology(&self) -> Biology {
        self.biology
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn specialities(&self) -> Specialities {
        self.specialities
    }
}
