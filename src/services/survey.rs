//! Survey service
//!
//! Generates batches of planets for galaxy setup from one seeded generator,
//! and tallies how the generated attributes are distributed.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::constants::{Biology, Gravity, Minerals, PlanetSetup, PlanetSize};
use crate::models::errors::{GameError, GameResult};
use crate::models::planet::{Planet, UniverseModifiers};

/// A reproducible request for `count` planets.
#[derive(Debug, Clone, Copy)]
pub struct Survey {
    seed: u64,
    count: usize,
    modifiers: UniverseModifiers,
}

impl Survey {
    pub fn new(seed: u64, count: usize, modifiers: UniverseModifiers) -> GameResult<Self> {
        if count == 0 {
            return Err(GameError::InvalidInput(
                "planet count must be at least 1".to_string(),
            ));
        }
        Ok(Survey {
            seed,
            count,
            modifiers,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn modifiers(&self) -> UniverseModifiers {
        self.modifiers
    }

    /// Generate the planets. The same survey always yields the same planets.
    pub fn generate(&self) -> Vec<Planet> {
        log::info!(
            "surveying {} planet(s) with seed {} (mineral rich: {}, organic rich: {})",
            self.count,
            self.seed,
            self.modifiers.mineral_rich,
            self.modifiers.organic_rich
        );

        let mut rng = StdRng::seed_from_u64(self.seed);
        let planets: Vec<Planet> = (0..self.count)
            .map(|_| Planet::randomized(self.modifiers, &mut rng))
            .collect();

        log::info!("survey complete: {} planet(s) generated", planets.len());
        planets
    }
}

/// Attribute tallies over a batch of planets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetCensus {
    total: usize,
    setups: [usize; PlanetSetup::COUNT],
    sizes: [usize; PlanetSize::COUNT],
    minerals: [usize; Minerals::COUNT],
    biologies: [usize; Biology::COUNT],
    gravities: [usize; Gravity::COUNT],
    natives: usize,
    artefacts: usize,
    gold_deposits: usize,
    gem_deposits: usize,
}

impl PlanetCensus {
    pub fn from_planets(planets: &[Planet]) -> Self {
        let mut census = PlanetCensus::default();
        for planet in planets {
            census.record(planet);
        }
        census
    }

    pub fn record(&mut self, planet: &Planet) {
        self.total += 1;
        self.setups[planet.setup() as usize] += 1;
        self.sizes[planet.size() as usize] += 1;
        self.minerals[planet.minerals() as usize] += 1;
        self.biologies[planet.biology() as usize] += 1;
        self.gravities[planet.gravity() as usize] += 1;

        let specialities = planet.specialities();
        self.natives += specialities.natives as usize;
        self.artefacts += specialities.artefacts as usize;
        self.gold_deposits += specialities.gold_deposits as usize;
        self.gem_deposits += specialities.gem_deposits as usize;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn setup_count(&self, setup: PlanetSetup) -> usize {
        self.setups[setup as usize]
    }

    pub fn size_count(&self, size: PlanetSize) -> usize {
        self.sizes[size as usize]
    }

    pub fn minerals_count(&self, minerals: Minerals) -> usize {
        self.minerals[minerals as usize]
    }

    pub fn biology_count(&self, biology: Biology) -> usize {
        self.biologies[biology as usize]
    }

    pub fn gravity_count(&self, gravity: Gravity) -> usize {
        self.gravities[gravity as usize]
    }

    pub fn natives(&self) -> usize {
        self.natives
    }

    pub fn artefacts(&self) -> usize {
        self.artefacts
    }

    pub fn gold_deposits(&self) -> usize {
        self.gold_deposits
    }

    pub fn gem_deposits(&self) -> usize {
        self.gem_deposits
    }

    /// Share of the batch, in percent. An empty census reports 0%.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 * 100.0 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_is_rejected() {
        let result = Survey::new(1, 0, UniverseModifiers::default());
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }

    #[test]
    fn generates_requested_count() {
        let survey = Survey::new(9, 25, UniverseModifiers::default()).unwrap();
        assert_eq!(survey.generate().len(), 25);
    }

    #[test]
    fn same_seed_same_planets() {
        let modifiers = UniverseModifiers {
            mineral_rich: true,
            organic_rich: false,
        };
        let a = Survey::new(77, 50, modifiers).unwrap().generate();
        let b = Survey::new(77, 50, modifiers).unwrap().generate();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_produce_different_batches() {
        let a = Survey::new(1, 50, UniverseModifiers::default()).unwrap().generate();
        let b = Survey::new(2, 50, UniverseModifiers::default()).unwrap().generate();
        assert_ne!(a, b);
    }

    #[test]
    fn census_counts_sum_to_total() {
        let planets = Survey::new(3, 500, UniverseModifiers::default())
            .unwrap()
            .generate();
        let census = PlanetCensus::from_planets(&planets);

        assert_eq!(census.total(), 500);
        let setups: usize = PlanetSetup::ALL.iter().map(|s| census.setup_count(*s)).sum();
        let sizes: usize = PlanetSize::ALL.iter().map(|s| census.size_count(*s)).sum();
        let minerals: usize = Minerals::ALL.iter().map(|m| census.minerals_count(*m)).sum();
        let biologies: usize = Biology::ALL.iter().map(|b| census.biology_count(*b)).sum();
        let gravities: usize = Gravity::ALL.iter().map(|g| census.gravity_count(*g)).sum();
        assert_eq!(setups, 500);
        assert_eq!(sizes, 500);
        assert_eq!(minerals, 500);
        assert_eq!(biologies, 500);
        assert_eq!(gravities, 500);
    }

    #[test]
    fn empty_census_reports_zero_percent() {
        let census = PlanetCensus::from_planets(&[]);
        assert_eq!(census.total(), 0);
        assert_eq!(census.percent(0), 0.0);
    }

    #[test]
    fn percent_of_total() {
        let planets = Survey::new(4, 8, UniverseModifiers::default())
            .unwrap()
            .generate();
        let census = PlanetCensus::from_planets(&planets);
        assert_eq!(census.percent(2), 25.0);
    }
}
