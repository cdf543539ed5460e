use serde::{Deserialize, Serialize};

/// Chance (percent) that a planet is an asteroid field or a gas giant.
pub const NON_PLANET_CHANCE: f64 = 30.0;

/// Extreme tier of the discretized normal distribution (two sigma tails).
pub const EXTREME_TIER_CHANCE: f64 = 4.6;
/// Outer tier of the discretized normal distribution (one sigma band).
pub const OUTER_TIER_CHANCE: f64 = 27.2;

pub const MINERAL_RICH_TIER_SKEW: f64 = 5.0;
pub const MINERAL_RICH_PENALTY: f64 = -15.0;
pub const ORGANIC_RICH_PENALTY: f64 = 15.0;

pub const MINERAL_RICH_BIOLOGY_SKEW: f64 = -5.0;
pub const ORGANIC_RICH_BIOLOGY_SKEW: f64 = 5.0;

/// Skew toward the size-appropriate gravity on small and large planets.
pub const GRAVITY_SKEW: f64 = 15.0;
pub const NORMAL_SIZE_GRAVITY_SHIFT_CHANCE: f64 = 15.0;

pub const GAIA_NATIVES_CHANCE: f64 = 15.0;
pub const TERRAN_NATIVES_CHANCE: f64 = 10.0;
pub const ARTEFACTS_CHANCE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetSetup {
    Normal = 0,
    Asteroids = 1,
    GasGiant = 2,
}

impl PlanetSetup {
    pub const COUNT: usize = 3;

    pub const ALL: [PlanetSetup; PlanetSetup::COUNT] = [
        PlanetSetup::Normal,
        PlanetSetup::Asteroids,
        PlanetSetup::GasGiant,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PlanetSetup::Normal => "Normal",
            PlanetSetup::Asteroids => "Asteroids",
            PlanetSetup::GasGiant => "Gas giant",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetSize {
    Tiny = 0,
    Small = 1,
    Normal = 2,
    Large = 3,
    Huge = 4,
}

impl PlanetSize {
    pub const COUNT: usize = 5;

    pub const ALL: [PlanetSize; PlanetSize::COUNT] = [
        PlanetSize::Tiny,
        PlanetSize::Small,
        PlanetSize::Normal,
        PlanetSize::Large,
        PlanetSize::Huge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PlanetSize::Tiny => "Tiny",
            PlanetSize::Small => "Small",
            PlanetSize::Normal => "Normal",
            PlanetSize::Large => "Large",
            PlanetSize::Huge => "Huge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Minerals {
    UltraRich = 0,
    Rich = 1,
    Abundant = 2,
    Poor = 3,
    UltraPoor = 4,
}

impl Minerals {
    pub const COUNT: usize = 5;

    pub const ALL: [Minerals; Minerals::COUNT] = [
        Minerals::UltraRich,
        Minerals::Rich,
        Minerals::Abundant,
        Minerals::Poor,
        Minerals::UltraPoor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Minerals::UltraRich => "Ultra rich",
            Minerals::Rich => "Rich",
            Minerals::Abundant => "Abundant",
            Minerals::Poor => "Poor",
            Minerals::UltraPoor => "Ultra poor",
        }
    }

    /// Chance (percent) of gem deposits, and separately of gold deposits
    /// when no gems were found. `None` for tiers that never carry deposits.
    pub fn deposit_chance(&self) -> Option<f64> {
        match self {
            Minerals::UltraRich => Some(15.0),
            Minerals::Rich => Some(10.0),
            Minerals::Abundant => Some(5.0),
            Minerals::Poor | Minerals::UltraPoor => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biology {
    Gaia = 0,
    Terran = 1,
    Swamp = 2,
    Ocean = 3,
    Tundra = 4,
    Desert = 5,
    Barren = 6,
    Radiated = 7,
    Toxic = 8,
}

impl Biology {
    pub const COUNT: usize = 9;

    pub const ALL: [Biology; Biology::COUNT] = [
        Biology::Gaia,
        Biology::Terran,
        Biology::Swamp,
        Biology::Ocean,
        Biology::Tundra,
        Biology::Desert,
        Biology::Barren,
        Biology::Radiated,
        Biology::Toxic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Biology::Gaia => "Gaia",
            Biology::Terran => "Terran",
            Biology::Swamp => "Swamp",
            Biology::Ocean => "Ocean",
            Biology::Tundra => "Tundra",
            Biology::Desert => "Desert",
            Biology::Barren => "Barren",
            Biology::Radiated => "Radiated",
            Biology::Toxic => "Toxic",
        }
    }

    /// Gaia and Terran worlds can support life.
    pub fn supports_life(&self) -> bool {
        matches!(self, Biology::Gaia | Biology::Terran)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gravity {
    Low = 0,
    Normal = 1,
    High = 2,
}

impl Gravity {
    pub const COUNT: usize = 3;

    pub const ALL: [Gravity; Gravity::COUNT] = [Gravity::Low, Gravity::Normal, Gravity::High];

    pub fn name(&self) -> &'static str {
        match self {
            Gravity::Low => "Low",
            Gravity::Normal => "Normal",
            Gravity::High => "High",
        }
    }
}
