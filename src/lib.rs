//! OpenMOO planet generator
//!
//! Procedural generation of planet attributes for a space-strategy game.
//!
//! # Overview
//!
//! A planet's type, size, minerals, biology, gravity and specialities are
//! derived in six ordered stages from two galaxy-wide modifiers
//! (mineral-rich and organic-rich universes). Every stage is a cascade of
//! weighted random checks that may depend on the stages before it.
//!
//! # Modules
//!
//! - [`models`] - Domain models (Planet, attribute enums, errors)
//! - [`services`] - Probability primitives, surveys and the CLI session
//! - [`io`] - Output abstraction for testing
//! - [`ui`] - Planet and census presenters
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust
//! use openmoo::{Planet, UniverseModifiers};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let planet = Planet::randomized(UniverseModifiers::default(), &mut rng);
//! println!("{} {}", planet.size().name(), planet.biology().name());
//! ```

pub mod cli;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use models::constants::{Biology, Gravity, Minerals, PlanetSetup, PlanetSize};
pub use models::errors::{GameError, GameResult};
pub use models::planet::{Planet, Specialities, UniverseModifiers};
pub use services::survey::{PlanetCensus, Survey};
