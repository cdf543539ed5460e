use clap::Parser;

use crate::models::planet::UniverseModifiers;

#[derive(Parser, Debug, Clone)]
#[command(name = "openmoo")]
#[command(about = "Generate planets for a new galaxy")]
pub struct Args {
    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of planets to generate
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Mineral-rich universe
    #[arg(long)]
    pub mineral_rich: bool,

    /// Organic-rich universe
    #[arg(long)]
    pub organic_rich: bool,

    /// Print planets as JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Append a distribution summary of the generated planets
    #[arg(long)]
    pub census: bool,
}

impl Args {
    pub fn modifiers(&self) -> UniverseModifiers {
        UniverseModifiers {
            mineral_rich: self.mineral_rich,
            organic_rich: self.organic_rich,
        }
    }
}
