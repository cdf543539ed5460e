use crate::io::OutputWriter;
use crate::models::constants::{Biology, Gravity, Minerals, PlanetSetup, PlanetSize};
use crate::models::planet::Planet;
use crate::services::survey::PlanetCensus;

pub struct PlanetPresenter;

impl PlanetPresenter {
    pub fn show_planet(index: usize, planet: &Planet, output: &mut dyn OutputWriter) {
        output.writeln(&format!("PLANET {}", index));
        output.writeln(&format!("  {:<14}{}", "TYPE", planet.setup().name()));
        output.writeln(&format!("  {:<14}{}", "SIZE", planet.size().name()));
        output.writeln(&format!("  {:<14}{}", "MINERALS", planet.minerals().name()));
        output.writeln(&format!("  {:<14}{}", "BIOLOGY", planet.biology().name()));
        output.writeln(&format!("  {:<14}{}", "GRAVITY", planet.gravity().name()));

        let s = planet.specialities();
        let mut specials = Vec::new();
        if s.natives {
            specials.push("Natives");
        }
        if s.artefacts {
            specials.push("Artefacts");
        }
        if s.gem_deposits {
            specials.push("Gem deposits");
        }
        if s.gold_deposits {
            specials.push("Gold deposits");
        }
        let specials = if specials.is_empty() {
            "NONE".to_string()
        } else {
            specials.join(", ")
        };
        output.writeln(&format!("  {:<14}{}", "SPECIALS", specials));
    }
}

pub struct CensusPresenter;

impl CensusPresenter {
    pub fn show_census(census: &PlanetCensus, output: &mut dyn OutputWriter) {
        output.writeln(&format!("CENSUS OF {} PLANETS", census.total()));

        output.writeln("TYPE");
        for setup in PlanetSetup::ALL.iter() {
            Self::show_row(census, setup.name(), census.setup_count(*setup), output);
        }
        output.writeln("SIZE");
        for size in PlanetSize::ALL.iter() {
            Self::show_row(census, size.name(), census.size_count(*size), output);
        }
        output.writeln("MINERALS");
        for minerals in Minerals::ALL.iter() {
            Self::show_row(census, minerals.name(), census.minerals_count(*minerals), output);
        }
        output.writeln("BIOLOGY");
        for biology in Biology::ALL.iter() {
            Self::show_row(census, biology.name(), census.biology_count(*biology), output);
        }
        output.writeln("GRAVITY");
        for gravity in Gravity::ALL.iter() {
            Self::show_row(census, gravity.name(), census.gravity_count(*gravity), output);
        }
        output.writeln("SPECIALS");
        Self::show_row(census, "Natives", census.natives(), output);
        Self::show_row(census, "Artefacts", census.artefacts(), output);
        Self::show_row(census, "Gem deposits", census.gem_deposits(), output);
        Self::show_row(census, "Gold deposits", census.gold_deposits(), output);
    }

    fn show_row(census: &PlanetCensus, label: &str, count: usize, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "  {:<14}{:>7}{:>8.1}%",
            label,
            count,
            census.percent(count)
        ));
    }
}
