use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::io::OutputWriter;
use crate::models::errors::GameResult;
use crate::models::planet::{Planet, UniverseModifiers};
use crate::services::survey::{PlanetCensus, Survey};
use crate::ui::presenters::{CensusPresenter, PlanetPresenter};

/// JSON form of a survey; carries the seed so a run can be reproduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub seed: u64,
    pub modifiers: UniverseModifiers,
    pub planets: Vec<Planet>,
}

/// One command-line run: generate a survey and report it.
pub struct Session {
    survey: Survey,
    json: bool,
    census: bool,
}

impl Session {
    pub fn new(args: &Args, seed: u64) -> GameResult<Self> {
        Ok(Session {
            survey: Survey::new(seed, args.count, args.modifiers())?,
            json: args.json,
            census: args.census,
        })
    }

    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    pub fn run(&self, output: &mut dyn OutputWriter) -> GameResult<()> {
        let planets = self.survey.generate();
        let census = self.census.then(|| PlanetCensus::from_planets(&planets));

        if self.json {
            let report = SurveyReport {
                seed: self.survey.seed(),
                modifiers: self.survey.modifiers(),
                planets,
            };
            output.writeln(&serde_json::to_string_pretty(&report)?);
        } else {
            output.writeln(&format!("SEED {}", self.survey.seed()));
            for (i, planet) in planets.iter().enumerate() {
                output.writeln("");
                PlanetPresenter::show_planet(i + 1, planet, output);
            }
        }

        if let Some(census) = census {
            output.writeln("");
            CensusPresenter::show_census(&census, output);
        }
        Ok(())
    }
}
