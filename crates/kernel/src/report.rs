use crate::continent::Continent;
use crate::world::AnimalWorld;
use fauna_common::FaunaConfig;
use fauna_species::{Grazing, Predation};

/// What happened on one continent: a heading, up to two result lines and a
/// blank separator.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinentReport {
    pub continent: Continent,
    pub grazing: Option<Grazing>,
    pub predation: Option<Predation>,
}

impl ContinentReport {
    /// Graze, then hunt, in `world`.
    pub fn run(continent: Continent, world: &mut AnimalWorld) -> Self {
        let grazing = world.meals_herbivores();
        let predation = world.nutrition_carnivores();
        Self {
            continent,
            grazing,
            predation,
        }
    }
}

impl std::fmt::Display for ContinentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.continent)?;
        if let Some(grazing) = &self.grazing {
            writeln!(f, "{grazing}")?;
        }
        if let Some(predation) = &self.predation {
            writeln!(f, "{predation}")?;
        }
        writeln!(f)
    }
}

/// A finished run: the report plus the world it was produced from.
#[derive(Debug)]
pub struct ContinentRun {
    pub report: ContinentReport,
    pub world: AnimalWorld,
}

/// Build a fresh world for `continent` and run it once.
pub fn run_continent(continent: Continent, config: &FaunaConfig) -> ContinentRun {
    let mut world = AnimalWorld::with_config(&continent, config);
    let report = ContinentReport::run(continent, &mut world);
    ContinentRun { report, world }
}

/// Run each continent in `continents`, in order, each in its own world.
pub fn run_continents(continents: &[Continent], config: &FaunaConfig) -> Vec<ContinentRun> {
    continents
        .iter()
        .map(|&continent| run_continent(continent, config))
        .collect()
}
