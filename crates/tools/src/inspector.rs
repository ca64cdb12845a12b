use fauna_kernel::{AnimalWorld, WorldEvent};

/// World inspector for developer tooling.
///
/// Provides read-only queries against an animal world for debug logging.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the world state.
    pub fn summary(world: &AnimalWorld) -> WorldSummary {
        let herbivore = world.herbivore();
        let carnivore = world.carnivore();
        WorldSummary {
            herbivore: herbivore.name(),
            weight: herbivore.weight(),
            alive: herbivore.is_alive(),
            carnivore: carnivore.name(),
            power: carnivore.power(),
            pending_events: world.events().len(),
        }
    }

    /// Number of predation attempts recorded in the event log.
    pub fn hunts(world: &AnimalWorld) -> usize {
        world
            .events()
            .iter()
            .filter(|e| matches!(e, WorldEvent::Preyed { .. }))
            .count()
    }
}

/// Summary of world state for the inspector.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSummary {
    pub herbivore: &'static str,
    pub weight: f64,
    pub alive: bool,
    pub carnivore: &'static str,
    pub power: f64,
    pub pending_events: usize,
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World: {} weight={} alive={} | {} power={} | pending_events={}",
            self.herbivore,
            self.weight,
            self.alive,
            self.carnivore,
            self.power,
            self.pending_events
        )
    }
}
