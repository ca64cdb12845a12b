use crate::continent::ContinentFactory;
use fauna_common::{AnimalId, FaunaConfig};
use fauna_species::{Carnivore, Grazing, Herbivore, Predation, PredationOutcome};

/// An event record produced by every mutation to the world.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldEvent {
    /// The factory populated the world.
    Created {
        herbivore: AnimalId,
        carnivore: AnimalId,
    },
    /// The herbivore grazed and now has the given weight.
    Grazed { herbivore: AnimalId, weight: f64 },
    /// The carnivore tried to eat the herbivore. `power` is after the attempt.
    Preyed {
        carnivore: AnimalId,
        herbivore: AnimalId,
        outcome: PredationOutcome,
        power: f64,
    },
}

/// A one-shot world holding the herbivore and carnivore of a single continent.
///
/// Both animals are created by the factory at construction and are owned by
/// the world until it is dropped; they are never replaced.
#[derive(Debug)]
pub struct AnimalWorld {
    herbivore: Box<dyn Herbivore>,
    carnivore: Box<dyn Carnivore>,
    /// Append-only event log of all mutations.
    event_log: Vec<WorldEvent>,
}

impl AnimalWorld {
    /// Populate a world from `factory` with the animals' built-in defaults.
    pub fn new<F: ContinentFactory + ?Sized>(factory: &F) -> Self {
        let herbivore = factory.create_herbivore();
        let carnivore = factory.create_carnivore();
        tracing::debug!(
            herbivore = herbivore.name(),
            carnivore = carnivore.name(),
            power = carnivore.power(),
            "world created"
        );
        let event_log = vec![WorldEvent::Created {
            herbivore: herbivore.id(),
            carnivore: carnivore.id(),
        }];
        Self {
            herbivore,
            carnivore,
            event_log,
        }
    }

    /// Populate a world and apply the configured starting power to its carnivore.
    pub fn with_config<F: ContinentFactory + ?Sized>(factory: &F, config: &FaunaConfig) -> Self {
        let mut world = Self::new(factory);
        if let Some(power) = config.carnivore_power.get(world.carnivore.name()) {
            world.carnivore.set_power(power);
        }
        world
    }

    /// Let the herbivore graze once. Returns `None` if it is no longer alive.
    pub fn meals_herbivores(&mut self) -> Option<Grazing> {
        if !self.herbivore.is_alive() {
            tracing::debug!(
                herbivore = self.herbivore.name(),
                "dead herbivore skips grazing"
            );
            return None;
        }
        self.herbivore.eat_grass();
        let weight = self.herbivore.weight();
        self.event_log.push(WorldEvent::Grazed {
            herbivore: self.herbivore.id(),
            weight,
        });
        Some(Grazing {
            herbivore: self.herbivore.name(),
            weight,
        })
    }

    /// Let the carnivore hunt the herbivore once. Returns `None` if the
    /// herbivore is already dead.
    pub fn nutrition_carnivores(&mut self) -> Option<Predation> {
        if !self.herbivore.is_alive() {
            tracing::debug!(
                herbivore = self.herbivore.name(),
                "dead herbivore is not hunted"
            );
            return None;
        }
        let predation = self.carnivore.eat(self.herbivore.as_mut());
        tracing::debug!(
            carnivore = predation.carnivore,
            herbivore = predation.herbivore,
            succeeded = predation.succeeded(),
            power = predation.power,
            prey_weight = predation.prey_weight,
            "predation resolved"
        );
        self.event_log.push(WorldEvent::Preyed {
            carnivore: self.carnivore.id(),
            herbivore: self.herbivore.id(),
            outcome: predation.outcome,
            power: predation.power,
        });
        Some(predation)
    }

    pub fn herbivore(&self) -> &dyn Herbivore {
        self.herbivore.as_ref()
    }

    pub fn carnivore(&self) -> &dyn Carnivore {
        self.carnivore.as_ref()
    }

    /// Mutable access for assigning a known state before running.
    pub fn herbivore_mut(&mut self) -> &mut dyn Herbivore {
        self.herbivore.as_mut()
    }

    /// Mutable access for assigning a known power before running.
    pub fn carnivore_mut(&mut self) -> &mut dyn Carnivore {
        self.carnivore.as_mut()
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.event_log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::continent::Continent;
    use fauna_common::CarnivorePowers;

    #[test]
    fn world_starts_with_factory_pair() {
        let w = AnimalWorld::new(&Continent::NorthAmerica);
        assert_eq!(w.herbivore().name(), "Bison");
        assert_eq!(w.carnivore().name(), "Wolf");
        assert!(w.herbivore().is_alive());
        assert_eq!(w.events().len(), 1);
        assert!(matches!(w.events()[0], WorldEvent::Created { .. }));
    }

    #[test]
    fn africa_scenario() {
        let mut w = AnimalWorld::new(&Continent::Africa);
        assert_eq!(w.herbivore().weight(), 200.0);
        assert!(w.herbivore().is_alive());
        w.carnivore_mut().set_power(250.0);

        let grazing = w.meals_herbivores().unwrap();
        assert_eq!(grazing.weight, 210.0);
        assert_eq!(w.herbivore().weight(), 210.0);

        let predation = w.nutrition_carnivores().unwrap();
        assert!(predation.succeeded());
        assert!(!w.herbivore().is_alive());
        assert_eq!(w.carnivore().power(), 260.0);
        assert!(predation.to_string().contains("Lion eats Wildebeest"));
    }

    #[test]
    fn failed_hunt_leaves_prey_alive() {
        let mut w = AnimalWorld::new(&Continent::Eurasia);
        w.meals_herbivores();
        let predation = w.nutrition_carnivores().unwrap();
        assert!(!predation.succeeded());
        assert!(w.herbivore().is_alive());
        assert_eq!(w.carnivore().power(), 290.0);
    }

    #[test]
    fn dead_herbivore_is_left_alone() {
        let mut w = AnimalWorld::new(&Continent::Africa);
        w.herbivore_mut().set_alive(false);
        let weight = w.herbivore().weight();
        let power = w.carnivore().power();
        let events_before = w.events().len();

        assert!(w.meals_herbivores().is_none());
        assert!(w.nutrition_carnivores().is_none());

        assert_eq!(w.herbivore().weight(), weight);
        assert_eq!(w.carnivore().power(), power);
        assert!(!w.herbivore().is_alive());
        assert_eq!(w.events().len(), events_before);
    }

    #[test]
    fn eaten_herbivore_stops_grazing() {
        let mut w = AnimalWorld::new(&Continent::Africa);
        assert!(w.nutrition_carnivores().unwrap().succeeded());
        assert!(w.meals_herbivores().is_none());
        assert!(w.nutrition_carnivores().is_none());
        assert_eq!(w.herbivore().weight(), 200.0);
    }

    #[test]
    fn config_overrides_starting_power() {
        let config = FaunaConfig {
            carnivore_power: CarnivorePowers {
                wolf: 500.0,
                ..CarnivorePowers::default()
            },
        };
        let mut w = AnimalWorld::with_config(&Continent::NorthAmerica, &config);
        assert_eq!(w.carnivore().power(), 500.0);
        w.meals_herbivores();
        assert!(w.nutrition_carnivores().unwrap().succeeded());
    }

    #[test]
    fn events_record_each_action() {
        let mut w = AnimalWorld::new(&Continent::Africa);
        w.meals_herbivores();
        w.nutrition_carnivores();
        let herbivore = w.herbivore().id();
        let events = w.drain_events();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[1],
            WorldEvent::Grazed {
                herbivore,
                weight: 210.0
            }
        );
        match &events[2] {
            WorldEvent::Preyed { outcome, power, .. } => {
                assert_eq!(*outcome, PredationOutcome::Succeeded);
                assert_eq!(*power, 260.0);
            }
            other => panic!("expected Preyed, got {other:?}"),
        }
        assert!(w.events().is_empty());
    }

    #[test]
    fn works_through_dyn_factory() {
        let factory: &dyn ContinentFactory = &Continent::Eurasia;
        let w = AnimalWorld::new(factory);
        assert_eq!(w.herbivore().name(), "Elk");
    }
}
