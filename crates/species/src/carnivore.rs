use crate::herbivore::Herbivore;
use fauna_common::AnimalId;
use fauna_common::config::{LION_POWER, TIGER_POWER, WOLF_POWER};

/// Power gained on a successful hunt and lost on a failed one.
pub const POWER_STEP: f64 = 10.0;

/// Whether a predation attempt succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredationOutcome {
    /// Prey was eaten and the carnivore gained power.
    Succeeded,
    /// Prey survived and the carnivore lost power.
    Failed,
}

impl PredationOutcome {
    /// Strict greater-than: equal power and weight is a failure.
    pub fn resolve(power: f64, prey_weight: f64) -> Self {
        if power > prey_weight {
            Self::Succeeded
        } else {
            Self::Failed
        }
    }
}

/// Record of one predation attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Predation {
    pub carnivore: &'static str,
    pub herbivore: &'static str,
    pub outcome: PredationOutcome,
    /// Carnivore power after the attempt.
    pub power: f64,
    pub prey_weight: f64,
}

impl Predation {
    pub fn succeeded(&self) -> bool {
        self.outcome == PredationOutcome::Succeeded
    }
}

impl std::fmt::Display for Predation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            PredationOutcome::Succeeded => write!(
                f,
                "{} eats {} and gains power",
                self.carnivore, self.herbivore
            ),
            PredationOutcome::Failed => write!(
                f,
                "{} fails to eat {} and loses power",
                self.carnivore, self.herbivore
            ),
        }
    }
}

/// Capability shared by all meat eaters.
pub trait Carnivore: std::fmt::Debug {
    fn id(&self) -> AnimalId;
    fn name(&self) -> &'static str;
    fn power(&self) -> f64;
    fn set_power(&mut self, power: f64);

    /// Try to eat `prey`. On success the prey dies and the carnivore gains
    /// [`POWER_STEP`]; otherwise the carnivore loses [`POWER_STEP`].
    fn eat(&mut self, prey: &mut dyn Herbivore) -> Predation {
        let prey_weight = prey.weight();
        let outcome = PredationOutcome::resolve(self.power(), prey_weight);
        match outcome {
            PredationOutcome::Succeeded => {
                self.set_power(self.power() + POWER_STEP);
                prey.set_alive(false);
            }
            PredationOutcome::Failed => {
                self.set_power(self.power() - POWER_STEP);
            }
        }
        Predation {
            carnivore: self.name(),
            herbivore: prey.name(),
            outcome,
            power: self.power(),
            prey_weight,
        }
    }
}

macro_rules! carnivore_variant {
    ($(#[$meta:meta])* $ty:ident, $default_power:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $ty {
            id: AnimalId,
            power: f64,
        }

        impl $ty {
            pub const DEFAULT_POWER: f64 = $default_power;

            /// A carnivore at [`Self::DEFAULT_POWER`].
            pub fn new() -> Self {
                Self::with_power(Self::DEFAULT_POWER)
            }

            pub fn with_power(power: f64) -> Self {
                Self {
                    id: AnimalId::new(),
                    power,
                }
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Carnivore for $ty {
            fn id(&self) -> AnimalId {
                self.id
            }

            fn name(&self) -> &'static str {
                stringify!($ty)
            }

            fn power(&self) -> f64 {
                self.power
            }

            fn set_power(&mut self, power: f64) {
                self.power = power;
            }
        }
    };
}

carnivore_variant!(
    /// Produced by the Africa factory.
    Lion,
    LION_POWER
);
carnivore_variant!(
    /// Produced by the North America factory.
    Wolf,
    WOLF_POWER
);
carnivore_variant!(
    /// Produced by the Eurasia factory.
    Tiger,
    TIGER_POWER
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::herbivore::{Bison, Elk, Wildebeest};

    #[test]
    fn default_powers() {
        assert_eq!(Lion::new().power(), 250.0);
        assert_eq!(Wolf::new().power(), 100.0);
        assert_eq!(Tiger::new().power(), 300.0);
    }

    #[test]
    fn stronger_carnivore_eats_prey() {
        let mut lion = Lion::with_power(250.0);
        let mut prey = Wildebeest::new();
        let p = lion.eat(&mut prey);
        assert!(p.succeeded());
        assert!(!prey.is_alive());
        assert_eq!(lion.power(), 260.0);
        assert_eq!(p.power, 260.0);
        assert_eq!(p.prey_weight, 200.0);
        assert_eq!(p.to_string(), "Lion eats Wildebeest and gains power");
    }

    #[test]
    fn weaker_carnivore_fails() {
        let mut tiger = Tiger::new();
        let mut prey = Elk::new();
        let p = tiger.eat(&mut prey);
        assert_eq!(p.outcome, PredationOutcome::Failed);
        assert!(prey.is_alive());
        assert_eq!(tiger.power(), 290.0);
        assert_eq!(p.to_string(), "Tiger fails to eat Elk and loses power");
    }

    #[test]
    fn equal_power_and_weight_fails() {
        let mut wolf = Wolf::with_power(100.0);
        let mut prey = Bison::new();
        let p = wolf.eat(&mut prey);
        assert_eq!(p.outcome, PredationOutcome::Failed);
        assert!(prey.is_alive());
        assert_eq!(wolf.power(), 90.0);
    }

    #[test]
    fn resolve_is_strict() {
        assert_eq!(
            PredationOutcome::resolve(101.0, 100.0),
            PredationOutcome::Succeeded
        );
        assert_eq!(
            PredationOutcome::resolve(100.0, 100.0),
            PredationOutcome::Failed
        );
        assert_eq!(
            PredationOutcome::resolve(0.0, 100.0),
            PredationOutcome::Failed
        );
    }

    #[test]
    fn set_power_overrides_default() {
        let mut lion = Lion::new();
        lion.set_power(42.0);
        assert_eq!(lion.power(), 42.0);
    }
}
