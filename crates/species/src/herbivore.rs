use fauna_common::AnimalId;

/// Weight gained by every call to [`Herbivore::eat_grass`].
pub const GRAZE_GAIN: f64 = 10.0;

/// Capability shared by all grass eaters.
pub trait Herbivore: std::fmt::Debug {
    fn id(&self) -> AnimalId;
    fn name(&self) -> &'static str;
    /// Graze once. Never fails and has no upper bound.
    fn eat_grass(&mut self);
    fn weight(&self) -> f64;
    fn is_alive(&self) -> bool;
    fn set_alive(&mut self, alive: bool);
}

/// Result of one grazing action, as reported by the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Grazing {
    pub herbivore: &'static str,
    pub weight: f64,
}

impl std::fmt::Display for Grazing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} eats grass and now weighs {} kg",
            self.herbivore, self.weight
        )
    }
}

macro_rules! herbivore_variant {
    ($(#[$meta:meta])* $ty:ident, $initial:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $ty {
            id: AnimalId,
            weight: f64,
            alive: bool,
        }

        impl $ty {
            pub const INITIAL_WEIGHT: f64 = $initial;

            /// A living animal at its initial weight.
            pub fn new() -> Self {
                Self {
                    id: AnimalId::new(),
                    weight: Self::INITIAL_WEIGHT,
                    alive: true,
                }
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Herbivore for $ty {
            fn id(&self) -> AnimalId {
                self.id
            }

            fn name(&self) -> &'static str {
                stringify!($ty)
            }

            fn eat_grass(&mut self) {
                self.weight += GRAZE_GAIN;
                tracing::debug!(
                    herbivore = self.name(),
                    id = %self.id.short(),
                    weight = self.weight,
                    "grazed"
                );
            }

            fn weight(&self) -> f64 {
                self.weight
            }

            fn is_alive(&self) -> bool {
                self.alive
            }

            fn set_alive(&mut self, alive: bool) {
                self.alive = alive;
            }
        }
    };
}

herbivore_variant!(
    /// African antelope, produced by the Africa factory.
    Wildebeest,
    200.0
);
herbivore_variant!(
    /// Produced by the North America factory.
    Bison,
    100.0
);
herbivore_variant!(
    /// Produced by the Eurasia factory.
    Elk,
    500.0
);
