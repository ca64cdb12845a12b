//! Animal variants: grazing herbivores and preying carnivores.
//!
//! # Invariants
//! - Grazing always adds exactly [`GRAZE_GAIN`] to an herbivore's weight.
//! - Predation succeeds only when the carnivore's power is strictly greater
//!   than the prey's weight; ties fail.

pub mod carnivore;
pub mod herbivore;

pub use carnivore::{Carnivore, Lion, POWER_STEP, Predation, PredationOutcome, Tiger, Wolf};
pub use herbivore::{Bison, Elk, GRAZE_GAIN, Grazing, Herbivore, Wildebeest};
