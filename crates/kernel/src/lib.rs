//! World Kernel: continent factories and the one-shot animal world they populate.
//!
//! # Invariants
//! - A world owns exactly one herbivore and one carnivore for its lifetime.
//! - A dead herbivore is never fed or preyed upon again in the same world.
//! - Worlds share no state; running continents in any order gives the same reports.

pub mod continent;
pub mod report;
pub mod world;

pub use continent::{Continent, ContinentFactory, UnknownContinent};
pub use report::{ContinentReport, ContinentRun, run_continent, run_continents};
pub use world::{AnimalWorld, WorldEvent};
