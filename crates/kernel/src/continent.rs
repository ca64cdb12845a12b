use fauna_species::{Bison, Carnivore, Elk, Herbivore, Lion, Tiger, Wildebeest, Wolf};
use std::str::FromStr;

/// Abstract factory for one family of animals.
///
/// Each call returns a freshly owned animal; factories hold no state.
pub trait ContinentFactory {
    fn create_herbivore(&self) -> Box<dyn Herbivore>;
    fn create_carnivore(&self) -> Box<dyn Carnivore>;
}

/// The closed set of continents, each a fixed herbivore/carnivore pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Continent {
    /// Wildebeest and Lion.
    Africa,
    /// Bison and Wolf.
    NorthAmerica,
    /// Elk and Tiger.
    Eurasia,
}

impl Continent {
    /// All continents in report order.
    pub const ALL: [Continent; 3] = [Self::Africa, Self::NorthAmerica, Self::Eurasia];

    /// `only` on its own, or every continent in report order.
    pub fn selection(only: Option<Continent>) -> Vec<Continent> {
        match only {
            Some(continent) => vec![continent],
            None => Self::ALL.to_vec(),
        }
    }

    /// Human-readable name used as the report heading.
    pub fn name(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::NorthAmerica => "North America",
            Self::Eurasia => "Eurasia",
        }
    }
}

impl ContinentFactory for Continent {
    fn create_herbivore(&self) -> Box<dyn Herbivore> {
        match self {
            Self::Africa => Box::new(Wildebeest::new()),
            Self::NorthAmerica => Box::new(Bison::new()),
            Self::Eurasia => Box::new(Elk::new()),
        }
    }

    fn create_carnivore(&self) -> Box<dyn Carnivore> {
        match self {
            Self::Africa => Box::new(Lion::new()),
            Self::NorthAmerica => Box::new(Wolf::new()),
            Self::Eurasia => Box::new(Tiger::new()),
        }
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a continent name does not match any known continent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown continent {0:?} (expected africa, north-america or eurasia)")]
pub struct UnknownContinent(pub String);

impl FromStr for Continent {
    type Err = UnknownContinent;

    /// Case-insensitive; spaces, dashes and underscores are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "africa" => Ok(Self::Africa),
            "northamerica" => Ok(Self::NorthAmerica),
            "eurasia" => Ok(Self::Eurasia),
            _ => Err(UnknownContinent(s.to_string())),
        }
    }
}
