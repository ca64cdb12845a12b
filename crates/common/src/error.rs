use std::path::PathBuf;

/// Errors from loading or validating a [`FaunaConfig`](crate::FaunaConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{carnivore} power must be a finite non-negative number, got {value}")]
    InvalidPower { carnivore: &'static str, value: f64 },
}
