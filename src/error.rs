use thiserror::Error;

use crate::domain::FundError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors loading or running a scenario file.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("duplicate name '{name}'")]
    DuplicateName { name: String },

    #[error("unknown person '{name}'")]
    UnknownPerson { name: String },

    #[error("unknown product '{name}'")]
    UnknownProduct { name: String },

    #[error("'{name}' cannot be on both sides of the same movement")]
    SameParty { name: String },

    #[error("'{name}' is listed more than once in the same step")]
    RepeatedRecipient { name: String },

    #[error("step {index} failed: {source}")]
    Step {
        index: usize,
        #[source]
        source: FundError,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Fund(#[from] FundError),
}

pub type Result<T> = std::result::Result<T, Error>;
