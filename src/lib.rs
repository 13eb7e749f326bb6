pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::core::{catalog::CellCatalog, sizing::SizingService};
pub use crate::domain::model::{
    AvailableSpace, CellGeometry, CellSpec, EnergyDemand, FitResult, FitStatus, FormFactor,
    PackGeometry, PackTopology, Requirement, SizingResult,
};
pub use crate::domain::ports::CellSource;
pub use crate::utils::error::{Result, SizingError};
