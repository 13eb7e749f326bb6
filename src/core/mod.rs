pub mod catalog;
pub mod fit;
pub mod geometry;
pub mod requirement;
pub mod sizing;
pub mod topology;

pub use crate::domain::model::{
    AvailableSpace, CellGeometry, CellSpec, EnergyDemand, FitResult, FitStatus, FormFactor,
    PackGeometry, PackTopology, Requirement, SizingResult,
};
pub use crate::domain::ports::CellSource;
pub use crate::utils::error::Result;
pub use self::catalog::CellCatalog;
pub use self::sizing::SizingService;
