pub mod catalog_file;
#[cfg(feature = "cli")]
pub mod cli;

pub use catalog_file::{load_catalog, CatalogFile, CellRecord};
#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Fallback EV consumption factor, 3.3 kWh per 100 km. Used only when
/// neither the CLI flag nor the catalog file supplies one.
pub const DEFAULT_ENERGY_PER_KM: f64 = 0.033;
