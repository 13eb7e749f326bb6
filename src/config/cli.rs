use crate::domain::model::{AvailableSpace, Requirement};
use crate::utils::error::{Result, SizingError};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ApplicationKind {
    Ev,
    Stationary,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "pack-sizer")]
#[command(about = "Battery pack sizing calculator for EV and stationary storage")]
pub struct CliConfig {
    #[arg(long, value_enum)]
    pub application: ApplicationKind,

    #[arg(long, help = "Target pack voltage in V")]
    pub target_voltage: f64,

    #[arg(long, help = "Expected range in km (EV only)")]
    pub km: Option<f64>,

    #[arg(long, help = "Hours of backup required (stationary only)")]
    pub backup_hours: Option<f64>,

    #[arg(long, help = "Total load in kW (stationary only)")]
    pub load_kw: Option<f64>,

    #[arg(long, help = "Preferred cell type by catalog name")]
    pub cell: Option<String>,

    #[arg(long, help = "Available length in mm")]
    pub space_length: Option<f64>,

    #[arg(long, help = "Available breadth in mm")]
    pub space_breadth: Option<f64>,

    #[arg(long, help = "Available height in mm")]
    pub space_height: Option<f64>,

    #[arg(long, help = "Catalog file (.toml or .csv); built-in cells when omitted")]
    pub catalog: Option<PathBuf>,

    #[arg(long, help = "EV consumption in kWh per km (overrides the catalog file)")]
    pub energy_per_km: Option<f64>,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn requirement(&self) -> Result<Requirement> {
        match self.application {
            ApplicationKind::Ev => {
                let km_expected = self.km.ok_or_else(|| SizingError::InvalidInput {
                    field: "km".to_string(),
                    reason: "required for EV sizing".to_string(),
                })?;

                Ok(Requirement::Ev {
                    target_voltage: self.target_voltage,
                    km_expected,
                })
            }
            ApplicationKind::Stationary => {
                let backup_hours = self.backup_hours.ok_or_else(|| SizingError::InvalidInput {
                    field: "backup_hours".to_string(),
                    reason: "required for stationary sizing".to_string(),
                })?;
                let total_load_kw = self.load_kw.ok_or_else(|| SizingError::InvalidInput {
                    field: "load_kw".to_string(),
                    reason: "required for stationary sizing".to_string(),
                })?;

                Ok(Requirement::Stationary {
                    target_voltage: self.target_voltage,
                    backup_hours,
                    total_load_kw,
                })
            }
        }
    }

    /// None when no envelope flag was given at all; missing axes default
    /// to zero so a partially specified envelope fails fit honestly.
    pub fn available_space(&self) -> Option<AvailableSpace> {
        match (self.space_length, self.space_breadth, self.space_height) {
            (None, None, None) => None,
            (length, breadth, height) => Some(AvailableSpace {
                length_mm: length.unwrap_or(0.0),
                breadth_mm: breadth.unwrap_or(0.0),
                height_mm: height.unwrap_or(0.0),
            }),
        }
    }
}
