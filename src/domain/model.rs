use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormFactor {
    Prismatic,
    Cylindrical,
}

impl std::fmt::Display for FormFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormFactor::Prismatic => write!(f, "prismatic"),
            FormFactor::Cylindrical => write!(f, "cylindrical"),
        }
    }
}

/// Form-factor-specific cell dimensions. The variant carries exactly the
/// fields that apply to its shape, so a prismatic cell can never hold a
/// diameter and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form_factor", rename_all = "snake_case")]
pub enum CellGeometry {
    Prismatic {
        length_mm: f64,
        breadth_mm: f64,
        height_mm: f64,
    },
    Cylindrical {
        diameter_mm: f64,
        height_mm: f64,
        /// Cells per packing row; partial rows occupy a full row's footprint.
        rows_per_layer: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellSpec {
    pub name: String,
    pub chemistry: String,
    pub nominal_voltage: f64,
    pub capacity_ah: f64,
    pub weight_g: f64,
    #[serde(flatten)]
    pub geometry: CellGeometry,
}

impl CellSpec {
    pub fn form_factor(&self) -> FormFactor {
        match self.geometry {
            CellGeometry::Prismatic { .. } => FormFactor::Prismatic,
            CellGeometry::Cylindrical { .. } => FormFactor::Cylindrical,
        }
    }
}

/// What the user asks for, discriminated by application type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "application", rename_all = "snake_case")]
pub enum Requirement {
    Ev {
        target_voltage: f64,
        km_expected: f64,
    },
    Stationary {
        target_voltage: f64,
        backup_hours: f64,
        total_load_kw: f64,
    },
}

impl Requirement {
    pub fn target_voltage(&self) -> f64 {
        match *self {
            Requirement::Ev { target_voltage, .. } => target_voltage,
            Requirement::Stationary { target_voltage, .. } => target_voltage,
        }
    }
}

/// Energy and capacity the pack must provide at the target voltage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyDemand {
    pub required_energy_kwh: f64,
    pub required_capacity_ah: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvailableSpace {
    pub length_mm: f64,
    pub breadth_mm: f64,
    pub height_mm: f64,
}

impl AvailableSpace {
    pub fn volume_mm3(&self) -> f64 {
        self.length_mm * self.breadth_mm * self.height_mm
    }

    /// All-zero dims mean "no envelope given", not a zero-sized envelope.
    pub fn is_unset(&self) -> bool {
        self.length_mm == 0.0 && self.breadth_mm == 0.0 && self.height_mm == 0.0
    }
}

/// Series/parallel layout plus the electricals recomputed from the integer
/// counts. These may exceed the raw targets; that is reported, never
/// truncated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackTopology {
    pub series_count: u32,
    pub parallel_count: u32,
    pub pack_voltage: f64,
    pub pack_capacity_ah: f64,
    pub pack_energy_kwh: f64,
}

impl PackTopology {
    pub fn cell_count(&self) -> u32 {
        self.series_count * self.parallel_count
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackGeometry {
    pub length_mm: f64,
    pub breadth_mm: f64,
    pub height_mm: f64,
    pub volume_mm3: f64,
    pub weight_g: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitStatus {
    Fits,
    DoesNotFit,
    /// No envelope was given, so fit was not evaluated.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub status: FitStatus,
    pub pack_volume_mm3: f64,
    pub available_volume_mm3: Option<f64>,
}

/// Full output of one sizing request. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    pub cell: CellSpec,
    pub topology: PackTopology,
    pub geometry: PackGeometry,
    pub fit: FitResult,
}
