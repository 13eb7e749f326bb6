use crate::domain::model::{CellGeometry, CellSpec, FormFactor};
use crate::domain::ports::CellSource;
use crate::utils::error::{Result, SizingError};

/// Ordered, read-only collection of known cell types. Built once (from a
/// catalog file or the built-in set) and injected into the sizing service;
/// entries never change at runtime.
#[derive(Debug, Clone)]
pub struct CellCatalog {
    cells: Vec<CellSpec>,
    default_cell: Option<String>,
}

impl CellCatalog {
    pub fn new(cells: Vec<CellSpec>, default_cell: Option<String>) -> Result<Self> {
        if cells.is_empty() {
            return Err(SizingError::EmptyCatalog);
        }

        if let Some(name) = &default_cell {
            if !cells.iter().any(|cell| cell.name == *name) {
                return Err(SizingError::CellNotFound { name: name.clone() });
            }
        }

        Ok(Self {
            cells,
            default_cell,
        })
    }

    /// A small set of commodity cells so the tool works without a catalog
    /// file. The first entry doubles as the suggested default.
    pub fn builtin() -> Self {
        let cells = vec![
            CellSpec {
                name: "LF105".to_string(),
                chemistry: "LFP".to_string(),
                nominal_voltage: 3.2,
                capacity_ah: 105.0,
                weight_g: 1950.0,
                geometry: CellGeometry::Prismatic {
                    length_mm: 130.6,
                    breadth_mm: 36.0,
                    height_mm: 200.5,
                },
            },
            CellSpec {
                name: "LF280K".to_string(),
                chemistry: "LFP".to_string(),
                nominal_voltage: 3.2,
                capacity_ah: 280.0,
                weight_g: 5420.0,
                geometry: CellGeometry::Prismatic {
                    length_mm: 173.9,
                    breadth_mm: 71.7,
                    height_mm: 207.2,
                },
            },
            CellSpec {
                name: "INR21700-50E".to_string(),
                chemistry: "NCM".to_string(),
                nominal_voltage: 3.6,
                capacity_ah: 4.9,
                weight_g: 69.0,
                geometry: CellGeometry::Cylindrical {
                    diameter_mm: 21.1,
                    height_mm: 70.8,
                    rows_per_layer: 4,
                },
            },
            CellSpec {
                name: "NCR18650B".to_string(),
                chemistry: "NCA".to_string(),
                nominal_voltage: 3.6,
                capacity_ah: 3.35,
                weight_g: 48.5,
                geometry: CellGeometry::Cylindrical {
                    diameter_mm: 18.5,
                    height_mm: 65.3,
                    rows_per_layer: 4,
                },
            },
        ];

        Self {
            cells,
            default_cell: None,
        }
    }

    pub fn cells(&self) -> &[CellSpec] {
        &self.cells
    }
}

impl CellSource for CellCatalog {
    fn lookup(&self, name: &str) -> Result<CellSpec> {
        self.cells
            .iter()
            .find(|cell| cell.name == name)
            .cloned()
            .ok_or_else(|| SizingError::CellNotFound {
                name: name.to_string(),
            })
    }

    fn suggest_default(&self, preference: Option<FormFactor>) -> Result<CellSpec> {
        if let Some(form_factor) = preference {
            return self
                .cells
                .iter()
                .find(|cell| cell.form_factor() == form_factor)
                .cloned()
                .ok_or_else(|| SizingError::NoMatchingCell {
                    form_factor: form_factor.to_string(),
                });
        }

        if let Some(name) = &self.default_cell {
            return self.lookup(name);
        }

        // `new` guarantees at least one entry.
        Ok(self.cells[0].clone())
    }
}
