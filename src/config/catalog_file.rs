use crate::core::catalog::CellCatalog;
use crate::domain::model::{CellGeometry, CellSpec};
use crate::utils::error::{Result, SizingError};
use crate::utils::validation::{validate_positive, validate_required_field};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML catalog file: sizing constants, the default cell choice, and the
/// cell sheet itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub sizing: Option<SizingSection>,
    pub catalog: Option<CatalogSection>,
    #[serde(default)]
    pub cells: Vec<CellRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingSection {
    /// EV consumption factor in kWh per km.
    pub energy_per_km: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub default_cell: Option<String>,
}

/// Flat cell record as it appears in TOML tables and CSV rows. Dimension
/// columns are optional because each form factor uses a different subset;
/// `into_cell_spec` enforces that exactly the matching ones are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellRecord {
    pub name: String,
    #[serde(default)]
    pub chemistry: String,
    pub form_factor: String,
    pub nominal_voltage: f64,
    pub capacity_ah: f64,
    pub weight_g: f64,
    pub length_mm: Option<f64>,
    pub breadth_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub diameter_mm: Option<f64>,
    pub rows_per_layer: Option<u32>,
}

impl CellRecord {
    pub fn into_cell_spec(self) -> Result<CellSpec> {
        let field = |name: &str| format!("cells.{}.{}", self.name, name);

        validate_positive(&field("nominal_voltage"), self.nominal_voltage)?;
        validate_positive(&field("capacity_ah"), self.capacity_ah)?;
        validate_positive(&field("weight_g"), self.weight_g)?;

        let geometry = match self.form_factor.to_lowercase().as_str() {
            "prismatic" => {
                if self.diameter_mm.is_some() || self.rows_per_layer.is_some() {
                    return Err(SizingError::ConfigError {
                        field: field("form_factor"),
                        message: "prismatic cells must not carry diameter_mm or rows_per_layer"
                            .to_string(),
                    });
                }

                let length_mm = validate_required_field(&field("length_mm"), self.length_mm)?;
                let breadth_mm = validate_required_field(&field("breadth_mm"), self.breadth_mm)?;
                let height_mm = validate_required_field(&field("height_mm"), self.height_mm)?;
                validate_positive(&field("length_mm"), length_mm)?;
                validate_positive(&field("breadth_mm"), breadth_mm)?;
                validate_positive(&field("height_mm"), height_mm)?;

                CellGeometry::Prismatic {
                    length_mm,
                    breadth_mm,
                    height_mm,
                }
            }
            "cylindrical" => {
                if self.length_mm.is_some() || self.breadth_mm.is_some() {
                    return Err(SizingError::ConfigError {
                        field: field("form_factor"),
                        message: "cylindrical cells must not carry length_mm or breadth_mm"
                            .to_string(),
                    });
                }

                let diameter_mm = validate_required_field(&field("diameter_mm"), self.diameter_mm)?;
                let height_mm = validate_required_field(&field("height_mm"), self.height_mm)?;
                validate_positive(&field("diameter_mm"), diameter_mm)?;
                validate_positive(&field("height_mm"), height_mm)?;

                CellGeometry::Cylindrical {
                    diameter_mm,
                    height_mm,
                    rows_per_layer: self.rows_per_layer.unwrap_or(1),
                }
            }
            other => {
                return Err(SizingError::ConfigError {
                    field: field("form_factor"),
                    message: format!(
                        "unknown form factor: {}. Valid values: prismatic, cylindrical",
                        other
                    ),
                })
            }
        };

        Ok(CellSpec {
            name: self.name,
            chemistry: self.chemistry,
            nominal_voltage: self.nominal_voltage,
            capacity_ah: self.capacity_ah,
            weight_g: self.weight_g,
            geometry,
        })
    }
}

impl CatalogFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SizingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SizingError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` placeholders with environment variables;
    /// unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn energy_per_km(&self) -> Option<f64> {
        self.sizing.as_ref().and_then(|s| s.energy_per_km)
    }

    pub fn default_cell(&self) -> Option<&str> {
        self.catalog.as_ref().and_then(|c| c.default_cell.as_deref())
    }

    pub fn into_catalog(self) -> Result<CellCatalog> {
        let default_cell = self.default_cell().map(str::to_string);
        let cells = self
            .cells
            .into_iter()
            .map(CellRecord::into_cell_spec)
            .collect::<Result<Vec<_>>>()?;

        CellCatalog::new(cells, default_cell)
    }
}

/// Load a cell sheet from CSV with the same columns as the TOML records.
pub fn load_cells_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CellSpec>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut cells = Vec::new();

    for record in reader.deserialize::<CellRecord>() {
        cells.push(record?.into_cell_spec()?);
    }

    Ok(cells)
}

/// Load a catalog from a `.toml` or `.csv` file, dispatching on the
/// extension. Returns the catalog plus the file's energy-per-km setting
/// when it carries one (TOML only).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<(CellCatalog, Option<f64>)> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match extension {
        "toml" => {
            let file = CatalogFile::from_file(path)?;
            let energy_per_km = file.energy_per_km();
            Ok((file.into_catalog()?, energy_per_km))
        }
        "csv" => {
            let catalog = CellCatalog::new(load_cells_csv(path)?, None)?;
            Ok((catalog, None))
        }
        other => Err(SizingError::ConfigError {
            field: "catalog".to_string(),
            message: format!(
                "unsupported catalog format: {:?}. Valid formats: toml, csv",
                other
            ),
        }),
    }
}
