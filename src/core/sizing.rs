use crate::core::{fit, geometry, requirement, topology};
use crate::domain::model::{AvailableSpace, FitResult, FitStatus, Requirement, SizingResult};
use crate::domain::ports::CellSource;
use crate::utils::error::Result;

/// Orchestrates one sizing request: resolve cell, translate the
/// requirement, solve the topology, compute geometry, validate fit.
///
/// Stateless per call; any component failure propagates unchanged and
/// yields no partial result.
pub struct SizingService<C: CellSource> {
    catalog: C,
    energy_per_km: f64,
}

impl<C: CellSource> SizingService<C> {
    pub fn new(catalog: C, energy_per_km: f64) -> Self {
        Self {
            catalog,
            energy_per_km,
        }
    }

    pub fn size(
        &self,
        requirement: &Requirement,
        preferred_cell: Option<&str>,
        available_space: Option<&AvailableSpace>,
    ) -> Result<SizingResult> {
        let cell = match preferred_cell {
            Some(name) => self.catalog.lookup(name)?,
            None => self.catalog.suggest_default(None)?,
        };
        tracing::info!(
            "Selected cell: {} ({} {}, {:.1} V / {:.1} Ah)",
            cell.name,
            cell.chemistry,
            cell.form_factor(),
            cell.nominal_voltage,
            cell.capacity_ah
        );

        let demand = requirement::translate(requirement, self.energy_per_km)?;
        tracing::info!(
            "Required: {:.2} kWh -> {:.2} Ah at {:.1} V",
            demand.required_energy_kwh,
            demand.required_capacity_ah,
            requirement.target_voltage()
        );

        let topology = topology::solve(
            requirement.target_voltage(),
            demand.required_capacity_ah,
            &cell,
        )?;
        tracing::info!(
            "Topology: {}s{}p ({} cells)",
            topology.series_count,
            topology.parallel_count,
            topology.cell_count()
        );

        let geometry = geometry::compute(&cell, &topology)?;
        tracing::info!(
            "Geometry: {:.0} x {:.0} x {:.0} mm, {:.1} kg",
            geometry.length_mm,
            geometry.breadth_mm,
            geometry.height_mm,
            geometry.weight_g / 1000.0
        );

        let fit = match available_space {
            Some(space) => fit::validate(&geometry, space),
            None => FitResult {
                status: FitStatus::Unknown,
                pack_volume_mm3: geometry.volume_mm3,
                available_volume_mm3: None,
            },
        };

        Ok(SizingResult {
            cell,
            topology,
            geometry,
            fit,
        })
    }
}
