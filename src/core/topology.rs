use crate::domain::model::{CellSpec, PackTopology};
use crate::utils::error::Result;
use crate::utils::validation::validate_positive;

/// Compute the smallest series/parallel counts whose summed voltage and
/// capacity meet or exceed the targets. Cells are indivisible, so both
/// counts round up and are at least 1.
pub fn solve(target_voltage: f64, required_capacity_ah: f64, cell: &CellSpec) -> Result<PackTopology> {
    validate_positive("cell.nominal_voltage", cell.nominal_voltage)?;
    validate_positive("cell.capacity_ah", cell.capacity_ah)?;

    let series_count = ((target_voltage / cell.nominal_voltage).ceil() as u32).max(1);
    let parallel_count = ((required_capacity_ah / cell.capacity_ah).ceil() as u32).max(1);

    // Recomputed from the integer counts; may exceed the raw targets.
    let pack_voltage = f64::from(series_count) * cell.nominal_voltage;
    let pack_capacity_ah = f64::from(parallel_count) * cell.capacity_ah;
    let pack_energy_kwh = pack_voltage * pack_capacity_ah / 1000.0;

    tracing::debug!(
        "Topology solved: {}s{}p, {:.1} V / {:.1} Ah / {:.2} kWh",
        series_count,
        parallel_count,
        pack_voltage,
        pack_capacity_ah,
        pack_energy_kwh
    );

    Ok(PackTopology {
        series_count,
        parallel_count,
        pack_voltage,
        pack_capacity_ah,
        pack_energy_kwh,
    })
}
