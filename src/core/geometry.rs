use crate::domain::model::{CellGeometry, CellSpec, PackGeometry, PackTopology};
use crate::utils::error::Result;
use crate::utils::validation::{validate_min_count, validate_positive};

/// Compute pack dimensions and weight from the cell geometry and the
/// series/parallel counts.
///
/// Series cells line up along the length axis for both form factors.
/// Parallel cells stack in height for prismatic packs; for cylindrical
/// packs they widen the pack in discrete rows of `rows_per_layer`, and a
/// partial row still occupies a full row's footprint.
pub fn compute(cell: &CellSpec, topology: &PackTopology) -> Result<PackGeometry> {
    validate_positive("cell.weight_g", cell.weight_g)?;

    let series = f64::from(topology.series_count);
    let parallel = f64::from(topology.parallel_count);

    let (length_mm, breadth_mm, height_mm) = match cell.geometry {
        CellGeometry::Prismatic {
            length_mm,
            breadth_mm,
            height_mm,
        } => {
            validate_positive("cell.length_mm", length_mm)?;
            validate_positive("cell.breadth_mm", breadth_mm)?;
            validate_positive("cell.height_mm", height_mm)?;

            (length_mm * series, breadth_mm, height_mm * parallel)
        }
        CellGeometry::Cylindrical {
            diameter_mm,
            height_mm,
            rows_per_layer,
        } => {
            validate_positive("cell.diameter_mm", diameter_mm)?;
            validate_positive("cell.height_mm", height_mm)?;
            validate_min_count("cell.rows_per_layer", rows_per_layer, 1)?;

            let rows = topology.parallel_count.div_ceil(rows_per_layer);
            (diameter_mm * series, diameter_mm * f64::from(rows), height_mm)
        }
    };

    let volume_mm3 = length_mm * breadth_mm * height_mm;
    let weight_g = f64::from(topology.cell_count()) * cell.weight_g;

    tracing::debug!(
        "Pack geometry: {:.1} x {:.1} x {:.1} mm, {:.0} g",
        length_mm,
        breadth_mm,
        height_mm,
        weight_g
    );

    Ok(PackGeometry {
        length_mm,
        breadth_mm,
        height_mm,
        volume_mm3,
        weight_g,
    })
}
