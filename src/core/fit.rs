use crate::domain::model::{AvailableSpace, FitResult, FitStatus, PackGeometry};

/// Check the pack against the available envelope.
///
/// Volume containment alone is necessary but not sufficient: a pack can be
/// smaller than the envelope by volume and still be too long along one
/// axis, so every axis is checked as well. An entirely unset envelope
/// yields `Unknown` rather than a failed fit.
pub fn validate(geometry: &PackGeometry, space: &AvailableSpace) -> FitResult {
    if space.is_unset() {
        return FitResult {
            status: FitStatus::Unknown,
            pack_volume_mm3: geometry.volume_mm3,
            available_volume_mm3: None,
        };
    }

    let available_volume_mm3 = space.volume_mm3();
    let fits = geometry.length_mm <= space.length_mm
        && geometry.breadth_mm <= space.breadth_mm
        && geometry.height_mm <= space.height_mm
        && geometry.volume_mm3 <= available_volume_mm3;

    let status = if fits {
        FitStatus::Fits
    } else {
        FitStatus::DoesNotFit
    };

    tracing::debug!(
        "Fit check: pack {:.0} mm3 vs envelope {:.0} mm3 -> {:?}",
        geometry.volume_mm3,
        available_volume_mm3,
        status
    );

    FitResult {
        status,
        pack_volume_mm3: geometry.volume_mm3,
        available_volume_mm3: Some(available_volume_mm3),
    }
}
