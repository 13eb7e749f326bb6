use crate::domain::model::{EnergyDemand, Requirement};
use crate::utils::error::Result;
use crate::utils::validation::validate_positive;

/// Convert application-specific inputs into the energy and capacity the
/// pack must provide at the target voltage.
///
/// `energy_per_km` is the configured EV consumption factor in kWh/km; it is
/// only consulted for the EV variant.
pub fn translate(requirement: &Requirement, energy_per_km: f64) -> Result<EnergyDemand> {
    let target_voltage = requirement.target_voltage();
    validate_positive("target_voltage", target_voltage)?;

    let required_energy_kwh = match *requirement {
        Requirement::Ev { km_expected, .. } => {
            validate_positive("km_expected", km_expected)?;
            validate_positive("energy_per_km", energy_per_km)?;
            km_expected * energy_per_km
        }
        Requirement::Stationary {
            backup_hours,
            total_load_kw,
            ..
        } => {
            validate_positive("backup_hours", backup_hours)?;
            validate_positive("total_load_kw", total_load_kw)?;
            backup_hours * total_load_kw
        }
    };

    let required_capacity_ah = required_energy_kwh * 1000.0 / target_voltage;

    tracing::debug!(
        "Requirement translated: {:.3} kWh, {:.3} Ah at {:.1} V",
        required_energy_kwh,
        required_capacity_ah,
        target_voltage
    );

    Ok(EnergyDemand {
        required_energy_kwh,
        required_capacity_ah,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ev_translation() {
        let requirement = Requirement::Ev {
            target_voltage: 400.0,
            km_expected: 300.0,
        };

        let demand = translate(&requirement, 0.15).unwrap();

        assert_eq!(demand.required_energy_kwh, 45.0);
        assert_eq!(demand.required_capacity_ah, 112.5);
    }

    #[test]
    fn test_stationary_translation() {
        let requirement = Requirement::Stationary {
            target_voltage: 48.0,
            backup_hours: 10.0,
            total_load_kw: 2.0,
        };

        let demand = translate(&requirement, 0.033).unwrap();

        assert_eq!(demand.required_energy_kwh, 20.0);
        assert!((demand.required_capacity_ah - 416.6666666666667).abs() < 1e-9);
    }

    #[test]
    fn test_stationary_ignores_energy_per_km() {
        let requirement = Requirement::Stationary {
            target_voltage: 48.0,
            backup_hours: 10.0,
            total_load_kw: 2.0,
        };

        // A bogus EV factor must not matter for stationary sizing.
        let demand = translate(&requirement, -1.0).unwrap();
        assert_eq!(demand.required_energy_kwh, 20.0);
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert!(translate(
            &Requirement::Ev {
                target_voltage: 0.0,
                km_expected: 300.0
            },
            0.15
        )
        .is_err());

        assert!(translate(
            &Requirement::Ev {
                target_voltage: 400.0,
                km_expected: 0.0
            },
            0.15
        )
        .is_err());

        assert!(translate(
            &Requirement::Ev {
                target_voltage: 400.0,
                km_expected: 300.0
            },
            0.0
        )
        .is_err());

        assert!(translate(
            &Requirement::Stationary {
                target_voltage: 48.0,
                backup_hours: -1.0,
                total_load_kw: 2.0
            },
            0.15
        )
        .is_err());

        assert!(translate(
            &Requirement::Stationary {
                target_voltage: 48.0,
                backup_hours: 10.0,
                total_load_kw: 0.0
            },
            0.15
        )
        .is_err());
    }
}
