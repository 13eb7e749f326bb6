use pack_sizer::{
    AvailableSpace, CellCatalog, CellGeometry, CellSpec, FitStatus, Requirement, SizingService,
};

fn test_catalog() -> CellCatalog {
    let cells = vec![
        CellSpec {
            name: "LF50K".to_string(),
            chemistry: "NMC".to_string(),
            nominal_voltage: 3.7,
            capacity_ah: 50.0,
            weight_g: 900.0,
            geometry: CellGeometry::Prismatic {
                length_mm: 148.0,
                breadth_mm: 26.0,
                height_mm: 91.0,
            },
        },
        CellSpec {
            name: "21700-LFP".to_string(),
            chemistry: "LFP".to_string(),
            nominal_voltage: 3.2,
            capacity_ah: 3.2,
            weight_g: 70.0,
            geometry: CellGeometry::Cylindrical {
                diameter_mm: 21.0,
                height_mm: 70.0,
                rows_per_layer: 4,
            },
        },
    ];

    CellCatalog::new(cells, None).unwrap()
}

fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn test_ev_prismatic_pack() {
    // 400 V, 300 km at 0.15 kWh/km -> 45 kWh -> 112.5 Ah.
    let service = SizingService::new(test_catalog(), 0.15);
    let requirement = Requirement::Ev {
        target_voltage: 400.0,
        km_expected: 300.0,
    };

    let result = service.size(&requirement, Some("LF50K"), None).unwrap();

    assert_eq!(result.topology.series_count, 109);
    assert_eq!(result.topology.parallel_count, 3);
    assert!(approx(result.topology.pack_voltage, 403.3));
    assert_eq!(result.topology.pack_capacity_ah, 150.0);
    assert!(approx(result.topology.pack_energy_kwh, 60.495));

    assert_eq!(result.geometry.length_mm, 16132.0);
    assert_eq!(result.geometry.breadth_mm, 26.0);
    assert_eq!(result.geometry.height_mm, 273.0);
    assert_eq!(result.geometry.weight_g, 327.0 * 900.0);

    assert_eq!(result.fit.status, FitStatus::Unknown);
}

#[test]
fn test_stationary_cylindrical_pack() {
    // 48 V, 10 h backup at 2 kW -> 20 kWh -> 416.67 Ah.
    let service = SizingService::new(test_catalog(), 0.15);
    let requirement = Requirement::Stationary {
        target_voltage: 48.0,
        backup_hours: 10.0,
        total_load_kw: 2.0,
    };

    let result = service.size(&requirement, Some("21700-LFP"), None).unwrap();

    assert_eq!(result.topology.series_count, 15);
    assert_eq!(result.topology.parallel_count, 131);

    // 131 cells in rows of 4 -> 33 rows.
    assert_eq!(result.geometry.length_mm, 315.0);
    assert_eq!(result.geometry.breadth_mm, 693.0);
    assert_eq!(result.geometry.height_mm, 70.0);
}

#[test]
fn test_fit_fails_on_axis_despite_volume() {
    // The envelope has more volume than the pack, but the pack is 315 mm
    // long against a 300 mm envelope.
    let service = SizingService::new(test_catalog(), 0.15);
    let requirement = Requirement::Stationary {
        target_voltage: 48.0,
        backup_hours: 10.0,
        total_load_kw: 2.0,
    };
    let space = AvailableSpace {
        length_mm: 300.0,
        breadth_mm: 700.0,
        height_mm: 80.0,
    };

    let result = service
        .size(&requirement, Some("21700-LFP"), Some(&space))
        .unwrap();

    assert_eq!(result.fit.pack_volume_mm3, 15_280_650.0);
    assert_eq!(result.fit.available_volume_mm3, Some(16_800_000.0));
    assert_eq!(result.fit.status, FitStatus::DoesNotFit);
}

#[test]
fn test_fit_succeeds_in_larger_envelope() {
    let service = SizingService::new(test_catalog(), 0.15);
    let requirement = Requirement::Stationary {
        target_voltage: 48.0,
        backup_hours: 10.0,
        total_load_kw: 2.0,
    };
    let space = AvailableSpace {
        length_mm: 320.0,
        breadth_mm: 700.0,
        height_mm: 80.0,
    };

    let result = service
        .size(&requirement, Some("21700-LFP"), Some(&space))
        .unwrap();

    assert_eq!(result.fit.status, FitStatus::Fits);
}

#[test]
fn test_no_envelope_is_unknown_not_error() {
    let service = SizingService::new(test_catalog(), 0.15);
    let requirement = Requirement::Ev {
        target_voltage: 400.0,
        km_expected: 300.0,
    };

    let result = service.size(&requirement, None, None).unwrap();
    assert_eq!(result.fit.status, FitStatus::Unknown);
}

#[test]
fn test_unset_envelope_is_unknown_not_error() {
    let service = SizingService::new(test_catalog(), 0.15);
    let requirement = Requirement::Ev {
        target_voltage: 400.0,
        km_expected: 300.0,
    };
    let space = AvailableSpace {
        length_mm: 0.0,
        breadth_mm: 0.0,
        height_mm: 0.0,
    };

    let result = service.size(&requirement, None, Some(&space)).unwrap();
    assert_eq!(result.fit.status, FitStatus::Unknown);
}

#[test]
fn test_sizing_is_idempotent() {
    let service = SizingService::new(test_catalog(), 0.15);
    let requirement = Requirement::Ev {
        target_voltage: 400.0,
        km_expected: 300.0,
    };
    let space = AvailableSpace {
        length_mm: 17000.0,
        breadth_mm: 30.0,
        height_mm: 300.0,
    };

    let first = service.size(&requirement, None, Some(&space)).unwrap();
    let second = service.size(&requirement, None, Some(&space)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unknown_preferred_cell_fails() {
    let service = SizingService::new(test_catalog(), 0.15);
    let requirement = Requirement::Ev {
        target_voltage: 400.0,
        km_expected: 300.0,
    };

    let err = service
        .size(&requirement, Some("nonexistent"), None)
        .unwrap_err();

    assert!(matches!(
        err,
        pack_sizer::SizingError::CellNotFound { name } if name == "nonexistent"
    ));
}

#[test]
fn test_result_serializes_to_json() {
    let service = SizingService::new(test_catalog(), 0.15);
    let requirement = Requirement::Ev {
        target_voltage: 400.0,
        km_expected: 300.0,
    };

    let result = service.size(&requirement, None, None).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["cell"]["form_factor"], "prismatic");
    assert_eq!(json["topology"]["series_count"], 109);
    assert_eq!(json["fit"]["status"], "unknown");
}
