use clap::Parser;
use pack_sizer::config::{catalog_file, DEFAULT_ENERGY_PER_KM};
use pack_sizer::utils::logger;
use pack_sizer::{CellCatalog, CliConfig, FitStatus, SizingResult, SizingService};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pack-sizer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let (catalog, file_energy_per_km) = match &config.catalog {
        Some(path) => catalog_file::load_catalog(path)?,
        None => (CellCatalog::builtin(), None),
    };

    // CLI flag wins over the catalog file's [sizing] section.
    let energy_per_km = config
        .energy_per_km
        .or(file_energy_per_km)
        .unwrap_or(DEFAULT_ENERGY_PER_KM);

    let requirement = config.requirement()?;
    let available_space = config.available_space();

    let service = SizingService::new(catalog, energy_per_km);
    match service.size(&requirement, config.cell.as_deref(), available_space.as_ref()) {
        Ok(result) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&result);
            }
        }
        Err(e) => {
            tracing::error!("Pack sizing failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_report(result: &SizingResult) {
    println!("✅ Pack design computed");
    println!(
        "Cell:         {} ({} {})",
        result.cell.name,
        result.cell.chemistry,
        result.cell.form_factor()
    );
    println!(
        "Topology:     {}s{}p ({} cells)",
        result.topology.series_count,
        result.topology.parallel_count,
        result.topology.cell_count()
    );
    println!("Pack voltage: {:.1} V", result.topology.pack_voltage);
    println!("Capacity:     {:.1} Ah", result.topology.pack_capacity_ah);
    println!("Energy:       {:.2} kWh", result.topology.pack_energy_kwh);
    println!("Weight:       {:.1} kg", result.geometry.weight_g / 1000.0);
    println!(
        "Dimensions:   {:.0} x {:.0} x {:.0} mm",
        result.geometry.length_mm, result.geometry.breadth_mm, result.geometry.height_mm
    );

    match result.fit.status {
        FitStatus::Fits => println!("Fit:          ✅ fits in the available space"),
        FitStatus::DoesNotFit => println!("Fit:          ❌ does not fit in the available space"),
        FitStatus::Unknown => println!("Fit:          not evaluated (no envelope given)"),
    }
}
