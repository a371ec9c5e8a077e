//! Runs the natural convection lab and prints its results.
//!
//! Usage: `cargo run --example lab -- [SURFACE_TEMPS] [AMBIENT_C]`
//!
//! `SURFACE_TEMPS` is a comma-separated list in °C (default `85,87,88,86,89`)
//! and `AMBIENT_C` is the ambient air temperature in °C (default `30`).

use std::{env, error::Error, process::ExitCode};

use natural_convection::models::thermal::natural_convection::{
    EMPIRICAL_LABEL, EXPERIMENTAL_LABEL, InputParameters, NaturalConvectionLab, TITLE, X_LABEL,
    Y_LABEL,
};
use uom::si::{
    heat_transfer::watt_per_square_meter_kelvin,
    temperature_interval::degree_celsius as delta_celsius,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let mut input = InputParameters::default();

    if let Some(temps) = args.next() {
        input.surface_temperatures = temps;
    }
    if let Some(ambient) = args.next() {
        input.ambient_celsius = ambient.trim().parse()?;
    }

    let analysis = NaturalConvectionLab::default().compute(&input)?;

    println!("Results");
    println!("{}", analysis.results);
    for warning in &analysis.warnings {
        println!("warning: {warning}");
    }

    let reference = analysis
        .curve
        .reference()
        .get::<watt_per_square_meter_kelvin>();

    println!("\n{TITLE}: {Y_LABEL}");
    println!("{X_LABEL:>10} | {EXPERIMENTAL_LABEL:>14} | {EMPIRICAL_LABEL:>14}");
    for point in analysis.curve.points() {
        println!(
            "{:>10.2} | {:>14.2} | {:>14.2}",
            point.delta_t.get::<delta_celsius>(),
            point.h.get::<watt_per_square_meter_kelvin>(),
            reference,
        );
    }

    Ok(())
}
