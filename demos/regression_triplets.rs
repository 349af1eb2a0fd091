use std::env;
use track_errors::{EarthModel, TrackVerifier, Triplet, decompose_batch};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let model = match args.len() {
        1 => EarthModel::default(),
        2 => EarthModel::from_path(&args[1])?,
        _ => {
            eprintln!("Usage: {} [earth-model.toml]", args[0]);
            std::process::exit(1);
        }
    };

    let cases: [(&str, Triplet); 6] = [
        ("south-east track", ((-10.2, 94.4), (-10.4, 94.6), (-10.2651, 94.61872)).into()),
        ("south-south-east track", ((-10.2, 94.4), (-11.0, 94.9), (-10.70625, 94.625)).into()),
        ("northbound meridian", ((0.0, 0.0), (10.0, 0.0), (1.0, 0.1)).into()),
        ("forecast behind ob0", ((-10.0, 100.0), (-10.0, 104.0), (-10.0, 95.0)).into()),
        ("southbound off the equator", ((2.85, 5.0), (0.0, 0.0), (0.0, 10.0)).into()),
        ("TC Tiffany", ((-24.7, 128.43), (-25.3, 129.0), (-20.87, 130.2)).into()),
    ];

    println!("=== Earth model ===");
    println!("Radius: {} m", model.radius_m);
    println!("Ellipsoid: {:?}", model.ellipsoid_model);
    println!("Unit: {:?}", model.unit);

    let verifier = TrackVerifier::new(model)?;
    let triplets: Vec<Triplet> = cases.iter().map(|(_, triplet)| *triplet).collect();
    let report = decompose_batch(&verifier, &triplets);

    println!("\n=== Decomposed errors ===");
    for ((name, triplet), result) in cases.iter().zip(&report.results) {
        println!("{name}: {} -> {} / forecast {}", triplet.ob0, triplet.ob1, triplet.fc1);
        match result {
            Ok(errors) => {
                println!(
                    "   DPE={:.2} ATE={:.2} CTE={:.2} ({:?})",
                    errors.dpe, errors.ate, errors.cte, errors.unit
                );
                println!(
                    "   {} of track, {}",
                    if errors.is_left_of_track() { "left" } else { "right" },
                    if errors.is_fast() { "fast" } else { "slow" }
                );
            }
            Err(error) => println!("   failed: {error}"),
        }
    }

    Ok(())
}
