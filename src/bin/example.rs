//! Beam Solver Example - Stair Flight Between Landings

use anyhow::Context;
use beam_solver::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Beam Solver Example: Stair Flight ===\n");

    // 0.3 m x 0.6 m concrete stringer, E = 32 GPa
    let length = 5.5;
    let e = 32e9;
    let i = 0.3 * 0.6_f64.powi(3) / 12.0;

    //   landing      flight       landing
    //  |--1.5 m--|----2.5 m----|--1.5 m--|
    //  ^                                 o
    //  Pin                          Roller
    //
    // Landings carry 9.525 kN/m, the flight 19.628 kN/m. Coincident
    // vertices at 1.5 m and 4.0 m describe the jumps in intensity.
    let loads = LoadAssembly::builder()
        .distributed_force([
            LoadInstance::new(9.525, 0.0),
            LoadInstance::new(9.525, 1.5),
            LoadInstance::new(19.62768, 1.5),
            LoadInstance::new(19.62768, 4.0),
            LoadInstance::new(9.525, 4.0),
            LoadInstance::new(9.525, 5.5),
        ])?
        .build();

    let model = AnalysisModel::new(length, e, i, loads)?;
    let engine = model.engine();

    println!("Span: {:.2}m, EI = {:.4e}N·m²", length, model.ei());
    println!(
        "Total applied load: {:.4}kN\n",
        model.loads().total_transverse_force()
    );

    let options = AnalysisOptions::default().with_sample_points(23);
    let diagram = engine
        .diagram(&options)
        .context("failed to sample response diagram")?;

    println!("Boundary constants:");
    println!("  Start shear: {:.4}kN", diagram.boundary.start_shear);
    println!("  Start slope: {:.6e}rad\n", diagram.boundary.start_slope);

    println!(
        "{:>8} {:>12} {:>12} {:>14} {:>14}",
        "x (m)", "V (kN)", "M (kN·m)", "θ (rad)", "δ (m)"
    );
    for row in &diagram.stations {
        println!(
            "{:>8.3} {:>12.4} {:>12.4} {:>14.6e} {:>14.6e}",
            row.x, row.shear, row.moment, row.slope, row.deflection
        );
    }

    let summary = diagram.summary;
    println!("\nSummary:");
    println!("  Max shear: {:.4}kN at {:.3}m", summary.max_shear.value, summary.max_shear.x);
    println!("  Max moment: {:.4}kN·m at {:.3}m", summary.max_moment.value, summary.max_moment.x);
    println!(
        "  Max deflection: {:.6e}m at {:.3}m",
        summary.max_deflection.value, summary.max_deflection.x
    );

    println!("\nMidspan check: M({:.2}) = {:.5}kN·m", length / 2.0, engine.moment(length / 2.0)?);
    println!("\n=== Analysis Complete ===");
    Ok(())
}
