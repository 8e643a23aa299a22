use std::env;
use std::io;

use water_rocket_sim::io::csv;
use water_rocket_sim::optimizer;
use water_rocket_sim::sim::runner;
use water_rocket_sim::types::Constants;

fn main() {
    // -----------------------------------------------------------------------
    // Reference launch: 0.8 L bottle, one-third full, 60 psi
    // -----------------------------------------------------------------------
    let fill_ratio = 0.33;
    let drag_coefficient = 0.4;
    let pressure_psi = 60.0;

    let result = runner::run_simulation(fill_ratio, drag_coefficient, pressure_psi)
        .expect("reference launch parameters are in range");

    // Machine-readable trajectory dump
    if env::args().any(|arg| arg == "--csv") {
        let stdout = io::stdout();
        csv::write_trajectory(&mut stdout.lock(), &result.trajectory)
            .expect("failed to write to stdout");
        return;
    }

    let consts = Constants::default();

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  WATER ROCKET FLIGHT SIMULATION");
    println!("====================================================================");
    println!();
    println!("  Launch Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Tank volume:   {:>8.2} L     Fill ratio:   {:>8.0} %",
        consts.tank_volume * 1000.0,
        fill_ratio * 100.0
    );
    println!(
        "  Bottle dia:    {:>8.1} cm    Nozzle dia:   {:>8.1} cm",
        consts.bottle_diameter * 100.0,
        consts.nozzle_diameter * 100.0
    );
    println!(
        "  Empty mass:    {:>8.1} g     Drag coeff:   {:>8.2}",
        consts.empty_mass * 1000.0,
        drag_coefficient
    );
    println!("  Launch press:  {:>8.0} psi", pressure_psi);
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    match &result.burnout {
        Some(b) => println!(
            "  BURNOUT   t={:>6.3}s   alt={:>7.2}m   vel={:>7.2}m/s",
            b.time, b.altitude, b.velocity
        ),
        None => println!("  BURNOUT   never: tank equalized with water remaining"),
    }
    println!(
        "  APOGEE    t={:>6.3}s   alt={:>7.2}m",
        result.max_altitude_time, result.max_altitude
    );
    println!(
        "  IMPACT    t={:>6.3}s   vel={:>7.2}m/s",
        result.flight_time, result.impact_velocity
    );
    println!();

    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  {:>7}  {:>9}  {:>9}  {:>7}", "t (s)", "alt (m)", "vel (m/s)", "phase");
    println!("  {}", "─".repeat(40));

    let burnout_time = result.burnout.map(|b| b.time).unwrap_or(0.0);
    let stride = (result.trajectory.len() / 30).max(1);
    for (i, s) in result.trajectory.iter().enumerate() {
        if i % stride != 0 && i != result.trajectory.len() - 1 {
            continue;
        }
        let phase = if result.burnout.is_some() && s.time <= burnout_time {
            "BURN"
        } else if s.velocity > 0.0 {
            "COAST"
        } else {
            "DESC"
        };
        println!("  {:>7.3}  {:>9.2}  {:>9.2}  {:>7}", s.time, s.altitude, s.velocity, phase);
    }
    println!();

    // -----------------------------------------------------------------------
    // Fill-ratio sweep
    // -----------------------------------------------------------------------
    let sweep = optimizer::find_optimal(drag_coefficient, pressure_psi)
        .expect("sweep parameters are in range");

    println!("  Fill-Ratio Sweep ({} points)", sweep.samples.len());
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  {:>6}  {:>11}", "fill", "apogee (m)");
    for (i, s) in sweep.samples.iter().enumerate() {
        if i % 5 != 0 && s.fill_ratio != sweep.best_fill_ratio {
            continue;
        }
        let marker = if s.fill_ratio == sweep.best_fill_ratio { "  <- best" } else { "" };
        println!("  {:>6.2}  {:>11.2}{}", s.fill_ratio, s.max_altitude, marker);
    }
    println!();
    println!(
        "  Optimal fill ratio: {:.2}  ({:.2} m apogee)",
        sweep.best_fill_ratio, sweep.best_max_altitude
    );
    println!("====================================================================");
    println!();
}
