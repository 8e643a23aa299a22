use std::io::{self, Write};

use crate::optimizer::OptimizationResult;
use crate::sim::event::SimulationResult;

/// Write a flight summary as JSON.
pub fn write_summary<W: Write>(writer: &mut W, result: &SimulationResult) -> io::Result<()> {
    writeln!(writer, "{{")?;
    match &result.burnout {
        Some(b) => {
            writeln!(writer, "  \"burnout\": {{")?;
            writeln!(writer, "    \"time_s\": {:.4},", b.time)?;
            writeln!(writer, "    \"altitude_m\": {:.3},", b.altitude)?;
            writeln!(writer, "    \"velocity_ms\": {:.3}", b.velocity)?;
            writeln!(writer, "  }},")?;
        }
        None => {
            writeln!(writer, "  \"burnout\": null,")?;
        }
    }
    writeln!(writer, "  \"apogee_m\": {:.3},", result.max_altitude)?;
    writeln!(writer, "  \"apogee_time_s\": {:.4},", result.max_altitude_time)?;
    writeln!(writer, "  \"flight_time_s\": {:.4},", result.flight_time)?;
    writeln!(writer, "  \"impact_velocity_ms\": {:.3},", result.impact_velocity)?;
    writeln!(writer, "  \"samples\": {}", result.trajectory.len())?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write the optimizer response curve as JSON.
pub fn write_sweep<W: Write>(writer: &mut W, result: &OptimizationResult) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"best_fill_ratio\": {:.2},", result.best_fill_ratio)?;
    writeln!(writer, "  \"best_max_altitude_m\": {:.3},", result.best_max_altitude)?;
    writeln!(writer, "  \"curve\": [")?;
    for (i, s) in result.samples.iter().enumerate() {
        let sep = if i + 1 == result.samples.len() { "" } else { "," };
        writeln!(
            writer,
            "    {{ \"fill_ratio\": {:.2}, \"max_altitude_m\": {:.3} }}{}",
            s.fill_ratio, s.max_altitude, sep
        )?;
    }
    writeln!(writer, "  ]")?;
    writeln!(writer, "}}")?;
    Ok(())
}
