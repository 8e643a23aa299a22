use std::io::{self, Write};

use crate::sim::event::TrajectorySample;

/// Write a down-sampled trajectory to CSV.
///
/// Columns: time, altitude, velocity
pub fn write_trajectory<W: Write>(
    writer: &mut W,
    trajectory: &[TrajectorySample],
) -> io::Result<()> {
    writeln!(writer, "time,altitude,velocity")?;
    for s in trajectory {
        writeln!(writer, "{:.4},{:.4},{:.4}", s.time, s.altitude, s.velocity)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_output_has_header_and_rows() {
        let traj = vec![
            TrajectorySample { time: 0.0, altitude: 0.0, velocity: 0.0 },
            TrajectorySample { time: 0.006, altitude: 0.05, velocity: 14.2 },
        ];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "time,altitude,velocity");
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert_eq!(lines[1], "0.0000,0.0000,0.0000");
        assert!(lines[2].starts_with("0.0060,"));
    }
}
