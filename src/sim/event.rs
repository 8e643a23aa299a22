use crate::dynamics::state::FlightState;

// ---------------------------------------------------------------------------
// Flight events and trajectory recording
// ---------------------------------------------------------------------------

/// One down-sampled trajectory point for external consumption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub time: f64,     // s
    pub altitude: f64, // m, clamped to >= 0 for display
    pub velocity: f64, // m/s
}

/// State captured at the instant the last water leaves the nozzle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnoutEvent {
    pub time: f64,
    pub altitude: f64,
    pub velocity: f64,
}

/// Result of one complete flight simulation. Immutable once returned.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub trajectory: Vec<TrajectorySample>,
    /// None when the tank equalizes before the water runs out.
    pub burnout: Option<BurnoutEvent>,
    pub max_altitude: f64,      // m
    pub max_altitude_time: f64, // s
    pub flight_time: f64,       // s, at ground return or the time ceiling
    pub impact_velocity: f64,   // m/s at the final step
}

/// Observes integration steps and accumulates events and samples.
///
/// Decoupled from the integration loop: the runner advances the state and
/// hands each freshly integrated state to the recorder.
#[derive(Debug)]
pub struct FlightRecorder {
    sample_interval: f64,
    last_slot: u64,
    trajectory: Vec<TrajectorySample>,
    burnout: Option<BurnoutEvent>,
    max_altitude: f64,
    max_altitude_time: f64,
}

impl FlightRecorder {
    /// A new recorder holding the mandatory first sample at (0, 0, 0).
    pub fn new(sample_interval: f64, capacity: usize) -> Self {
        let mut trajectory = Vec::with_capacity(capacity);
        trajectory.push(TrajectorySample {
            time: 0.0,
            altitude: 0.0,
            velocity: 0.0,
        });
        Self {
            sample_interval,
            last_slot: 0,
            trajectory,
            burnout: None,
            max_altitude: 0.0,
            max_altitude_time: 0.0,
        }
    }

    /// Record events and samples for a freshly integrated state.
    pub fn observe(&mut self, state: &FlightState) {
        // First crossing only
        if self.burnout.is_none() && state.water_volume <= 0.0 {
            self.burnout = Some(BurnoutEvent {
                time: state.time,
                altitude: state.altitude,
                velocity: state.velocity,
            });
        }

        // Strict > keeps the earliest time on a tied peak
        if state.altitude > self.max_altitude {
            self.max_altitude = state.altitude;
            self.max_altitude_time = state.time;
        }

        // Down-sample on recording-slot increase, independent of the step size
        let slot = (state.time / self.sample_interval) as u64;
        if slot > self.last_slot {
            self.last_slot = slot;
            self.trajectory.push(TrajectorySample {
                time: state.time,
                altitude: state.altitude.max(0.0), // display clamp only
                velocity: state.velocity,
            });
        }
    }

    /// Close out recording and produce the immutable result.
    pub fn finish(self, final_state: &FlightState) -> SimulationResult {
        SimulationResult {
            trajectory: self.trajectory,
            burnout: self.burnout,
            max_altitude: self.max_altitude,
            max_altitude_time: self.max_altitude_time,
            flight_time: final_state.time,
            impact_velocity: final_state.velocity,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn state(time: f64, altitude: f64, velocity: f64, water_volume: f64) -> FlightState {
        FlightState {
            time,
            velocity,
            altitude,
            mass: 0.1,
            water_volume,
        }
    }

    #[test]
    fn first_sample_is_origin() {
        let rec = FlightRecorder::new(0.005, 16);
        let result = rec.finish(&state(0.0, 0.0, 0.0, 1e-4));
        assert_eq!(
            result.trajectory[0],
            TrajectorySample { time: 0.0, altitude: 0.0, velocity: 0.0 }
        );
    }

    #[test]
    fn burnout_latches_on_first_crossing() {
        let mut rec = FlightRecorder::new(0.005, 16);
        rec.observe(&state(0.002, 0.1, 5.0, 5e-5));
        assert!(rec.burnout.is_none());
        rec.observe(&state(0.004, 0.3, 11.0, 0.0));
        rec.observe(&state(0.006, 0.6, 14.0, 0.0));
        let result = rec.finish(&state(0.006, 0.6, 14.0, 0.0));
        let b = result.burnout.expect("burnout must be recorded");
        assert_eq!(b.time, 0.004);
        assert_eq!(b.altitude, 0.3);
        assert_eq!(b.velocity, 11.0);
    }

    #[test]
    fn no_burnout_when_water_never_empties() {
        let mut rec = FlightRecorder::new(0.005, 16);
        rec.observe(&state(0.1, 2.0, 4.0, 1e-4));
        rec.observe(&state(0.2, 3.0, -1.0, 1e-4));
        let result = rec.finish(&state(0.2, 3.0, -1.0, 1e-4));
        assert!(result.burnout.is_none());
    }

    #[test]
    fn apogee_keeps_earliest_tied_peak() {
        let mut rec = FlightRecorder::new(0.005, 16);
        rec.observe(&state(1.0, 10.0, 1.0, 0.0));
        rec.observe(&state(2.0, 10.0, 0.0, 0.0)); // tie: must not replace
        rec.observe(&state(3.0, 9.0, -2.0, 0.0));
        let result = rec.finish(&state(3.0, 9.0, -2.0, 0.0));
        assert_eq!(result.max_altitude, 10.0);
        assert_eq!(result.max_altitude_time, 1.0);
    }

    #[test]
    fn samples_follow_the_recording_cadence() {
        // 2 ms steps against a 5 ms cadence: slots advance at 6, 10, 16, 20 ms
        let mut rec = FlightRecorder::new(0.005, 16);
        let dt = 0.002;
        let mut t = 0.0;
        for _ in 0..10 {
            t += dt;
            rec.observe(&state(t, t * 10.0, 10.0, 0.0));
        }
        let result = rec.finish(&state(t, t * 10.0, 10.0, 0.0));
        assert_eq!(result.trajectory.len(), 5);
        let times: Vec<f64> = result.trajectory.iter().map(|s| s.time).collect();
        for pair in times.windows(2) {
            assert!(pair[1] > pair[0], "sample times must strictly increase");
        }
    }

    #[test]
    fn displayed_altitude_clamped_at_ground() {
        let mut rec = FlightRecorder::new(0.005, 16);
        rec.observe(&state(0.006, -0.02, -9.0, 0.0));
        let result = rec.finish(&state(0.006, -0.02, -9.0, 0.0));
        assert_eq!(result.trajectory.last().unwrap().altitude, 0.0);
        // The clamp is presentation-only: the event side still saw the raw state
        assert_eq!(result.impact_velocity, -9.0);
    }

    #[test]
    fn finish_carries_flight_time_and_impact_velocity() {
        let mut rec = FlightRecorder::new(0.005, 16);
        rec.observe(&state(4.2, -0.01, -18.0, 0.0));
        let result = rec.finish(&state(4.2, -0.01, -18.0, 0.0));
        assert_eq!(result.flight_time, 4.2);
        assert_eq!(result.impact_velocity, -18.0);
    }
}
