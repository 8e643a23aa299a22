use super::integrator::rk4_step;
use crate::dynamics;
use crate::dynamics::state::{FlightParams, FlightState, LaunchConfig, SimConfig};
use crate::errors::ParamError;
use crate::physics::Constants;
use crate::sim::event::{FlightRecorder, SimulationResult};

// ---------------------------------------------------------------------------
// Full flight simulation
// ---------------------------------------------------------------------------

/// Run one flight from ignition to ground return (or the simulated-time
/// ceiling). Returns the down-sampled trajectory and flight events.
pub fn simulate(params: &FlightParams, config: &SimConfig) -> SimulationResult {
    let mut state = params.initial_state();

    let capacity = (config.max_time / config.sample_interval) as usize + 1;
    let mut recorder = FlightRecorder::new(config.sample_interval, capacity.min(20_000));

    let mut launched = false;

    while state.time < config.max_time {
        let y = rk4_step(
            dynamics::derivatives,
            state.time,
            &state.to_vector(),
            config.dt,
            params,
        );
        state = FlightState::from_vector(state.time + config.dt, &y);

        // The final expulsion step can overshoot slightly past empty; floor
        // water and mass at their physical minima.
        state.water_volume = state.water_volume.max(0.0);
        state.mass = state.mass.max(params.consts.empty_mass);

        recorder.observe(&state);

        if state.altitude > 0.0 {
            launched = true;
        }

        // Ground return after liftoff. No sub-step root finding: the final
        // state may sit up to one step below ground level.
        if launched && state.altitude <= 0.0 {
            break;
        }
    }

    recorder.finish(&state)
}

/// Validate the three launch scalars and run one simulation with the
/// reference bottle and default integration settings.
pub fn run_simulation(
    fill_ratio: f64,
    drag_coefficient: f64,
    pressure_psi: f64,
) -> Result<SimulationResult, ParamError> {
    let config = LaunchConfig {
        fill_ratio,
        drag_coefficient,
        pressure_psi,
    };
    let params = FlightParams::new(&config, Constants::default())?;
    Ok(simulate(&params, &SimConfig::default()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
