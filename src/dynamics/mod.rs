pub mod regime;
pub mod state;

use regime::Regime;
use state::{FlightParams, StateVec};

use crate::physics::{drag, nozzle};

// ---------------------------------------------------------------------------
// Equations of motion (1-D vertical flight)
// ---------------------------------------------------------------------------

/// Compute state derivatives for the current state.
///
/// Layout matches `StateVec`: [dv, dh, dm, dVw]. The time argument is unused
/// by this model but kept so the function satisfies the general integrator
/// contract.
///
/// Forces modeled:
///   1. Gravity — constant, down
///   2. Thrust  — reaction from the water jet while the tank holds pressure
///   3. Drag    — quadratic, opposing velocity
pub fn derivatives(_t: f64, y: &StateVec, params: &FlightParams) -> StateVec {
    let velocity = y[0];
    let mass = y[2];
    let water_volume = y[3];

    let a_drag = drag::drag_accel(velocity, mass, params.drag_coefficient, &params.consts);
    let g = params.consts.gravity;

    match Regime::classify(water_volume, params) {
        // Coasting: mass and water volume are frozen
        Regime::Ballistic | Regime::Equalized => StateVec::new(-g + a_drag, velocity, 0.0, 0.0),

        Regime::Thrust { delta_p } => {
            let v_exit = nozzle::exit_velocity(delta_p, &params.consts);
            let a_nozzle = params.consts.nozzle_area();

            let dwater = -a_nozzle * v_exit;
            let dmass = params.consts.water_density * dwater;
            // Momentum flux of the jet, divided by instantaneous mass
            let a_thrust = params.consts.water_density * a_nozzle * v_exit * v_exit / mass;

            StateVec::new(a_thrust - g + a_drag, velocity, dmass, dwater)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::LaunchConfig;
    use crate::physics::Constants;
    use approx::assert_relative_eq;
    use nalgebra::Vector4;

    fn reference_params() -> FlightParams {
        let config = LaunchConfig {
            fill_ratio: 0.33,
            drag_coefficient: 0.4,
            pressure_psi: 60.0,
        };
        FlightParams::new(&config, Constants::default()).unwrap()
    }

    #[test]
    fn net_upward_accel_on_pad() {
        let p = reference_params();
        let d = derivatives(0.0, &p.initial_state().to_vector(), &p);
        assert!(d[0] > 0.0, "60 psi must out-thrust gravity, got {}", d[0]);
    }

    #[test]
    fn water_and_mass_drain_together_under_thrust() {
        let p = reference_params();
        let d = derivatives(0.0, &p.initial_state().to_vector(), &p);
        assert!(d[3] < 0.0, "water must leave the tank");
        assert_relative_eq!(d[2], p.consts.water_density * d[3], max_relative = 1e-12);
    }

    #[test]
    fn altitude_rate_is_velocity_in_every_regime() {
        let p = reference_params();

        let thrusting = Vector4::new(5.0, 1.0, p.total_mass_0, p.water_volume_0);
        assert_eq!(derivatives(0.0, &thrusting, &p)[1], 5.0);

        let coasting = Vector4::new(-12.0, 20.0, p.consts.empty_mass, 0.0);
        assert_eq!(derivatives(1.0, &coasting, &p)[1], -12.0);
    }

    #[test]
    fn free_flight_freezes_mass_and_water() {
        let p = reference_params();
        let y = Vector4::new(15.0, 10.0, p.consts.empty_mass, 0.0);
        let d = derivatives(0.5, &y, &p);
        assert_eq!(d[2], 0.0);
        assert_eq!(d[3], 0.0);
        // Ascending coast decelerates under gravity plus drag
        assert!(d[0] < -p.consts.gravity);
    }

    #[test]
    fn equalized_tank_coasts_like_free_flight() {
        let config = LaunchConfig {
            fill_ratio: 0.95,
            drag_coefficient: 0.4,
            pressure_psi: 60.0,
        };
        let p = FlightParams::new(&config, Constants::default()).unwrap();
        // Water remains, but the cushion has expanded far past ambient
        let water_left = 1e-4;
        let mass = p.consts.empty_mass + p.consts.water_density * water_left;
        let y = Vector4::new(8.0, 5.0, mass, water_left);
        let d = derivatives(0.1, &y, &p);
        assert_eq!(d[2], 0.0);
        assert_eq!(d[3], 0.0);
    }

    #[test]
    fn descending_coast_is_braked_by_drag() {
        let p = reference_params();
        let y = Vector4::new(-25.0, 15.0, p.consts.empty_mass, 0.0);
        let d = derivatives(2.0, &y, &p);
        // Falling: gravity pulls down, drag pushes up
        assert!(d[0] > -p.consts.gravity);
        assert!(d[0] < 0.0);
    }
}
