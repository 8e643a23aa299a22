use super::state::FlightParams;
use crate::physics::tank;

// ---------------------------------------------------------------------------
// Flight regimes
// ---------------------------------------------------------------------------

/// Mutually exclusive propulsion regimes, selected from the current water
/// volume and the per-run constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Regime {
    /// Water remains and tank pressure exceeds ambient.
    Thrust { delta_p: f64 },
    /// Water remains but the air cushion has expanded down to ambient
    /// pressure, so expulsion has stopped early.
    Equalized,
    /// All water expelled; only gravity and drag act.
    Ballistic,
}

impl Regime {
    pub fn classify(water_volume: f64, params: &FlightParams) -> Regime {
        if water_volume <= 0.0 {
            return Regime::Ballistic;
        }
        let air_volume = params.consts.tank_volume - water_volume;
        let pressure = tank::tank_pressure(
            params.pressure_0,
            params.air_volume_0,
            air_volume,
            params.consts.gamma,
        );
        let delta_p = pressure - params.consts.atmospheric_pressure;
        if delta_p <= 0.0 {
            Regime::Equalized
        } else {
            Regime::Thrust { delta_p }
        }
    }
}
