// ---------------------------------------------------------------------------
// Adiabatic air cushion
// ---------------------------------------------------------------------------

/// Absolute tank pressure after the air cushion expands from `air_volume_0`
/// to `air_volume` without heat exchange: P1 = P0 * (Va0 / Va)^gamma.
pub fn tank_pressure(p0: f64, air_volume_0: f64, air_volume: f64, gamma: f64) -> f64 {
    p0 * (air_volume_0 / air_volume).powf(gamma)
}
