use super::Constants;

/// Water jet velocity at the nozzle from the tank/ambient pressure
/// differential, m/s.
///
/// Bernoulli between the water surface and the nozzle exit, corrected for
/// the bottle-to-nozzle area ratio. Callers guarantee `delta_p > 0`; the
/// pressure-equalized flight regime never reaches this function.
pub fn exit_velocity(delta_p: f64, consts: &Constants) -> f64 {
    (2.0 * delta_p / (consts.water_density * consts.area_ratio_correction())).sqrt()
}
