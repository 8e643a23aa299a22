use super::Constants;

/// Quadratic aerodynamic drag deceleration, m/s^2.
///
/// The -v|v| form keeps the sign opposite to the velocity, so drag opposes
/// motion on both ascent and descent.
pub fn drag_accel(velocity: f64, mass: f64, cd: f64, consts: &Constants) -> f64 {
    -0.5 * consts.air_density * cd * consts.bottle_area() * velocity * velocity.abs() / mass
}
