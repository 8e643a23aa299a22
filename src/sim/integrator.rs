use nalgebra::SVector;

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta integrator
// ---------------------------------------------------------------------------

/// Single RK4 step: advance `y` from `t` to `t + dt`.
///
/// `f` computes dy/dt for a fixed-length state vector; `params` is an opaque
/// bundle handed through to `f` unchanged. Stateless: the result depends only
/// on the inputs. The state dimension is a const generic, so mismatched
/// vector lengths are a compile error rather than a runtime condition.
pub fn rk4_step<P, F, const N: usize>(
    f: F,
    t: f64,
    y: &SVector<f64, N>,
    dt: f64,
    params: &P,
) -> SVector<f64, N>
where
    F: Fn(f64, &SVector<f64, N>, &P) -> SVector<f64, N>,
{
    let k1 = f(t, y, params);
    let k2 = f(t + dt * 0.5, &(y + k1 * (dt * 0.5)), params);
    let k3 = f(t + dt * 0.5, &(y + k2 * (dt * 0.5)), params);
    let k4 = f(t + dt, &(y + k3 * dt), params);

    y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
