use std::f64::consts::PI;

pub mod drag;
pub mod nozzle;
pub mod tank;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

/// Pounds per square inch to pascals.
pub const PSI_TO_PA: f64 = 6_894.757;

/// Frozen physical environment and bottle geometry for a simulation run.
///
/// Passed explicitly into the flight model so alternate bottles (bigger
/// tanks, narrower nozzles) can be simulated side by side without touching
/// global state.
#[derive(Debug, Clone, Copy)]
pub struct Constants {
    pub gravity: f64,              // m/s^2
    pub air_density: f64,          // kg/m^3, sea level
    pub water_density: f64,        // kg/m^3
    pub atmospheric_pressure: f64, // Pa
    pub gamma: f64,                // adiabatic exponent of air
    pub tank_volume: f64,          // m^3
    pub bottle_diameter: f64,      // m
    pub nozzle_diameter: f64,      // m
    pub empty_mass: f64,           // kg, bottle + fins + nose
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            gravity: 9.80665,
            air_density: 1.225,
            water_density: 1000.0,
            atmospheric_pressure: 101_325.0,
            gamma: 1.4,
            tank_volume: 0.8e-3, // 0.8 L soda bottle
            bottle_diameter: 0.075,
            nozzle_diameter: 0.026,
            empty_mass: 0.0765,
        }
    }
}

impl Constants {
    /// Frontal area of the bottle, m^2.
    pub fn bottle_area(&self) -> f64 {
        PI * 0.25 * self.bottle_diameter * self.bottle_diameter
    }

    /// Nozzle throat area, m^2.
    pub fn nozzle_area(&self) -> f64 {
        PI * 0.25 * self.nozzle_diameter * self.nozzle_diameter
    }

    /// Bernoulli area-ratio correction 1 - (d_n / d_b)^4.
    pub fn area_ratio_correction(&self) -> f64 {
        1.0 - (self.nozzle_diameter / self.bottle_diameter).powi(4)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
