use nalgebra::{SVector, Vector4};

use crate::errors::ParamError;
use crate::physics::{Constants, PSI_TO_PA};

// ---------------------------------------------------------------------------
// State vector layout: [velocity, altitude, mass, water volume]
// ---------------------------------------------------------------------------

pub type StateVec = SVector<f64, 4>;

/// Full flight state at a single point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub time: f64,         // s
    pub velocity: f64,     // m/s, positive up
    pub altitude: f64,     // m above the pad
    pub mass: f64,         // kg
    pub water_volume: f64, // m^3
}

impl FlightState {
    /// Pack the mutable components into the integration vector.
    pub fn to_vector(&self) -> StateVec {
        Vector4::new(self.velocity, self.altitude, self.mass, self.water_volume)
    }

    /// Rebuild a state from an integration vector at the given time.
    pub fn from_vector(time: f64, y: &StateVec) -> Self {
        Self {
            time,
            velocity: y[0],
            altitude: y[1],
            mass: y[2],
            water_volume: y[3],
        }
    }
}

// ---------------------------------------------------------------------------
// Launch parameters
// ---------------------------------------------------------------------------

/// The three user-facing launch scalars.
#[derive(Debug, Clone, Copy)]
pub struct LaunchConfig {
    pub fill_ratio: f64,       // fraction of tank volume filled with water, (0, 1)
    pub drag_coefficient: f64, // dimensionless, > 0
    pub pressure_psi: f64,     // gauge launch pressure, psi, > 0
}

impl LaunchConfig {
    /// Reject out-of-range inputs (NaN included) before any integration runs.
    pub fn validate(&self) -> Result<(), ParamError> {
        if !(self.fill_ratio > 0.0 && self.fill_ratio < 1.0) {
            return Err(ParamError::FillRatio(self.fill_ratio));
        }
        if !(self.drag_coefficient > 0.0) {
            return Err(ParamError::DragCoefficient(self.drag_coefficient));
        }
        if !(self.pressure_psi > 0.0) {
            return Err(ParamError::Pressure(self.pressure_psi));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Derived per-run parameters
// ---------------------------------------------------------------------------

/// Quantities derived once at ignition and fixed for the whole run. These
/// feed the derivative function but are never part of the mutable state.
#[derive(Debug, Clone, Copy)]
pub struct FlightParams {
    pub consts: Constants,
    pub drag_coefficient: f64,
    pub water_volume_0: f64, // m^3
    pub air_volume_0: f64,   // m^3
    pub pressure_0: f64,     // Pa, absolute
    pub total_mass_0: f64,   // kg, empty mass + water
}

impl FlightParams {
    pub fn new(config: &LaunchConfig, consts: Constants) -> Result<Self, ParamError> {
        config.validate()?;
        let water_volume_0 = config.fill_ratio * consts.tank_volume;
        Ok(Self {
            consts,
            drag_coefficient: config.drag_coefficient,
            water_volume_0,
            air_volume_0: consts.tank_volume - water_volume_0,
            pressure_0: config.pressure_psi * PSI_TO_PA + consts.atmospheric_pressure,
            total_mass_0: consts.empty_mass + consts.water_density * water_volume_0,
        })
    }

    /// State on the pad at ignition.
    pub fn initial_state(&self) -> FlightState {
        FlightState {
            time: 0.0,
            velocity: 0.0,
            altitude: 0.0,
            mass: self.total_mass_0,
            water_volume: self.water_volume_0,
        }
    }
}

// ---------------------------------------------------------------------------
// Integration loop configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub dt: f64,              // integration timestep, s
    pub max_time: f64,        // hard stop on simulated time, s
    pub sample_interval: f64, // trajectory recording cadence, s
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.002,         // 500 Hz, the expulsion phase lasts tens of ms
            max_time: 15.0,    // safety ceiling for degenerate parameter sets
            sample_interval: 0.005,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
