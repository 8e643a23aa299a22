pub mod dynamics;
pub mod errors;
pub mod io;
pub mod optimizer;
pub mod physics;
pub mod sim;

pub use optimizer::{find_optimal, find_optimal_with};
pub use sim::runner::{run_simulation, simulate};

// Convenience re-exports for external callers
pub mod types {
    pub use crate::dynamics::state::{FlightParams, FlightState, LaunchConfig, SimConfig, StateVec};
    pub use crate::errors::ParamError;
    pub use crate::optimizer::{FillSample, OptimizationResult};
    pub use crate::physics::Constants;
    pub use crate::sim::event::{BurnoutEvent, SimulationResult, TrajectorySample};
}
