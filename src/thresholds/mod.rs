//! Process-wide limits: maximum Zs per protective device, minimum
//! insulation resistance per test voltage, RCD operating times and cable
//! capacities. Loaded once, shared read-only by reference.
pub mod error;
pub mod table;
mod defaults;

pub use error::ThresholdError;
pub use table::{CableCapacityEntry, InsulationEntry, MaxZsEntry, RcdTripEntry, ThresholdTable};
