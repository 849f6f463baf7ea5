pub mod cozy;
pub mod notation;
pub mod variant;

pub use cozy::{Outcome, Position};
